use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Heuristic read of a free-text clinical note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NoteAnalysis {
    pub sentiment: Sentiment,
    /// Raw bag-of-words score the sentiment was classified from.
    pub sentiment_score: i32,
    /// Risk terms found in the note, in vocabulary order.
    pub risk_indicators: Vec<String>,
    pub recommendations: Vec<String>,
}
