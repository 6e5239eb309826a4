//! Heuristic analysis of free-text clinical notes: bag-of-words sentiment
//! and risk keyword scanning.

use std::collections::HashMap;
use std::sync::LazyLock;

use mentis_core::models::notes::{NoteAnalysis, Sentiment};

use crate::matching::contains_ignore_case;
use crate::policy::ScoringPolicy;

/// Self-harm and suicide-adjacent phrases, reported verbatim when found.
pub const RISK_KEYWORDS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "want to die",
    "no reason to live",
    "better off dead",
    "self-harm",
    "self harm",
    "hurt myself",
    "overdose",
    "cutting",
];

pub const ESCALATION_RECOMMENDATIONS: &[&str] = &[
    "Immediate risk assessment recommended",
    "Complete or review the safety plan",
    "Evaluate need for a higher level of care",
];

pub const COPING_RECOMMENDATIONS: &[&str] = &[
    "Explore coping strategies for current stressors",
    "Consider structured mood monitoring between sessions",
];

/// Word valences on a -5..=5 scale.
static LEXICON: LazyLock<HashMap<&'static str, i32>> = LazyLock::new(|| {
    [
        // positive
        ("happy", 3),
        ("hopeful", 2),
        ("hope", 2),
        ("improved", 2),
        ("improving", 2),
        ("improvement", 2),
        ("better", 2),
        ("good", 3),
        ("great", 3),
        ("calm", 2),
        ("stable", 1),
        ("progress", 2),
        ("motivated", 2),
        ("engaged", 1),
        ("optimistic", 2),
        ("relief", 2),
        ("relieved", 2),
        ("grateful", 3),
        ("enjoy", 2),
        ("enjoyed", 2),
        ("supportive", 2),
        ("support", 2),
        ("confident", 2),
        ("safe", 1),
        ("energetic", 2),
        ("pleased", 3),
        ("positive", 2),
        // negative
        ("sad", -2),
        ("depressed", -2),
        ("hopeless", -2),
        ("worthless", -2),
        ("anxious", -2),
        ("angry", -3),
        ("crying", -2),
        ("cried", -2),
        ("fear", -2),
        ("afraid", -2),
        ("scared", -2),
        ("worried", -3),
        ("worry", -3),
        ("lonely", -2),
        ("alone", -2),
        ("tired", -2),
        ("exhausted", -2),
        ("pain", -2),
        ("hurt", -2),
        ("suicide", -2),
        ("suicidal", -2),
        ("kill", -3),
        ("die", -3),
        ("dead", -3),
        ("panic", -3),
        ("terrible", -3),
        ("awful", -3),
        ("miserable", -3),
        ("guilty", -3),
        ("guilt", -3),
        ("stressed", -2),
        ("stress", -1),
        ("struggling", -2),
        ("struggle", -2),
        ("bad", -3),
        ("worse", -3),
        ("worst", -3),
        ("upset", -2),
        ("irritable", -2),
        ("numb", -1),
        ("empty", -1),
        ("isolated", -1),
        ("overwhelmed", -2),
    ]
    .into_iter()
    .collect()
});

/// Analyze a note for sentiment and risk indicators.
///
/// Recommendations accumulate: any risk indicator adds the escalation set,
/// and a sentiment score below `policy.coping_sentiment_below` adds the
/// coping set.
pub fn analyze(notes: &str, policy: &ScoringPolicy) -> NoteAnalysis {
    let sentiment_score = sentiment_score(notes);
    let sentiment = classify(sentiment_score, policy);
    let risk_indicators = risk_indicators(notes);

    let mut recommendations = Vec::new();
    if !risk_indicators.is_empty() {
        recommendations.extend(ESCALATION_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    }
    if sentiment_score < policy.coping_sentiment_below {
        recommendations.extend(COPING_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    }

    tracing::debug!(
        sentiment_score,
        risk_indicators = risk_indicators.len(),
        "note analyzed"
    );

    NoteAnalysis {
        sentiment,
        sentiment_score,
        risk_indicators,
        recommendations,
    }
}

/// Sum of lexicon valences over every word in `text`.
pub fn sentiment_score(text: &str) -> i32 {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter_map(|word| LEXICON.get(word))
        .sum()
}

pub fn classify(score: i32, policy: &ScoringPolicy) -> Sentiment {
    if score > policy.positive_sentiment_above {
        Sentiment::Positive
    } else if score < policy.negative_sentiment_below {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Risk keywords present in `text`, in vocabulary order.
pub fn risk_indicators(text: &str) -> Vec<String> {
    RISK_KEYWORDS
        .iter()
        .filter(|kw| contains_ignore_case(text, kw))
        .map(|kw| kw.to_string())
        .collect()
}
