use serde::{Deserialize, Serialize};

use crate::error::KnowledgeError;

/// Tunable thresholds and weights used by the scoring components.
///
/// The defaults are the values the engine ships with. They carry no cited
/// clinical source and are exposed as configuration, not as fixed law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Similarity must be strictly greater than this to count as a match.
    pub match_threshold: f64,
    /// Fewest matched keywords for a diagnosis to be suggested.
    pub min_keyword_matches: usize,
    /// Ceiling on diagnostic confidence.
    pub max_confidence: u8,
    /// Points added per matched suicide risk factor.
    pub suicide_factor_weight: u32,
    /// Ceiling on any risk score.
    pub max_risk_score: u8,
    /// Scores above this are high risk / immediate.
    pub high_risk_above: u8,
    /// Scores above this are moderate risk / within 24h.
    pub moderate_risk_above: u8,
    /// Fixed score of a medication-interaction assessment.
    pub interaction_risk_score: u8,
    /// Sentiment scores above this are positive.
    pub positive_sentiment_above: i32,
    /// Sentiment scores below this are negative.
    pub negative_sentiment_below: i32,
    /// Sentiment scores below this add coping-strategy recommendations.
    pub coping_sentiment_below: i32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            match_threshold: 0.7,
            min_keyword_matches: 3,
            max_confidence: 95,
            suicide_factor_weight: 20,
            max_risk_score: 100,
            high_risk_above: 60,
            moderate_risk_above: 30,
            interaction_risk_score: 50,
            positive_sentiment_above: 1,
            negative_sentiment_below: -1,
            coping_sentiment_below: -2,
        }
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(KnowledgeError::InvalidPolicy(format!(
                "match_threshold {} is outside [0, 1]",
                self.match_threshold
            )));
        }
        if self.min_keyword_matches == 0 {
            return Err(KnowledgeError::InvalidPolicy(
                "min_keyword_matches must be at least 1".to_string(),
            ));
        }
        if self.max_confidence > 100 || self.max_risk_score > 100 {
            return Err(KnowledgeError::InvalidPolicy(
                "score ceilings must not exceed 100".to_string(),
            ));
        }
        if self.moderate_risk_above >= self.high_risk_above {
            return Err(KnowledgeError::InvalidPolicy(format!(
                "moderate tier ({}) must be below high tier ({})",
                self.moderate_risk_above, self.high_risk_above
            )));
        }
        if self.negative_sentiment_below > self.positive_sentiment_above {
            return Err(KnowledgeError::InvalidPolicy(format!(
                "negative sentiment boundary ({}) is above positive boundary ({})",
                self.negative_sentiment_below, self.positive_sentiment_above
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }
}
