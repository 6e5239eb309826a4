use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("duplicate diagnosis code: {0}")]
    DuplicateCode(String),

    #[error("diagnosis '{0}' has no symptom keywords")]
    EmptyKeywords(String),

    #[error("diagnosis '{code}' lists symptom keyword '{keyword}' more than once")]
    DuplicateKeyword { code: String, keyword: String },

    #[error("guidance references unknown diagnosis code: {0}")]
    UnknownGuidanceCode(String),

    #[error("knowledge base version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid scoring policy: {0}")]
    InvalidPolicy(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
