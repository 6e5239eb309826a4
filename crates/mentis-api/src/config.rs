use std::env;
use std::path::{Path, PathBuf};

use mentis_engine::{KnowledgeBase, ScoringPolicy};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Process configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    /// Knowledge-base JSON file. `None` = built-in reference tables.
    pub knowledge_path: Option<PathBuf>,
    /// Scoring policy JSON file. `None` = default policy.
    pub policy_path: Option<PathBuf>,
    /// Running under the Lambda runtime rather than as a plain server.
    pub lambda: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("MENTIS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            knowledge_path: env::var_os("MENTIS_KNOWLEDGE_BASE").map(PathBuf::from),
            policy_path: env::var_os("MENTIS_POLICY").map(PathBuf::from),
            lambda: env::var_os("AWS_LAMBDA_RUNTIME_API").is_some(),
        }
    }
}

/// Read a knowledge base from `path`, or fall back to the reference tables.
///
/// Used at startup and by `/knowledge-base/reload`.
pub async fn load_knowledge(path: Option<&Path>) -> eyre::Result<KnowledgeBase> {
    let Some(path) = path else {
        tracing::info!("using reference knowledge base");
        return Ok(KnowledgeBase::reference());
    };

    let path = path.to_path_buf();
    let kb = tokio::task::spawn_blocking(move || KnowledgeBase::load_from_path(&path)).await??;
    Ok(kb)
}

pub async fn load_policy(path: Option<&Path>) -> eyre::Result<ScoringPolicy> {
    let Some(path) = path else {
        return Ok(ScoringPolicy::default());
    };

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| eyre::eyre!("failed to read scoring policy at {}: {e}", path.display()))?;
    let policy = ScoringPolicy::from_json_str(&contents)?;
    tracing::info!(path = %path.display(), "scoring policy loaded");
    Ok(policy)
}
