//! Agent configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default Bedrock inference profile for report generation.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-6";

const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Bucket holding the practice's assessments and reports.
    pub bucket: String,
    /// Bedrock inference profile ID used by the generative path.
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Upper bound on one generative round-trip, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub generation_timeout_secs: u64,
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_GENERATION_TIMEOUT_SECS
}

impl AgentConfig {
    /// Read configuration from the environment: `SENDA_BUCKET` (required),
    /// `SENDA_MODEL_ID` and `SENDA_GENERATION_TIMEOUT_SECS` (optional).
    pub fn from_env() -> Result<AgentConfig, String> {
        let bucket = std::env::var("SENDA_BUCKET")
            .map_err(|_| "SENDA_BUCKET must be set".to_string())?;
        let model_id =
            std::env::var("SENDA_MODEL_ID").unwrap_or_else(|_| default_model_id());
        let generation_timeout_secs = match std::env::var("SENDA_GENERATION_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("invalid SENDA_GENERATION_TIMEOUT_SECS: {raw}"))?,
            Err(_) => default_timeout_secs(),
        };

        Ok(AgentConfig {
            bucket,
            model_id,
            generation_timeout_secs,
        })
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }
}
