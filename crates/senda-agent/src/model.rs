//! The generative-backend seam.
//!
//! The agent depends on [`TextModel`], not on Bedrock directly, so tests
//! can substitute a fake backend without touching the deterministic path.

use std::time::Duration;

use async_trait::async_trait;

use senda_bedrock::error::BedrockError;
use senda_bedrock::generate::{self, GeneratedReport};
use senda_bedrock::prompt::PromptData;

#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, data: &PromptData) -> Result<GeneratedReport, BedrockError>;
}

/// The production backend: one Bedrock Converse round-trip per request,
/// bounded by `timeout`.
pub struct BedrockModel {
    config: aws_config::SdkConfig,
    model_id: String,
    timeout: Duration,
}

impl BedrockModel {
    pub fn new(
        config: aws_config::SdkConfig,
        model_id: impl Into<String>,
        timeout: Duration,
    ) -> BedrockModel {
        BedrockModel {
            config,
            model_id: model_id.into(),
            timeout,
        }
    }
}

#[async_trait]
impl TextModel for BedrockModel {
    async fn generate(&self, data: &PromptData) -> Result<GeneratedReport, BedrockError> {
        generate::generate_report(&self.config, &self.model_id, self.timeout, data).await
    }
}
