//! Report generation via the Bedrock Converse API.
//!
//! Single request/response round-trip with a bounded timeout. No streaming —
//! the call either returns the full report text or fails.

use std::time::Duration;

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::{info, warn};

use crate::error::BedrockError;
use crate::prompt::{build_system_prompt, build_user_message, PromptData};
use crate::structure::{check_report_structure, StructureIssue};

/// The adapter's result: the raw model text plus any structural deviations
/// from the heading contract. Deviations do not fail the generation.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub text: String,
    pub issues: Vec<StructureIssue>,
}

/// Generate a clinical report through Bedrock.
///
/// Builds the prompt for `data`, invokes the model once with `timeout` as an
/// upper bound, and runs the structural validator over the output. A timeout
/// surfaces as [`BedrockError::Timeout`], never as a hang.
pub async fn generate_report(
    config: &aws_config::SdkConfig,
    model_id: &str,
    timeout: Duration,
    data: &PromptData,
) -> Result<GeneratedReport, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let system_prompt = build_system_prompt(data);
    let user_message = build_user_message(data);

    info!(
        model_id,
        report_type = data.report_type.slug(),
        "starting report generation"
    );

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(user_message))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let request = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt))
        .messages(message)
        .send();

    let response = tokio::time::timeout(timeout, request)
        .await
        .map_err(|_| BedrockError::Timeout(timeout.as_secs()))?
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(BedrockError::ResponseParse(
            "model returned empty report text".to_string(),
        ));
    }

    let issues = check_report_structure(&text, data.report_type);
    for issue in &issues {
        warn!(model_id, %issue, "generated report deviates from structure contract");
    }

    info!(
        model_id,
        text_len = text.len(),
        issue_count = issues.len(),
        "report generation complete"
    );

    Ok(GeneratedReport { text, issues })
}
