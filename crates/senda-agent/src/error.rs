use thiserror::Error;
use uuid::Uuid;

use crate::validate::MissingRequirement;

/// Failure taxonomy for a report-generation request.
///
/// Everything here is caught at the agent boundary and converted into the
/// uniform response shape; no raw error crosses into the web layer. Each
/// kind carries one user-facing Spanish message.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The assessment id does not resolve — distinct from "exists but
    /// incomplete" so the UI can tell the two apart.
    #[error("assessment {0} not found")]
    NotFound(Uuid),

    /// Required relations are missing. Recoverable: the clinician completes
    /// the wizard and retries.
    #[error("missing required data: {}", format_missing(.0))]
    Validation(Vec<MissingRequirement>),

    /// The generative backend failed or timed out. Recoverable by retry;
    /// never silently replaced by the deterministic path.
    #[error("generation failed: {0}")]
    Generation(String),

    /// The store rejected a read or write.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

fn format_missing(missing: &[MissingRequirement]) -> String {
    missing
        .iter()
        .map(|m| m.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AgentError {
    /// The single Spanish-language message shown to the clinician.
    pub fn user_message(&self) -> String {
        match self {
            AgentError::NotFound(_) => {
                "No se encontró la evaluación solicitada.".to_string()
            }
            AgentError::Validation(missing) => format!(
                "Faltan datos requeridos para generar el informe: {}.",
                format_missing(missing)
            ),
            AgentError::Generation(_) => {
                "No fue posible generar el informe. Intente nuevamente.".to_string()
            }
            AgentError::Persistence(_) => {
                "No fue posible guardar el informe. Intente nuevamente.".to_string()
            }
        }
    }
}

impl From<senda_bedrock::error::BedrockError> for AgentError {
    fn from(e: senda_bedrock::error::BedrockError) -> Self {
        AgentError::Generation(e.to_string())
    }
}

impl From<senda_storage::error::StorageError> for AgentError {
    fn from(e: senda_storage::error::StorageError) -> Self {
        AgentError::Persistence(e.to_string())
    }
}
