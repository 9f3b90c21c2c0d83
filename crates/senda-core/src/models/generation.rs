use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The orchestrator's request contract. Transient — never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportGenerationRequest {
    pub assessment_id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_true")]
    pub include_recommendations: bool,
    #[serde(default = "default_true")]
    pub include_treatment_plan: bool,
    #[serde(default)]
    pub report_style: ReportStyle,
    #[serde(default)]
    pub strategy: GenerationStrategy,
}

fn default_true() -> bool {
    true
}

/// The orchestrator's response contract: success carries the report id and
/// text, failure carries a user-facing message — never both.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportGenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub report_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub report_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    /// Missing-data keys, present only on validation failures so the wizard
    /// can point the clinician at every gap at once.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub missing_data: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Language {
    #[default]
    Es,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportStyle {
    #[default]
    Clinical,
    Educational,
    Concise,
}

/// Which generation path serves a request. The two paths are mutually
/// exclusive per request; there is no silent fallback between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GenerationStrategy {
    #[default]
    Deterministic,
    Generative,
}
