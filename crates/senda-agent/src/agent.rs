//! The report-generation orchestrator.
//!
//! One request runs Pending → Validating → (Composing | Augmenting) →
//! Persisting → Done, or drops to Failed at the first error. Validation
//! failure short-circuits before any generation or write; a success
//! response always means a durable report version exists.

use jiff::Zoned;
use tracing::{info, warn};
use uuid::Uuid;

use senda_bedrock::prompt::PromptData;
use senda_core::dates::age_on;
use senda_core::models::generation::{
    GenerationStrategy, ReportGenerationRequest, ReportGenerationResponse,
};
use senda_core::models::report::Report;
use senda_report::assemble::assemble;
use senda_report::compose::{compose_sections, ComposeOptions};
use senda_storage::error::StorageError;
use senda_storage::{ReportStore, S3Store};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::lifecycle::persist_new_version;
use crate::model::{BedrockModel, TextModel};
use crate::validate::{check_requirements, ValidatedAssessment};

pub struct ReportAgent<S, M> {
    store: S,
    model: M,
}

impl ReportAgent<S3Store, BedrockModel> {
    /// Build the production agent: S3-backed store, Bedrock-backed model.
    pub async fn from_config(config: &AgentConfig) -> ReportAgent<S3Store, BedrockModel> {
        let aws = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        ReportAgent {
            store: S3Store::new(&aws, &config.bucket),
            model: BedrockModel::new(aws, &config.model_id, config.generation_timeout()),
        }
    }
}

impl<S: ReportStore, M: TextModel> ReportAgent<S, M> {
    pub fn new(store: S, model: M) -> ReportAgent<S, M> {
        ReportAgent { store, model }
    }

    /// The public entry point: validate, generate through exactly one
    /// path, persist, and map every failure to the uniform response shape.
    pub async fn generate_report(
        &self,
        request: &ReportGenerationRequest,
    ) -> ReportGenerationResponse {
        match self.run(request).await {
            Ok(report) => ReportGenerationResponse {
                success: true,
                report_id: Some(report.id),
                report_text: Some(report.report_text),
                error: None,
                missing_data: None,
            },
            Err(e) => {
                warn!(assessment_id = %request.assessment_id, error = %e, "report generation failed");
                failure_response(&e)
            }
        }
    }

    async fn run(&self, request: &ReportGenerationRequest) -> Result<Report, AgentError> {
        let assessment_id = request.assessment_id;
        info!(%assessment_id, phase = "validating", "report generation started");

        let bundle = self
            .store
            .load_bundle(assessment_id)
            .await?
            .ok_or(AgentError::NotFound(assessment_id))?;
        let validated = check_requirements(&bundle).map_err(AgentError::Validation)?;

        let today = Zoned::now().date();
        let report_text = match request.strategy {
            GenerationStrategy::Deterministic => {
                info!(%assessment_id, phase = "composing", "using deterministic path");
                let sections = compose_sections(
                    validated.assessment,
                    validated.patient,
                    validated.clinician,
                    validated.clinic,
                    ComposeOptions {
                        include_recommendations: request.include_recommendations,
                        include_treatment_plan: request.include_treatment_plan,
                    },
                    today,
                );
                assemble(&sections, validated.assessment.report_type)
            }
            GenerationStrategy::Generative => {
                info!(%assessment_id, phase = "augmenting", "using generative path");
                let data = prompt_data(&validated, request, today);
                let generated = self.model.generate(&data).await?;
                if !generated.issues.is_empty() {
                    warn!(
                        %assessment_id,
                        issue_count = generated.issues.len(),
                        "generated report has structural deviations"
                    );
                }
                generated.text
            }
        };

        info!(%assessment_id, phase = "persisting", "saving report version");
        let report = persist_new_version(
            &self.store,
            assessment_id,
            request.user_id,
            &validated.patient.full_name(),
            &report_text,
        )
        .await?;

        info!(%assessment_id, report_id = %report.id, version = report.version, phase = "done", "report generated");
        Ok(report)
    }

    /// Save externally produced report text (e.g. clinician-edited) as the
    /// next draft version. Never sets `is_final`.
    pub async fn save_report(
        &self,
        report_text: &str,
        assessment_id: Uuid,
        user_id: Uuid,
    ) -> Result<Report, AgentError> {
        let bundle = self
            .store
            .load_bundle(assessment_id)
            .await?
            .ok_or(AgentError::NotFound(assessment_id))?;
        let patient_name = bundle
            .patient
            .as_ref()
            .map(|p| p.full_name())
            .unwrap_or_else(|| "Paciente".to_string());

        Ok(persist_new_version(&self.store, assessment_id, user_id, &patient_name, report_text)
            .await?)
    }

    /// Mark one saved version final. The only operation that ever flips
    /// `is_final`.
    pub async fn finalize_report(
        &self,
        assessment_id: Uuid,
        version: u32,
    ) -> Result<Report, AgentError> {
        match self.store.finalize_report(assessment_id, version).await {
            Ok(report) => Ok(report),
            Err(StorageError::NotFound { .. }) => Err(AgentError::NotFound(assessment_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// All saved versions for an assessment, ascending by version.
    pub async fn list_reports(&self, assessment_id: Uuid) -> Result<Vec<Report>, AgentError> {
        Ok(self.store.list_reports(assessment_id).await?)
    }

    /// The highest saved version, if any.
    pub async fn latest_report(
        &self,
        assessment_id: Uuid,
    ) -> Result<Option<Report>, AgentError> {
        Ok(self.store.list_reports(assessment_id).await?.pop())
    }
}

fn failure_response(e: &AgentError) -> ReportGenerationResponse {
    let missing_data = match e {
        AgentError::Validation(missing) => {
            Some(missing.iter().map(|m| m.key().to_string()).collect())
        }
        _ => None,
    };
    ReportGenerationResponse {
        success: false,
        report_id: None,
        report_text: None,
        error: Some(e.user_message()),
        missing_data,
    }
}

/// Flatten a validated assessment into the prompt's plain-strings view.
fn prompt_data(
    validated: &ValidatedAssessment<'_>,
    request: &ReportGenerationRequest,
    today: jiff::civil::Date,
) -> PromptData {
    let assessment = validated.assessment;
    let patient = validated.patient;

    PromptData {
        report_type: assessment.report_type,
        language: request.language,
        patient_name: patient.full_name(),
        patient_age: patient.date_of_birth.map(|dob| age_on(dob, today)),
        patient_gender: patient.gender.clone(),
        patient_date_of_birth: patient.date_of_birth.map(|d| d.to_string()),
        clinician_name: validated.clinician.full_name(),
        clinic_name: validated.clinic.name.clone(),
        assessment_date: today.to_string(),
        consultation_reasons: assessment
            .consultation_reasons
            .iter()
            .map(|r| r.reason.clone())
            .collect(),
        evaluation_areas: assessment
            .evaluation_areas
            .iter()
            .map(|a| a.area.name.clone())
            .collect(),
        icd_criteria: assessment
            .diagnoses
            .iter()
            .map(|d| format!("{} ({})", d.criteria.name, d.criteria.code))
            .collect(),
        has_primary_diagnosis: assessment.diagnoses.iter().any(|d| d.is_primary),
        include_recommendations: request.include_recommendations,
        include_treatment_plan: request.include_treatment_plan,
    }
}
