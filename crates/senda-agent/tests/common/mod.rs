//! Shared fixtures and fakes for agent tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jiff::civil::date;
use uuid::Uuid;

use senda_agent::model::TextModel;
use senda_bedrock::error::BedrockError;
use senda_bedrock::generate::GeneratedReport;
use senda_bedrock::prompt::PromptData;
use senda_core::keys;
use senda_core::models::assessment::{
    Assessment, AssessmentBundle, AssessmentStatus, CertaintyLevel, ConsultationReason,
    DiagnosisSelection, EvaluationArea, EvaluationAreaSelection, IcdCriteria,
};
use senda_core::models::clinic::Clinic;
use senda_core::models::clinician::Clinician;
use senda_core::models::generation::ReportGenerationRequest;
use senda_core::models::patient::Patient;
use senda_core::models::report::{Report, ReportType};
use senda_storage::error::StorageError;
use senda_storage::ReportStore;

pub fn patient() -> Patient {
    Patient {
        id: Uuid::new_v4(),
        first_name: "Juan".to_string(),
        last_name: "Pérez".to_string(),
        date_of_birth: Some(date(1985, 5, 15)),
        gender: Some("Masculino".to_string()),
        email: None,
        phone: None,
        emergency_contact: None,
        insurance_provider: None,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

pub fn clinician() -> Clinician {
    Clinician {
        id: Uuid::new_v4(),
        first_name: "Laura".to_string(),
        last_name: "Gómez".to_string(),
        email: "laura@clinica.example".to_string(),
        license_number: Some("PSI-4821".to_string()),
        role: "psychologist".to_string(),
    }
}

pub fn clinic() -> Clinic {
    Clinic {
        id: Uuid::new_v4(),
        name: "Centro Psicológico Aurora".to_string(),
        address: None,
        phone: None,
    }
}

pub fn reason(text: &str) -> ConsultationReason {
    ConsultationReason {
        id: Uuid::new_v4(),
        reason: text.to_string(),
    }
}

pub fn area(name: &str, notes: Option<&str>) -> EvaluationAreaSelection {
    EvaluationAreaSelection {
        area: EvaluationArea {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: format!("Área {name}"),
        },
        notes: notes.map(str::to_string),
    }
}

pub fn diagnosis(code: &str, name: &str, is_primary: bool) -> DiagnosisSelection {
    DiagnosisSelection {
        criteria: IcdCriteria {
            code: code.to_string(),
            name: name.to_string(),
            description: String::new(),
            category: "Trastornos de ansiedad".to_string(),
        },
        is_primary,
        certainty: Some(CertaintyLevel::Probable),
        notes: None,
    }
}

/// A complete bundle that passes every requirement check.
pub fn bundle() -> AssessmentBundle {
    let patient = patient();
    let clinician = clinician();
    let clinic = clinic();
    AssessmentBundle {
        assessment: Assessment {
            id: Uuid::new_v4(),
            status: AssessmentStatus::Completed,
            patient_id: patient.id,
            clinician_id: clinician.id,
            clinic_id: clinic.id,
            report_type: ReportType::EvaluacionPsicologica,
            consultation_reasons: vec![reason("Ansiedad ante exámenes")],
            evaluation_areas: vec![area("Emocional", Some("Ansiedad moderada"))],
            diagnoses: vec![diagnosis(
                "F41.1",
                "Trastorno de ansiedad generalizada",
                true,
            )],
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        },
        patient: Some(patient),
        clinician: Some(clinician),
        clinic: Some(clinic),
    }
}

pub fn request(assessment_id: Uuid) -> ReportGenerationRequest {
    ReportGenerationRequest {
        assessment_id,
        user_id: Uuid::new_v4(),
        language: Default::default(),
        include_recommendations: true,
        include_treatment_plan: true,
        report_style: Default::default(),
        strategy: Default::default(),
    }
}

/// In-memory store with the same conditional-insert semantics as the S3
/// implementation: a version slot can be claimed exactly once.
///
/// Clones share state, so a test can keep a handle after moving one into
/// the agent.
#[derive(Default, Clone)]
pub struct MemoryStore {
    bundles: Arc<Mutex<HashMap<Uuid, AssessmentBundle>>>,
    reports: Arc<Mutex<HashMap<(Uuid, u32), Report>>>,
    inject_conflicts: Arc<AtomicU32>,
}

impl MemoryStore {
    pub fn with_bundle(bundle: AssessmentBundle) -> MemoryStore {
        let store = MemoryStore::default();
        store
            .bundles
            .lock()
            .unwrap()
            .insert(bundle.assessment.id, bundle);
        store
    }

    /// Make the next `n` inserts lose the slot to a simulated concurrent
    /// writer, exercising the version-conflict retry.
    pub fn inject_conflicts(&self, n: u32) {
        self.inject_conflicts.store(n, Ordering::SeqCst);
    }

    pub fn report_count(&self, assessment_id: Uuid) -> usize {
        self.reports
            .lock()
            .unwrap()
            .keys()
            .filter(|(a, _)| *a == assessment_id)
            .count()
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn load_bundle(
        &self,
        assessment_id: Uuid,
    ) -> Result<Option<AssessmentBundle>, StorageError> {
        Ok(self.bundles.lock().unwrap().get(&assessment_id).cloned())
    }

    async fn max_report_version(&self, assessment_id: Uuid) -> Result<u32, StorageError> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .keys()
            .filter(|(a, _)| *a == assessment_id)
            .map(|(_, v)| *v)
            .max()
            .unwrap_or(0))
    }

    async fn insert_report_version(&self, report: &Report) -> Result<(), StorageError> {
        let slot = (report.assessment_id, report.version);
        let mut reports = self.reports.lock().unwrap();

        if self
            .inject_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            // A simulated concurrent writer claims the slot first.
            let mut winner = report.clone();
            winner.id = Uuid::new_v4();
            reports.entry(slot).or_insert(winner);
            return Err(StorageError::VersionConflict {
                assessment_id: report.assessment_id,
                version: report.version,
            });
        }

        if reports.contains_key(&slot) {
            return Err(StorageError::VersionConflict {
                assessment_id: report.assessment_id,
                version: report.version,
            });
        }
        reports.insert(slot, report.clone());
        Ok(())
    }

    async fn load_report(
        &self,
        assessment_id: Uuid,
        version: u32,
    ) -> Result<Report, StorageError> {
        self.reports
            .lock()
            .unwrap()
            .get(&(assessment_id, version))
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: keys::report_version(assessment_id, version),
            })
    }

    async fn list_reports(&self, assessment_id: Uuid) -> Result<Vec<Report>, StorageError> {
        let mut reports: Vec<Report> = self
            .reports
            .lock()
            .unwrap()
            .iter()
            .filter(|((a, _), _)| *a == assessment_id)
            .map(|(_, r)| r.clone())
            .collect();
        reports.sort_by_key(|r| r.version);
        Ok(reports)
    }

    async fn finalize_report(
        &self,
        assessment_id: Uuid,
        version: u32,
    ) -> Result<Report, StorageError> {
        let mut reports = self.reports.lock().unwrap();
        let report =
            reports
                .get_mut(&(assessment_id, version))
                .ok_or_else(|| StorageError::NotFound {
                    key: keys::report_version(assessment_id, version),
                })?;
        report.is_final = true;
        Ok(report.clone())
    }
}

pub const FAKE_REPORT_TEXT: &str = "# INFORME DE EVALUACIÓN PSICOLÓGICA\n\nTexto generado.";

/// Returns a canned report and records the prompt data it was given.
/// Clones share the recorded data.
#[derive(Default, Clone)]
pub struct FakeModel {
    pub last_data: Arc<Mutex<Option<PromptData>>>,
}

#[async_trait]
impl TextModel for FakeModel {
    async fn generate(&self, data: &PromptData) -> Result<GeneratedReport, BedrockError> {
        *self.last_data.lock().unwrap() = Some(data.clone());
        Ok(GeneratedReport {
            text: FAKE_REPORT_TEXT.to_string(),
            issues: Vec::new(),
        })
    }
}

/// Always fails, for exercising the no-fallback guarantee.
pub struct FailingModel;

#[async_trait]
impl TextModel for FailingModel {
    async fn generate(&self, _data: &PromptData) -> Result<GeneratedReport, BedrockError> {
        Err(BedrockError::Timeout(120))
    }
}
