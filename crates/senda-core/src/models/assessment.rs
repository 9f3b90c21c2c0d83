use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::clinic::Clinic;
use super::clinician::Clinician;
use super::patient::Patient;
use super::report::ReportType;

/// The aggregate root for a single report-generation episode.
///
/// Created when a clinician starts the report wizard and mutated as wizard
/// steps complete. Once a final report exists the assessment is no longer
/// edited, though new report versions may still reference it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub status: AssessmentStatus,
    pub patient_id: Uuid,
    pub clinician_id: Uuid,
    pub clinic_id: Uuid,
    pub report_type: ReportType,
    /// Order of selection is preserved for deterministic section emission.
    pub consultation_reasons: Vec<ConsultationReason>,
    pub evaluation_areas: Vec<EvaluationAreaSelection>,
    pub diagnoses: Vec<DiagnosisSelection>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Assessment {
    /// Diagnoses flagged as primary, in selection order.
    pub fn primary_diagnoses(&self) -> Vec<&DiagnosisSelection> {
        self.diagnoses.iter().filter(|d| d.is_primary).collect()
    }

    /// Diagnoses not flagged as primary, in selection order.
    pub fn secondary_diagnoses(&self) -> Vec<&DiagnosisSelection> {
        self.diagnoses.iter().filter(|d| !d.is_primary).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStatus {
    Draft,
    InProgress,
    Completed,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsultationReason {
    pub id: Uuid,
    pub reason: String,
}

/// A catalog evaluation domain (e.g. cognitive, emotional).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationArea {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// An evaluation area selected for this assessment, with free-text
/// clinical notes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationAreaSelection {
    pub area: EvaluationArea,
    pub notes: Option<String>,
}

/// A diagnostic classification catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IcdCriteria {
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

/// A diagnostic code selected for this assessment. The primary-flagged
/// subset forms the "Diagnóstico Principal" section; all others form
/// "Diagnósticos Secundarios".
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisSelection {
    pub criteria: IcdCriteria,
    pub is_primary: bool,
    pub certainty: Option<CertaintyLevel>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CertaintyLevel {
    Confirmed,
    Probable,
    Provisional,
    RuleOut,
}

impl CertaintyLevel {
    pub fn label_es(&self) -> &'static str {
        match self {
            CertaintyLevel::Confirmed => "confirmado",
            CertaintyLevel::Probable => "probable",
            CertaintyLevel::Provisional => "provisional",
            CertaintyLevel::RuleOut => "a descartar",
        }
    }
}

/// An assessment with its referenced entities resolved.
///
/// Missing referents are represented as `None` rather than an error so the
/// requirements validator can report every gap at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentBundle {
    pub assessment: Assessment,
    pub patient: Option<Patient>,
    pub clinician: Option<Clinician>,
    pub clinic: Option<Clinic>,
}
