//! Data-requirements validation.
//!
//! A report cannot be generated until the assessment has a patient,
//! clinician, clinic, at least one consultation reason, at least one
//! evaluation area, and at least one diagnosis flagged primary. Every check
//! runs independently — no short-circuiting — so the wizard can surface all
//! gaps at once. Read-only: validation never mutates anything.

use serde::{Deserialize, Serialize};

use senda_core::models::assessment::{Assessment, AssessmentBundle};
use senda_core::models::clinic::Clinic;
use senda_core::models::clinician::Clinician;
use senda_core::models::patient::Patient;

/// One missing requirement. The serialized keys are the wizard's field
/// identifiers, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingRequirement {
    Patient,
    Clinician,
    Clinic,
    ConsultationReasons,
    EvaluationAreas,
    IcdCriteria,
    PrimaryDiagnosis,
}

impl MissingRequirement {
    pub fn key(&self) -> &'static str {
        match self {
            MissingRequirement::Patient => "patient",
            MissingRequirement::Clinician => "clinician",
            MissingRequirement::Clinic => "clinic",
            MissingRequirement::ConsultationReasons => "consultationReasons",
            MissingRequirement::EvaluationAreas => "evaluationAreas",
            MissingRequirement::IcdCriteria => "icdCriteria",
            MissingRequirement::PrimaryDiagnosis => "primaryDiagnosis",
        }
    }
}

/// A bundle that passed validation, with the referenced entities borrowed
/// as plain references rather than `Option`s.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedAssessment<'a> {
    pub assessment: &'a Assessment,
    pub patient: &'a Patient,
    pub clinician: &'a Clinician,
    pub clinic: &'a Clinic,
}

/// Run every requirement check over a loaded bundle.
///
/// Returns the validated view on success, or the complete list of missing
/// requirements on failure.
pub fn check_requirements(
    bundle: &AssessmentBundle,
) -> Result<ValidatedAssessment<'_>, Vec<MissingRequirement>> {
    let mut missing = Vec::new();
    let assessment = &bundle.assessment;

    if bundle.patient.is_none() {
        missing.push(MissingRequirement::Patient);
    }
    if bundle.clinician.is_none() {
        missing.push(MissingRequirement::Clinician);
    }
    if bundle.clinic.is_none() {
        missing.push(MissingRequirement::Clinic);
    }
    if assessment.consultation_reasons.is_empty() {
        missing.push(MissingRequirement::ConsultationReasons);
    }
    if assessment.evaluation_areas.is_empty() {
        missing.push(MissingRequirement::EvaluationAreas);
    }
    if assessment.diagnoses.is_empty() {
        missing.push(MissingRequirement::IcdCriteria);
    }
    if !assessment.diagnoses.iter().any(|d| d.is_primary) {
        missing.push(MissingRequirement::PrimaryDiagnosis);
    }

    match (&bundle.patient, &bundle.clinician, &bundle.clinic) {
        (Some(patient), Some(clinician), Some(clinic)) if missing.is_empty() => {
            Ok(ValidatedAssessment {
                assessment,
                patient,
                clinician,
                clinic,
            })
        }
        _ => Err(missing),
    }
}
