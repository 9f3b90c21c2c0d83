//! Object key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of Senda objects in the practice bucket. Report versions live under
//! a per-assessment prefix with zero-padded version slots so a prefix listing
//! sorts in version order and a conditional create on one slot enforces
//! version uniqueness.

use uuid::Uuid;

pub fn patient(id: Uuid) -> String {
    format!("patients/{id}.json")
}

pub fn user(id: Uuid) -> String {
    format!("users/{id}.json")
}

pub fn clinic(id: Uuid) -> String {
    format!("clinics/{id}.json")
}

pub fn assessment(id: Uuid) -> String {
    format!("assessments/{id}.json")
}

pub fn report_version(assessment_id: Uuid, version: u32) -> String {
    format!("reports/{assessment_id}/v{version:04}.json")
}

pub fn report_prefix(assessment_id: Uuid) -> String {
    format!("reports/{assessment_id}/")
}

pub fn report_pdf(assessment_id: Uuid, version: u32) -> String {
    format!("reports/{assessment_id}/v{version:04}.pdf")
}

/// Extract the version number from a report object key.
///
/// Returns `None` for keys that are not `…/v{version}.json` slots (e.g. the
/// rendered PDF next to them).
pub fn parse_report_version(key: &str) -> Option<u32> {
    let name = key.rsplit('/').next()?;
    let digits = name.strip_prefix('v')?.strip_suffix(".json")?;
    digits.parse().ok()
}
