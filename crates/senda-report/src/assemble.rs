//! Report assembly.
//!
//! Orders composed sections per a report-type-specific structure table and
//! appends the confidentiality footer. The assembler never decides which
//! sections are optional — the composer already did; absent sections are
//! simply skipped.

use senda_core::models::report::ReportType;

use crate::compose::ReportSections;

/// Appended to every assembled report, unconditionally.
pub const CONFIDENTIALITY_FOOTER: &str = "Este informe es de carácter confidencial \
y debe ser utilizado únicamente por profesionales de la salud mental autorizados.";

/// A named slot in the assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    Header,
    ConsultationReasons,
    EvaluationAreas,
    Diagnosis,
    Conclusions,
    Recommendations,
    TreatmentPlan,
}

/// Ordered section list per report type.
///
/// All six types open with the identification header; follow-up and
/// discharge reports push the diagnosis block behind the evolution
/// narrative, while the evaluation types keep the classic order.
pub fn section_order(report_type: ReportType) -> &'static [SectionKey] {
    use SectionKey::*;
    match report_type {
        ReportType::EvaluacionPsicologica | ReportType::EvaluacionNeuropsicologica => &[
            Header,
            ConsultationReasons,
            EvaluationAreas,
            Diagnosis,
            Conclusions,
            Recommendations,
            TreatmentPlan,
        ],
        ReportType::SeguimientoTerapeutico | ReportType::AltaTerapeutica => &[
            Header,
            ConsultationReasons,
            Diagnosis,
            EvaluationAreas,
            Conclusions,
            TreatmentPlan,
            Recommendations,
        ],
        ReportType::InformeFamiliar | ReportType::InformeEducativo => &[
            Header,
            ConsultationReasons,
            EvaluationAreas,
            Conclusions,
            Diagnosis,
            Recommendations,
            TreatmentPlan,
        ],
    }
}

/// Concatenate the present sections in the order prescribed for
/// `report_type`, separated by blank lines, and append the footer.
pub fn assemble(sections: &ReportSections, report_type: ReportType) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for key in section_order(report_type) {
        let section = match key {
            SectionKey::Header => Some(sections.header.as_str()),
            SectionKey::ConsultationReasons => Some(sections.consultation_reasons.as_str()),
            SectionKey::EvaluationAreas => Some(sections.evaluation_areas.as_str()),
            SectionKey::Diagnosis => Some(sections.diagnosis.as_str()),
            SectionKey::Conclusions => Some(sections.conclusions.as_str()),
            SectionKey::Recommendations => sections.recommendations.as_deref(),
            SectionKey::TreatmentPlan => sections.treatment_plan.as_deref(),
        };
        if let Some(text) = section {
            parts.push(text);
        }
    }

    let mut report = parts.join("\n\n");
    report.push_str("\n\n---\n\n");
    report.push_str(CONFIDENTIALITY_FOOTER);
    report
}
