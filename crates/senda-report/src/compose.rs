//! Deterministic section composers.
//!
//! One pure function per report section. Each takes only the slice of
//! validated data it needs and returns a trimmed Markdown fragment; the
//! assembler joins fragments with blank lines, so no fragment carries
//! trailing newlines of its own.

use jiff::civil::Date;

use senda_core::dates::{age_on, spanish_long_date, spanish_short_date};
use senda_core::models::assessment::{
    Assessment, ConsultationReason, DiagnosisSelection, EvaluationAreaSelection,
};
use senda_core::models::clinic::Clinic;
use senda_core::models::clinician::Clinician;
use senda_core::models::patient::Patient;

/// Shown when an evaluation area carries no clinical notes. The area is
/// still listed — it was evaluated, there is just nothing noteworthy.
const AREA_PLACEHOLDER: &str = "Se realizó evaluación de esta área.";

/// Fallback phrase for conclusions when no primary diagnosis name exists.
const DIAGNOSIS_FALLBACK: &str = "el diagnóstico indicado";

/// Which optional sections the composer emits.
#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions {
    pub include_recommendations: bool,
    pub include_treatment_plan: bool,
}

/// The composed sections of one report. Optional sections are `None` when
/// their generation option was off — the assembler only orders what it is
/// given and never revisits that decision.
#[derive(Debug, Clone)]
pub struct ReportSections {
    pub header: String,
    pub consultation_reasons: String,
    pub evaluation_areas: String,
    pub diagnosis: String,
    pub conclusions: String,
    pub recommendations: Option<String>,
    pub treatment_plan: Option<String>,
}

/// Compose every section for a validated assessment.
pub fn compose_sections(
    assessment: &Assessment,
    patient: &Patient,
    clinician: &Clinician,
    clinic: &Clinic,
    options: ComposeOptions,
    today: Date,
) -> ReportSections {
    let primary = assessment.primary_diagnoses();
    let secondary = assessment.secondary_diagnoses();

    ReportSections {
        header: header_section(assessment, patient, clinician, clinic, today),
        consultation_reasons: consultation_reasons_section(&assessment.consultation_reasons),
        evaluation_areas: evaluation_areas_section(&assessment.evaluation_areas),
        diagnosis: diagnosis_section(&primary, &secondary),
        conclusions: conclusions_section(&assessment.evaluation_areas, &primary),
        recommendations: options.include_recommendations.then(recommendations_section),
        treatment_plan: options.include_treatment_plan.then(treatment_plan_section),
    }
}

/// Title and identification block: patient demographics, clinician,
/// clinic, and the localized evaluation date.
pub fn header_section(
    assessment: &Assessment,
    patient: &Patient,
    clinician: &Clinician,
    clinic: &Clinic,
    today: Date,
) -> String {
    let (age, birth) = match patient.date_of_birth {
        Some(dob) => (
            format!("{} años", age_on(dob, today)),
            spanish_short_date(dob),
        ),
        None => ("No especificada".to_string(), "No especificada".to_string()),
    };

    format!(
        "# INFORME DE {}\n\n\
         ## DATOS DE IDENTIFICACIÓN\n\
         **Paciente:** {}\n\
         **Edad:** {}\n\
         **Fecha de Nacimiento:** {}\n\
         **Género:** {}\n\n\
         ## DATOS DE LA EVALUACIÓN\n\
         **Profesional:** {}\n\
         **Licencia:** {}\n\
         **Institución:** {}\n\
         **Fecha de Evaluación:** {}",
        assessment.report_type.label().to_uppercase(),
        patient.full_name(),
        age,
        birth,
        patient.gender.as_deref().unwrap_or("No especificado"),
        clinician.full_name(),
        clinician.license_number.as_deref().unwrap_or("No especificada"),
        clinic.name,
        spanish_long_date(today),
    )
}

/// Bullet list of consultation reasons, one line per reason, input order.
pub fn consultation_reasons_section(reasons: &[ConsultationReason]) -> String {
    let mut section = String::from("## MOTIVO DE CONSULTA");
    for r in reasons {
        section.push_str("\n- ");
        section.push_str(&r.reason);
    }
    section
}

/// One sub-heading per evaluated area. Areas without notes get the fixed
/// placeholder sentence rather than being dropped.
pub fn evaluation_areas_section(areas: &[EvaluationAreaSelection]) -> String {
    let mut section = String::from("## ÁREAS EVALUADAS");
    for selection in areas {
        section.push_str("\n### ");
        section.push_str(&selection.area.name);
        section.push('\n');
        match selection.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(notes) => section.push_str(notes.trim()),
            None => section.push_str(AREA_PLACEHOLDER),
        }
    }
    section
}

/// Primary/secondary diagnosis split. Either sub-heading is emitted only
/// when its group is non-empty; an empty heading is never rendered.
pub fn diagnosis_section(
    primary: &[&DiagnosisSelection],
    secondary: &[&DiagnosisSelection],
) -> String {
    let mut section = String::from("## DIAGNÓSTICO");

    if !primary.is_empty() {
        section.push_str("\n### Diagnóstico Principal");
        for d in primary {
            push_diagnosis(&mut section, d);
        }
    }

    if !secondary.is_empty() {
        section.push_str("\n### Diagnósticos Secundarios");
        for d in secondary {
            push_diagnosis(&mut section, d);
        }
    }

    section
}

fn push_diagnosis(section: &mut String, d: &DiagnosisSelection) {
    section.push_str(&format!("\n**{} - {}**", d.criteria.code, d.criteria.name));
    if let Some(certainty) = d.certainty {
        section.push_str(&format!("\nCerteza diagnóstica: {}", certainty.label_es()));
    }
    if let Some(notes) = d.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        section.push('\n');
        section.push_str(notes.trim());
    }
}

/// Conclusions reference the first primary diagnosis (or the fallback
/// phrase) and report how many areas were evaluated and how many of those
/// carried findings.
pub fn conclusions_section(
    areas: &[EvaluationAreaSelection],
    primary: &[&DiagnosisSelection],
) -> String {
    let diagnosis_name = primary
        .first()
        .map(|d| d.criteria.name.as_str())
        .unwrap_or(DIAGNOSIS_FALLBACK);
    let with_notes = areas
        .iter()
        .filter(|a| a.notes.as_deref().is_some_and(|n| !n.trim().is_empty()))
        .count();

    format!(
        "## CONCLUSIONES\n\
         Basado en la evaluación realizada, se observa que el paciente presenta \
         características consistentes con {}.\n\n\
         La evaluación de las diferentes áreas muestra {} áreas evaluadas, con \
         hallazgos significativos en {} de ellas.",
        diagnosis_name,
        areas.len(),
        with_notes,
    )
}

const RECOMMENDATIONS_TEMPLATE: &str = "\
## RECOMENDACIONES
1. Se recomienda seguimiento terapéutico enfocado en las áreas identificadas.
2. Evaluación periódica para monitorear el progreso.
3. Psicoeducación sobre el diagnóstico y estrategias de afrontamiento.
4. Considerar la inclusión de la familia en el proceso terapéutico.";

const TREATMENT_PLAN_TEMPLATE: &str = "\
## PLAN DE TRATAMIENTO
1. **Fase Inicial (1-4 semanas):**
   - Psicoeducación sobre el diagnóstico
   - Establecimiento de alianza terapéutica
   - Identificación de objetivos terapéuticos
2. **Fase Intermedia (5-12 semanas):**
   - Desarrollo de habilidades de afrontamiento
   - Trabajo en áreas específicas identificadas en la evaluación
   - Reevaluación de progresos
3. **Fase de Consolidación (13-20 semanas):**
   - Reforzamiento de logros
   - Prevención de recaídas
   - Planificación de seguimiento";

/// Fixed recommendations template. Emitted only when the option is on.
pub fn recommendations_section() -> String {
    RECOMMENDATIONS_TEMPLATE.to_string()
}

/// Fixed phased treatment-plan template. Emitted only when the option is on.
pub fn treatment_plan_section() -> String {
    TREATMENT_PLAN_TEMPLATE.to_string()
}
