use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A generated report artifact tied to one assessment.
///
/// Multiple rows may exist per assessment (draft history). `version` is
/// monotonically increasing per assessment and never reused; `is_final` is
/// only ever set by an explicit finalize action.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub report_text: String,
    pub version: u32,
    pub is_final: bool,
    pub filename: String,
    pub created_by: Uuid,
    pub created_at: jiff::Timestamp,
}

/// The six supported report types, identified by their Spanish slugs.
///
/// Unknown slugs deserialize to [`ReportType::EvaluacionPsicologica`], a
/// deliberate default-safe behavior so a stale wizard payload never fails
/// report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ReportType {
    EvaluacionPsicologica,
    SeguimientoTerapeutico,
    EvaluacionNeuropsicologica,
    InformeFamiliar,
    InformeEducativo,
    AltaTerapeutica,
}

impl Default for ReportType {
    fn default() -> Self {
        ReportType::EvaluacionPsicologica
    }
}

impl<'de> Deserialize<'de> for ReportType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let slug = String::deserialize(deserializer)?;
        Ok(ReportType::from_slug(&slug))
    }
}

impl ReportType {
    /// Parse a report-type slug, falling back to `evaluacion-psicologica`
    /// for anything unrecognized.
    pub fn from_slug(slug: &str) -> ReportType {
        match slug {
            "seguimiento-terapeutico" => ReportType::SeguimientoTerapeutico,
            "evaluacion-neuropsicologica" => ReportType::EvaluacionNeuropsicologica,
            "informe-familiar" => ReportType::InformeFamiliar,
            "informe-educativo" => ReportType::InformeEducativo,
            "alta-terapeutica" => ReportType::AltaTerapeutica,
            _ => ReportType::EvaluacionPsicologica,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ReportType::EvaluacionPsicologica => "evaluacion-psicologica",
            ReportType::SeguimientoTerapeutico => "seguimiento-terapeutico",
            ReportType::EvaluacionNeuropsicologica => "evaluacion-neuropsicologica",
            ReportType::InformeFamiliar => "informe-familiar",
            ReportType::InformeEducativo => "informe-educativo",
            ReportType::AltaTerapeutica => "alta-terapeutica",
        }
    }

    /// Human assessment-type label, used in report titles and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::EvaluacionPsicologica => "Evaluación Psicológica",
            ReportType::SeguimientoTerapeutico => "Seguimiento Terapéutico",
            ReportType::EvaluacionNeuropsicologica => "Evaluación Neuropsicológica",
            ReportType::InformeFamiliar => "Evaluación Familiar",
            ReportType::InformeEducativo => "Evaluación Educativa",
            ReportType::AltaTerapeutica => "Alta Terapéutica",
        }
    }

    /// The ordered section headings this report type must contain.
    ///
    /// This is the contract handed to the generative backend and checked by
    /// the structural validator afterwards.
    pub fn section_headings(&self) -> &'static [&'static str] {
        match self {
            ReportType::EvaluacionPsicologica => &[
                "DATOS DE IDENTIFICACIÓN",
                "MOTIVO DE CONSULTA",
                "METODOLOGÍA DE EVALUACIÓN",
                "RESULTADOS DE LA EVALUACIÓN",
                "DIAGNÓSTICO",
                "CONCLUSIONES",
                "RECOMENDACIONES",
            ],
            ReportType::SeguimientoTerapeutico => &[
                "DATOS DE IDENTIFICACIÓN",
                "ANTECEDENTES",
                "EVOLUCIÓN DEL TRATAMIENTO",
                "ESTADO ACTUAL",
                "OBJETIVOS TERAPÉUTICOS",
                "PLAN DE CONTINUIDAD",
            ],
            ReportType::EvaluacionNeuropsicologica => &[
                "DATOS DE IDENTIFICACIÓN",
                "MOTIVO DE CONSULTA",
                "HISTORIA CLÍNICA RELEVANTE",
                "PRUEBAS ADMINISTRADAS",
                "RESULTADOS POR DOMINIO COGNITIVO",
                "DIAGNÓSTICO",
                "CONCLUSIONES",
                "RECOMENDACIONES",
            ],
            ReportType::InformeFamiliar => &[
                "DATOS DE IDENTIFICACIÓN",
                "MOTIVO DE CONSULTA FAMILIAR",
                "COMPOSICIÓN FAMILIAR",
                "DINÁMICA FAMILIAR",
                "FACTORES DE RIESGO Y PROTECCIÓN",
                "CONCLUSIONES",
                "INTERVENCIÓN SUGERIDA",
            ],
            ReportType::InformeEducativo => &[
                "DATOS DE IDENTIFICACIÓN",
                "MOTIVO DE EVALUACIÓN ESCOLAR",
                "HISTORIA ACADÉMICA",
                "EVALUACIONES APLICADAS",
                "RESULTADOS",
                "DIAGNÓSTICO EDUCATIVO",
                "RECOMENDACIONES ESCOLARES",
            ],
            ReportType::AltaTerapeutica => &[
                "DATOS DE IDENTIFICACIÓN",
                "DIAGNÓSTICO INICIAL",
                "RESUMEN DEL PROCESO TERAPÉUTICO",
                "LOGROS TERAPÉUTICOS",
                "ESTADO ACTUAL",
                "RECOMENDACIONES DE SEGUIMIENTO",
            ],
        }
    }
}
