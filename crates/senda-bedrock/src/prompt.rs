//! Prompt construction for clinical report generation.
//!
//! The system prompt carries the persona, the sequential workflow contract,
//! the exact section structure for the report type, formatting rules, and
//! the content-fidelity guardrails. The user message carries only the
//! JSON-serialized clinical data. Everything the model is allowed to say
//! must be traceable to those data blocks.

use serde::{Deserialize, Serialize};

use senda_core::models::generation::Language;
use senda_core::models::report::ReportType;

/// The flattened clinical data embedded in a generation prompt.
///
/// This is deliberately a plain-strings view of the assessment: the model
/// receives exactly what the report may mention, pre-formatted, with
/// `No especificado` filled in by [`build_user_message`] for absent fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptData {
    pub report_type: ReportType,
    pub language: Language,

    pub patient_name: String,
    pub patient_age: Option<i16>,
    pub patient_gender: Option<String>,
    pub patient_date_of_birth: Option<String>,

    pub clinician_name: String,
    pub clinic_name: String,
    pub assessment_date: String,

    pub consultation_reasons: Vec<String>,
    pub evaluation_areas: Vec<String>,
    /// Formatted as `Nombre (Código)`, selection order preserved.
    pub icd_criteria: Vec<String>,
    pub has_primary_diagnosis: bool,

    pub include_recommendations: bool,
    pub include_treatment_plan: bool,
}

/// Build the system prompt for a report-generation request.
pub fn build_system_prompt(data: &PromptData) -> String {
    let sections = data.report_type.section_headings().join(", ");

    let recommendations_rule = if data.include_recommendations {
        "Incluye recomendaciones específicas y relevantes basadas en el diagnóstico \
         identificado. Estructura esta sección con viñetas o numeración para mayor claridad."
    } else {
        "Omite recomendaciones detalladas o indica brevemente que no se solicitan en esta \
         evaluación."
    };

    let treatment_plan_rule = if data.include_treatment_plan {
        "Proporciona un plan de tratamiento estructurado con objetivos a corto y mediano \
         plazo. Utiliza viñetas o numeración y organiza por fases temporales."
    } else {
        "Omite el plan de tratamiento o indica brevemente que no se incluye en esta \
         evaluación."
    };

    let output_language = match data.language {
        Language::Es => "español",
        Language::En => "inglés",
    };

    format!(
        "\
# SISTEMA DE GENERACIÓN DE INFORMES PSICOLÓGICOS

Eres un agente especializado en psicología clínica diseñado para generar informes \
psicológicos profesionales. Tu objetivo es analizar datos clínicos y producir un informe \
estructurado que cumpla con estándares profesionales.

## DEFINICIÓN DEL FLUJO DE TRABAJO
Ejecutarás este flujo de trabajo secuencial, verificando cada paso antes de continuar:

1. PREPARACIÓN DE DATOS [Obligatorio]
   - Analiza todos los datos del paciente, evaluación e impresiones clínicas proporcionados
   - Identifica qué información está disponible y cuál falta para cada sección requerida
   - Organiza los datos disponibles según las secciones del informe

2. PLANIFICACIÓN DEL INFORME [Obligatorio]
   - Determina el contenido apropiado para cada sección basándote solo en los datos disponibles
   - Planifica cómo presentar la información de manera coherente y profesional
   - Identifica posibles limitaciones en los datos y cómo abordarlas

3. REDACCIÓN DEL INFORME [Obligatorio]
   - Redacta cada sección siguiendo estrictamente el formato especificado
   - Utiliza un lenguaje clínico profesional pero accesible
   - Asegúrate de que cada sección tenga contenido sustancial y bien estructurado

4. VALIDACIÓN Y CORRECCIÓN [Obligatorio]
   - Verifica que cada sección cumpla con los requisitos de formato
   - Confirma que no hay saltos de línea adicionales antes de los encabezados
   - Comprueba que toda la información incluida esté respaldada por los datos proporcionados
   - Corrige cualquier problema detectado antes de finalizar

## ESPECIFICACIONES DE FORMATO
Sigue estas especificaciones exactas:

- ENCABEZADOS: Utiliza \"## NOMBRE DE SECCIÓN\" (sin comillas) para cada sección. NO \
incluyas líneas en blanco antes de los encabezados.
- ESTRUCTURA: El informe debe incluir exactamente estas secciones en este orden: {sections}.
- LISTAS: Utiliza viñetas (*) para listas no ordenadas y numeración (1., 2., etc.) para \
listas ordenadas.
- DATOS DE IDENTIFICACIÓN: Presenta siempre esta información en formato de lista con viñetas.
- DIAGNÓSTICO: Presenta los criterios diagnósticos con sus códigos en formato de lista.

## DIRECTRICES DE CONTENIDO CLÍNICO
- TERMINOLOGÍA: Utiliza terminología clínica precisa pero comprensible para profesionales \
no especializados.
- DISTINCIÓN DE FUENTES: Diferencia claramente entre síntomas reportados, observaciones \
clínicas y tus interpretaciones.
- DATOS LIMITADOS: Cuando la información sea insuficiente, indica explícitamente las \
limitaciones sin inventar datos.
- CONEXIONES LÓGICAS: Establece relaciones claras entre síntomas, observaciones y \
conclusiones diagnósticas.
- LENGUAJE CENTRADO EN LA PERSONA: Evita etiquetas estigmatizantes y utiliza lenguaje que \
respete la dignidad del paciente.

## MANEJO DE SECCIONES CONDICIONALES
- RECOMENDACIONES: {recommendations_rule}
- PLAN DE TRATAMIENTO: {treatment_plan_rule}

## GUARDRAILS Y RESTRICCIONES
Estas restricciones son absolutas y no pueden ser ignoradas bajo ninguna circunstancia:

- NO incluyas información que no esté explícitamente respaldada por los datos proporcionados.
- NO utilices conocimiento externo sobre condiciones médicas o psicológicas no mencionadas \
en los datos.
- NO incluyas saltos de línea adicionales antes de los encabezados de sección.
- NO utilices lenguaje estigmatizante o patologizante.
- NO hagas recomendaciones farmacológicas específicas.
- NO generes contenido ficticio para completar secciones con datos insuficientes.

## MANEJO DE ERRORES Y LIMITACIONES
Si encuentras alguna de estas situaciones, actúa según se indica:

- DATOS INSUFICIENTES: Indica claramente \"Información no disponible en los datos \
proporcionados\" en la sección correspondiente.
- INCONSISTENCIAS: Si detectas inconsistencias en los datos, prioriza la información más \
específica y reciente.
- FORMATO INCORRECTO: Si detectas problemas de formato durante la validación, corrígelos \
antes de finalizar.

## VALIDACIÓN FINAL
Antes de finalizar, verifica que tu informe cumple con todos estos criterios:
1. Todas las secciones requeridas están presentes y correctamente formateadas
2. No hay saltos de línea adicionales antes de los encabezados
3. Toda la información incluida está respaldada por los datos proporcionados
4. El lenguaje es profesional, claro y respetuoso
5. Las secciones condicionales se han manejado según las instrucciones

Redacta el informe completo en {output_language}, siguiendo estrictamente todas las \
instrucciones anteriores."
    )
}

/// Build the user message: the report-type request plus the JSON-serialized
/// clinical data blocks the model may draw on.
pub fn build_user_message(data: &PromptData) -> String {
    let not_specified = "No especificado".to_string();

    let patient_info = serde_json::json!({
        "name": data.patient_name,
        "age": data.patient_age.map(|a| a.to_string()).unwrap_or_else(|| not_specified.clone()),
        "gender": data.patient_gender.clone().unwrap_or_else(|| not_specified.clone()),
        "dateOfBirth": data.patient_date_of_birth.clone().unwrap_or_else(|| not_specified.clone()),
        "presentingConcerns": join_or(&data.consultation_reasons, &not_specified),
    });

    let assessment_details = serde_json::json!({
        "assessmentType": data.report_type.label(),
        "assessmentDate": data.assessment_date,
        "clinicianName": data.clinician_name,
        "clinicName": data.clinic_name,
    });

    let clinical_impressions = serde_json::json!({
        "diagnosticConsiderations": join_or(&data.icd_criteria, &not_specified),
        "isPrimaryDiagnosis": data.has_primary_diagnosis,
        "evaluationAreas": join_or(&data.evaluation_areas, &not_specified),
    });

    format!(
        "\
## DATOS PARA EL INFORME
Genera un informe psicológico completo de tipo \"{}\" con las secciones especificadas, \
basándote EXCLUSIVAMENTE en esta información:

Información del paciente: {patient_info}
Detalles de la evaluación: {assessment_details}
Impresiones clínicas: {clinical_impressions}",
        data.report_type.slug(),
    )
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}
