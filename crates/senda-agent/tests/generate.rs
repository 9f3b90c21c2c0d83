//! End-to-end generation through the agent, against in-memory fakes.

mod common;

use uuid::Uuid;

use senda_agent::ReportAgent;
use senda_core::models::generation::GenerationStrategy;
use senda_report::assemble::CONFIDENTIALITY_FOOTER;

use common::{bundle, request, FailingModel, FakeModel, MemoryStore, FAKE_REPORT_TEXT};

#[tokio::test]
async fn deterministic_generation_end_to_end() {
    let bundle = bundle();
    let assessment_id = bundle.assessment.id;
    let store = MemoryStore::with_bundle(bundle);
    let agent = ReportAgent::new(store.clone(), FakeModel::default());

    let mut request = request(assessment_id);
    request.include_treatment_plan = false;

    let response = agent.generate_report(&request).await;

    assert!(response.success, "unexpected failure: {:?}", response.error);
    assert!(response.report_id.is_some());
    assert!(response.error.is_none());
    assert!(response.missing_data.is_none());

    let text = response.report_text.expect("report text");
    assert!(text.starts_with("# INFORME DE EVALUACIÓN PSICOLÓGICA"));
    assert!(text.contains("Juan Pérez"));
    assert!(text.contains("Laura Gómez"));
    assert!(text.contains("Centro Psicológico Aurora"));
    assert!(text.contains("- Ansiedad ante exámenes"));
    assert!(text.contains("### Emocional\nAnsiedad moderada"));

    // Age reflects the generation date, not a fixed value.
    let age = senda_core::dates::age_on(jiff::civil::date(1985, 5, 15), jiff::Zoned::now().date());
    assert!(text.contains(&format!("**Edad:** {age} años")));

    assert!(text.contains("### Diagnóstico Principal"));
    assert!(text.contains("**F41.1 - Trastorno de ansiedad generalizada**"));
    assert!(!text.contains("Diagnósticos Secundarios"));
    assert!(text.contains("## RECOMENDACIONES"));
    assert!(!text.contains("## PLAN DE TRATAMIENTO"));
    assert!(text.ends_with(CONFIDENTIALITY_FOOTER));

    let saved = agent.list_reports(assessment_id).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].version, 1);
    assert!(!saved[0].is_final);
    assert!(saved[0].filename.starts_with("Informe_Juan_Pérez_"));
    assert_eq!(saved[0].report_text, text);
}

#[tokio::test]
async fn options_gate_template_sections() {
    let bundle = bundle();
    let assessment_id = bundle.assessment.id;
    let agent = ReportAgent::new(MemoryStore::with_bundle(bundle), FakeModel::default());

    let mut both_off = request(assessment_id);
    both_off.include_recommendations = false;
    both_off.include_treatment_plan = false;

    let text = agent
        .generate_report(&both_off)
        .await
        .report_text
        .expect("report text");
    assert!(!text.contains("## RECOMENDACIONES"));
    assert!(!text.contains("## PLAN DE TRATAMIENTO"));

    // The two flags gate independently.
    let mut plan_only = request(assessment_id);
    plan_only.include_recommendations = false;

    let text = agent
        .generate_report(&plan_only)
        .await
        .report_text
        .expect("report text");
    assert!(!text.contains("## RECOMENDACIONES"));
    assert!(text.contains("## PLAN DE TRATAMIENTO"));
}

#[tokio::test]
async fn validation_failure_reports_every_gap_and_persists_nothing() {
    let mut bundle = bundle();
    let assessment_id = bundle.assessment.id;
    bundle.patient = None;
    bundle.assessment.consultation_reasons.clear();
    for d in &mut bundle.assessment.diagnoses {
        d.is_primary = false;
    }
    let store = MemoryStore::with_bundle(bundle);
    let agent = ReportAgent::new(store.clone(), FakeModel::default());

    let response = agent.generate_report(&request(assessment_id)).await;

    assert!(!response.success);
    assert!(response.report_id.is_none());
    assert!(response.report_text.is_none());
    assert_eq!(
        response.missing_data,
        Some(vec![
            "patient".to_string(),
            "consultationReasons".to_string(),
            "primaryDiagnosis".to_string(),
        ])
    );
    let error = response.error.expect("error message");
    assert!(error.starts_with("Faltan datos requeridos para generar el informe:"));
    assert!(error.contains("patient, consultationReasons, primaryDiagnosis"));

    assert_eq!(store.report_count(assessment_id), 0);
}

#[tokio::test]
async fn unknown_assessment_is_not_found() {
    let agent = ReportAgent::new(MemoryStore::default(), FakeModel::default());

    let response = agent.generate_report(&request(Uuid::new_v4())).await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("No se encontró la evaluación solicitada.")
    );
    assert!(response.missing_data.is_none());
}

#[tokio::test]
async fn generative_path_feeds_assessment_data_to_the_model() {
    let bundle = bundle();
    let assessment_id = bundle.assessment.id;
    let model = FakeModel::default();
    let agent = ReportAgent::new(MemoryStore::with_bundle(bundle), model.clone());

    let mut request = request(assessment_id);
    request.strategy = GenerationStrategy::Generative;

    let response = agent.generate_report(&request).await;
    assert!(response.success);
    assert_eq!(response.report_text.as_deref(), Some(FAKE_REPORT_TEXT));

    let data = model.last_data.lock().unwrap().take().expect("prompt data");
    assert_eq!(data.patient_name, "Juan Pérez");
    assert_eq!(data.clinician_name, "Laura Gómez");
    assert_eq!(data.clinic_name, "Centro Psicológico Aurora");
    assert_eq!(data.consultation_reasons, vec!["Ansiedad ante exámenes"]);
    assert_eq!(data.evaluation_areas, vec!["Emocional"]);
    assert_eq!(
        data.icd_criteria,
        vec!["Trastorno de ansiedad generalizada (F41.1)"]
    );
    assert!(data.has_primary_diagnosis);
}

#[tokio::test]
async fn generation_failure_never_falls_back_to_the_deterministic_path() {
    let bundle = bundle();
    let assessment_id = bundle.assessment.id;
    let store = MemoryStore::with_bundle(bundle);
    let agent = ReportAgent::new(store.clone(), FailingModel);

    let mut request = request(assessment_id);
    request.strategy = GenerationStrategy::Generative;

    let response = agent.generate_report(&request).await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("No fue posible generar el informe. Intente nuevamente.")
    );
    assert!(response.report_text.is_none());
    assert_eq!(store.report_count(assessment_id), 0);
}
