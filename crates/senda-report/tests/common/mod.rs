//! Shared fixtures for composer and assembler tests.
#![allow(dead_code)]

use jiff::civil::date;
use uuid::Uuid;

use senda_core::models::assessment::{
    Assessment, AssessmentStatus, CertaintyLevel, ConsultationReason, DiagnosisSelection,
    EvaluationArea, EvaluationAreaSelection, IcdCriteria,
};
use senda_core::models::clinic::Clinic;
use senda_core::models::clinician::Clinician;
use senda_core::models::patient::Patient;
use senda_core::models::report::ReportType;

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

pub fn assessment() -> Assessment {
    Assessment {
        id: Uuid::new_v4(),
        status: AssessmentStatus::Completed,
        patient_id: Uuid::new_v4(),
        clinician_id: Uuid::new_v4(),
        clinic_id: Uuid::new_v4(),
        report_type: ReportType::EvaluacionPsicologica,
        consultation_reasons: vec![reason("Ansiedad")],
        evaluation_areas: vec![area("Emocional", Some("Ansiedad moderada"))],
        diagnoses: vec![diagnosis("F41.1", "Trastorno de ansiedad generalizada", true)],
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}
