//! The report store: assessment bundle loading and versioned report
//! persistence.
//!
//! `ReportStore` is the seam between the orchestrator and the backing
//! store. The production implementation is [`S3Store`]; tests substitute an
//! in-memory implementation with the same conditional-create semantics.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use senda_core::keys;
use senda_core::models::assessment::{Assessment, AssessmentBundle};
use senda_core::models::clinic::Clinic;
use senda_core::models::clinician::Clinician;
use senda_core::models::patient::Patient;
use senda_core::models::report::Report;

use crate::error::StorageError;
use crate::objects;

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Load an assessment with its referenced entities resolved.
    ///
    /// Returns `Ok(None)` when the assessment itself does not exist —
    /// distinct from an existing assessment with missing referents, which
    /// loads with `None` in the affected bundle slots.
    async fn load_bundle(&self, assessment_id: Uuid)
    -> Result<Option<AssessmentBundle>, StorageError>;

    /// Highest existing report version for an assessment, 0 when none.
    async fn max_report_version(&self, assessment_id: Uuid) -> Result<u32, StorageError>;

    /// Create the version slot for `report`. Fails with
    /// [`StorageError::VersionConflict`] when that `(assessment, version)`
    /// slot already exists — the caller recomputes and retries.
    async fn insert_report_version(&self, report: &Report) -> Result<(), StorageError>;

    /// Load one report version.
    async fn load_report(
        &self,
        assessment_id: Uuid,
        version: u32,
    ) -> Result<Report, StorageError>;

    /// All reports for an assessment, ascending by version.
    async fn list_reports(&self, assessment_id: Uuid) -> Result<Vec<Report>, StorageError>;

    /// Mark one report version final. Finalization is the only operation
    /// that ever sets `is_final`.
    async fn finalize_report(
        &self,
        assessment_id: Uuid,
        version: u32,
    ) -> Result<Report, StorageError>;
}

/// S3-backed store over the `senda_core::keys` layout.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(config: &aws_config::SdkConfig, bucket: impl Into<String>) -> S3Store {
        S3Store {
            client: Client::new(config),
            bucket: bucket.into(),
        }
    }

    /// Presigned download URL for a stored report artifact. The PDF next to
    /// the version slot is produced by the external document renderer; this
    /// store only hands out the location.
    pub async fn presign_report_pdf(
        &self,
        assessment_id: Uuid,
        version: u32,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        objects::presign_get(
            &self.client,
            &self.bucket,
            &keys::report_pdf(assessment_id, version),
            expires_in,
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let (body, _etag) = objects::get_object(&self.client, &self.bucket, key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Load a referenced entity, mapping "referent missing" to `None` so
    /// the validator can report the gap instead of the store failing.
    async fn get_referent<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        match self.get_json::<T>(key).await {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ReportStore for S3Store {
    async fn load_bundle(
        &self,
        assessment_id: Uuid,
    ) -> Result<Option<AssessmentBundle>, StorageError> {
        let assessment: Assessment = match self
            .get_referent(&keys::assessment(assessment_id))
            .await?
        {
            Some(a) => a,
            None => return Ok(None),
        };

        let patient: Option<Patient> =
            self.get_referent(&keys::patient(assessment.patient_id)).await?;
        let clinician: Option<Clinician> =
            self.get_referent(&keys::user(assessment.clinician_id)).await?;
        let clinic: Option<Clinic> =
            self.get_referent(&keys::clinic(assessment.clinic_id)).await?;

        Ok(Some(AssessmentBundle {
            assessment,
            patient,
            clinician,
            clinic,
        }))
    }

    async fn max_report_version(&self, assessment_id: Uuid) -> Result<u32, StorageError> {
        let keys = objects::list_objects(
            &self.client,
            &self.bucket,
            &keys::report_prefix(assessment_id),
        )
        .await?;

        Ok(keys
            .iter()
            .filter_map(|k| keys::parse_report_version(k))
            .max()
            .unwrap_or(0))
    }

    async fn insert_report_version(&self, report: &Report) -> Result<(), StorageError> {
        let key = keys::report_version(report.assessment_id, report.version);
        let body = serde_json::to_vec_pretty(report)?;

        match objects::put_object_if_absent(&self.client, &self.bucket, &key, body).await {
            Ok(_etag) => {
                info!(
                    assessment_id = %report.assessment_id,
                    version = report.version,
                    "report version created"
                );
                Ok(())
            }
            Err(StorageError::PreconditionFailed { .. }) => {
                Err(StorageError::VersionConflict {
                    assessment_id: report.assessment_id,
                    version: report.version,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn load_report(
        &self,
        assessment_id: Uuid,
        version: u32,
    ) -> Result<Report, StorageError> {
        self.get_json(&keys::report_version(assessment_id, version))
            .await
    }

    async fn list_reports(&self, assessment_id: Uuid) -> Result<Vec<Report>, StorageError> {
        let object_keys = objects::list_objects(
            &self.client,
            &self.bucket,
            &keys::report_prefix(assessment_id),
        )
        .await?;

        let mut versions: Vec<u32> = object_keys
            .iter()
            .filter_map(|k| keys::parse_report_version(k))
            .collect();
        versions.sort_unstable();

        let mut reports = Vec::with_capacity(versions.len());
        for version in versions {
            reports.push(self.load_report(assessment_id, version).await?);
        }
        Ok(reports)
    }

    async fn finalize_report(
        &self,
        assessment_id: Uuid,
        version: u32,
    ) -> Result<Report, StorageError> {
        let key = keys::report_version(assessment_id, version);
        let (body, etag) = objects::get_object(&self.client, &self.bucket, &key).await?;
        let mut report: Report = serde_json::from_slice(&body)?;

        if report.is_final {
            return Ok(report);
        }
        report.is_final = true;

        let updated = serde_json::to_vec_pretty(&report)?;
        objects::put_object_if_match(
            &self.client,
            &self.bucket,
            &key,
            updated,
            etag.as_deref().unwrap_or_default(),
        )
        .await?;

        info!(%assessment_id, version, "report finalized");
        Ok(report)
    }
}
