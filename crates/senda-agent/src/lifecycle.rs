//! Draft lifecycle: version allocation and conflict retry.
//!
//! A new report version is (max existing version) + 1, claimed with a
//! conditional create on the version slot. When two saves race, the loser
//! gets a `VersionConflict`, recomputes the max, and retries — only the
//! version computation repeats, never the report-text generation.

use jiff::Zoned;
use tracing::warn;
use uuid::Uuid;

use senda_core::filename::report_filename;
use senda_core::models::report::Report;
use senda_storage::error::StorageError;
use senda_storage::ReportStore;

/// Conflicts beyond this are treated as a persistence failure rather than
/// retried forever.
const MAX_VERSION_ATTEMPTS: u32 = 5;

/// Persist `report_text` as the next draft version for an assessment.
///
/// `is_final` always starts false here; only an explicit finalize call ever
/// sets it.
pub async fn persist_new_version<S: ReportStore + ?Sized>(
    store: &S,
    assessment_id: Uuid,
    user_id: Uuid,
    patient_full_name: &str,
    report_text: &str,
) -> Result<Report, StorageError> {
    let mut attempt = 0;
    loop {
        let version = store.max_report_version(assessment_id).await? + 1;
        let now = Zoned::now();
        let report = Report {
            id: Uuid::new_v4(),
            assessment_id,
            report_text: report_text.to_string(),
            version,
            is_final: false,
            filename: report_filename(patient_full_name, now.date()),
            created_by: user_id,
            created_at: now.timestamp(),
        };

        match store.insert_report_version(&report).await {
            Ok(()) => return Ok(report),
            Err(StorageError::VersionConflict { .. }) => {
                attempt += 1;
                if attempt >= MAX_VERSION_ATTEMPTS {
                    return Err(StorageError::VersionConflict {
                        assessment_id,
                        version,
                    });
                }
                warn!(
                    %assessment_id,
                    version,
                    attempt,
                    "report version conflict, recomputing"
                );
            }
            Err(e) => return Err(e),
        }
    }
}
