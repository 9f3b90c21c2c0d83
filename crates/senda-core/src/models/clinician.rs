use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The acting clinician, as supplied by the identity provider. The core
/// trusts this record as given and performs no authentication itself.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Clinician {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub license_number: Option<String>,
    pub role: String,
}

impl Clinician {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
