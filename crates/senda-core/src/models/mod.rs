pub mod assessment;
pub mod clinic;
pub mod clinician;
pub mod generation;
pub mod patient;
pub mod report;
