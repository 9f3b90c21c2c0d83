//! senda-storage
//!
//! Persistence for the report core: assessments, their referenced entities,
//! and versioned report artifacts, stored as JSON objects under the key
//! conventions in `senda_core::keys`. Version uniqueness is enforced by
//! conditional creates on the version slot, not by read-then-write.

pub mod error;
pub mod objects;
pub mod store;

pub use store::{ReportStore, S3Store};
