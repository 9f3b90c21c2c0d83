//! senda-core
//!
//! Pure domain types, object-key conventions, and date/filename helpers for
//! the Senda report-generation core. No AWS SDK dependency — this is the
//! shared vocabulary of the Senda system.

pub mod dates;
pub mod filename;
pub mod keys;
pub mod models;
