//! senda-agent
//!
//! The report-generation orchestrator: requirements validation, strategy
//! selection (deterministic composer or generative model), draft lifecycle,
//! and the uniform response contract exposed to the web layer.

pub mod agent;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod validate;

pub use agent::ReportAgent;
