//! senda-report
//!
//! The deterministic report path: pure section composers and the
//! report-type-aware assembler. No I/O — everything here is a function from
//! validated assessment data to Markdown-like Spanish text.

pub mod assemble;
pub mod compose;
