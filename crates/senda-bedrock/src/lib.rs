//! senda-bedrock
//!
//! The generative report path: prompt construction, Bedrock Converse
//! invocation with a bounded timeout, and structural post-validation of the
//! model's output.

pub mod error;
pub mod generate;
pub mod prompt;
pub mod structure;
