//! Structural validation of generated report text.
//!
//! The prompt instructs the model to emit an exact heading structure, but an
//! instruction is not a guarantee. This pass checks the output against the
//! report type's contract and reports every deviation. Deviations are
//! advisory: the caller logs them and decides whether to keep or regenerate
//! the text — the adapter never silently rewrites model output.

use std::fmt;

use senda_core::models::report::ReportType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    /// A required `## HEADING` is absent.
    MissingHeading(String),
    /// A heading appears before one that the contract places earlier.
    OutOfOrderHeading(String),
    /// A blank line directly precedes this heading.
    BlankLineBeforeHeading(String),
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureIssue::MissingHeading(h) => write!(f, "missing required heading: {h}"),
            StructureIssue::OutOfOrderHeading(h) => write!(f, "heading out of order: {h}"),
            StructureIssue::BlankLineBeforeHeading(h) => {
                write!(f, "blank line before heading: {h}")
            }
        }
    }
}

/// Check generated text against the heading contract for `report_type`.
///
/// Returns every deviation found; an empty vec means the output conforms.
pub fn check_report_structure(text: &str, report_type: ReportType) -> Vec<StructureIssue> {
    let mut issues = Vec::new();

    // Required headings, present and in contract order.
    let mut last_position = 0usize;
    let mut order_intact = true;
    for heading in report_type.section_headings() {
        let marker = format!("## {heading}");
        match text.find(&marker) {
            None => issues.push(StructureIssue::MissingHeading(heading.to_string())),
            Some(pos) => {
                if order_intact && pos < last_position {
                    issues.push(StructureIssue::OutOfOrderHeading(heading.to_string()));
                    // One out-of-place heading shifts everything after it;
                    // report only the first to keep the signal clean.
                    order_intact = false;
                }
                last_position = last_position.max(pos);
            }
        }
    }

    // No blank line directly before any heading.
    let lines: Vec<&str> = text.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with("## ") && i > 0 && lines[i - 1].trim().is_empty() {
            let heading = line.trim_start_matches("## ").to_string();
            issues.push(StructureIssue::BlankLineBeforeHeading(heading));
        }
    }

    issues
}
