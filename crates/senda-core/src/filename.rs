//! Report filename derivation.

use jiff::civil::Date;

/// Derive the canonical filename for a saved report:
/// `Informe_<PatientFullName>_<ISODate>`.
///
/// The patient name is sanitized for filesystem and URL safety: anything
/// that is not alphanumeric becomes an underscore, runs of underscores
/// collapse to one, and leading/trailing underscores are trimmed.
pub fn report_filename(patient_full_name: &str, date: Date) -> String {
    format!("Informe_{}_{}", sanitize(patient_full_name), date)
}

fn sanitize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            result.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            result.push('_');
            prev_underscore = true;
        }
    }
    result.trim_matches('_').to_string()
}
