//! Date helpers for report rendering.
//!
//! Pure functions over `jiff::civil::Date`. Report prose is Spanish, so the
//! long-date formatter spells month names out in Spanish rather than going
//! through a locale layer.

use jiff::civil::Date;

/// Full years elapsed between `birth` and `today`.
///
/// The age decrements by one when today's month/day falls before the birth
/// month/day — i.e. the birthday has not happened yet this year. On the
/// birthday itself the year counts.
pub fn age_on(birth: Date, today: Date) -> i16 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long Spanish date, e.g. `15 de mayo de 2026`.
pub fn spanish_long_date(date: Date) -> String {
    let month = SPANISH_MONTHS[(date.month() - 1) as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Numeric day-first date, e.g. `15/05/1985`, as shown for birth dates.
pub fn spanish_short_date(date: Date) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}
