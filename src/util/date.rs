//! Date formatting for server-supplied ISO 8601 timestamp strings.
//!
//! TRADE-OFFS
//! ==========
//! Only the date portion is displayed, so a small hand parser beats pulling
//! a calendar crate into the WASM bundle. Unparseable inputs fall through
//! unchanged rather than erroring.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse the leading `YYYY-MM-DD` of an ISO 8601 timestamp.
fn parse_date(iso: &str) -> Option<(i32, usize, u32)> {
    let mut parts = iso.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let rest = parts.next()?;
    let day: u32 = rest.get(..2)?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

fn format_with(iso: &str, months: &[&str; 12]) -> String {
    match parse_date(iso) {
        Some((year, month, day)) => {
            format!("{} {day:02}, {year}", months[month - 1])
        }
        None => iso.to_owned(),
    }
}

/// `Mar 05, 2024`, for blog cards.
pub fn format_short(iso: &str) -> String {
    format_with(iso, &MONTHS_SHORT)
}

/// `March 05, 2024`, for the blog detail page.
pub fn format_long(iso: &str) -> String {
    format_with(iso, &MONTHS_LONG)
}
