use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Render a backend timestamp as a calendar date, or echo it back if it cannot be read.
#[must_use]
pub fn format_generated_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|value| value.date_naive())
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|value| value.date()))
        .or_else(|_| raw.parse::<NaiveDate>());
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
