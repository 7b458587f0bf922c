use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::CoreError;
use crate::models::property::{Property, PropertyType};

/// Display text for unparsable alert dates.
pub const INVALID_DATE: &str = "Invalid date";

/// Display formatting for listing cards and alert rows (SGD, en-SG style).
pub struct FormatService;

impl FormatService {
    /// Whole-dollar SGD amount with thousands separators, e.g. `$1,200` or
    /// `-$1,201`. Non-finite amounts are returned as plain numbers.
    pub fn format_currency(amount: f64) -> String {
        if !amount.is_finite() {
            return amount.to_string();
        }
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{sign}${}", group_thousands(&format!("{:.0}", rounded.abs())))
    }

    /// e.g. `$650/sqft`
    pub fn format_psf(psf: f64) -> String {
        format!("{}/sqft", Self::format_currency(psf))
    }

    /// e.g. `1200 sqft`
    pub fn format_size(size: f64) -> String {
        format!("{size} sqft")
    }

    /// e.g. `HDB 4-room`, `PRIVATE 3BR`
    pub fn format_property_type(property: &Property) -> String {
        match property.property_type {
            PropertyType::Hdb => format!("HDB {}", property.room_type),
            other => format!("{other} {}", property.room_type),
        }
    }

    /// Day, short month, year, e.g. `15 Jan 2025`.
    pub fn format_date(date: &DateTime<Utc>) -> String {
        date.format("%-d %b %Y").to_string()
    }

    /// Format a stored timestamp string; falls back to [`INVALID_DATE`].
    pub fn format_date_str(raw: &str) -> String {
        match Self::parse_timestamp(raw) {
            Ok(date) => Self::format_date(&date),
            Err(e) => {
                tracing::debug!(error = %e, "unparsable alert date");
                INVALID_DATE.to_string()
            }
        }
    }

    /// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as
    /// midnight UTC.
    pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, CoreError> {
        let trimmed = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| CoreError::InvalidDate(raw.to_string()))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
