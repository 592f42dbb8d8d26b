use chrono::NaiveDate;

use crate::error::{RelError, RelResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> RelResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(RelError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that an integer is positive (> 0).
pub fn positive(value: i64, field: &str) -> RelResult<i64> {
    if value <= 0 {
        Err(RelError::NonPositive {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Validates that an integer is zero or more.
pub fn non_negative(value: i64, field: &str) -> RelResult<i64> {
    if value < 0 {
        Err(RelError::Negative {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str, field: &str) -> RelResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| RelError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses an optional end date and checks it does not precede `start`.
pub fn end_not_before(
    start: NaiveDate,
    end: Option<&str>,
    field: &str,
) -> RelResult<Option<NaiveDate>> {
    let end = match trim_optional(end) {
        None => return Ok(None),
        Some(s) => parse_date(&s, field)?,
    };
    if end < start {
        return Err(RelError::InvertedRange {
            field: field.to_string(),
        });
    }
    Ok(Some(end))
}

/// Reduces a phone number to its digits. Returns None when no digit is left.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}
