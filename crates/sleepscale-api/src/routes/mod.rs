pub mod diary;
pub mod health;
pub mod instruments;
pub mod reports;
pub mod respondents;
pub mod submissions;

use jiff::civil::Date;

use crate::error::ApiError;

/// Parse a calendar date path segment, `2025-03-01` or `20250301`.
pub(crate) fn parse_date(value: &str) -> Result<Date, ApiError> {
    value
        .parse::<Date>()
        .or_else(|_| Date::strptime("%Y%m%d", value))
        .map_err(|_| ApiError::BadRequest(format!("invalid date: {value:?}")))
}
