use chrono::{NaiveDate, NaiveTime};

use dreamgarden_types::models::WeekDays;

use crate::error::{ApiError, ApiResult};

/// "YYYY-MM-DD"
pub fn date(value: &str) -> ApiResult<NaiveDate> {
    if value.len() == 10 {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(date);
        }
    }
    Err(ApiError::InvalidInput(format!(
        "date must be YYYY-MM-DD, got '{value}'"
    )))
}

/// "HH:MM", 24-hour.
pub fn clock_time(value: &str) -> ApiResult<String> {
    if value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok() {
        Ok(value.to_string())
    } else {
        Err(ApiError::InvalidInput(format!(
            "time must be HH:MM, got '{value}'"
        )))
    }
}

pub fn week_days(days: &[bool]) -> ApiResult<WeekDays> {
    days.try_into().map_err(|_| {
        ApiError::InvalidInput(format!(
            "days must have exactly 7 entries, got {}",
            days.len()
        ))
    })
}

pub fn non_empty<'a>(field: &str, value: &'a str) -> ApiResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::InvalidInput(format!("{field} must not be empty")))
    } else {
        Ok(trimmed)
    }
}
