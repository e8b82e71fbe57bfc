//! Normalizes human date input into canonical ISO range boundaries.
//!
//! Accepted forms are `D-M`, `D.M`, `D/M` (year optional, four digits,
//! defaulting to the current year) and strict `Y-M-D`. The result is an
//! ISO-8601 timestamp pinned to the start (`00:00:00`) or end (`23:59:59`)
//! of the day, as consumed by the Clockify time-entries endpoint.

use crate::libs::error::ReportError;
use chrono::{Datelike, Local, NaiveDate};

/// Which boundary of a day a parsed date should be pinned to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayBound {
    Start,
    End,
}

/// Parses `input` and returns `YYYY-MM-DDT00:00:00Z` or
/// `YYYY-MM-DDT23:59:59Z` depending on `bound`.
///
/// The year of day-month inputs defaults to the current year.
pub fn to_iso_format(input: &str, bound: DayBound) -> Result<String, ReportError> {
    to_iso_format_in_year(input, bound, Local::now().year())
}

/// Same as [`to_iso_format`], with an explicit default year.
pub fn to_iso_format_in_year(input: &str, bound: DayBound, current_year: i32) -> Result<String, ReportError> {
    let date = parse_flexible(input, current_year)?;
    let time = match bound {
        DayBound::Start => "00:00:00",
        DayBound::End => "23:59:59",
    };
    Ok(format!("{}T{}Z", date.format("%Y-%m-%d"), time))
}

/// Both boundaries are canonical ISO timestamps of equal length, so plain
/// string comparison decides whether the range is well-formed.
pub fn is_valid_range(start_iso: &str, end_iso: &str) -> bool {
    start_iso <= end_iso
}

/// Parses `D[-./]M[[-./]YYYY]`, falling back to strict `Y-M-D`.
fn parse_flexible(input: &str, current_year: i32) -> Result<NaiveDate, ReportError> {
    let trimmed = input.trim();

    if let Some(date) = parse_day_month(trimmed, current_year) {
        return Ok(date);
    }

    // Fallback for strict YYYY-MM-DD
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| ReportError::InvalidDateFormat(trimmed.to_string()))
}

/// The primary day-first pattern: one or two digits for day and month, an
/// optional four-digit year, separated by `-`, `.` or `/`. Calendar
/// validation happens through `NaiveDate`, so `13/32` is rejected here.
fn parse_day_month(input: &str, current_year: i32) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split(['-', '.', '/']).collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }
    let valid = |s: &str, max_len: usize| !s.is_empty() && s.len() <= max_len && s.bytes().all(|b| b.is_ascii_digit());
    if !valid(parts[0], 2) || !valid(parts[1], 2) {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = match parts.get(2) {
        Some(y) if y.len() == 4 && valid(y, 4) => y.parse().ok()?,
        Some(_) => return None,
        None => current_year,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}
