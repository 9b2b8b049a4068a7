//! Date-Range Formatter — turns month-precision dates into display strings.

use crate::errors::ResumeError;
use crate::models::YearMonth;

const MONTHS: [&str; 12] = [
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

const PRESENT: &str = "Present";

/// Looks up the English month name for a 1-indexed month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
}

/// Formats a single date as `"<MonthName> <Year>"`.
///
/// A month outside 1..=12 is an `InvalidDate`; it is never wrapped into range.
pub fn format_month_year(date: YearMonth) -> Result<String, ResumeError> {
    let name = month_name(date.month).ok_or(ResumeError::InvalidDate {
        subject: None,
        year: date.year,
        month: date.month,
    })?;
    Ok(format!("{name} {}", date.year))
}

/// Formats `start - end`, or `start - Present` when `end` is `None`.
pub fn format_date_range(start: YearMonth, end: Option<YearMonth>) -> Result<String, ResumeError> {
    let from = format_month_year(start)?;
    let to = match end {
        Some(end) => format_month_year(end)?,
        None => PRESENT.to_string(),
    };
    Ok(format!("{from} - {to}"))
}
