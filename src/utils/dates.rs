use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Day-month-year, as stored in the crash and coverage tables
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a table date such as `06-03-2025`
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| Error::InvalidDate {
        date: date.to_string(),
        source,
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
