//! Errors raised while building a year's calendar data

use thiserror::Error;

/// Failure to construct or validate a [`crate::year::YearSpec`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No first-weekday offset is configured for this year.
    ///
    /// Computing the offset is deliberately not implemented; pass the
    /// weekday of January 1st explicitly instead.
    #[error("no first-weekday offset configured for year {0}")]
    UnsupportedYear(i32),
    /// A holiday names a month outside of 1..=12
    #[error("holiday month {0} is out of range")]
    HolidayMonth(u8),
    /// A holiday names a day its month does not have
    #[error("holiday day {day} is out of range for month {month}")]
    HolidayDay {
        /// Month of the year, 1-based
        month: u8,
        /// Day of the month, 1-based
        day: u8,
    },
}
