//! # The year model
//!
//! A [`YearSpec`] is the whole input for one year: the weekday of
//! January 1st and the holiday list. Month lengths follow the Gregorian
//! leap rule. [`YearSpec::months`] yields one [`MonthSlice`] per month,
//! carrying the running first-weekday offset from one month to the next.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Day of the week, Monday-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    /// Index 0
    Monday,
    /// Index 1
    Tuesday,
    /// Index 2
    Wednesday,
    /// Index 3
    Thursday,
    /// Index 4
    Friday,
    /// Index 5
    Saturday,
    /// Index 6
    Sunday,
}

impl Weekday {
    /// All seven weekdays in order
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 0 for Monday through 6 for Sunday
    pub fn index(self) -> usize {
        self as usize
    }

    /// The weekday at `index` modulo 7
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// The weekday `days` days after this one
    pub fn advance(self, days: usize) -> Self {
        Self::from_index(self.index() + days)
    }

    /// One-letter initial used in the column header (Spanish convention,
    /// with `X` for Wednesday)
    pub fn initial(self) -> char {
        match self {
            Weekday::Monday => 'L',
            Weekday::Tuesday => 'M',
            Weekday::Wednesday => 'X',
            Weekday::Thursday => 'J',
            Weekday::Friday => 'V',
            Weekday::Saturday => 'S',
            Weekday::Sunday => 'D',
        }
    }

    /// The full Spanish name
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

impl fmt::Display for Weekday {
    /// Writes the one-letter initial
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial())
    }
}

/// True for Gregorian leap years
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The lengths of the twelve months of the given year
pub fn month_lengths(year: i32) -> [u8; 12] {
    let feb = if is_leap_year(year) { 29 } else { 28 };
    [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
}

/// A single day marked for holiday styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Month of the year, 1 through 12
    pub month: u8,
    /// Day of the month, 1-based
    pub day: u8,
}

/// The input record for one year of calendar pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSpec {
    /// The year number printed on every page
    pub year: i32,
    /// Weekday of January 1st
    pub start: Weekday,
    /// Days marked for holiday styling
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl YearSpec {
    /// Create a spec with an explicit first weekday and no holidays
    pub fn new(year: i32, start: Weekday) -> Self {
        YearSpec {
            year,
            start,
            holidays: Vec::new(),
        }
    }

    /// Look up the first weekday from the configured table.
    ///
    /// Only years with a configured offset are supported; everything else
    /// is [`Error::UnsupportedYear`]. The offset is configuration, not
    /// computation.
    pub fn builtin(year: i32) -> Result<Self, Error> {
        let start = match year {
            2024 => Weekday::Monday,
            2025 => Weekday::Wednesday,
            2026 => Weekday::Thursday,
            2027 => Weekday::Friday,
            2028 => Weekday::Saturday,
            _ => return Err(Error::UnsupportedYear(year)),
        };
        Ok(YearSpec::new(year, start))
    }

    /// The lengths of this year's twelve months
    pub fn month_lengths(&self) -> [u8; 12] {
        month_lengths(self.year)
    }

    /// Check every holiday against the month lengths
    pub fn validate_holidays(&self) -> Result<(), Error> {
        let lengths = self.month_lengths();
        for h in &self.holidays {
            if h.month < 1 || h.month > 12 {
                return Err(Error::HolidayMonth(h.month));
            }
            if h.day < 1 || h.day > lengths[(h.month - 1) as usize] {
                return Err(Error::HolidayDay {
                    month: h.month,
                    day: h.day,
                });
            }
        }
        Ok(())
    }

    /// Iterate over the twelve months, carrying the weekday offset
    pub fn months(&self) -> Months<'_> {
        Months {
            spec: self,
            lengths: self.month_lengths(),
            month: 0,
            start: self.start,
        }
    }
}

/// Everything the grid layout needs for a single month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSlice {
    /// Month of the year, 0-based
    pub month: usize,
    /// Number of days in this month
    pub days_in_month: u8,
    /// Weekday of the 1st of this month
    pub start: Weekday,
    /// Number of days in the month before this one
    pub days_in_previous_month: u8,
    /// Holiday days within this month, 1-based
    pub holidays: Vec<u8>,
}

/// Iterator over the months of a [`YearSpec`]
pub struct Months<'a> {
    spec: &'a YearSpec,
    lengths: [u8; 12],
    month: usize,
    start: Weekday,
}

impl<'a> Iterator for Months<'a> {
    type Item = MonthSlice;

    fn next(&mut self) -> Option<MonthSlice> {
        if self.month >= 12 {
            return None;
        }
        let month = self.month;
        let days_in_month = self.lengths[month];
        // December of the previous year is taken as 31 days.
        let days_in_previous_month = if month == 0 {
            31
        } else {
            self.lengths[month - 1]
        };
        let holidays = self
            .spec
            .holidays
            .iter()
            .filter(|h| h.month as usize == month + 1)
            .map(|h| h.day)
            .collect();

        let slice = MonthSlice {
            month,
            days_in_month,
            start: self.start,
            days_in_previous_month,
            holidays,
        };
        self.start = self.start.advance(days_in_month as usize);
        self.month += 1;
        Some(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_advance() {
        assert_eq!(Weekday::Monday.advance(0), Weekday::Monday);
        assert_eq!(Weekday::Thursday.advance(31), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.advance(1), Weekday::Monday);
    }

    #[test]
    fn test_weekday_initials() {
        let header: String = Weekday::ALL.iter().map(|d| d.initial()).collect();
        assert_eq!(header, "LMXJVSD");
        assert_eq!(Weekday::Wednesday.to_string(), "X");
        assert_eq!(Weekday::Saturday.name(), "Sábado");
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(month_lengths(2026)[1], 28);
        assert_eq!(month_lengths(2028)[1], 29);
        assert_eq!(month_lengths(2000)[1], 29);
        assert_eq!(month_lengths(1900)[1], 28);
        assert_eq!(month_lengths(2026).iter().map(|&d| d as u32).sum::<u32>(), 365);
    }

    #[test]
    fn test_running_offset_2026() {
        let spec = YearSpec::builtin(2026).unwrap();
        let starts: Vec<Weekday> = spec.months().map(|m| m.start).collect();
        assert_eq!(starts[0], Weekday::Thursday);
        // January has 31 days, so February starts 3 weekdays later
        assert_eq!(starts[1], Weekday::Sunday);
        assert_eq!(starts[2], Weekday::Sunday);
        assert_eq!(starts[11], Weekday::Tuesday);
    }

    #[test]
    fn test_previous_month_lengths() {
        let spec = YearSpec::builtin(2026).unwrap();
        let slices: Vec<MonthSlice> = spec.months().collect();
        assert_eq!(slices[0].days_in_previous_month, 31);
        assert_eq!(slices[2].days_in_previous_month, 28);
        assert_eq!(slices[7].days_in_previous_month, 31);
    }

    #[test]
    fn test_unsupported_year() {
        assert_eq!(YearSpec::builtin(1999), Err(Error::UnsupportedYear(1999)));
    }

    #[test]
    fn test_holiday_validation() {
        let mut spec = YearSpec::builtin(2026).unwrap();
        spec.holidays.push(Holiday { month: 1, day: 1 });
        spec.holidays.push(Holiday { month: 12, day: 25 });
        assert_eq!(spec.validate_holidays(), Ok(()));

        spec.holidays.push(Holiday { month: 2, day: 29 });
        assert_eq!(
            spec.validate_holidays(),
            Err(Error::HolidayDay { month: 2, day: 29 })
        );
    }

    #[test]
    fn test_holiday_slices() {
        let mut spec = YearSpec::builtin(2026).unwrap();
        spec.holidays.push(Holiday { month: 5, day: 1 });
        spec.holidays.push(Holiday { month: 5, day: 15 });
        spec.holidays.push(Holiday { month: 6, day: 24 });
        let slices: Vec<MonthSlice> = spec.months().collect();
        assert_eq!(slices[4].holidays, vec![1, 15]);
        assert_eq!(slices[5].holidays, vec![24]);
        assert!(slices[0].holidays.is_empty());
    }
}
