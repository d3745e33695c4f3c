use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const RANGE_SEPARATOR: &str = " to ";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{date} is before the earliest bookable day {min_date}")]
    BeforeMinDate { date: NaiveDate, min_date: NaiveDate },

    #[error("range ends on {end} before it starts on {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// Range-mode date picker producing the text stored in `dateRange`.
#[derive(Debug, Clone, Copy)]
pub struct DateRangePicker {
    min_date: NaiveDate,
}

impl DateRangePicker {
    pub fn new(min_date: NaiveDate) -> Self {
        Self { min_date }
    }

    /// Picker whose earliest selectable day is today.
    pub fn from_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Formats a pick. `end == None` is an unfinished one-click pick.
    pub fn pick(&self, start: NaiveDate, end: Option<NaiveDate>) -> Result<String, DateRangeError> {
        if start < self.min_date {
            return Err(DateRangeError::BeforeMinDate {
                date: start,
                min_date: self.min_date,
            });
        }

        match end {
            Some(end) if end < start => Err(DateRangeError::EndBeforeStart { start, end }),
            Some(end) => Ok(format!(
                "{}{}{}",
                start.format(DATE_FORMAT),
                RANGE_SEPARATOR,
                end.format(DATE_FORMAT)
            )),
            _ => Ok(start.format(DATE_FORMAT).to_string()),
        }
    }

    /// Parses and picks from user-typed dates.
    pub fn pick_str(&self, start: &str, end: Option<&str>) -> Result<String, DateRangeError> {
        let start = parse_date(start)?;
        let end = end.map(parse_date).transpose()?;
        self.pick(start, end)
    }
}

pub fn parse_date(text: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| DateRangeError::InvalidDate(text.to_string()))
}
