//! Calendar windows for aggregate queries.
//!
//! This is the single source of truth for converting calendar coordinates
//! (a year, a year/month pair, "now") into the inclusive instant ranges the
//! repository queries are bounded by.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ALL_TIME_EPOCH_YEAR;
use crate::errors::{Error, Result};

/// Inclusive `[start, end]` instant range bounding an aggregate query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    /// Builds a period from explicit bounds.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_input(
                "period start must not be after period end",
            ));
        }
        Ok(Period { start, end })
    }

    /// Calendar month window: day 1 00:00:00 through the last day 23:59:59.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_input(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::invalid_input(format!("year {year} is out of range")))?;
        let next_month_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| Error::invalid_input(format!("year {year} is out of range")))?;
        // next_month_first is at least Feb 1 of some year, so pred_opt cannot fail
        let last_day = next_month_first.pred_opt().unwrap();

        Ok(Period {
            start: first_day.and_time(day_start()),
            end: last_day.and_time(day_end()),
        })
    }

    /// Calendar year window: Jan 1 00:00:00 through Dec 31 23:59:59.
    pub fn year(year: i32) -> Result<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| Error::invalid_input(format!("year {year} is out of range")))?;
        let last_day = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| Error::invalid_input(format!("year {year} is out of range")))?;
        Ok(Period {
            start: first_day.and_time(day_start()),
            end: last_day.and_time(day_end()),
        })
    }

    /// Calendar month containing the given instant.
    pub fn month_of(instant: NaiveDateTime) -> Self {
        // the instant's own month/year are always representable
        Self::month(instant.year(), instant.month()).unwrap()
    }

    /// Calendar month containing the current UTC instant.
    pub fn current_month() -> Self {
        Self::month_of(now_utc())
    }

    /// Window from the epoch floor through the given instant.
    ///
    /// No record predates the epoch floor, so this window is equivalent to
    /// "everything up to `end`".
    pub fn all_time_until(end: NaiveDateTime) -> Self {
        // the epoch floor is a fixed valid date
        let floor = NaiveDate::from_ymd_opt(ALL_TIME_EPOCH_YEAR, 1, 1)
            .unwrap()
            .and_time(day_start());
        Period { start: floor, end }
    }

    /// English name of the month this period starts in.
    pub fn month_name(&self) -> String {
        self.start.format("%B").to_string()
    }
}

/// The current UTC instant, as used for "current month" and "all time"
/// windows.
pub fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).unwrap()
}

fn day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap()
}
