use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ClubError;

/// Half-open UTC window `[start, end)` used by every aggregation query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ClubError> {
        if end < start {
            return Err(ClubError::Validation(
                "window end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }

    /// `[first of this month, now)`.
    pub fn month_to_date(now: DateTime<Utc>) -> Self {
        Self {
            start: month_start(now),
            end: now,
        }
    }

    /// The full calendar month before the one containing `now`.
    pub fn prior_month(now: DateTime<Utc>) -> Self {
        let this_month = month_start(now);
        Self {
            start: shift_month_start(this_month, -1),
            end: this_month,
        }
    }

    /// The full calendar month matching `now`'s month, one year earlier.
    pub fn same_month_last_year(now: DateTime<Utc>) -> Self {
        let this_month = month_start(now);
        Self {
            start: shift_month_start(this_month, -12),
            end: shift_month_start(this_month, -11),
        }
    }

    /// `[January 1st, now)`.
    pub fn year_to_date(now: DateTime<Utc>) -> Self {
        let january = NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap();
        Self {
            start: midnight(january),
            end: now,
        }
    }
}

/// Midnight UTC on the first day of the month containing `now`.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    midnight(now.date_naive().with_day(1).unwrap())
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

fn shift_month_start(start: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    midnight(shift_months(start.date_naive(), months))
}

/// Moves a date by whole calendar months, clamping the day to the target
/// month's length (Jan 31 - 1 month = Dec 31; Mar 31 - 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}
