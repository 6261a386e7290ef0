use chrono::{Datelike, Duration, NaiveDate};

use super::transaction::Frequency;

/// Inclusive calendar interval used as the unit of recurrence membership.
/// Weeks are Monday-anchored; months and years follow the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Frequency {
    /// The period containing `date`.
    pub fn period_of(self, date: NaiveDate) -> Period {
        match self {
            Frequency::Weekly => {
                let start =
                    date - Duration::days(date.weekday().num_days_from_monday() as i64);
                Period {
                    start,
                    end: start + Duration::days(6),
                }
            }
            Frequency::Monthly => {
                let last = days_in_month(date.year(), date.month());
                Period {
                    start: date.with_day(1).unwrap(),
                    end: date.with_day(last).unwrap(),
                }
            }
            Frequency::Yearly => Period {
                start: NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap(),
            },
        }
    }

    /// The period immediately following `period`.
    pub fn next_period(self, period: Period) -> Period {
        self.period_of(period.end + Duration::days(1))
    }

    /// Projects a master's anchor date into `period`, clamping days the target
    /// period does not have: day 31 becomes February 28/29 or April 30, and
    /// February 29 falls back to the 28th in non-leap years.
    pub fn project_into(self, anchor: NaiveDate, period: Period) -> NaiveDate {
        match self {
            Frequency::Weekly => {
                period.start + Duration::days(anchor.weekday().num_days_from_monday() as i64)
            }
            Frequency::Monthly => {
                let year = period.start.year();
                let month = period.start.month();
                let day = anchor.day().min(days_in_month(year, month));
                NaiveDate::from_ymd_opt(year, month, day).unwrap_or(period.start)
            }
            Frequency::Yearly => {
                let year = period.start.year();
                let month = anchor.month();
                let day = anchor.day().min(days_in_month(year, month));
                NaiveDate::from_ymd_opt(year, month, day).unwrap_or(period.start)
            }
        }
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
