//! Date-range resolution for reports and listings.
//!
//! Named filters (`all`, `today`, `week`, `month`, `year`) resolve to a
//! half-open [`TimeBound`] relative to an injected "now". Times are naive
//! local times, matching how transaction dates are stored.

use crate::{
    entities::transaction,
    errors::{Error, Result},
};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{ColumnTrait, Condition};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Named date filter accepted by the listing and report endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    /// No date constraint
    #[default]
    All,
    /// From midnight today
    Today,
    /// The last seven days, rolling
    Week,
    /// From the first of the current month
    Month,
    /// From January 1st of the current year
    Year,
}

impl DateFilter {
    /// Returns the filter name used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Resolves the filter to a time bound relative to `now`.
    #[must_use]
    pub fn resolve(self, now: NaiveDateTime) -> TimeBound {
        let today = now.date();
        let start = match self {
            Self::All => return TimeBound::unbounded(),
            Self::Today => start_of_day(today),
            Self::Week => now - Duration::days(7),
            Self::Month => start_of_day(first_of_month(today)),
            Self::Year => start_of_day(today - Duration::days(i64::from(today.ordinal0()))),
        };
        TimeBound::since(start)
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(Error::UnknownFilter {
                name: s.to_string(),
            }),
        }
    }
}

/// A half-open interval `[start, end)`; a missing side is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeBound {
    /// Inclusive lower bound
    pub start: Option<NaiveDateTime>,
    /// Exclusive upper bound
    pub end: Option<NaiveDateTime>,
}

impl TimeBound {
    /// A bound that matches every instant.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Everything from `start` onwards.
    #[must_use]
    pub const fn since(start: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Everything in `[start, end)`.
    #[must_use]
    pub const fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The whole calendar month `month` of `year`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPeriod`] for a month outside 1-12.
    pub fn for_month(year: i32, month: u32) -> Result<Self> {
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidPeriod { month, year })?;
        Ok(Self::between(
            start_of_day(first),
            start_of_day(next_month(first)),
        ))
    }

    /// Whether `instant` falls inside the bound.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| instant >= start) && self.end.is_none_or(|end| instant < end)
    }

    /// Storage filter on `transactions.occurred_at`.
    #[must_use]
    pub fn condition(&self) -> Condition {
        Condition::all()
            .add_option(
                self.start
                    .map(|start| transaction::Column::OccurredAt.gte(start)),
            )
            .add_option(self.end.map(|end| transaction::Column::OccurredAt.lt(end)))
    }
}

/// Midnight at the start of `date`.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The first day of `date`'s month.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// The first day of the month after `first`. `first` must be a month start.
#[must_use]
pub fn next_month(first: NaiveDate) -> NaiveDate {
    first_of_month(first + Duration::days(32))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_all_is_unbounded() {
        let bound = DateFilter::All.resolve(at(2024, 6, 15, 13, 45));
        assert_eq!(bound, TimeBound::unbounded());
        assert!(bound.contains(at(1999, 1, 1, 0, 0)));
    }

    #[test]
    fn test_today_starts_at_midnight() {
        let bound = DateFilter::Today.resolve(at(2024, 6, 15, 13, 45));
        assert_eq!(bound.start, Some(at(2024, 6, 15, 0, 0)));
        assert_eq!(bound.end, None);
    }

    #[test]
    fn test_week_is_rolling_seven_days() {
        let bound = DateFilter::Week.resolve(at(2024, 6, 15, 13, 45));
        assert_eq!(bound.start, Some(at(2024, 6, 8, 13, 45)));
    }

    #[test]
    fn test_month_starts_on_the_first() {
        let bound = DateFilter::Month.resolve(at(2024, 6, 15, 13, 45));
        assert_eq!(bound.start, Some(at(2024, 6, 1, 0, 0)));
    }

    #[test]
    fn test_year_starts_on_january_first() {
        let bound = DateFilter::Year.resolve(at(2024, 12, 31, 23, 59));
        assert_eq!(bound.start, Some(at(2024, 1, 1, 0, 0)));
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!("month".parse::<DateFilter>().unwrap(), DateFilter::Month);
        assert_eq!("TODAY".parse::<DateFilter>().unwrap(), DateFilter::Today);
        assert!(matches!(
            "fortnight".parse::<DateFilter>(),
            Err(Error::UnknownFilter { name }) if name == "fortnight"
        ));
    }

    #[test]
    fn test_for_month_is_half_open() {
        let bound = TimeBound::for_month(2024, 2).unwrap();
        assert_eq!(bound.start, Some(at(2024, 2, 1, 0, 0)));
        assert_eq!(bound.end, Some(at(2024, 3, 1, 0, 0)));
        assert!(bound.contains(at(2024, 2, 29, 23, 59)));
        assert!(!bound.contains(at(2024, 3, 1, 0, 0)));
    }

    #[test]
    fn test_for_month_december_rolls_into_next_year() {
        let bound = TimeBound::for_month(2023, 12).unwrap();
        assert_eq!(bound.end, Some(at(2024, 1, 1, 0, 0)));
    }

    #[test]
    fn test_for_month_rejects_month_thirteen() {
        assert!(matches!(
            TimeBound::for_month(2024, 13),
            Err(Error::InvalidPeriod {
                month: 13,
                year: 2024
            })
        ));
    }
}
