//! Monthly income/expense trend for the reports page and charts.
//!
//! Months are located by stepping back `30 * i` days from now and taking the
//! first of whatever month that lands in. Around month ends two steps can land
//! in the same month; that behaviour is kept so existing charts line up.

use crate::{
    core::{
        period::{TimeBound, first_of_month, next_month, start_of_day},
        statistics::sum_amount,
    },
    entities::TransactionKind,
    errors::Result,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::instrument;

/// Number of months shown on reports.
pub const TREND_MONTHS: u32 = 6;

/// One month's window in the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    /// First day of the month
    pub month_start: NaiveDate,
    /// Range summed for this month
    pub bound: TimeBound,
}

/// Totals for one month of the trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// First day of the month
    pub month_start: NaiveDate,
    /// Long label, e.g. `June 2024`
    pub label: String,
    /// Short label, e.g. `Jun 2024`
    pub short_label: String,
    /// Income summed over the window
    pub income: f64,
    /// Expenses summed over the window
    pub expenses: f64,
}

/// Computes `months` windows ending at `now`, oldest first.
///
/// The newest window runs from the first of the current month up to `now`;
/// every other window covers a whole calendar month.
#[must_use]
pub fn trend_windows(months: u32, now: NaiveDateTime) -> Vec<MonthWindow> {
    let mut windows: Vec<MonthWindow> = (0..months)
        .map(|i| {
            let date = now - Duration::days(30 * i64::from(i));
            let month_start = first_of_month(date.date());
            let end = if i == 0 {
                now
            } else {
                start_of_day(next_month(month_start))
            };
            MonthWindow {
                month_start,
                bound: TimeBound::between(start_of_day(month_start), end),
            }
        })
        .collect();

    windows.reverse();
    windows
}

/// Sums income and expenses for each of the last `months` months.
#[instrument(skip(db))]
pub async fn monthly_trend<C>(db: &C, months: u32, now: NaiveDateTime) -> Result<Vec<TrendPoint>>
where
    C: ConnectionTrait,
{
    let mut points = Vec::new();
    for window in trend_windows(months, now) {
        let income = sum_amount(db, &window.bound, TransactionKind::Income).await?;
        let expenses = sum_amount(db, &window.bound, TransactionKind::Expense).await?;
        points.push(TrendPoint {
            month_start: window.month_start,
            label: window.month_start.format("%B %Y").to_string(),
            short_label: window.month_start.format("%b %Y").to_string(),
            income,
            expenses,
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Category;
    use crate::test_utils::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_six_windows_oldest_first() {
        let now = at(2024, 6, 15);
        let windows = trend_windows(TREND_MONTHS, now);

        assert_eq!(windows.len(), 6);
        let starts: Vec<NaiveDate> = windows.iter().map(|w| w.month_start).collect();
        assert_eq!(
            starts,
            vec![
                date(2024, 1, 1),
                date(2024, 2, 1),
                date(2024, 3, 1),
                date(2024, 4, 1),
                date(2024, 5, 1),
                date(2024, 6, 1),
            ]
        );

        // Newest window ends now, older ones at the next month boundary
        assert_eq!(windows[5].bound.end, Some(now));
        assert_eq!(windows[4].bound.end, Some(midnight(2024, 6, 1)));
        assert_eq!(windows[0].bound.start, Some(midnight(2024, 1, 1)));
        assert_eq!(windows[0].bound.end, Some(midnight(2024, 2, 1)));
    }

    #[test]
    fn test_thirty_day_steps_can_repeat_a_month() {
        // 30 days before Oct 31 is still October
        let windows = trend_windows(TREND_MONTHS, at(2024, 10, 31));
        assert_eq!(windows[5].month_start, date(2024, 10, 1));
        assert_eq!(windows[4].month_start, date(2024, 10, 1));
        assert_eq!(windows[4].bound.end, Some(midnight(2024, 11, 1)));
    }

    #[test]
    fn test_windows_cross_year_boundary() {
        let windows = trend_windows(3, at(2024, 1, 20));
        assert_eq!(windows[0].month_start, date(2023, 11, 1));
        assert_eq!(windows[1].bound.end, Some(midnight(2024, 1, 1)));
    }

    #[tokio::test]
    async fn test_monthly_trend_sums_each_window() -> Result<()> {
        let db = setup_test_db().await?;
        let now = at(2024, 6, 15);
        insert_transaction(&db, TransactionKind::Income, 5000.0, Category::Salary, at(2024, 5, 16)).await?;
        insert_transaction(&db, TransactionKind::Expense, 900.0, Category::Food, at(2024, 5, 11)).await?;
        insert_transaction(&db, TransactionKind::Expense, 850.0, Category::Food, at(2024, 6, 13)).await?;
        // After "now": excluded from the partial current month
        insert_transaction(&db, TransactionKind::Expense, 40.0, Category::Food, at(2024, 6, 20)).await?;

        let trend = monthly_trend(&db, TREND_MONTHS, now).await?;
        assert_eq!(trend.len(), 6);

        assert_eq!(trend[4].label, "May 2024");
        assert_eq!(trend[4].income, 5000.0);
        assert_eq!(trend[4].expenses, 900.0);

        assert_eq!(trend[5].short_label, "Jun 2024");
        assert_eq!(trend[5].income, 0.0);
        assert_eq!(trend[5].expenses, 850.0);

        assert!(trend[..4].iter().all(|p| p.income == 0.0 && p.expenses == 0.0));
        Ok(())
    }
}
