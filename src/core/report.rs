//! Page-level report composition.
//!
//! Each function gathers everything one screen needs (dashboard, budget page,
//! reports page) into a plain serializable struct. Nothing here formats
//! currency; that is left to whatever renders the data.

use crate::{
    core::{
        breakdown::{CategoryBreakdown, get_category_breakdown},
        budget::{BudgetLine, BudgetStatus, budget_alerts, budget_report},
        period::DateFilter,
        statistics::{Statistics, calculate_statistics},
        transaction::recent_transactions,
        trend::{TREND_MONTHS, TrendPoint, monthly_trend},
    },
    entities::{Category, transaction},
    errors::Result,
};
use chrono::{Datelike, NaiveDateTime};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::instrument;

/// Everything shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Totals over all time
    pub stats: Statistics,
    /// Totals since the first of the month
    pub month_stats: Statistics,
    /// Most recent transactions
    pub recent_transactions: Vec<transaction::Model>,
    /// This month's spending by category
    pub category_data: CategoryBreakdown,
    /// Budgets in warning or exceeded state this month
    pub budget_alerts: Vec<BudgetLine>,
}

/// Builds the dashboard as of `now`.
#[instrument(skip(db))]
pub async fn build_dashboard(
    db: &DatabaseConnection,
    now: NaiveDateTime,
    recent_limit: u64,
) -> Result<Dashboard> {
    let stats = calculate_statistics(db, &DateFilter::All.resolve(now)).await?;
    let month_bound = DateFilter::Month.resolve(now);
    let month_stats = calculate_statistics(db, &month_bound).await?;
    let recent_transactions = recent_transactions(db, recent_limit).await?;
    let category_data = get_category_breakdown(db, &month_bound).await?;

    // Budgets cover the whole calendar month, unlike the open-ended month filter
    let budget_alerts = budget_alerts(&budget_report(db, now.month(), now.year()).await?);

    Ok(Dashboard {
        stats,
        month_stats,
        recent_transactions,
        category_data,
        budget_alerts,
    })
}

/// One row of the budget page, with the percentage capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetRow {
    /// Budgeted category
    pub category: Category,
    /// Configured limit
    pub budget: f64,
    /// Spent this month
    pub spent: f64,
    /// Left to spend, negative when overspent
    pub remaining: f64,
    /// Percentage spent, at most 100
    pub percentage: f64,
    /// Status from the uncapped percentage
    pub status: BudgetStatus,
}

impl From<BudgetLine> for BudgetRow {
    fn from(line: BudgetLine) -> Self {
        Self {
            category: line.category,
            budget: line.budget,
            spent: line.spent,
            remaining: line.remaining,
            percentage: line.display_percentage(),
            status: line.status,
        }
    }
}

/// Data for the budget page.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPage {
    /// e.g. `June 2024`
    pub current_month_name: String,
    /// One row per budgetable category
    pub budget_data: Vec<BudgetRow>,
    /// Categories a budget may be set for
    pub categories: Vec<Category>,
}

/// Builds the budget page for the month containing `now`.
pub async fn build_budget_page(db: &DatabaseConnection, now: NaiveDateTime) -> Result<BudgetPage> {
    let lines = budget_report(db, now.month(), now.year()).await?;
    Ok(BudgetPage {
        current_month_name: now.format("%B %Y").to_string(),
        budget_data: lines.into_iter().map(BudgetRow::from).collect(),
        categories: Category::budgetable().collect(),
    })
}

/// Data for the reports page.
#[derive(Debug, Clone, Serialize)]
pub struct Reports {
    /// Income and expenses for the last six months, oldest first
    pub monthly_data: Vec<TrendPoint>,
    /// Totals since the first of the month
    pub month_stats: Statistics,
    /// Totals since January 1st
    pub year_stats: Statistics,
    /// This month's spending by category
    pub category_data: CategoryBreakdown,
}

/// Builds the reports page as of `now`.
#[instrument(skip(db))]
pub async fn build_reports(db: &DatabaseConnection, now: NaiveDateTime) -> Result<Reports> {
    let month_bound = DateFilter::Month.resolve(now);
    Ok(Reports {
        monthly_data: monthly_trend(db, TREND_MONTHS, now).await?,
        month_stats: calculate_statistics(db, &month_bound).await?,
        year_stats: calculate_statistics(db, &DateFilter::Year.resolve(now)).await?,
        category_data: get_category_breakdown(db, &month_bound).await?,
    })
}
