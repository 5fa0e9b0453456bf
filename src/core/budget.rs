//! Budget business logic - Monthly per-category limits and their evaluation.
//!
//! Budgets are keyed by (category, month, year). Writes are a single atomic
//! `INSERT ... ON CONFLICT DO UPDATE`, so concurrent writers resolve to the
//! last one. Evaluation is a pure function of the configured budgets and a
//! category breakdown.

use crate::{
    core::{
        breakdown::{CategoryBreakdown, get_category_breakdown},
        period::TimeBound,
    },
    entities::{Budget, Category, budget},
    errors::{Error, Result},
};
use chrono::Local;
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::OnConflict};
use serde::Serialize;
use tracing::{info, instrument};

/// Share of the budget at which a category turns to [`BudgetStatus::Warning`].
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Share of the budget at which a category turns to [`BudgetStatus::Exceeded`].
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// Health of a category's budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Below 80% spent
    Safe,
    /// At least 80% but below 100% spent
    Warning,
    /// 100% or more spent
    Exceeded,
}

impl BudgetStatus {
    /// Classifies a raw percentage spent.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCEEDED_THRESHOLD {
            Self::Exceeded
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// Whether the dashboard should raise an alert.
    #[must_use]
    pub const fn is_alert(self) -> bool {
        matches!(self, Self::Warning | Self::Exceeded)
    }
}

/// Percentage of `budget` consumed by `spent`; zero when no budget is set.
#[must_use]
pub fn percentage_spent(spent: f64, budget: f64) -> f64 {
    if budget > 0.0 {
        spent / budget * 100.0
    } else {
        0.0
    }
}

/// Evaluation of one category against its budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetLine {
    /// Budgeted category
    pub category: Category,
    /// Configured limit, zero when none is set
    pub budget: f64,
    /// Amount spent in the period
    pub spent: f64,
    /// `budget - spent`, negative when overspent
    pub remaining: f64,
    /// Raw percentage spent, may exceed 100
    pub percentage: f64,
    /// Status derived from the raw percentage
    pub status: BudgetStatus,
}

impl BudgetLine {
    /// Evaluates `spent` against `budget`.
    #[must_use]
    pub fn new(category: Category, budget: f64, spent: f64) -> Self {
        let percentage = percentage_spent(spent, budget);
        Self {
            category,
            budget,
            spent,
            remaining: budget - spent,
            percentage,
            status: BudgetStatus::from_percentage(percentage),
        }
    }

    /// Percentage capped at 100 for progress displays.
    #[must_use]
    pub fn display_percentage(&self) -> f64 {
        self.percentage.min(EXCEEDED_THRESHOLD)
    }
}

/// Evaluates every budgetable category, in category order.
///
/// Categories with no configured budget get a zero budget and are always
/// [`BudgetStatus::Safe`].
#[must_use]
pub fn evaluate_budgets(budgets: &[budget::Model], breakdown: &CategoryBreakdown) -> Vec<BudgetLine> {
    Category::budgetable()
        .map(|category| {
            let amount = budgets
                .iter()
                .find(|b| b.category == category)
                .map_or(0.0, |b| b.amount);
            BudgetLine::new(category, amount, breakdown.spent(category))
        })
        .collect()
}

/// Keeps only lines in warning or exceeded state.
#[must_use]
pub fn budget_alerts(lines: &[BudgetLine]) -> Vec<BudgetLine> {
    lines
        .iter()
        .filter(|line| line.status.is_alert())
        .copied()
        .collect()
}

fn period_key(month: u32, year: i32) -> Result<i32> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidPeriod { month, year });
    }
    i32::try_from(month).map_err(|_| Error::InvalidPeriod { month, year })
}

/// Sets the budget for `category` in `month`/`year`, replacing any existing
/// amount for that key.
///
/// # Errors
/// Rejects income-only categories, negative or non-finite amounts and months
/// outside 1-12.
#[instrument(skip(db))]
pub async fn set_budget<C>(
    db: &C,
    category: Category,
    month: u32,
    year: i32,
    amount: f64,
) -> Result<()>
where
    C: ConnectionTrait,
{
    if !category.is_budgetable() {
        return Err(Error::NotBudgetable { category });
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    let month_key = period_key(month, year)?;

    let model = budget::ActiveModel {
        category: Set(category),
        amount: Set(amount),
        month: Set(month_key),
        year: Set(year),
        updated_at: Set(Local::now().naive_local()),
        ..Default::default()
    };

    Budget::insert(model)
        .on_conflict(
            OnConflict::columns([
                budget::Column::Category,
                budget::Column::Month,
                budget::Column::Year,
            ])
            .update_columns([budget::Column::Amount, budget::Column::UpdatedAt])
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    info!("Budget set");
    Ok(())
}

/// Lists the budgets configured for `month`/`year`.
pub async fn list_budgets<C>(db: &C, month: u32, year: i32) -> Result<Vec<budget::Model>>
where
    C: ConnectionTrait,
{
    let month_key = period_key(month, year)?;
    Budget::find()
        .filter(budget::Column::Month.eq(month_key))
        .filter(budget::Column::Year.eq(year))
        .order_by_asc(budget::Column::Category)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads budgets and spending for `month`/`year` and evaluates them.
#[instrument(skip(db))]
pub async fn budget_report<C>(db: &C, month: u32, year: i32) -> Result<Vec<BudgetLine>>
where
    C: ConnectionTrait,
{
    let bound = TimeBound::for_month(year, month)?;
    let budgets = list_budgets(db, month, year).await?;
    let breakdown = get_category_breakdown(db, &bound).await?;
    Ok(evaluate_budgets(&budgets, &breakdown))
}
