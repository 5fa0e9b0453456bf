//! Income, expense and balance totals.
//!
//! Sums are computed by the database (`SUM(amount)`); an empty match sums to
//! zero rather than failing.

use crate::{
    core::period::TimeBound,
    entities::{Transaction, TransactionKind, transaction},
    errors::Result,
};
use sea_orm::{QuerySelect, prelude::*};
use serde::Serialize;
use tracing::instrument;

/// Income, expense and balance over a time bound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistics {
    /// Sum of income amounts
    pub income: f64,
    /// Sum of expense amounts
    pub expenses: f64,
    /// `income - expenses`
    pub balance: f64,
}

impl Statistics {
    /// Builds the triple from two totals.
    #[must_use]
    pub fn from_totals(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    /// Totals an already loaded list of transactions.
    #[must_use]
    pub fn from_transactions(transactions: &[transaction::Model]) -> Self {
        let (income, expenses) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expenses), t| match t.kind {
                    TransactionKind::Income => (income + t.amount, expenses),
                    TransactionKind::Expense => (income, expenses + t.amount),
                });
        Self::from_totals(income, expenses)
    }
}

/// Sums `amount` over transactions of `kind` inside `bound`.
pub async fn sum_amount<C>(db: &C, bound: &TimeBound, kind: TransactionKind) -> Result<f64>
where
    C: ConnectionTrait,
{
    let total: Option<Option<f64>> = Transaction::find()
        .select_only()
        .column_as(transaction::Column::Amount.sum(), "total")
        .filter(bound.condition())
        .filter(transaction::Column::Kind.eq(kind))
        .into_tuple()
        .one(db)
        .await?;

    Ok(total.flatten().unwrap_or(0.0))
}

/// Computes income, expenses and balance inside `bound`.
#[instrument(skip(db))]
pub async fn calculate_statistics<C>(db: &C, bound: &TimeBound) -> Result<Statistics>
where
    C: ConnectionTrait,
{
    let income = sum_amount(db, bound, TransactionKind::Income).await?;
    let expenses = sum_amount(db, bound, TransactionKind::Expense).await?;
    Ok(Statistics::from_totals(income, expenses))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::period::DateFilter;
    use crate::entities::Category;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_empty_database_sums_to_zero() -> Result<()> {
        let db = setup_test_db().await?;

        let stats = calculate_statistics(&db, &TimeBound::unbounded()).await?;
        assert_eq!(stats, Statistics::default());
        assert_eq!(
            sum_amount(&db, &TimeBound::unbounded(), TransactionKind::Expense).await?,
            0.0
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_month_statistics_example() -> Result<()> {
        let db = setup_test_db().await?;
        let now = at(2024, 6, 20);
        insert_transaction(&db, TransactionKind::Income, 5000.0, Category::Salary, at(2024, 6, 1)).await?;
        insert_transaction(&db, TransactionKind::Expense, 850.0, Category::Food, at(2024, 6, 3)).await?;
        insert_transaction(&db, TransactionKind::Expense, 120.0, Category::Transport, at(2024, 6, 4)).await?;
        // Outside the month
        insert_transaction(&db, TransactionKind::Expense, 999.0, Category::Food, at(2024, 5, 31)).await?;

        let stats = calculate_statistics(&db, &DateFilter::Month.resolve(now)).await?;
        assert_eq!(stats.income, 5000.0);
        assert_eq!(stats.expenses, 970.0);
        assert_eq!(stats.balance, 4030.0);

        let all = calculate_statistics(&db, &DateFilter::All.resolve(now)).await?;
        assert_eq!(all.expenses, 1969.0);
        assert_eq!(all.income - all.expenses, all.balance);
        Ok(())
    }

    #[tokio::test]
    async fn test_upper_bound_is_exclusive() -> Result<()> {
        let db = setup_test_db().await?;
        insert_transaction(&db, TransactionKind::Income, 10.0, Category::Other, midnight(2024, 7, 1)).await?;

        let june = TimeBound::for_month(2024, 6)?;
        assert_eq!(sum_amount(&db, &june, TransactionKind::Income).await?, 0.0);
        let july = TimeBound::for_month(2024, 7)?;
        assert_eq!(sum_amount(&db, &july, TransactionKind::Income).await?, 10.0);
        Ok(())
    }

    #[test]
    fn test_from_transactions_partitions_by_kind() {
        let transactions = vec![
            model(1, TransactionKind::Income, 100.0, Category::Salary),
            model(2, TransactionKind::Expense, 30.0, Category::Food),
            model(3, TransactionKind::Expense, 20.5, Category::Food),
        ];
        let stats = Statistics::from_transactions(&transactions);
        assert_eq!(stats.income, 100.0);
        assert_eq!(stats.expenses, 50.5);
        assert_eq!(stats.balance, 49.5);
    }

    #[test]
    fn test_balance_may_be_negative() {
        let stats = Statistics::from_totals(100.0, 250.0);
        assert_eq!(stats.balance, -150.0);
    }
}
