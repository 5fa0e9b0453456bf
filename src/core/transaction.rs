//! Transaction business logic - Recording, listing and deleting transactions.
//!
//! Transactions are immutable: they are created, listed and deleted, never
//! updated. Listing supports the same date filters as the reports plus
//! optional kind and category constraints.

use crate::{
    core::period::TimeBound,
    entities::{Category, Transaction, TransactionKind, transaction},
    errors::{Error, Result},
};
use chrono::{Local, NaiveDateTime};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{debug, info, instrument, warn};

/// Input for a new transaction, already parsed into typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Income or expense
    pub kind: TransactionKind,
    /// Strictly positive amount
    pub amount: f64,
    /// Category from the fixed set
    pub category: Category,
    /// Free-text description
    pub description: String,
    /// When the transaction happened
    pub occurred_at: NaiveDateTime,
}

/// Constraints for [`list_transactions`]; `None` means unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Date range on `occurred_at`
    pub bound: TimeBound,
    /// Only this kind
    pub kind: Option<TransactionKind>,
    /// Only this category
    pub category: Option<Category>,
}

/// Records a new transaction.
///
/// The amount must be strictly positive and finite; the kind carries the sign.
/// `recorded_at` is set to the current local time.
#[instrument(skip(db))]
pub async fn create_transaction<C>(db: &C, new: NewTransaction) -> Result<transaction::Model>
where
    C: ConnectionTrait,
{
    if !new.amount.is_finite() || new.amount <= 0.0 {
        return Err(Error::InvalidAmount { amount: new.amount });
    }

    let model = transaction::ActiveModel {
        kind: Set(new.kind),
        amount: Set(new.amount),
        category: Set(new.category),
        description: Set(new.description.trim().to_string()),
        occurred_at: Set(new.occurred_at),
        recorded_at: Set(Local::now().naive_local()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(id = created.id, kind = %created.kind, category = %created.category, "Recorded transaction");
    Ok(created)
}

/// Lists transactions matching `query`, newest first.
pub async fn list_transactions(
    db: &DatabaseConnection,
    query: &TransactionQuery,
) -> Result<Vec<transaction::Model>> {
    let mut select = Transaction::find().filter(query.bound.condition());
    if let Some(kind) = query.kind {
        select = select.filter(transaction::Column::Kind.eq(kind));
    }
    if let Some(category) = query.category {
        select = select.filter(transaction::Column::Category.eq(category));
    }

    select
        .order_by_desc(transaction::Column::OccurredAt)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns the `limit` most recent transactions by date.
pub async fn recent_transactions(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .order_by_desc(transaction::Column::OccurredAt)
        .order_by_desc(transaction::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific transaction by its unique ID.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<transaction::Model>> {
    Transaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes a transaction.
///
/// Returns `Ok(false)` when no transaction has that id; callers report it to
/// the user but it is not an error.
#[instrument(skip(db))]
pub async fn delete_transaction(db: &DatabaseConnection, transaction_id: i64) -> Result<bool> {
    let result = Transaction::delete_by_id(transaction_id).exec(db).await?;
    if result.rows_affected == 0 {
        warn!("No transaction to delete");
        return Ok(false);
    }
    debug!("Transaction deleted");
    Ok(true)
}
