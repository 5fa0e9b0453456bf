//! Expense totals grouped by category.

use crate::{
    core::period::TimeBound,
    entities::{Category, Transaction, TransactionKind, transaction},
    errors::Result,
};
use sea_orm::{QueryOrder, QuerySelect, prelude::*};
use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::{debug, instrument};

/// Expense totals per category, largest first.
///
/// Categories without expenses in the range are absent, not zero.
/// Serializes as a JSON object whose keys keep this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    entries: Vec<(Category, f64)>,
}

impl CategoryBreakdown {
    /// Builds a breakdown from `(category, total)` pairs, sorting them by
    /// descending total.
    #[must_use]
    pub fn from_totals(mut entries: Vec<(Category, f64)>) -> Self {
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self { entries }
    }

    /// Total spent in `category`, if any.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    /// Total spent in `category`, zero when absent.
    #[must_use]
    pub fn spent(&self, category: Category) -> f64 {
        self.get(category).unwrap_or(0.0)
    }

    /// Sum over all categories.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }

    /// Entries in descending order of total.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of categories with spending.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was spent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, total) in &self.entries {
            map.serialize_entry(category.as_str(), total)?;
        }
        map.end()
    }
}

/// Groups expenses inside `bound` by category and sums them.
///
/// Ordered by total descending; ties fall back to category name.
#[instrument(skip(db))]
pub async fn get_category_breakdown<C>(db: &C, bound: &TimeBound) -> Result<CategoryBreakdown>
where
    C: ConnectionTrait,
{
    let entries: Vec<(Category, f64)> = Transaction::find()
        .select_only()
        .column(transaction::Column::Category)
        .column_as(transaction::Column::Amount.sum(), "total")
        .filter(bound.condition())
        .filter(transaction::Column::Kind.eq(TransactionKind::Expense))
        .group_by(transaction::Column::Category)
        .order_by_desc(transaction::Column::Amount.sum())
        .order_by_asc(transaction::Column::Category)
        .into_tuple()
        .all(db)
        .await?;

    debug!(categories = entries.len(), "Computed category breakdown");
    Ok(CategoryBreakdown { entries })
}
