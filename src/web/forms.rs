//! Request payloads and their conversion into typed core inputs.
//!
//! Fields arrive as optional strings so that missing or malformed values are
//! reported through [`Error::Validation`] instead of a generic extractor
//! rejection.

use crate::{
    core::{
        period::{DateFilter, start_of_day},
        transaction::{NewTransaction, TransactionQuery},
    },
    entities::{Category, TransactionKind},
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Form submitted to record a transaction.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// `income` or `expense`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Decimal amount
    pub amount: Option<String>,
    /// Category name
    pub category: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::validation(field, "is required")),
    }
}

/// Parses a positive, finite decimal amount.
pub fn parse_amount(raw: Option<&str>) -> Result<f64> {
    let raw = required(raw, "amount")?;
    let amount: f64 = raw
        .parse()
        .map_err(|_| Error::validation("amount", format!("'{raw}' is not a number")))?;
    if !amount.is_finite() {
        return Err(Error::validation("amount", format!("'{raw}' is not a number")));
    }
    Ok(amount)
}

/// Parses a `YYYY-MM-DD` date to midnight of that day.
pub fn parse_date(raw: Option<&str>) -> Result<NaiveDateTime> {
    let raw = required(raw, "date")?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(start_of_day)
        .map_err(|e| Error::validation("date", format!("'{raw}' is not a YYYY-MM-DD date: {e}")))
}

impl TryFrom<TransactionForm> for NewTransaction {
    type Error = Error;

    fn try_from(form: TransactionForm) -> Result<Self> {
        let kind: TransactionKind = required(form.kind.as_deref(), "type")?.parse()?;
        let amount = parse_amount(form.amount.as_deref())?;
        if amount <= 0.0 {
            return Err(Error::validation("amount", "must be greater than zero"));
        }
        let category: Category = required(form.category.as_deref(), "category")?.parse()?;
        let occurred_at = parse_date(form.date.as_deref())?;

        Ok(Self {
            kind,
            amount,
            category,
            description: form.description.unwrap_or_default(),
            occurred_at,
        })
    }
}

/// Form submitted to set a budget for the current month.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetForm {
    /// Category name
    pub category: Option<String>,
    /// Decimal amount, zero allowed
    pub amount: Option<String>,
}

impl BudgetForm {
    /// Parses the form into a category and amount.
    pub fn parse(&self) -> Result<(Category, f64)> {
        let category: Category = required(self.category.as_deref(), "category")?.parse()?;
        let amount = parse_amount(self.amount.as_deref())?;
        if amount < 0.0 {
            return Err(Error::validation("amount", "cannot be negative"));
        }
        Ok((category, amount))
    }
}

/// Query string of the transaction listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Date filter name, `all` when absent
    pub filter: Option<String>,
    /// Category name or `all`
    pub category: Option<String>,
    /// `income`, `expense` or `all`
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Treats an absent value or `all` as "no constraint".
fn optional_constraint(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

impl ListParams {
    /// The date filter, defaulting to [`DateFilter::All`].
    pub fn date_filter(&self) -> Result<DateFilter> {
        self.filter
            .as_deref()
            .map_or(Ok(DateFilter::All), str::parse::<DateFilter>)
    }

    /// Builds the storage query relative to `now`.
    pub fn to_query(&self, now: NaiveDateTime) -> Result<TransactionQuery> {
        Ok(TransactionQuery {
            bound: self.date_filter()?.resolve(now),
            kind: optional_constraint(self.kind.as_deref())
                .map(str::parse::<TransactionKind>)
                .transpose()?,
            category: optional_constraint(self.category.as_deref())
                .map(str::parse::<Category>)
                .transpose()?,
        })
    }
}

/// Query string of the chart data endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// `category` (default) or `monthly`
    #[serde(rename = "type")]
    pub chart: Option<String>,
}
