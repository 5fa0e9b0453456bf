//! Transaction handlers - listing with filters, recording and deletion.

use crate::{
    core::{
        statistics::Statistics,
        transaction::{NewTransaction, create_transaction, delete_transaction, list_transactions},
    },
    entities::{Category, transaction},
    errors::Result,
    web::{
        AppState,
        forms::{ListParams, TransactionForm},
    },
};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::{Value, json};

/// Response of the transaction listing.
#[derive(Debug, Serialize)]
pub struct TransactionList {
    /// Matching transactions, newest first
    pub transactions: Vec<transaction::Model>,
    /// Income among the matches
    pub total_income: f64,
    /// Expenses among the matches
    pub total_expenses: f64,
    /// Echo of the applied date filter
    pub current_filter: String,
    /// Echo of the applied category, `all` when unconstrained
    pub current_category: String,
    /// Echo of the applied type, `all` when unconstrained
    pub current_type: String,
}

/// `GET /transactions?filter=&category=&type=`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<TransactionList>> {
    let query = params.to_query(state.now())?;
    let transactions = list_transactions(&state.database, &query).await?;
    let totals = Statistics::from_transactions(&transactions);

    Ok(Json(TransactionList {
        transactions,
        total_income: totals.income,
        total_expenses: totals.expenses,
        current_filter: params.date_filter()?.to_string(),
        current_category: query
            .category
            .map_or_else(|| "all".to_string(), |category| category.to_string()),
        current_type: query
            .kind
            .map_or_else(|| "all".to_string(), |kind| kind.to_string()),
    }))
}

/// `POST /transactions` - records a transaction from form fields.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<TransactionForm>,
) -> Result<(StatusCode, Json<transaction::Model>)> {
    let new = NewTransaction::try_from(form)?;
    let created = create_transaction(&state.database, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /transactions/:id` - 404 when the id is unknown.
pub async fn remove(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> Result<(StatusCode, Json<Value>)> {
    let deleted = delete_transaction(&state.database, transaction_id).await?;
    let status = if deleted {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(json!({ "deleted": deleted }))))
}

/// `GET /categories` - the fixed category list and the budgetable subset.
pub async fn categories() -> Json<Value> {
    Json(json!({
        "categories": Category::ALL,
        "budgetable": Category::budgetable().collect::<Vec<_>>(),
    }))
}
