//! Budget page handlers.

use crate::{
    core::{
        budget::set_budget,
        report::{BudgetPage, build_budget_page},
    },
    errors::Result,
    web::{AppState, forms::BudgetForm},
};
use axum::{Form, Json, extract::State};
use chrono::Datelike;
use tracing::info;

/// `GET /budget` - budgets for the current month against actual spending.
pub async fn show(State(state): State<AppState>) -> Result<Json<BudgetPage>> {
    Ok(Json(build_budget_page(&state.database, state.now()).await?))
}

/// `POST /budget` - sets a category budget for the current month.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<BudgetForm>,
) -> Result<Json<BudgetPage>> {
    let (category, amount) = form.parse()?;
    let now = state.now();
    set_budget(&state.database, category, now.month(), now.year(), amount).await?;
    info!(%category, amount, "Budget updated");
    Ok(Json(build_budget_page(&state.database, now).await?))
}
