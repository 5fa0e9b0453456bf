//! Reports and chart data handlers.

use crate::{
    core::{
        breakdown::get_category_breakdown,
        period::DateFilter,
        report::{Reports, build_reports},
        trend::{TREND_MONTHS, monthly_trend},
    },
    errors::Result,
    web::{AppState, forms::ChartParams},
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::{Value, json};

/// `GET /reports` - six-month trend plus month and year totals.
pub async fn show(State(state): State<AppState>) -> Result<Json<Reports>> {
    Ok(Json(build_reports(&state.database, state.now()).await?))
}

/// `GET /api/chart-data?type=category|monthly`
///
/// Unknown chart types answer with an empty object.
pub async fn chart_data(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> Result<Json<Value>> {
    let now = state.now();
    let body = match params.chart.as_deref().unwrap_or("category") {
        "category" => {
            let breakdown =
                get_category_breakdown(&state.database, &DateFilter::Month.resolve(now)).await?;
            json!(breakdown)
        }
        "monthly" => {
            let trend = monthly_trend(&state.database, TREND_MONTHS, now).await?;
            Value::Array(
                trend
                    .into_iter()
                    .map(|point| {
                        json!({
                            "month": point.short_label,
                            "income": point.income,
                            "expenses": point.expenses,
                        })
                    })
                    .collect(),
            )
        }
        _ => json!({}),
    };
    Ok(Json(body))
}
