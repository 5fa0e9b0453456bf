//! Dashboard handler.

use crate::{
    core::report::{Dashboard, build_dashboard},
    errors::Result,
    web::AppState,
};
use axum::{Json, extract::State};

/// `GET /` - summary statistics, recent activity and budget alerts.
pub async fn index(State(state): State<AppState>) -> Result<Json<Dashboard>> {
    let dashboard = build_dashboard(&state.database, state.now(), state.recent_limit).await?;
    Ok(Json(dashboard))
}
