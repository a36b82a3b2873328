//! Schedule insights endpoint

use axum::{Json, Router, extract::State, routing::get};
use chrono::Local;

use timebox_core::{InsightsReport, compute_insights};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/insights", get(get_insights))
}

/// GET /api/insights - Conflicts, upcoming free time and category stats
async fn get_insights(State(state): State<AppState>) -> Result<Json<InsightsReport>, AppError> {
    let now = Local::now().naive_local();
    let report = compute_insights(state.store.as_ref(), now, &state.insights)?;
    Ok(Json(report))
}
