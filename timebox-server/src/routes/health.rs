//! Liveness endpoints

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "TimeBox API is running",
        status: "ok",
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{get, send_json, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health() -> Result<(), String> {
        let (app, _) = test_app();

        let (status, json) = send_json(&app, get("/health")?).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");

        let (status, json) = send_json(&app, get("/")?).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        Ok(())
    }
}
