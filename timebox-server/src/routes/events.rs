//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use timebox_core::store::{apply_actions, is_update_request};
use timebox_core::{Event, NewEvent, TimeboxError};

use crate::routes::{AppError, MessageResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event).delete(clear_events))
        .route("/api/events/import", post(import_events))
        .route("/api/events/{id}", delete(delete_event))
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Serialize)]
pub struct EventCreatedResponse {
    pub event: Event,
    pub message: String,
}

/// GET /api/events - List all stored events
async fn list_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, AppError> {
    let events = state.store.list_all()?;
    Ok(Json(EventsResponse { events }))
}

/// POST /api/events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<NewEvent>,
) -> Result<Json<EventCreatedResponse>, AppError> {
    let event = state.store.create(req)?;

    Ok(Json(EventCreatedResponse {
        event,
        message: "Event created successfully".to_string(),
    }))
}

/// DELETE /api/events/:id - Delete one event
async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.delete(&event_id)? {
        return Err(TimeboxError::EventNotFound(event_id).into());
    }
    Ok(Json(MessageResponse::new("Event deleted successfully")))
}

/// DELETE /api/events - Remove every event
async fn clear_events(State(state): State<AppState>) -> Result<Json<MessageResponse>, AppError> {
    state.store.clear()?;
    Ok(Json(MessageResponse::new("All events cleared")))
}

/// Request body for saving events extracted by the assistant
#[derive(Deserialize)]
pub struct ImportRequest {
    pub actions: Vec<NewEvent>,
    /// The user's chat message; update wording replaces same-titled events
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub events: Vec<Event>,
    pub replaced: usize,
    pub skipped: usize,
}

/// POST /api/events/import - Save a batch of extracted events
async fn import_events(
    State(state): State<AppState>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    let replace = req.message.as_deref().is_some_and(is_update_request);
    let outcome = apply_actions(state.store.as_ref(), req.actions, replace)?;

    tracing::info!(
        created = outcome.created.len(),
        replaced = outcome.replaced.len(),
        skipped = outcome.skipped,
        "imported events"
    );

    Ok(Json(ImportResponse {
        events: outcome.created,
        replaced: outcome.replaced.len(),
        skipped: outcome.skipped,
    }))
}
