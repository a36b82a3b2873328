//! Calendar file export

use axum::{
    Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};

use timebox_core::ics::generate_calendar_ics;

use crate::routes::AppError;
use crate::state::AppState;

const EXPORT_FILENAME: &str = "timebox_calendar.ics";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/export/ics", get(export_calendar))
}

/// GET /api/export/ics - Download all events as an .ics file
async fn export_calendar(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = state.store.list_all()?;
    let ics = generate_calendar_ics(&events)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={EXPORT_FILENAME}"),
            ),
        ],
        ics,
    ))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{get, send, test_app};
    use axum::http::StatusCode;
    use timebox_core::NewEvent;

    #[tokio::test]
    async fn test_export_contains_events() -> Result<(), String> {
        let (app, state) = test_app();
        state
            .store
            .create(NewEvent::new("Dentist", "2025-10-30T10:00:00", "2025-10-30T11:00:00", "health"))
            .map_err(|e| e.to_string())?;

        let (status, body) = send(&app, get("/api/export/ics")?).await?;
        let ics = String::from_utf8(body).map_err(|e| e.to_string())?;

        assert_eq!(status, StatusCode::OK);
        assert!(ics.contains("SUMMARY:Dentist"), "ICS:\n{}", ics);
        assert!(ics.contains("DTSTART:20251030T100000"), "ICS:\n{}", ics);
        assert!(ics.contains("DESCRIPTION:Category: health"), "ICS:\n{}", ics);
        Ok(())
    }
}
