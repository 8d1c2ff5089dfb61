use axum::extract::State;
use axum::http::StatusCode;
use bson::doc;

use crate::state::AppState;

/// Handler for `GET /readyz`: pings the document store.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
