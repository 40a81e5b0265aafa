use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

#[derive(Deserialize)]
struct JoinPayload {
    // Option so a missing field reaches the validator instead of being
    // rejected by the extractor.
    email: Option<String>,
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

#[derive(Serialize)]
struct JoinedResponse {
    success: bool,
    message: &'static str,
    id: Uuid,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", get(count).post(join))
}

// The failure body here differs from the join one (the page still wants a
// count to render), so the handler shapes its own 500 instead of going
// through the AppError conversion.
async fn count(State(app_state): State<AppState>) -> Response {
    match app_state.waitlist_use_cases.count().await {
        Ok(count) => (StatusCode::OK, Json(CountResponse { count })).into_response(),
        Err(err) => {
            tracing::error!(error = ?err, "Failed to fetch waitlist count");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Failed to fetch waitlist count",
                    "count": 0,
                })),
            )
                .into_response()
        }
    }
}

async fn join(
    State(app_state): State<AppState>,
    Json(payload): Json<JoinPayload>,
) -> AppResult<impl IntoResponse> {
    let email = payload.email.unwrap_or_default();
    let id = app_state.waitlist_use_cases.join(&email).await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinedResponse {
            success: true,
            message: "Successfully joined waitlist!",
            id,
        }),
    ))
}
