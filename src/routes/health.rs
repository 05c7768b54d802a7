use axum::{Json, extract::State};

use crate::{
    response::MessageResponse,
    services::diagnostics_service::{self, DiagnosticsReport},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse),
    ),
    tag = "Health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Botanical Boutique API running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Backend and database status", body = DiagnosticsReport),
    ),
    tag = "Health"
)]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(diagnostics_service::probe(&state).await)
}
