use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::{response::ErrorResponse, state::AppState};

pub mod doc;
pub mod health;
pub mod params;
pub mod products;
pub mod submissions;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .merge(submissions::router())
}

/// Every route plus CORS and the JSON 404 fallback, bound to `state`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/test", get(health::diagnostics))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(path = %uri.path(), "no route");
    (StatusCode::NOT_FOUND, Json(ErrorResponse::message("Not Found")))
}
