use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::{booking::Booking, contact::ContactMessage, newsletter::NewsletterSignup},
    error::AppResult,
    extract::ValidatedJson,
    response::{Acknowledgement, ErrorResponse},
    services::submission_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact))
        .route("/booking", post(booking))
        .route("/newsletter", post(newsletter))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message received", body = Acknowledgement),
        (status = 422, description = "Invalid message", body = ErrorResponse),
    ),
    tag = "Submissions"
)]
pub async fn contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactMessage>,
) -> AppResult<Json<Acknowledgement>> {
    let ack = submission_service::submit_contact(&state, payload).await?;
    Ok(Json(ack))
}

#[utoipa::path(
    post,
    path = "/api/booking",
    request_body = Booking,
    responses(
        (status = 200, description = "Booking requested", body = Acknowledgement),
        (status = 422, description = "Invalid booking", body = ErrorResponse),
    ),
    tag = "Submissions"
)]
pub async fn booking(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Booking>,
) -> AppResult<Json<Acknowledgement>> {
    let ack = submission_service::request_booking(&state, payload).await?;
    Ok(Json(ack))
}

#[utoipa::path(
    post,
    path = "/api/newsletter",
    request_body = NewsletterSignup,
    responses(
        (status = 200, description = "Subscribed", body = Acknowledgement),
        (status = 422, description = "Invalid signup", body = ErrorResponse),
    ),
    tag = "Submissions"
)]
pub async fn newsletter(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewsletterSignup>,
) -> AppResult<Json<Acknowledgement>> {
    let ack = submission_service::subscribe_newsletter(&state, payload).await?;
    Ok(Json(ack))
}
