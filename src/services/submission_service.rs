//! Contact messages, booking requests and newsletter signups.
//!
//! Each is stored once and acknowledged; none is read back through the API.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

use crate::{
    dto::{booking::Booking, contact::ContactMessage, newsletter::NewsletterSignup},
    entity::{RecordKind, bookings, contact_messages, newsletter_signups},
    error::AppResult,
    response::{AckStatus, Acknowledgement},
    state::AppState,
};

fn acknowledge(kind: RecordKind, id: Uuid, status: AckStatus) -> Acknowledgement {
    tracing::info!(collection = kind.table_name(), id = %id, status = ?status, "record created");
    Acknowledgement {
        id: id.to_string(),
        status,
    }
}

pub async fn submit_contact(
    state: &AppState,
    payload: ContactMessage,
) -> AppResult<Acknowledgement> {
    let orm = state.orm()?;
    let stored = contact_messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        subject: Set(payload.subject),
        message: Set(payload.message),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;

    Ok(acknowledge(
        RecordKind::ContactMessage,
        stored.id,
        AckStatus::Received,
    ))
}

pub async fn request_booking(state: &AppState, payload: Booking) -> AppResult<Acknowledgement> {
    let orm = state.orm()?;
    let stored = bookings::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        booking_type: Set(payload.booking_type.to_string()),
        date: Set(payload.date),
        notes: Set(payload.notes),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;

    Ok(acknowledge(RecordKind::Booking, stored.id, AckStatus::Requested))
}

pub async fn subscribe_newsletter(
    state: &AppState,
    payload: NewsletterSignup,
) -> AppResult<Acknowledgement> {
    let orm = state.orm()?;
    let stored = newsletter_signups::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(payload.email),
        name: Set(payload.name),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;

    Ok(acknowledge(
        RecordKind::NewsletterSignup,
        stored.id,
        AckStatus::Subscribed,
    ))
}
