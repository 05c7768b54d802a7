use serde::Serialize;
use utoipa::ToSchema;

use crate::validation::FieldError;

/// Body returned by every failing request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            detail: ErrorDetail::Message(message.into()),
        }
    }

    pub fn fields(errors: Vec<FieldError>) -> Self {
        Self {
            detail: ErrorDetail::Fields(errors),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Identifier of a freshly stored record.
#[derive(Debug, Serialize, ToSchema)]
pub struct Created {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Received,
    Requested,
    Subscribed,
}

/// Identifier of a stored submission plus what happens to it next.
#[derive(Debug, Serialize, ToSchema)]
pub struct Acknowledgement {
    pub id: String,
    pub status: AckStatus,
}
