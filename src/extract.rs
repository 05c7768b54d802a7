use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::{
    error::AppError,
    validation::{ValidationError, parse_body},
};

/// JSON body deserialized into a record and checked against its constraints.
///
/// Unparsable bodies and schema violations reject with a 422. A missing JSON
/// content type or an unreadable body keeps the status axum assigns it.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        let record = parse_body(payload)?;
        Ok(ValidatedJson(record))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(
        rejection,
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_)
    ) {
        ValidationError::malformed_body(rejection.body_text()).into()
    } else {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
