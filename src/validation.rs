//! Field-level error reporting for request bodies and query strings.
//!
//! Record types derive `Deserialize` for their shape and `validator::Validate` for
//! their constraints; [`parse_body`] runs both and maps failures onto [`FieldError`]s.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use serde_path_to_error::Segment;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Missing,
    StringType,
    FloatType,
    BoolType,
    ListType,
    GreaterThanEqual,
    StringTooShort,
    Enum,
    JsonInvalid,
    ModelType,
    QueryInvalid,
    ValueError,
}

impl ErrorKind {
    /// Classify a serde data error by its message.
    fn from_serde_message(message: &str) -> Self {
        if message.starts_with("missing field") {
            ErrorKind::Missing
        } else if message.starts_with("unknown variant") {
            ErrorKind::Enum
        } else if message.contains("expected a string") {
            ErrorKind::StringType
        } else if message.contains("expected a boolean") {
            ErrorKind::BoolType
        } else if message.contains("expected f64") {
            ErrorKind::FloatType
        } else if message.contains("expected a sequence") {
            ErrorKind::ListType
        } else {
            ErrorKind::ValueError
        }
    }

    fn from_validator_code(code: &str) -> Self {
        match code {
            "length" => ErrorKind::StringTooShort,
            "range" => ErrorKind::GreaterThanEqual,
            _ => ErrorKind::ValueError,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

impl FieldError {
    pub fn new(loc: &[&str], kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// The request body could not be read as JSON at all.
    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self::single(FieldError::new(&["body"], ErrorKind::JsonInvalid, reason))
    }

    /// The query string could not be decoded into the expected parameters.
    pub fn malformed_query(reason: impl Into<String>) -> Self {
        Self::single(FieldError::new(&["query"], ErrorKind::QueryInvalid, reason))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter_map(|e| e.loc.last().map(String::as_str))
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ValidationError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let msg = err.inner().to_string();
        let kind = ErrorKind::from_serde_message(&msg);

        let mut loc = vec!["body".to_string()];
        for segment in err.path().iter() {
            match segment {
                Segment::Map { key } => loc.push(key.clone()),
                Segment::Seq { index } => loc.push(index.to_string()),
                Segment::Enum { variant } => loc.push(variant.clone()),
                Segment::Unknown => {}
            }
        }
        // A missing field is reported at its parent; name it explicitly.
        if kind == ErrorKind::Missing {
            if let Some(field) = msg.split('`').nth(1) {
                loc.push(field.to_string());
            }
        }

        Self::single(FieldError { loc, msg, kind })
    }
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut out: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors.iter().map(move |e| FieldError {
                    loc: vec!["body".to_string(), field.clone()],
                    msg: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", e.code)),
                    kind: ErrorKind::from_validator_code(&e.code),
                })
            })
            .collect();
        out.sort_by(|a, b| a.loc.cmp(&b.loc));
        Self { errors: out }
    }
}

/// Deserialize `payload` into a record and check its declared constraints.
pub fn parse_body<T>(payload: Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate,
{
    if !payload.is_object() {
        return Err(ValidationError::single(FieldError::new(
            &["body"],
            ErrorKind::ModelType,
            "Input should be a valid object",
        )));
    }

    let record: T = serde_path_to_error::deserialize(payload)?;
    record.validate()?;
    Ok(record)
}
