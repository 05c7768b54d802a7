use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Workshop,
    Event,
    Consultation,
}

impl BookingType {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingType::Workshop => "workshop",
            BookingType::Event => "event",
            BookingType::Consultation => "consultation",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Booking {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    /// Requested date (ISO string)
    pub date: Option<String>,
    pub notes: Option<String>,
}
