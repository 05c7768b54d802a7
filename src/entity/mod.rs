use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

pub mod bookings;
pub mod contact_messages;
pub mod newsletter_signups;
pub mod products;

pub use bookings::Entity as Bookings;
pub use contact_messages::Entity as ContactMessages;
pub use newsletter_signups::Entity as NewsletterSignups;
pub use products::Entity as Products;

/// The stored record kinds and the table each one lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Product,
    ContactMessage,
    Booking,
    NewsletterSignup,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Product,
        RecordKind::ContactMessage,
        RecordKind::Booking,
        RecordKind::NewsletterSignup,
    ];

    pub fn table_name(self) -> &'static str {
        match self {
            RecordKind::Product => "product",
            RecordKind::ContactMessage => "contactmessage",
            RecordKind::Booking => "booking",
            RecordKind::NewsletterSignup => "newslettersignup",
        }
    }
}

/// Ordered list of strings stored as a JSON column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);
