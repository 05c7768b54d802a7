pub mod booking;
pub mod contact;
pub mod newsletter;
pub mod products;
