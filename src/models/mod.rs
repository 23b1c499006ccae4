//! Data models for address book entities.
//!
//! A [`Record`] is one contact: a validated name plus the phone numbers
//! stored for it.

pub mod record;

pub use record::Record;
