//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is made of. Each
//! value object checks its input at construction time, so an invalid name
//! or phone number can never be stored in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
