//! Address Book - an in-memory contact directory.
//!
//! Contacts are stored by name, each with an ordered list of phone numbers.
//! Names and phone numbers are validated when they are created, so a book
//! never holds an empty name or a malformed number.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and the `Field` contract
//! - **models**: The `Record` type for a single contact
//! - **book**: The insertion-ordered `AddressBook` container
//! - **render**: Text and JSON output of a book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use book::AddressBook;
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use render::{render_book, render_phone_lookup, render_record, OutputFormat};
