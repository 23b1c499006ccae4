//! Output rendering for the address book.

use crate::book::AddressBook;
use crate::domain::{Name, Phone};
use crate::error::BookResult;
use crate::models::Record;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How an address book is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Name: ..., phones: ...` line per record.
    #[default]
    Text,

    /// Pretty-printed JSON array of records.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Must be one of: text, json, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Render the whole book in the requested format.
pub fn render_book(book: &AddressBook, format: OutputFormat) -> BookResult<String> {
    match format {
        OutputFormat::Text => Ok(book.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(book)?),
    }
}

/// Render a single record in the requested format.
pub fn render_record(record: &Record, format: OutputFormat) -> BookResult<String> {
    match format {
        OutputFormat::Text => Ok(record.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
    }
}

#[derive(Serialize)]
struct PhoneLookup<'a> {
    name: &'a Name,
    phone: Option<&'a Phone>,
}

/// Render the result of looking up a phone on a contact.
///
/// Text is `"<name>: <phone>"`; JSON is `{"name": ..., "phone": ...}` with a
/// `null` phone when the lookup found nothing.
pub fn render_phone_lookup(
    name: &Name,
    phone: Option<&Phone>,
    format: OutputFormat,
) -> BookResult<String> {
    match format {
        OutputFormat::Text => Ok(match phone {
            Some(phone) => format!("{}: {}", name, phone),
            None => format!("{}: no such phone", name),
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&PhoneLookup { name, phone })?),
    }
}
