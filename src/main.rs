//! Address Book - demonstration driver
//!
//! Builds a small book, edits and looks up phone numbers, deletes a contact,
//! and prints the book between steps. Every printed block follows the
//! configured output format. Logs go to stderr so stdout carries only the
//! rendered output.

use address_book::{
    render_book, render_phone_lookup, render_record, AddressBook, Config, OutputFormat, Record,
};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(output = %config.output_format, "Configuration loaded successfully");

    if let Err(e) = run(config.output_format) {
        error!("Demo failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

fn run(format: OutputFormat) -> Result<()> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    println!("{}", render_book(&book, format)?);

    let john = book.find_mut("John").context("John should be in the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", render_record(john, format)?);

    let found = john.find_phone("5555555555");
    println!("{}", render_phone_lookup(john.name(), found, format)?);

    book.delete("Jane");
    println!("{}", render_book(&book, format)?);

    info!(records = book.len(), "Demo complete");
    Ok(())
}
