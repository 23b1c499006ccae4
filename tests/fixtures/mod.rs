//! Shared test fixtures for address book integration tests.

use address_book::{AddressBook, Record};

/// Build a record with the given phones, panicking on invalid input.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("fixture name must be valid");
    for phone in phones {
        record
            .add_phone(phone)
            .expect("fixture phone must be valid");
    }
    record
}

/// The two contacts used throughout the walkthrough.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));
    book
}

/// Render the names of a book in iteration order.
#[allow(dead_code)]
pub fn names(book: &AddressBook) -> Vec<String> {
    book.names().map(str::to_string).collect()
}
