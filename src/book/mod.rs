//! The address book container.

pub mod address_book;

pub use address_book::AddressBook;
