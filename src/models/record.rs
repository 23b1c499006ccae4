//! Record model representing a single contact in the address book.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a required name and an ordered list of phone numbers.
///
/// Every phone held by a record has passed [`Phone`] validation. The same
/// number may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NameRequired` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    pub fn has_phone(&self, number: &str) -> bool {
        self.find_phone(number).is_some()
    }

    /// Validate `number` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `number` is not 10 digits.
    /// The record is left unchanged.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = Self::parse_phone(number)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `number`. Does nothing if none match.
    pub fn remove_phone(&mut self, number: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != number);

        let removed = before - self.phones.len();
        if removed > 0 {
            tracing::debug!(name = %self.name, phone = number, removed, "Removed phone");
        }
    }

    /// Find the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Replace `old` with `new`.
    ///
    /// `new` is validated before anything changes. The first occurrence of
    /// `old` is overwritten in place and any further copies of `old` are
    /// dropped. When `old` is not present, `new` is appended instead.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is not 10 digits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let replacement = Self::parse_phone(new)?;

        let Some(index) = self.phones.iter().position(|p| p.as_str() == old) else {
            tracing::debug!(
                name = %self.name,
                old,
                new = %replacement,
                "Phone to edit not found, appending"
            );
            self.phones.push(replacement);
            return Ok(());
        };

        // Copies of `old` can only sit after `index`, so it stays valid.
        let mut position = 0;
        self.phones.retain(|p| {
            let keep = position == index || p.as_str() != old;
            position += 1;
            keep
        });
        self.phones[index] = replacement;

        tracing::debug!(name = %self.name, old, new, "Edited phone");
        Ok(())
    }

    fn parse_phone(number: &str) -> Result<Phone, ValidationError> {
        Phone::new(number)
            .inspect_err(|e| tracing::debug!(phone = number, "Rejected phone: {}", e))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
