//! Common contract for contact fields.

use std::fmt;

/// A single named value on a contact record.
///
/// `Name` and `Phone` both implement this so callers can read the wrapped
/// value and render it the same way regardless of which field they hold.
pub trait Field: fmt::Display {
    /// The type of the wrapped value.
    type Value: ?Sized;

    /// Get the wrapped value.
    fn value(&self) -> &Self::Value;
}
