//! Integration tests for name and phone validation through the public API.

use address_book::{BookError, Field, Name, Phone, Record, ValidationError};

#[test]
fn test_non_empty_names_are_accepted() {
    for value in ["John", "J", "Mary Ann", "  ", "Олена", "O'Neil"] {
        let name = Name::new(value).unwrap();
        assert_eq!(name.to_string(), value);
        assert_eq!(name.value(), value);
    }
}

#[test]
fn test_empty_name_is_rejected() {
    assert_eq!(Name::new(""), Err(ValidationError::NameRequired));
    assert_eq!(Record::new(""), Err(ValidationError::NameRequired));
}

#[test]
fn test_phone_accepts_exactly_ten_digits() {
    assert!(Phone::new("1234567890").is_ok());
    assert!(Phone::new("0000000000").is_ok());

    for bad in [
        "12345",
        "12345678901",
        "123abc7890",
        "(123)456789",
        "123 456 789",
        "",
    ] {
        assert!(Phone::new(bad).is_err(), "{:?} should be rejected", bad);
        assert!(!Phone::is_valid(bad));
    }
}

#[test]
fn test_record_phone_errors_convert_to_book_error() {
    fn add(record: &mut Record, number: &str) -> Result<(), BookError> {
        record.add_phone(number)?;
        Ok(())
    }

    let mut record = Record::new("John").unwrap();
    let err = add(&mut record, "555-1234").unwrap_err();
    assert!(matches!(
        err,
        BookError::Validation(ValidationError::InvalidPhone(ref v)) if v == "555-1234"
    ));
    assert_eq!(record.phone_count(), 0);
}

#[test]
fn test_fields_render_through_common_contract() {
    fn render<F: Field>(field: &F) -> String {
        field.to_string()
    }

    assert_eq!(render(&Name::new("John").unwrap()), "John");
    assert_eq!(render(&Phone::new("5555555555").unwrap()), "5555555555");
}
