use crate::core::alphabet::{in_window, string_in_bounds};
use crate::utils::error::{CipherError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CipherError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CipherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Like [`string_in_bounds`] but reports the first offending character.
pub fn validate_in_window(field_name: &str, value: &str) -> Result<()> {
    if string_in_bounds(value) {
        return Ok(());
    }

    match value.chars().enumerate().find(|(_, c)| !in_window(*c)) {
        Some((position, character)) => Err(CipherError::OutOfBounds {
            field: field_name.to_string(),
            position,
            character,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        assert_eq!(*validate_required_field("cipher.key", &present).unwrap(), 3);
        let missing: Option<i32> = None;
        assert!(matches!(
            validate_required_field("cipher.key", &missing),
            Err(CipherError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("cipher.key", " ").is_ok());
        assert!(validate_non_empty_string("cipher.key", "").is_err());
    }

    #[test]
    fn test_validate_in_window_reports_position() {
        assert!(validate_in_window("text", "HELLO_ WORLD!").is_ok());
        match validate_in_window("text", "HELLO world") {
            Err(CipherError::OutOfBounds {
                position, character, ..
            }) => {
                assert_eq!(position, 6);
                assert_eq!(character, 'w');
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }
}
