//! Shared validation for draft ticket fields.

use crate::error::{HelpdeskError, RequiredField, Result};

/// Returns the trimmed text, or `MissingField` if nothing is left after trimming.
pub fn require_text(value: &str, field: RequiredField) -> Result<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HelpdeskError::MissingField(field));
    }
    Ok(trimmed)
}

/// Returns the value, or `MissingField` if it was never chosen.
pub fn require_choice<T: Copy>(value: Option<T>, field: RequiredField) -> Result<T> {
    value.ok_or(HelpdeskError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(
            require_text("  Printer jam \n", RequiredField::Title).unwrap(),
            "Printer jam"
        );
    }

    #[test]
    fn test_require_text_rejects_blank() {
        for blank in ["", "   ", "\t\n"] {
            assert!(matches!(
                require_text(blank, RequiredField::Description),
                Err(HelpdeskError::MissingField(RequiredField::Description))
            ));
        }
    }

    #[test]
    fn test_require_choice() {
        assert_eq!(require_choice(Some(3), RequiredField::Category).unwrap(), 3);
        assert!(matches!(
            require_choice::<u8>(None, RequiredField::Category),
            Err(HelpdeskError::MissingField(RequiredField::Category))
        ));
    }
}
