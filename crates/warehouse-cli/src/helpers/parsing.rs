//! Validation for item names, quantities and output formats.

use crate::errors::CliError;

/// Check an item name for `add` and the new name of `update`.
///
/// Names must contain at least one non-space character and only letters
/// and plain spaces. The save file holds one name per line, so tabs and line
/// breaks are rejected.
pub fn validate_item_name(name: &str) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::invalid_input(
            "Invalid item name! Cannot be empty or only spaces.",
        ));
    }
    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(CliError::invalid_input(
            "Invalid item name! Only letters are allowed.",
        ));
    }
    Ok(())
}

/// Parse a positive integer quantity.
pub fn parse_quantity(value: &str) -> Result<u32, CliError> {
    match value.trim().parse::<u32>() {
        Ok(qty) if qty > 0 => Ok(qty),
        _ => Err(CliError::invalid_input(format!(
            "Invalid quantity \"{}\"! Must be a positive integer.",
            value
        ))),
    }
}

/// Accept only the formats `view` knows about.
pub fn validate_format(value: Option<&str>) -> Result<(), CliError> {
    match value {
        None | Some("table") | Some("plain") => Ok(()),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_item_name("bolts").is_ok());
        assert!(validate_item_name("hex bolts").is_ok());
    }

    #[test]
    fn test_blank_names_rejected() {
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_non_letter_names_rejected() {
        let err = validate_item_name("bolts2").unwrap_err();
        assert!(err.to_string().contains("Only letters"));
        assert!(validate_item_name("m8-bolt").is_err());
    }

    #[test]
    fn test_control_whitespace_rejected() {
        for name in ["bolts\nnuts", "bolts\tnuts", "bolts\r", "bolts\u{2028}nuts"] {
            let err = validate_item_name(name).unwrap_err();
            assert!(err.to_string().contains("Only letters"), "{:?}", name);
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("two").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_validate_format() {
        assert!(validate_format(None).is_ok());
        assert!(validate_format(Some("table")).is_ok());
        assert!(validate_format(Some("plain")).is_ok());
        assert!(validate_format(Some("csv")).is_err());
    }
}
