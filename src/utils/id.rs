use crate::error::{HelpdeskError, Result};

/// Minimum width of the numeric part of a ticket id
const SEQUENCE_WIDTH: usize = 3;

/// Format a ticket id such as `HD-004`.
///
/// Sequence numbers wider than three digits are not truncated (`HD-1000`).
pub fn format_ticket_id(prefix: &str, sequence: u32) -> String {
    format!("{prefix}-{sequence:0width$}", width = SEQUENCE_WIDTH)
}

/// Extract the sequence number from an id carrying the given prefix.
///
/// The prefix matches ignoring ASCII case, the same way ids are looked up.
pub fn parse_ticket_sequence(id: &str, prefix: &str) -> Option<u32> {
    let (head, digits) = id.rsplit_once('-')?;
    if !head.eq_ignore_ascii_case(prefix)
        || digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

/// Validate that an id prefix is usable
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(HelpdeskError::InvalidPrefix(
            prefix.to_string(),
            "prefix cannot be empty".to_string(),
        ));
    }

    if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(HelpdeskError::InvalidPrefix(
            prefix.to_string(),
            "use only ASCII letters and digits".to_string(),
        ));
    }

    Ok(())
}
