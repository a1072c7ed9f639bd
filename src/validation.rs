//! Input validation for widget constructor parameters.

use crate::error::InvalidParameter;

/// Validates message text. Must be a non-empty string.
pub fn validate_text(text: &str) -> Result<(), InvalidParameter> {
    if text.is_empty() {
        return Err(InvalidParameter::new(
            "msg",
            "It should be a non-empty string",
        ));
    }
    Ok(())
}

/// Validates a chat box identifier. Any non-empty string is accepted.
pub fn validate_box_id(id: &str) -> Result<(), InvalidParameter> {
    if id.is_empty() {
        return Err(InvalidParameter::new("id", "required parameter"));
    }
    Ok(())
}

/// Validates a chat box title.
pub fn validate_title(title: &str) -> Result<(), InvalidParameter> {
    if title.is_empty() {
        return Err(InvalidParameter::new("title", "required parameter"));
    }
    Ok(())
}
