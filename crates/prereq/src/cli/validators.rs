//! CLI input validation functions.
//!
//! Validators return `Result<String, String>`; the error is the message shown
//! to the user at the interactive prompt.

/// Maximum length of an item label
pub const MAX_LABEL_LENGTH: usize = 200;

/// Validate an item label.
///
/// Labels are trimmed; they must be non-empty, at most
/// [`MAX_LABEL_LENGTH`] characters, and free of control characters.
pub fn validate_label(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Item name cannot be empty".to_string());
    }

    let length = s.chars().count();
    if length > MAX_LABEL_LENGTH {
        return Err(format!(
            "Item name cannot exceed {MAX_LABEL_LENGTH} characters, got {length} characters"
        ));
    }

    if s.chars().any(char::is_control) {
        return Err("Item name cannot contain control characters".to_string());
    }

    Ok(s.to_string())
}
