//! Input validation utilities

use crate::constants;

/// Validate a judge service language identifier
pub fn validate_language_id(language_id: i32) -> Result<(), &'static str> {
    if constants::language_ids::ALL.contains(&language_id) {
        Ok(())
    } else {
        Err("Unsupported language")
    }
}

/// Validate source code size
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() {
        return Err("Source code cannot be empty");
    }
    if code.len() > constants::MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size of 1MB");
    }
    Ok(())
}

/// Validate comment content
pub fn validate_comment(content: &str) -> Result<(), &'static str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("Comment cannot be empty");
    }
    if trimmed.len() > constants::MAX_COMMENT_LENGTH {
        return Err("Comment exceeds maximum length");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_id() {
        assert!(validate_language_id(71).is_ok()); // Python
        assert!(validate_language_id(54).is_ok()); // C++
        assert!(validate_language_id(999).is_err());
        assert!(validate_language_id(-1).is_err());
    }

    #[test]
    fn test_validate_source_code() {
        assert!(validate_source_code("print(42)").is_ok());
        assert!(validate_source_code("").is_err());
        assert!(validate_source_code(&"x".repeat(constants::MAX_SOURCE_CODE_SIZE + 1)).is_err());
    }

    #[test]
    fn test_validate_comment() {
        assert!(validate_comment("nice problem").is_ok());
        assert!(validate_comment("   ").is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello\x07 world  "), "hello world");
        assert_eq!(sanitize_string("line\nbreak"), "line\nbreak");
    }
}
