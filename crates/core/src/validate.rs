//! Shared field-validation helpers.
//!
//! These return `DomainError::Validation` with a field-qualified message so the
//! HTTP boundary can surface them as 400s without further translation.

use crate::error::{DomainError, DomainResult};

/// The field must be present and non-blank.
pub fn require(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

pub fn max_len(field: &str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

pub fn min_len(field: &str, value: &str, min: usize) -> DomainResult<()> {
    if value.chars().count() < min {
        return Err(DomainError::validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

pub fn exact_len(field: &str, value: &str, len: usize) -> DomainResult<()> {
    if value.chars().count() != len {
        return Err(DomainError::validation(format!(
            "{field} must be exactly {len} characters"
        )));
    }
    Ok(())
}

/// Minimal email syntax check: one `@`, non-empty local part, dotted domain.
pub fn email_syntax(value: &str) -> DomainResult<()> {
    let invalid = || DomainError::validation("email must be a valid email address".to_string());

    if value.contains(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    // Domain needs at least one dot with labels on both sides.
    let mut labels = domain.split('.');
    if domain.contains('.') && labels.all(|l| !l.is_empty()) {
        Ok(())
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("name", "").is_err());
        assert!(require("name", "   ").is_err());
        assert!(require("name", "Marcos").is_ok());
    }

    #[test]
    fn length_bounds() {
        assert!(max_len("name", &"x".repeat(150), 150).is_ok());
        assert!(max_len("name", &"x".repeat(151), 150).is_err());
        assert!(min_len("password", "1234567", 8).is_err());
        assert!(min_len("password", "12345678", 8).is_ok());
        assert!(exact_len("state", "SP", 2).is_ok());
        assert!(exact_len("state", "SPX", 2).is_err());
    }

    #[test]
    fn email_syntax_cases() {
        assert!(email_syntax("marcos@mail.com").is_ok());
        assert!(email_syntax("a@b.co").is_ok());
        assert!(email_syntax("marcos").is_err());
        assert!(email_syntax("@mail.com").is_err());
        assert!(email_syntax("marcos@").is_err());
        assert!(email_syntax("marcos@mail").is_err());
        assert!(email_syntax("marcos@mail..com").is_err());
        assert!(email_syntax("mar cos@mail.com").is_err());
    }
}
