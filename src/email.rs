//! Email address shape checking.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check whether the given string is shaped like an email address.
///
/// The check is a syntactic heuristic: a local part, a single `@`, then a
/// domain holding at least one dot, with no whitespace anywhere. It does not
/// verify deliverability nor full RFC 5321/5322 compliance.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_a_string_without_at_sign() {
        assert!(!validate_email("no-at-sign.com"));
    }

    #[test]
    fn rejects_a_domain_without_dot() {
        assert!(!validate_email("a@b"));
    }

    #[test]
    fn rejects_the_empty_string() {
        assert!(!validate_email(""));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!validate_email("user name@example.com"));
        assert!(!validate_email(" user@example.com"));
        assert!(!validate_email("user@example.com "));
    }

    #[test]
    fn rejects_multiple_at_signs() {
        assert!(!validate_email("user@host@example.com"));
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("user@domain."));
    }
}
