//! Validation module for waitlist email addresses
//!
//! Implements a pragmatic subset of RFC 5321 addresses: dot-atom local part,
//! dotted DNS domain with an alphabetic top-level label.

/// Maximum length of a full address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of the part before `@`
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length of a single domain label
pub const MAX_LABEL_LENGTH: usize = 63;

/// Printable characters allowed in a dot-atom besides ASCII alphanumerics
const LOCAL_PART_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

/// Validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Address is empty
    Empty,
    /// Address is too long
    TooLong { max: usize, actual: usize },
    /// No `@` separator
    MissingAt,
    /// More than one `@`
    MultipleAt,
    /// Nothing before `@`
    EmptyLocalPart,
    /// Local part is too long
    LocalPartTooLong { max: usize, actual: usize },
    /// Local part starts or ends with a dot, or has `..`
    MisplacedDot,
    /// Characters not allowed in an address
    InvalidCharacters { invalid: Vec<char> },
    /// Nothing after `@`
    EmptyDomain,
    /// Domain has no dot
    MissingDomainDot,
    /// Domain label is empty, too long or starts/ends with a hyphen
    InvalidDomainLabel { label: String },
    /// Last domain label is not at least two letters
    InvalidTopLevelDomain,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Please enter your email address"),
            ValidationError::TooLong { max, actual } => {
                write!(f, "Email is too long ({} chars, max {})", actual, max)
            }
            ValidationError::MissingAt => {
                write!(f, "Please enter a valid email address (missing '@')")
            }
            ValidationError::MultipleAt => {
                write!(f, "Email address can only contain one '@'")
            }
            ValidationError::EmptyLocalPart => {
                write!(f, "Please enter the part before '@'")
            }
            ValidationError::LocalPartTooLong { max, actual } => {
                write!(
                    f,
                    "The part before '@' is too long ({} chars, max {})",
                    actual, max
                )
            }
            ValidationError::MisplacedDot => {
                write!(
                    f,
                    "The part before '@' cannot start or end with a dot or contain '..'"
                )
            }
            ValidationError::InvalidCharacters { invalid } => {
                let chars: String = invalid.iter().collect();
                write!(f, "Email contains invalid characters: '{}'", chars)
            }
            ValidationError::EmptyDomain => write!(f, "Please enter the part after '@'"),
            ValidationError::MissingDomainDot => {
                write!(f, "Please enter a valid email address (domain needs a '.')")
            }
            ValidationError::InvalidDomainLabel { label } => {
                write!(f, "'{}' is not a valid domain name part", label)
            }
            ValidationError::InvalidTopLevelDomain => {
                write!(f, "Please enter a valid email address (unknown domain ending)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a waitlist email address.
///
/// Leading and trailing whitespace is ignored; whitespace inside the address is
/// rejected.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let length = trimmed.chars().count();
    if length > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            max: MAX_EMAIL_LENGTH,
            actual: length,
        });
    }

    let (local, domain) = match trimmed.split_once('@') {
        Some(parts) => parts,
        None => return Err(ValidationError::MissingAt),
    };
    if domain.contains('@') {
        return Err(ValidationError::MultipleAt);
    }

    validate_local_part(local)?;
    validate_domain(domain)
}

fn validate_local_part(local: &str) -> Result<(), ValidationError> {
    if local.is_empty() {
        return Err(ValidationError::EmptyLocalPart);
    }

    let length = local.chars().count();
    if length > MAX_LOCAL_PART_LENGTH {
        return Err(ValidationError::LocalPartTooLong {
            max: MAX_LOCAL_PART_LENGTH,
            actual: length,
        });
    }

    let invalid = collect_invalid(local, |c| {
        c.is_ascii_alphanumeric() || c == '.' || LOCAL_PART_SPECIALS.contains(c)
    });
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidCharacters { invalid });
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(ValidationError::MisplacedDot);
    }

    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), ValidationError> {
    if domain.is_empty() {
        return Err(ValidationError::EmptyDomain);
    }

    let invalid = collect_invalid(domain, |c| {
        c.is_ascii_alphanumeric() || c == '.' || c == '-'
    });
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidCharacters { invalid });
    }

    if !domain.contains('.') {
        return Err(ValidationError::MissingDomainDot);
    }

    for label in domain.split('.') {
        if label.is_empty()
            || label.len() > MAX_LABEL_LENGTH
            || label.starts_with('-')
            || label.ends_with('-')
        {
            return Err(ValidationError::InvalidDomainLabel {
                label: label.to_string(),
            });
        }
    }

    // split always yields at least one item
    let tld = domain.rsplit('.').next().unwrap_or_default();
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidTopLevelDomain);
    }

    Ok(())
}

/// Unique invalid characters, in order of first appearance
fn collect_invalid(value: &str, allowed: impl Fn(char) -> bool) -> Vec<char> {
    let mut invalid: Vec<char> = Vec::new();
    for c in value.chars() {
        if !allowed(c) && !invalid.contains(&c) {
            invalid.push(c);
        }
    }
    invalid
}

/// Check an address without caring about the reason
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

/// Canonical form handed to the waitlist action: trimmed, domain lowercased.
///
/// The local part keeps its case since servers may treat it as case sensitive.
pub fn normalize_email(email: &str) -> String {
    let trimmed = email.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_ascii_lowercase()),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@sub.example.co.uk").is_ok());
        assert!(validate_email("user+tag@example.io").is_ok());
        assert!(validate_email("a@b.cd").is_ok());
        assert!(validate_email("  padded@example.com  ").is_ok());
        assert!(validate_email("o'brien@my-domain.org").is_ok());
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(ValidationError::Empty));
        assert_eq!(validate_email("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_missing_at() {
        assert_eq!(validate_email("not-an-email"), Err(ValidationError::MissingAt));
        assert_eq!(validate_email("example.com"), Err(ValidationError::MissingAt));
    }

    #[test]
    fn test_multiple_at() {
        assert_eq!(
            validate_email("a@b@example.com"),
            Err(ValidationError::MultipleAt)
        );
    }

    #[test]
    fn test_local_part() {
        assert_eq!(
            validate_email("@example.com"),
            Err(ValidationError::EmptyLocalPart)
        );
        assert_eq!(
            validate_email(".user@example.com"),
            Err(ValidationError::MisplacedDot)
        );
        assert_eq!(
            validate_email("user.@example.com"),
            Err(ValidationError::MisplacedDot)
        );
        assert_eq!(
            validate_email("us..er@example.com"),
            Err(ValidationError::MisplacedDot)
        );

        let long_local = format!("{}@example.com", "a".repeat(65));
        assert_eq!(
            validate_email(&long_local),
            Err(ValidationError::LocalPartTooLong {
                max: 64,
                actual: 65
            })
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_email("us er@example.com"),
            Err(ValidationError::InvalidCharacters { invalid: vec![' '] })
        );
        assert_eq!(
            validate_email("user@exa_mple.com"),
            Err(ValidationError::InvalidCharacters { invalid: vec!['_'] })
        );
        assert!(validate_email("имя@example.com").is_err());
    }

    #[test]
    fn test_domain_rules() {
        assert_eq!(validate_email("user@"), Err(ValidationError::EmptyDomain));
        assert_eq!(
            validate_email("user@localhost"),
            Err(ValidationError::MissingDomainDot)
        );
        assert_eq!(
            validate_email("user@example..com"),
            Err(ValidationError::InvalidDomainLabel {
                label: String::new()
            })
        );
        assert_eq!(
            validate_email("user@-example.com"),
            Err(ValidationError::InvalidDomainLabel {
                label: "-example".to_string()
            })
        );
        assert_eq!(
            validate_email("user@example.c"),
            Err(ValidationError::InvalidTopLevelDomain)
        );
        assert_eq!(
            validate_email("user@example.123"),
            Err(ValidationError::InvalidTopLevelDomain)
        );
    }

    #[test]
    fn test_too_long() {
        let domain = format!("{}.com", "d".repeat(60));
        let email = format!("{}@{}.{}.{}", "u".repeat(60), domain, domain, domain);
        assert!(matches!(
            validate_email(&email),
            Err(ValidationError::TooLong { max: 254, .. })
        ));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  John.Doe@Example.COM "),
            "John.Doe@example.com"
        );
        assert_eq!(normalize_email("plain"), "plain");
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Please enter your email address"
        );
        assert_eq!(
            ValidationError::TooLong {
                max: 254,
                actual: 300
            }
            .to_string(),
            "Email is too long (300 chars, max 254)"
        );
        assert_eq!(
            ValidationError::InvalidCharacters {
                invalid: vec![' ', '!']
            }
            .to_string(),
            "Email contains invalid characters: ' !'"
        );
    }
}
