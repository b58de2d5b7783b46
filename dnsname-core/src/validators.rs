// File: dnsname-core/src/validators.rs
//! Validation of DNS Subdomain Names.
//!
//! [`validate_dns_subdomain`] reports the first rule a name breaks;
//! [`is_valid_dns_subdomain`] answers yes or no. Both share the compiled
//! subdomain grammar with the sanitizer so the two can never disagree.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::{DnsNameError, SubdomainViolation};
use crate::sanitizers::pipeline::SUBDOMAIN_RULES;

/// Confirms that `name` is a valid DNS Subdomain Name.
///
/// Rules are checked in this order, and the first failure is returned:
///
/// 1. not empty
/// 2. at most 253 UTF-16 code units
/// 3. only `[a-z0-9.-]`
/// 4. starts with `[a-z0-9]`
/// 5. ends with `[a-z0-9]`
///
/// Length is measured in UTF-16 code units, so a character outside the Basic Multilingual
/// Plane counts twice. Such characters are never allowed, so this only decides which rule
/// is reported for over-long non-ASCII input.
///
/// # Returns
///
/// `Ok(true)` when every rule holds, otherwise [`DnsNameError::InvalidSubdomain`]
/// carrying the violated rule.
pub fn validate_dns_subdomain(name: &str) -> Result<bool, DnsNameError> {
    let rules = &*SUBDOMAIN_RULES;
    let length = name.encode_utf16().count();

    let violation = if length == 0 {
        Some(SubdomainViolation::ZeroLength)
    } else if length > rules.grammar.max_length {
        Some(SubdomainViolation::TooLong { length })
    } else if !rules.is_allowed(name) {
        Some(SubdomainViolation::DisallowedCharacters)
    } else if !rules.starts_on_boundary(name) {
        Some(SubdomainViolation::InvalidStart)
    } else if !rules.ends_on_boundary(name) {
        Some(SubdomainViolation::InvalidEnd)
    } else {
        None
    };

    match violation {
        Some(v) => {
            debug!("Rejected subdomain {:?}: {}", name, v);
            Err(v.into())
        }
        None => Ok(true),
    }
}

/// Predicate form of [`validate_dns_subdomain`]: any violation becomes `false`.
pub fn is_valid_dns_subdomain(name: &str) -> bool {
    validate_dns_subdomain(name).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation_of(name: &str) -> SubdomainViolation {
        match validate_dns_subdomain(name) {
            Err(DnsNameError::InvalidSubdomain(v)) => v,
            other => panic!("expected InvalidSubdomain for {:?}, got {:?}", name, other),
        }
    }

    #[test]
    fn accepts_simple_names() {
        assert!(validate_dns_subdomain("simple").unwrap());
        assert!(validate_dns_subdomain("a").unwrap());
        assert!(validate_dns_subdomain("test.opsani.com").unwrap());
        assert!(validate_dns_subdomain(&"0".repeat(253)).unwrap());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(violation_of(""), SubdomainViolation::ZeroLength);
        let msg = validate_dns_subdomain("").unwrap_err().to_string();
        assert!(msg.contains("zero characters in length"));
    }

    #[test]
    fn rejects_too_long() {
        assert_eq!(
            violation_of(&"0".repeat(255)),
            SubdomainViolation::TooLong { length: 255 }
        );
    }

    #[test]
    fn rejects_uppercase_and_symbols() {
        assert_eq!(violation_of("INVALID"), SubdomainViolation::DisallowedCharacters);
        assert_eq!(violation_of("invalid!"), SubdomainViolation::DisallowedCharacters);
        assert_eq!(violation_of("under_score"), SubdomainViolation::DisallowedCharacters);
        let msg = validate_dns_subdomain("INVALID").unwrap_err().to_string();
        assert!(msg.contains("lowercase alphanumeric characters, '-' or '.'"));
    }

    #[test]
    fn rejects_bad_boundaries() {
        assert_eq!(violation_of("-invalid"), SubdomainViolation::InvalidStart);
        assert_eq!(violation_of(".invalid"), SubdomainViolation::InvalidStart);
        assert_eq!(violation_of("invalid-"), SubdomainViolation::InvalidEnd);
        assert_eq!(violation_of("invalid."), SubdomainViolation::InvalidEnd);
    }

    #[test]
    fn length_is_checked_before_charset() {
        assert_eq!(
            violation_of(&"A".repeat(254)),
            SubdomainViolation::TooLong { length: 254 }
        );
    }

    #[test]
    fn length_counts_utf16_code_units() {
        assert_eq!(
            violation_of(&"😀".repeat(127)),
            SubdomainViolation::TooLong { length: 254 }
        );
        assert_eq!(violation_of(&"😀".repeat(126)), SubdomainViolation::DisallowedCharacters);
    }

    #[test]
    fn predicate_never_errors() {
        assert!(is_valid_dns_subdomain("simple"));
        assert!(!is_valid_dns_subdomain(""));
        assert!(!is_valid_dns_subdomain("Nope"));
        assert!(!is_valid_dns_subdomain("trailing-"));
    }
}
