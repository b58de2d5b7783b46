//! errors.rs - Custom error types for the dnsname-core library.
//!
//! Validation failures carry a [`SubdomainViolation`] naming the exact rule that was
//! broken, so callers can either show the message or match on the rule.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::grammar::SUBDOMAIN;

/// The rule a candidate DNS Subdomain Name violated.
///
/// Rules are checked in declaration order; only the first violation is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubdomainViolation {
    #[error("DNS Subdomain Names cannot be zero characters in length")]
    ZeroLength,

    #[error("DNS Subdomain Names cannot be more than {} characters in length", SUBDOMAIN.max_length)]
    TooLong { length: usize },

    #[error("DNS Subdomain Names must contain only lowercase alphanumeric characters, '-' or '.'")]
    DisallowedCharacters,

    #[error("DNS Subdomain Names must start with an alphanumeric character")]
    InvalidStart,

    #[error("DNS Subdomain Names must end with an alphanumeric character")]
    InvalidEnd,
}

/// This enum represents all possible error types in the `dnsname-core` library.
///
/// `#[non_exhaustive]` keeps room for new variants without breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DnsNameError {
    #[error("invalid subdomain: {0}")]
    InvalidSubdomain(#[from] SubdomainViolation),

    /// The subdomain sanitizer produced a name its own validator rejects.
    /// This is a bug in the pipeline, never a problem with the caller's input.
    #[error("internal invariant violated: sanitized name '{name}' failed validation: {source}")]
    InternalInvariantViolation {
        name: String,
        #[source]
        source: SubdomainViolation,
    },

    #[error("Failed to compile grammar '{0}': {1}")]
    GrammarCompilation(String, regex::Error),

    /// The grammar's rules leave no room for the boundary prefix and suffix.
    #[error("Grammar '{name}' is unsupported: {reason}")]
    UnsupportedGrammar { name: String, reason: String },
}

impl DnsNameError {
    /// Returns the violated subdomain rule, if this error came from validation.
    pub fn violation(&self) -> Option<&SubdomainViolation> {
        match self {
            DnsNameError::InvalidSubdomain(v) => Some(v),
            DnsNameError::InternalInvariantViolation { source, .. } => Some(source),
            DnsNameError::GrammarCompilation(..) | DnsNameError::UnsupportedGrammar { .. } => None,
        }
    }
}
