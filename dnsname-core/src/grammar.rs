// File: dnsname-core/src/grammar.rs
//! grammar.rs - Naming grammar definitions.
//!
//! A [`Grammar`] describes one naming scheme: how long a name may be, which characters may
//! appear inside it, which may appear at either end, and how the sanitizer rewrites input to
//! fit. The two grammars used by container-orchestration platforms are provided as constants:
//!
//! * [`SUBDOMAIN`]: DNS Subdomain Names per RFC 1123 (max 253, lowercase, `[a-z0-9.-]`).
//! * [`LABEL`]: DNS Label Names (max 63, case-preserved, `[a-zA-Z0-9._-]`).
//!
//! See <https://kubernetes.io/docs/concepts/overview/working-with-objects/names/>.
//!
//! License: MIT OR APACHE 2.0

/// Prepended to a sanitized name whose first character is not a boundary character.
pub const BOUNDARY_PREFIX: &str = "0-";

/// Appended to a sanitized name whose last character is not a boundary character.
pub const BOUNDARY_SUFFIX: &str = "-1";

/// An immutable description of a naming grammar.
///
/// Character sets are stored as the body of a regex character class (without the brackets)
/// so they can be compiled both as an allow-list and, negated, as a strip pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Human-readable name used in log and error messages.
    pub name: &'static str,
    /// Maximum length in characters.
    pub max_length: usize,
    /// Characters allowed anywhere in the name.
    pub allowed: &'static str,
    /// Characters allowed as the first and last character.
    pub boundary: &'static str,
    /// Whether sanitization folds the input to lowercase.
    pub lowercase: bool,
    /// Replacement for every `/` during sanitization.
    pub slash_replacement: &'static str,
}

pub const SUBDOMAIN: Grammar = Grammar {
    name: "DNS Subdomain Names",
    max_length: 253,
    allowed: r"a-z0-9.\-",
    boundary: "a-z0-9",
    lowercase: true,
    slash_replacement: ".",
};

pub const LABEL: Grammar = Grammar {
    name: "DNS Label Names",
    max_length: 63,
    allowed: r"a-zA-Z0-9.\-_",
    boundary: "a-zA-Z0-9",
    lowercase: false,
    slash_replacement: "_",
};

impl Grammar {
    /// Pattern matching one maximal run of characters outside the allowed set.
    pub fn disallowed_pattern(&self) -> String {
        format!("[^{}]+", self.allowed)
    }

    /// Pattern matching a name made only of allowed characters.
    pub fn allowed_pattern(&self) -> String {
        format!("^[{}]+$", self.allowed)
    }

    /// Pattern matching a name that starts with a boundary character.
    pub fn leading_pattern(&self) -> String {
        format!("^[{}]", self.boundary)
    }

    /// Pattern matching a name that ends with a boundary character.
    pub fn trailing_pattern(&self) -> String {
        format!("[{}]$", self.boundary)
    }

    /// Length a name is cut to before [`BOUNDARY_SUFFIX`] is appended.
    pub fn suffix_cut(&self) -> usize {
        self.max_length.saturating_sub(BOUNDARY_SUFFIX.len())
    }
}
