//! pipeline.rs - Compiles grammars and runs the sanitization pipeline.
//!
//! Every sanitizer is the same sequence of rewrites, parameterised by a [`Grammar`]:
//!
//! 1. fold to lowercase (only when the grammar asks for it)
//! 2. replace every `/` with the grammar's slash replacement
//! 3. replace every whitespace character with `-`
//! 4. delete each maximal run of disallowed characters
//! 5. truncate to the grammar's maximum length
//! 6. prefix [`BOUNDARY_PREFIX`] if the first character is not a boundary character
//! 7. cut and append [`BOUNDARY_SUFFIX`] if the last character is not a boundary character
//!
//! The built-in grammars are compiled once into [`SUBDOMAIN_RULES`] and [`LABEL_RULES`].
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::{Regex, RegexBuilder};

use crate::errors::DnsNameError;
use crate::grammar::{Grammar, BOUNDARY_PREFIX, BOUNDARY_SUFFIX, LABEL, SUBDOMAIN};

lazy_static! {
    /// Matches a single whitespace character; runs are expanded one hyphen per character.
    /// The class is ECMAScript's `\s`, which includes U+FEFF and excludes U+0085.
    static ref WHITESPACE: Regex = Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]"
    )
    .expect("whitespace pattern is valid");

    /// The compiled DNS Subdomain grammar, shared by the validator and the sanitizer.
    pub static ref SUBDOMAIN_RULES: CompiledGrammar =
        CompiledGrammar::compile(&SUBDOMAIN).expect("built-in subdomain grammar compiles");

    /// The compiled DNS Label grammar.
    pub static ref LABEL_RULES: CompiledGrammar =
        CompiledGrammar::compile(&LABEL).expect("built-in label grammar compiles");
}

/// A [`Grammar`] with its character classes compiled, ready to check or sanitize names.
#[derive(Debug)]
pub struct CompiledGrammar {
    /// The grammar this was compiled from.
    pub grammar: Grammar,
    disallowed: Regex,
    allowed: Regex,
    leading: Regex,
    trailing: Regex,
}

fn build(grammar: &Grammar, pattern: String) -> Result<Regex, DnsNameError> {
    RegexBuilder::new(&pattern)
        .size_limit(1 << 20)
        .build()
        .map_err(|e| DnsNameError::GrammarCompilation(grammar.name.to_string(), e))
}

impl CompiledGrammar {
    /// Compiles the character classes of `grammar`.
    ///
    /// # Errors
    ///
    /// [`DnsNameError::GrammarCompilation`] if a character class is not a valid regex, and
    /// [`DnsNameError::UnsupportedGrammar`] if the grammar cannot hold [`BOUNDARY_PREFIX`] and
    /// [`BOUNDARY_SUFFIX`]: both must be made of allowed characters, start and end on a
    /// boundary character respectively, and fit together within `max_length`.
    pub fn compile(grammar: &Grammar) -> Result<Self, DnsNameError> {
        debug!("Compiling grammar '{}'.", grammar.name);
        let compiled = Self {
            grammar: *grammar,
            disallowed: build(grammar, grammar.disallowed_pattern())?,
            allowed: build(grammar, grammar.allowed_pattern())?,
            leading: build(grammar, grammar.leading_pattern())?,
            trailing: build(grammar, grammar.trailing_pattern())?,
        };
        compiled.check_boundary_fixes()?;
        Ok(compiled)
    }

    fn check_boundary_fixes(&self) -> Result<(), DnsNameError> {
        let reason = if self.grammar.max_length < BOUNDARY_PREFIX.len() + BOUNDARY_SUFFIX.len() {
            Some(format!(
                "max_length {} cannot hold '{}' and '{}'",
                self.grammar.max_length, BOUNDARY_PREFIX, BOUNDARY_SUFFIX
            ))
        } else if !self.is_allowed(BOUNDARY_PREFIX) || !self.is_allowed(BOUNDARY_SUFFIX) {
            Some(format!(
                "'{}' and '{}' must consist of allowed characters",
                BOUNDARY_PREFIX, BOUNDARY_SUFFIX
            ))
        } else if !self.starts_on_boundary(BOUNDARY_PREFIX) {
            Some(format!("'{}' must start with a boundary character", BOUNDARY_PREFIX))
        } else if !self.ends_on_boundary(BOUNDARY_SUFFIX) {
            Some(format!("'{}' must end with a boundary character", BOUNDARY_SUFFIX))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DnsNameError::UnsupportedGrammar {
                name: self.grammar.name.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }

    /// `true` if `name` is non-empty and made only of allowed characters.
    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed.is_match(name)
    }

    /// `true` if the first character of `name` is a boundary character.
    pub fn starts_on_boundary(&self, name: &str) -> bool {
        self.leading.is_match(name)
    }

    /// `true` if the last character of `name` is a boundary character.
    pub fn ends_on_boundary(&self, name: &str) -> bool {
        self.trailing.is_match(name)
    }

    /// Rewrites `name` so it fits this grammar.
    ///
    /// The result never exceeds `max_length` characters, contains only allowed characters, and
    /// always starts and ends with a boundary character; [`CompiledGrammar::compile`] refuses
    /// grammars for which that cannot hold. Input that already fits the grammar is returned
    /// unchanged.
    pub fn sanitize(&self, name: &str) -> String {
        let max_length = self.grammar.max_length;

        let folded: Cow<str> = if self.grammar.lowercase {
            Cow::Owned(name.to_lowercase())
        } else {
            Cow::Borrowed(name)
        };
        let slashed = folded.replace('/', self.grammar.slash_replacement);
        let hyphenated = WHITESPACE.replace_all(&slashed, "-");
        let mut sanitized = self.disallowed.replace_all(&hyphenated, "").into_owned();
        truncate_chars(&mut sanitized, max_length);

        if !self.starts_on_boundary(&sanitized) {
            sanitized.insert_str(0, BOUNDARY_PREFIX);
            truncate_chars(&mut sanitized, max_length);
        }

        if !self.ends_on_boundary(&sanitized) {
            truncate_chars(&mut sanitized, self.grammar.suffix_cut());
            sanitized.push_str(BOUNDARY_SUFFIX);
        }

        trace!(
            target: "dnsname_core::sanitizer",
            "{}: {:?} -> {:?}",
            self.grammar.name,
            name,
            sanitized
        );
        sanitized
    }
}

/// Shortens `s` to at most `max` characters, never splitting a character.
fn truncate_chars(s: &mut String, max: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
}
