//! escape.rs - Escaping of regular-expression metacharacters.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref METACHARACTERS: Regex =
        Regex::new(r"[.*+?^${}()|\[\]\\]").expect("metacharacter pattern is valid");
}

/// Backslash-escapes every regex metacharacter (`. * + ? ^ $ { } ( ) | [ ] \`) in `s`.
///
/// Anchored, the result matches `s` and nothing else, so it is safe to splice
/// user-supplied text into a larger pattern.
///
/// ```rust
/// use dnsname_core::escape_regexp;
///
/// assert_eq!(escape_regexp("a.b*c"), r"a\.b\*c");
/// ```
pub fn escape_regexp(s: &str) -> String {
    // `$0` is the whole match; the leading backslash is literal.
    METACHARACTERS.replace_all(s, r"\$0").into_owned()
}
