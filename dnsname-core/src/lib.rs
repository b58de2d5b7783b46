// dnsname-core/src/lib.rs
//! # dnsname Core Library
//!
//! `dnsname-core` turns arbitrary human-supplied strings into identifiers that satisfy the
//! two naming grammars used by container-orchestration platforms, and validates names
//! against them:
//!
//! * **DNS Subdomain Names**: at most 253 characters, lowercase `[a-z0-9.-]`, alphanumeric at
//!   both ends.
//! * **DNS Label Names**: at most 63 characters, `[a-zA-Z0-9._-]` with case preserved,
//!   alphanumeric at both ends.
//!
//! Every function is pure and stateless: no I/O, no shared mutable state, safe to call from
//! any number of threads.
//!
//! ## Modules
//!
//! * `grammar`: The `Grammar` constants describing each naming scheme.
//! * `validators`: Rule-by-rule validation of DNS Subdomain Names.
//! * `sanitizers`: The sanitizers and the grammar-driven pipeline behind them.
//! * `escape`: Escaping of regex metacharacters.
//! * `filters`: Registration of the sanitizers as `tinytemplate` formatters.
//! * `errors`: The `DnsNameError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use dnsname_core::{dns_labelize, dns_subdomainify, is_valid_dns_subdomain};
//!
//! let subdomain = dns_subdomainify("test.opsani.com/My Amazing App").unwrap();
//! assert_eq!(subdomain, "test.opsani.com.my-amazing-app");
//! assert!(is_valid_dns_subdomain(&subdomain));
//!
//! assert_eq!(dns_labelize("test.opsani.com/My Amazing App"), "test.opsani.com_My-Amazing-App");
//! ```
//!
//! ## Error Handling
//!
//! Validation reports the first broken rule as `DnsNameError::InvalidSubdomain`. The
//! subdomain sanitizer only fails if its own output does not validate, which is reported as
//! `DnsNameError::InternalInvariantViolation`. `dns_labelize` and `escape_regexp` never fail.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod errors;
pub mod escape;
pub mod filters;
pub mod grammar;
pub mod sanitizers;
pub mod validators;

/// Re-exports the custom error types.
pub use errors::{DnsNameError, SubdomainViolation};

/// Re-exports the grammar definitions.
pub use grammar::{Grammar, BOUNDARY_PREFIX, BOUNDARY_SUFFIX, LABEL, SUBDOMAIN};

/// Re-exports the validator and its predicate form.
pub use validators::{is_valid_dns_subdomain, validate_dns_subdomain};

/// Re-exports the sanitizers.
pub use sanitizers::{dns_labelize, dns_subdomainify};
pub use sanitizers::pipeline::{CompiledGrammar, LABEL_RULES, SUBDOMAIN_RULES};

pub use escape::escape_regexp;

/// Re-exports the template integration.
pub use filters::{register_filters, render_template, FILTER_NAMES};
