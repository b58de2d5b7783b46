//! Name sanitizers for DNS Subdomain and DNS Label names.
//!
//! Both sanitizers run the shared grammar pipeline from [`pipeline`]. They differ in the
//! grammar they use and in how much they trust it: [`dns_subdomainify`] re-validates its
//! output, while [`dns_labelize`] relies on the pipeline alone and never fails.
//!
//! License: MIT OR APACHE 2.0

pub mod pipeline;

use log::error;

use crate::errors::DnsNameError;
use crate::validators::validate_dns_subdomain;
use pipeline::{LABEL_RULES, SUBDOMAIN_RULES};

/// Turns an arbitrary string into a valid DNS Subdomain Name.
///
/// Valid DNS Subdomain Names conform to [RFC 1123](https://tools.ietf.org/html/rfc1123) and must:
///
/// * contain no more than 253 characters
/// * contain only lowercase alphanumeric characters, '-' or '.'
/// * start with an alphanumeric character
/// * end with an alphanumeric character
///
/// # Errors
///
/// Returns [`DnsNameError::InternalInvariantViolation`] if the sanitized name fails
/// validation. That indicates a defect in the pipeline, not a problem with `name`.
///
/// # Examples
///
/// ```rust
/// use dnsname_core::dns_subdomainify;
///
/// let name = dns_subdomainify("test.opsani.com/My Amazing App").unwrap();
/// assert_eq!(name, "test.opsani.com.my-amazing-app");
/// ```
pub fn dns_subdomainify(name: &str) -> Result<String, DnsNameError> {
    let sanitized = SUBDOMAIN_RULES.sanitize(name);

    match validate_dns_subdomain(&sanitized) {
        Ok(_) => Ok(sanitized),
        Err(DnsNameError::InvalidSubdomain(violation)) => {
            error!(
                "Sanitized subdomain {:?} (from {:?}) failed validation: {}",
                sanitized, name, violation
            );
            Err(DnsNameError::InternalInvariantViolation {
                name: sanitized,
                source: violation,
            })
        }
        Err(e) => Err(e),
    }
}

/// Turns an arbitrary string into a DNS Label Name.
///
/// Valid DNS Label Names conform to [RFC 1123](https://tools.ietf.org/html/rfc1123) and must:
///
/// * be 63 characters or less (cannot be empty)
/// * begin and end with an alphanumeric character (`[a-zA-Z0-9]`)
/// * contain only dashes (-), underscores (_), dots (.), and alphanumerics in between
///
/// Case is preserved and `/` becomes `_`.
///
/// # Examples
///
/// ```rust
/// use dnsname_core::dns_labelize;
///
/// assert_eq!(dns_labelize("test.opsani.com/My Amazing App"), "test.opsani.com_My-Amazing-App");
/// ```
pub fn dns_labelize(name: &str) -> String {
    LABEL_RULES.sanitize(name)
}
