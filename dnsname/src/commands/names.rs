//! Per-name commands: validate, subdomainify, labelize and escape.
//!
//! Every command writes one line per input to the given writer, in input order.

use anyhow::{Context, Result};
use log::{debug, info};
use owo_colors::OwoColorize;
use std::io::Write;

use dnsname_core::{dns_labelize, dns_subdomainify, escape_regexp, validate_dns_subdomain};

/// Validates each name, printing `<name>: valid` or `<name>: <reason>`.
///
/// # Returns
///
/// `true` if every name is valid.
pub fn run_validate<W: Write>(names: &[String], out: &mut W, color: bool) -> Result<bool> {
    let mut all_valid = true;

    for name in names {
        match validate_dns_subdomain(name) {
            Ok(_) => {
                if color {
                    writeln!(out, "{}: {}", name, "valid".green())?;
                } else {
                    writeln!(out, "{}: valid", name)?;
                }
            }
            Err(e) => {
                all_valid = false;
                let reason = e.violation().map(|v| v.to_string()).unwrap_or_else(|| e.to_string());
                if color {
                    writeln!(out, "{}: {}", name, reason.red())?;
                } else {
                    writeln!(out, "{}: {}", name, reason)?;
                }
            }
        }
    }

    info!("Validated {} name(s); all valid: {}.", names.len(), all_valid);
    Ok(all_valid)
}

/// Prints the DNS Subdomain form of each name.
pub fn run_subdomainify<W: Write>(names: &[String], out: &mut W) -> Result<()> {
    for name in names {
        let sanitized = dns_subdomainify(name)
            .with_context(|| format!("Failed to sanitize {:?} into a subdomain", name))?;
        debug!("subdomainify {:?} -> {:?}", name, sanitized);
        writeln!(out, "{}", sanitized)?;
    }
    Ok(())
}

/// Prints the DNS Label form of each name.
pub fn run_labelize<W: Write>(names: &[String], out: &mut W) -> Result<()> {
    for name in names {
        writeln!(out, "{}", dns_labelize(name))?;
    }
    Ok(())
}

/// Prints each value with its regex metacharacters escaped.
pub fn run_escape<W: Write>(values: &[String], out: &mut W) -> Result<()> {
    for value in values {
        writeln!(out, "{}", escape_regexp(value))?;
    }
    Ok(())
}
