// File: dnsname-core/src/filters.rs

//! filters.rs - Template filters backed by the name sanitizers.
//!
//! Registers [`dns_subdomainify`], [`dns_labelize`] and [`escape_regexp`] as
//! `tinytemplate` formatters so templates can write `{ value | dns_labelize }`.
//! The sanitizers themselves know nothing about templating.
//!
//! license: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use tinytemplate::error::Error as TemplateError;
use tinytemplate::TinyTemplate;

use crate::escape::escape_regexp;
use crate::sanitizers::{dns_labelize, dns_subdomainify};

/// Names under which the filters are registered.
pub const FILTER_NAMES: [&str; 3] = ["dns_subdomainify", "dns_labelize", "escape_regexp"];

/// Extracts the text a filter operates on.
///
/// Numbers and booleans are stringified, `null` is empty, containers are rejected.
fn filter_input(filter: &str, value: &Value) -> tinytemplate::error::Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(TemplateError::GenericError {
            msg: format!("filter '{}' expects a string, found a container value", filter),
        }),
    }
}

fn subdomainify_filter(value: &Value, output: &mut String) -> tinytemplate::error::Result<()> {
    let input = filter_input("dns_subdomainify", value)?;
    let name = dns_subdomainify(&input).map_err(|e| TemplateError::GenericError {
        msg: e.to_string(),
    })?;
    output.push_str(&name);
    Ok(())
}

fn labelize_filter(value: &Value, output: &mut String) -> tinytemplate::error::Result<()> {
    let input = filter_input("dns_labelize", value)?;
    output.push_str(&dns_labelize(&input));
    Ok(())
}

fn escape_regexp_filter(value: &Value, output: &mut String) -> tinytemplate::error::Result<()> {
    let input = filter_input("escape_regexp", value)?;
    output.push_str(&escape_regexp(&input));
    Ok(())
}

/// Adds every filter in [`FILTER_NAMES`] to `tt`.
pub fn register_filters(tt: &mut TinyTemplate<'_>) {
    tt.add_formatter(FILTER_NAMES[0], subdomainify_filter);
    tt.add_formatter(FILTER_NAMES[1], labelize_filter);
    tt.add_formatter(FILTER_NAMES[2], escape_regexp_filter);
}

/// Renders `template` against `context` with the name filters available.
///
/// ```rust
/// use dnsname_core::render_template;
///
/// let ctx = serde_json::json!({ "app": "My App" });
/// let out = render_template("{ app | dns_labelize }", &ctx).unwrap();
/// assert_eq!(out, "My-App");
/// ```
pub fn render_template<C: Serialize>(template: &str, context: &C) -> Result<String> {
    let mut tt = TinyTemplate::new();
    register_filters(&mut tt);
    tt.add_template("t", template)
        .context("Failed to parse template")?;
    debug!("Rendering template of {} bytes with name filters.", template.len());
    tt.render("t", context)
        .map_err(|e| anyhow!("Failed to render template: {}", e))
}
