// dnsname/src/lib.rs
//! # dnsname CLI Application
//!
//! Command-line front end for `dnsname-core`: validate names, sanitize them into DNS
//! Subdomain or DNS Label names, escape regex metacharacters, or render a template with the
//! sanitizers available as filters.

pub mod cli;
pub mod commands;
pub mod logger;
