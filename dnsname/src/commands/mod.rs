//! Command implementations for the dnsname CLI.

pub mod names;
pub mod render;
