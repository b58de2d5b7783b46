//! This file defines the command-line interface (CLI) for the dnsname application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "dnsname",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and sanitize DNS Subdomain and DNS Label names",
    long_about = "dnsname turns arbitrary strings into identifiers that satisfy the DNS Subdomain Name (RFC 1123, max 253 characters) and DNS Label Name (max 63 characters) grammars used by container-orchestration platforms, and validates existing names.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all logging.
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicit log level; RUST_LOG applies when neither this nor a flag is given.
    #[arg(long = "log-level", value_name = "LEVEL", env = "DNSNAME_LOG", global = true)]
    pub log_level: Option<LevelFilter>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The log level forced by the flags, if any. `--quiet` wins over `--debug`.
    pub fn effective_log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            self.log_level
        }
    }
}

/// All available commands for the `dnsname` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Checks that each name is a valid DNS Subdomain Name.
    #[command(about = "Check that each name is a valid DNS Subdomain Name.")]
    Validate {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Sanitizes each name into a DNS Subdomain Name.
    #[command(about = "Sanitize each name into a DNS Subdomain Name.")]
    Subdomainify {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Sanitizes each name into a DNS Label Name.
    #[command(about = "Sanitize each name into a DNS Label Name.")]
    Labelize {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Escapes regex metacharacters in each value.
    #[command(about = "Escape regex metacharacters in each value.")]
    Escape {
        #[arg(required = true, value_name = "VALUE")]
        values: Vec<String>,
    },

    /// Renders a template with the name filters registered.
    #[command(about = "Render a template string with dns_subdomainify, dns_labelize and escape_regexp available as filters.")]
    Render(RenderCommand),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderCommand {
    /// The template text, e.g. "{ app | dns_labelize }".
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Context variables as KEY=VALUE pairs.
    #[arg(long = "var", short = 'v', value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,
}

/// Parses a `KEY=VALUE` pair. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid KEY=VALUE pair: no `=` or empty key in `{}`", s)),
    }
}
