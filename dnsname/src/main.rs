// dnsname/src/main.rs
//! dnsname entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::debug;

use dnsname::cli::{Cli, Commands};
use dnsname::commands::{names, render};
use dnsname::logger;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    logger::init_logger(args.effective_log_level());
    debug!("Parsed arguments: {:?}", args);

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut writer = stdout.lock();

    let code = match &args.command {
        Commands::Validate { names } => {
            if names::run_validate(names, &mut writer, color)? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Subdomainify { names } => {
            names::run_subdomainify(names, &mut writer)?;
            ExitCode::SUCCESS
        }
        Commands::Labelize { names } => {
            names::run_labelize(names, &mut writer)?;
            ExitCode::SUCCESS
        }
        Commands::Escape { values } => {
            names::run_escape(values, &mut writer)?;
            ExitCode::SUCCESS
        }
        Commands::Render(cmd) => {
            render::run_render(&cmd.template, &cmd.vars, &mut writer)?;
            ExitCode::SUCCESS
        }
    };

    writer.flush()?;
    Ok(code)
}
