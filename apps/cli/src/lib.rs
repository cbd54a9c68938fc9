pub mod chart;
pub mod cli;
pub mod commands;
pub mod dto;
pub mod logging;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Analyze(args) => commands::analyze::run(&args),
        Command::Formats => commands::formats::run(),
    }
}
