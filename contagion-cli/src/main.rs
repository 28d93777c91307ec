//! Contagion CLI - Command-line interface
//!
//! Runs SIRDS epidemic simulations over contact networks from the terminal.

mod commands;

use clap::Parser;
use contagion_core::tracing_setup::{self, CliLogLevel};

#[derive(Parser)]
#[command(name = "contagion")]
#[command(about = "A SIRDS epidemic simulator over contact networks")]
struct Cli {
    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(cli.log_level.as_tracing_level(), None)?;
    commands::handle_command(cli.command)?;

    Ok(())
}
