//! Intake CLI - Command-line utility for checking uploads before they are
//! stored.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the log subscriber.
///
/// Logs go to stderr so JSON on stdout stays machine-readable. `RUST_LOG`
/// overrides the default filter.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "intake_core=debug,intake=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn run(cli: &cli::Cli, formatter: &dyn output::OutputFormatter) -> Result<()> {
    match &cli.command {
        cli::Commands::Check(args) => commands::check::execute(args, formatter, cli.quiet),
        cli::Commands::Scan(args) => commands::scan::execute(args, formatter),
        cli::Commands::Sanitize(args) => commands::sanitize::execute(args, formatter),
        cli::Commands::Types => commands::types::execute(formatter),
        cli::Commands::Detect(args) => commands::detect::execute(args, formatter),
        cli::Commands::Completion { shell } => {
            commands::completion::execute(*shell);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match run(&cli, &*formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            formatter.format_error(cli.command.name(), &error);
            ExitCode::FAILURE
        }
    }
}
