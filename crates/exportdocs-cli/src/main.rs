//! exportdocs CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use exportdocs_cli::cli::{Cli, Command, ConfigAction};
use exportdocs_cli::commands;
use exportdocs_cli::config::ClientConfig;
use exportdocs_cli::error::CliResult;
use exportdocs_core::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(TracingConfig::for_cli(cli.debug)) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli.config.clone().unwrap_or_else(ClientConfig::default_path);
    let config = if cli.config.is_some() {
        ClientConfig::load_from(&config_path)?
    } else {
        ClientConfig::load()?
    };

    let kinds = cli.command.report_kinds();
    match cli.command {
        Command::List(ref args)
        | Command::Report(ref args)
        | Command::Papers(ref args)
        | Command::All(ref args) => {
            commands::export::run(kinds, args, &config)?;
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(&config_path),
        },
    }
}
