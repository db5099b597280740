//! autopack: Automated archival package assembly
//!
//! Entry point for the autopack application.

use autopack::config::{Cli, Command, ValidatedConfig, write_default_params};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    // Help and version displays succeed; every other parse problem is a
    // command-line error reported with usage text.
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            let failed = e.use_stderr();
            let _ = e.print();
            return if failed {
                exit_code::CONFIG_ERROR
            } else {
                exit_code::SUCCESS
            };
        }
    };

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    setup_tracing(cli.debug);

    // Resolve and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::info!("{config}");

    if config.info {
        println!("{}", config.params);
        return exit_code::SUCCESS;
    }

    run::execute(&config);
    exit_code::SUCCESS
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_params(output) {
        Ok(()) => {
            println!("Parameter file template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
