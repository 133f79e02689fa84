// Inventario - Inventory dashboard client
// Copyright (c) 2025 Inventario Contributors
// Licensed under the MIT License

use clap::Parser;
use inventario::cli::{Cli, Commands};
use inventario::config::{load_config_or_default, LoggingConfig};
use inventario::logging::init_logging;
use std::process;
use tokio::sync::watch;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // A broken config is reported by the command itself; logging falls back
    // to console-only so that report is visible
    let (config_level, logging_config) = match load_config_or_default(&cli.config) {
        Ok(config) => (Some(config.application.log_level), config.logging),
        Err(_) => (None, LoggingConfig::default()),
    };
    let log_level = cli
        .log_level
        .clone()
        .or(config_level)
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Inventario - Inventory dashboard client"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors; flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

/// Flips to `true` on the first Ctrl+C
///
/// Only installed for commands that poll until interrupted; everything else
/// keeps the default SIGINT behavior.
fn shutdown_on_ctrl_c() -> watch::Receiver<bool> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received SIGINT (Ctrl+C), shutting down");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C"),
        }
    });
    shutdown_rx
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Stats(args) => args.execute(&cli.config).await,
        Commands::LowStock(args) => args.execute(&cli.config).await,
        Commands::Loans(args) => args.execute(&cli.config).await,
        Commands::Weekly(args) => args.execute(&cli.config).await,
        Commands::Movements(args) => {
            let shutdown_signal = if args.listens_for_interrupt() {
                shutdown_on_ctrl_c()
            } else {
                watch::channel(false).1
            };
            args.execute(&cli.config, shutdown_signal).await
        }
        Commands::SetMinimum(args) => args.execute(&cli.config).await,
        Commands::PickArticle(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
