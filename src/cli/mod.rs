//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Inventario using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Inventario - Inventory dashboard client
#[derive(Parser, Debug)]
#[command(name = "inventario")]
#[command(version, about, long_about = None)]
#[command(author = "Inventario Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "inventario.toml", env = "INVENTARIO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "INVENTARIO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dashboard statistics widgets
    Stats(commands::stats::StatsArgs),

    /// List articles below their minimum stock
    LowStock(commands::low_stock::LowStockArgs),

    /// List loans with units still out
    Loans(commands::loans::LoansArgs),

    /// Show this week's movements per business day
    Weekly(commands::weekly::WeeklyArgs),

    /// Show the recent movements feed
    Movements(commands::movements::MovementsArgs),

    /// List articles or update an article's minimum stock
    SetMinimum(commands::set_minimum::SetMinimumArgs),

    /// Search articles with the typeahead picker
    PickArticle(commands::articles::PickArticleArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
