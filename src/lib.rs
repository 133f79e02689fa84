// Inventario - Inventory dashboard client
// Copyright (c) 2025 Inventario Contributors
// Licensed under the MIT License

//! # Inventario - Inventory dashboard client
//!
//! Inventario talks to an inventory management server's REST API and derives
//! the dashboard views people use day to day: stock statistics, low-stock and
//! active-loan listings, a Monday–Friday movement chart and a recent
//! movements feed. It also edits per-article minimum stock.
//!
//! ## Architecture
//!
//! Inventario follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Dashboard logic (filtering, statistics, weekly chart, widgets)
//! - [`adapters`] - External integrations (REST API, CSV export, terminal)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inventario::adapters::api::InventarioClient;
//! use inventario::adapters::notify::ConsoleNotifier;
//! use inventario::config::load_config_or_default;
//! use inventario::core::stats::StatisticsStore;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("inventario.toml")?;
//!     let api = InventarioClient::new(&config.api)?;
//!
//!     let mut store = StatisticsStore::new(config.dashboard.tz()?);
//!     store.refresh(&api, &ConsoleNotifier::new()).await;
//!
//!     println!("{} productos con bajo stock", store.snapshot().productos_bajo_stock());
//!     Ok(())
//! }
//! ```
//!
//! ## Filtering
//!
//! Every list the dashboard shows goes through the same case-insensitive
//! substring filter:
//!
//! ```rust
//! use inventario::core::filter::filter;
//!
//! let names = vec!["Taladro".to_string(), "Pala".to_string()];
//! let hits = filter(&names, "PAL", |n| n.clone());
//! assert_eq!(hits, vec!["Pala".to_string()]);
//! ```
//!
//! ## Error Handling
//!
//! Library errors are [`domain::InventarioError`]; API failures carry an
//! [`domain::ApiError`] that separates "no response" from server rejections.
//! User-facing failures are reported through a
//! [`adapters::notify::Notifier`] and never abort the dashboard.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
