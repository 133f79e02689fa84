//! External collaborators of the dashboard.
//!
//! - [`api`] - inventory REST API ([`api::InventoryApi`], HTTP client)
//! - [`export`] - report writers ([`export::CsvReportExporter`])
//! - [`notify`] - user notices and confirmations ([`notify::Notifier`])
//! - [`navigation`] - route changes ([`navigation::Navigator`])
//!
//! Core components only see the traits, so tests swap in in-memory
//! implementations.

pub mod api;
pub mod export;
pub mod navigation;
pub mod notify;
