//! Dashboard logic.
//!
//! - [`filter`] - free-text search shared by every list
//! - [`weekly`] - Monday–Friday movement histogram
//! - [`stats`] - statistics widgets, fenced refresh, detail views
//! - [`selection`] - autocomplete widget
//! - [`report`] - tabular report model and exporter trait
//! - [`movements`] - recent movements feed
//! - [`stock`] - minimum stock editor
//!
//! Components hold their own state and talk to the outside world only through
//! the traits in [`crate::adapters`].

pub mod filter;
pub mod movements;
pub mod report;
pub mod selection;
pub mod stats;
pub mod stock;
pub mod weekly;
