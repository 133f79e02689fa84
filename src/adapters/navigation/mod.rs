//! Programmatic navigation
//!
//! Dashboard widgets link to other screens by path. A [`Navigator`] decides
//! what following a link means in the current front end.

use std::sync::Mutex;

/// Route of the product stock history screen
pub const PRODUCT_HISTORY_ROUTE: &str = "/stock/historial-stock";

/// Changes the current route
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Prints the target route, optionally resolved against a web front end URL
#[derive(Debug, Clone, Default)]
pub struct ConsoleNavigator {
    frontend_url: Option<String>,
}

impl ConsoleNavigator {
    pub fn new(frontend_url: Option<String>) -> Self {
        Self { frontend_url }
    }

    /// Full location for `path`
    pub fn location(&self, path: &str) -> String {
        match &self.frontend_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => path.to_string(),
        }
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigating");
        println!("➡️  {}", self.location(path));
    }
}

/// Remembers every route it was sent to
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(path.to_string());
        }
    }
}
