//! User notifications
//!
//! Every failure and every informational outcome the dashboard surfaces goes
//! through a [`Notifier`]: an icon, a title and a message. The confirmation
//! variant returns the user's yes/no answer.

pub mod console;
pub mod memory;

pub use console::ConsoleNotifier;
pub use memory::RecordingNotifier;

use serde::Serialize;
use std::fmt;

/// Severity shown next to a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeIcon {
    Error,
    Warning,
    Info,
    Success,
}

impl NoticeIcon {
    /// Terminal glyph for the icon
    pub fn glyph(self) -> &'static str {
        match self {
            NoticeIcon::Error => "❌",
            NoticeIcon::Warning => "⚠️",
            NoticeIcon::Info => "ℹ️",
            NoticeIcon::Success => "✅",
        }
    }
}

impl fmt::Display for NoticeIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoticeIcon::Error => "error",
            NoticeIcon::Warning => "warning",
            NoticeIcon::Info => "info",
            NoticeIcon::Success => "success",
        };
        f.write_str(name)
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub icon: NoticeIcon,
    pub title: String,
    pub text: String,
}

impl Notice {
    /// Creates a notice
    pub fn new(icon: NoticeIcon, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Error notice titled "Error"
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeIcon::Error, "Error", text)
    }

    /// Success notice titled "Éxito"
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeIcon::Success, "Éxito", text)
    }

    /// Informational notice
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeIcon::Info, title, text)
    }
}

/// Presents notices and asks for confirmation
pub trait Notifier {
    /// Shows a notice
    fn notify(&self, notice: Notice);

    /// Asks a yes/no question; `false` when the user declines or can't answer
    fn confirm(&self, title: &str, text: &str) -> bool;
}
