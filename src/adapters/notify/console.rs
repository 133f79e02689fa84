//! Terminal notifier

use super::{Notice, NoticeIcon, Notifier};
use dialoguer::Confirm;

/// Prints notices to the terminal and prompts with `dialoguer`
///
/// Errors and warnings go to stderr. With `assume_yes` every confirmation is
/// answered affirmatively without prompting.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier {
    assume_yes: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every confirmation with yes
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let line = format!("{} {}: {}", notice.icon.glyph(), notice.title, notice.text);
        match notice.icon {
            NoticeIcon::Error | NoticeIcon::Warning => eprintln!("{line}"),
            NoticeIcon::Info | NoticeIcon::Success => println!("{line}"),
        }
    }

    fn confirm(&self, title: &str, text: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match Confirm::new()
            .with_prompt(format!("{title}: {text}"))
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt failed, assuming no");
                false
            }
        }
    }
}
