//! In-memory notifier

use super::{Notice, Notifier};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Records notices and replays scripted confirmation answers
///
/// Useful for driving dashboard components without a terminal. Once the
/// scripted answers run out, confirmations answer `false`.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    answers: Mutex<VecDeque<bool>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues answers for upcoming confirmations
    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            answers: Mutex::new(answers.into_iter().collect()),
        }
    }

    /// Everything notified so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Most recent notice
    pub fn last(&self) -> Option<Notice> {
        self.notices().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }

    fn confirm(&self, _title: &str, _text: &str) -> bool {
        self.answers
            .lock()
            .ok()
            .and_then(|mut a| a.pop_front())
            .unwrap_or(false)
    }
}
