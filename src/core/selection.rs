//! Typeahead single-selection widget
//!
//! The widget owns the typed text and the open/closed state; the parent owns
//! the selected id. User actions return a [`Selection`] for the parent when
//! one is due. Parent-driven updates go through
//! [`SelectionWidget::sync_selected`], which never produces a notification,
//! so the two sides can't ping-pong.

use crate::core::filter::filter;
use crate::domain::ids::OptionId;
use crate::domain::SelectableOption;

/// Whether the suggestion list is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

/// Notification for the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user picked this option
    Chosen(OptionId),
    /// The user emptied the input
    Cleared,
}

impl Selection {
    /// Selection as the parent stores it; `None` means nothing selected
    pub fn id(self) -> Option<OptionId> {
        match self {
            Selection::Chosen(id) => Some(id),
            Selection::Cleared => None,
        }
    }
}

/// Autocomplete state
///
/// # Example
///
/// ```rust
/// use inventario::core::selection::{Selection, SelectionWidget};
/// use inventario::domain::{OptionId, SelectableOption};
///
/// let mut widget = SelectionWidget::new(
///     "Herramienta",
///     vec![
///         SelectableOption::new(OptionId::new(7), "Martillo"),
///         SelectableOption::new(OptionId::new(8), "Pala"),
///     ],
/// );
/// widget.input("mar");
/// assert_eq!(widget.visible_options().len(), 1);
///
/// let picked = widget.choose(OptionId::new(7));
/// assert_eq!(picked, Some(Selection::Chosen(OptionId::new(7))));
/// assert_eq!(widget.text(), "Martillo");
/// ```
#[derive(Debug, Clone)]
pub struct SelectionWidget {
    label: String,
    options: Vec<SelectableOption>,
    filtered: Vec<SelectableOption>,
    text: String,
    state: WidgetState,
    selected: Option<OptionId>,
}

impl SelectionWidget {
    pub fn new(label: impl Into<String>, options: Vec<SelectableOption>) -> Self {
        let filtered = options.clone();
        Self {
            label: label.into(),
            options,
            filtered,
            text: String::new(),
            state: WidgetState::Closed,
            selected: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Prompt shown in an empty input
    pub fn placeholder(&self) -> String {
        format!("Selecciona una {}", self.label.to_lowercase())
    }

    /// Current input text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == WidgetState::Open
    }

    /// Last id the parent synced in
    pub fn selected(&self) -> Option<OptionId> {
        self.selected
    }

    /// Suggestions on screen; empty while closed
    pub fn visible_options(&self) -> &[SelectableOption] {
        match self.state {
            WidgetState::Open => &self.filtered,
            WidgetState::Closed => &[],
        }
    }

    /// The user typed; emptying the input clears the parent's selection
    pub fn input(&mut self, text: impl Into<String>) -> Option<Selection> {
        self.text = text.into();
        self.state = WidgetState::Open;
        self.refilter();

        self.text.is_empty().then_some(Selection::Cleared)
    }

    /// The user clicked a suggestion
    ///
    /// Ids that aren't among the options are ignored.
    pub fn choose(&mut self, id: OptionId) -> Option<Selection> {
        let option = self.options.iter().find(|o| o.id == id)?;
        self.text = option.nombre.clone();
        self.state = WidgetState::Closed;
        self.refilter();

        tracing::trace!(label = %self.label, option = %id, "Option chosen");
        Some(Selection::Chosen(id))
    }

    pub fn focus(&mut self) {
        self.state = WidgetState::Open;
    }

    /// Click outside the widget; the selection is untouched
    pub fn click_outside(&mut self) {
        self.state = WidgetState::Closed;
    }

    /// Parent changed the selected id
    ///
    /// `None` clears the text. An id missing from the options leaves the text
    /// as it was.
    pub fn sync_selected(&mut self, selected: Option<OptionId>) {
        self.selected = selected;
        self.resolve_selected();
        self.refilter();
    }

    /// Replaces the option list, re-resolving the selected id against it
    pub fn set_options(&mut self, options: Vec<SelectableOption>) {
        self.options = options;
        self.resolve_selected();
        self.refilter();
    }

    fn resolve_selected(&mut self) {
        match self.selected {
            None => self.text.clear(),
            Some(id) => match self.options.iter().find(|o| o.id == id) {
                Some(option) => self.text = option.nombre.clone(),
                None => {
                    tracing::debug!(
                        label = %self.label,
                        option = %id,
                        "Selected id not among options, keeping text"
                    );
                }
            },
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter(&self.options, &self.text, |o| o.nombre.clone());
    }
}
