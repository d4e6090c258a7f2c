mod filter;
mod navigation;
mod selection;

use crossterm::event::KeyEvent;
use ratatui::text::Text;
use tracing::debug;

use super::keys::{printable_char, KeyBindings};
use super::widgets::choice_list_text;

pub use selection::Selection;

/// Input mode of the selection list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Filtering,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Confirm,
    Abort,
}

/// State of the multi-select list.
///
/// The visible list is derived on every read from the items, the filter
/// text and the hide mode, so it can never lag behind a state change.
#[derive(Debug, Clone)]
pub struct MultiSelectState {
    items: Vec<String>,
    items_lower: Vec<String>,
    /// Indices into `items` matching the current filter text
    filtered: Vec<usize>,
    selection: Selection,
    cursor: usize,
    filter: String,
    mode: Mode,
    hide_unselected: bool,
    title: Option<String>,
    keys: KeyBindings,
}

impl MultiSelectState {
    /// Create the list with `enabled` pre-selected in the given order.
    ///
    /// The cursor starts on the first enabled item present in `items`.
    pub fn new(items: Vec<String>, enabled: &[String]) -> Self {
        let items_lower = items.iter().map(|item| item.to_lowercase()).collect();
        let selection = Selection::from_names(enabled.iter().map(String::as_str));
        let cursor = enabled
            .iter()
            .find_map(|name| items.iter().position(|item| item == name))
            .unwrap_or(0);
        let filtered = (0..items.len()).collect();

        Self {
            items,
            items_lower,
            filtered,
            selection,
            cursor,
            filter: String::new(),
            mode: Mode::Browsing,
            hide_unselected: false,
            title: None,
            keys: KeyBindings::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_key_bindings(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn hide_unselected(&self) -> bool {
        self.hide_unselected
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    /// Consume the state, returning selected names in selection order.
    pub fn into_selected(self) -> Vec<String> {
        self.selection.into_order()
    }

    /// Items currently shown: filtered by text, then by hide mode.
    pub fn visible_items(&self) -> Vec<&str> {
        let matching = self.filtered.iter().map(|&i| self.items[i].as_str());
        if self.hide_unselected {
            matching.filter(|name| self.selection.contains(name)).collect()
        } else {
            matching.collect()
        }
    }

    /// Render the list into at most `max_rows` item rows.
    pub fn view(&self, max_rows: usize) -> Text<'static> {
        choice_list_text(self, max_rows)
    }

    /// Handle a key press. Unknown keys are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if self.keys.is_quit(&key) {
            debug!("selection aborted");
            return KeyAction::Abort;
        }

        if self.keys.confirm.matches(&key) {
            return match self.mode {
                Mode::Browsing => {
                    debug!(selected = self.selection.len(), "selection confirmed");
                    KeyAction::Confirm
                }
                Mode::Filtering => {
                    self.exit_filter();
                    KeyAction::Continue
                }
            };
        }

        match self.mode {
            Mode::Browsing => self.handle_browsing_key(&key),
            Mode::Filtering => self.handle_filtering_key(&key),
        }
        KeyAction::Continue
    }

    fn handle_browsing_key(&mut self, key: &KeyEvent) {
        if self.keys.filter.matches(key) {
            self.enter_filter();
        } else if self.keys.up.matches(key) {
            self.move_up();
        } else if self.keys.down.matches(key) {
            self.move_down();
        } else if self.keys.toggle_select.matches(key) {
            self.toggle_current();
        } else if self.keys.hide_toggle.matches(key) {
            self.toggle_hide_unselected();
        }
    }

    fn handle_filtering_key(&mut self, key: &KeyEvent) {
        // The filter key cannot appear in a file name, so it is not typed
        if self.keys.filter.matches(key) {
            return;
        }
        if self.keys.backspace.matches(key) {
            self.pop_filter_char();
        } else if let Some(c) = printable_char(key) {
            self.push_filter_char(c);
        }
    }
}
