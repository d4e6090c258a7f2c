use std::collections::HashMap;

use tracing::debug;

use super::MultiSelectState;

/// Selected names in the order they were picked.
///
/// `index` maps each selected name to its position in `order`, so it doubles
/// as the membership set. Both are updated together on every change.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    order: Vec<String>,
    index: HashMap<String, usize>,
}

impl Selection {
    /// Build a selection from names in order; repeated names are ignored.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut selection = Self::default();
        for name in names {
            selection.insert(name);
        }
        selection
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected names, first selected first.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn into_order(self) -> Vec<String> {
        self.order
    }

    /// Append `name`. Returns false if it was already selected.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.order.len());
        self.order.push(name.to_string());
        true
    }

    /// Remove `name`. Returns false if it was not selected.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(idx) = self.index.remove(name) else {
            return false;
        };
        self.order.remove(idx);
        for (pos, shifted) in self.order.iter().enumerate().skip(idx) {
            if let Some(slot) = self.index.get_mut(shifted) {
                *slot = pos;
            }
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.order.len() == self.index.len()
            && self
                .order
                .iter()
                .enumerate()
                .all(|(pos, name)| self.index.get(name) == Some(&pos))
    }
}

impl MultiSelectState {
    /// Toggle the item under the cursor.
    pub fn toggle_current(&mut self) {
        let Some(name) = self.current_item().map(str::to_string) else {
            return;
        };
        if self.selection.contains(&name) {
            self.deselect(&name);
        } else {
            self.selection.insert(&name);
            debug!(name = %name, selected = self.selection.len(), "selected");
        }
    }

    fn deselect(&mut self, name: &str) {
        let previous_cursor = self.cursor;
        self.selection.remove(name);
        debug!(name = %name, selected = self.selection.len(), "deselected");

        if !self.hide_unselected {
            return;
        }

        // While hiding unselected items the visible list holds only selected ones
        let remaining = self.visible_items().len();
        if remaining == 0 {
            debug!("no selected items left in view, showing all");
            self.hide_unselected = false;
            self.focus_or_clamp(Some(name));
        } else {
            self.cursor = previous_cursor.min(remaining - 1);
        }
    }

    /// Flip between showing all items and only selected ones.
    /// Does nothing while nothing is selected.
    pub fn toggle_hide_unselected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let current = self.current_item().map(str::to_string);
        self.hide_unselected = !self.hide_unselected;
        debug!(hide_unselected = self.hide_unselected, "toggled visibility");
        self.focus_or_clamp(current.as_deref());
    }
}
