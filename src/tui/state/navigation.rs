use super::MultiSelectState;

impl MultiSelectState {
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.visible_items().len();
        if self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    /// Name under the cursor, if the visible list is not empty.
    pub fn current_item(&self) -> Option<&str> {
        self.visible_items().get(self.cursor).copied()
    }

    fn visible_position(&self, name: &str) -> Option<usize> {
        self.visible_items().iter().position(|item| *item == name)
    }

    /// Keep the cursor inside the visible list.
    pub(super) fn clamp_cursor(&mut self) {
        let count = self.visible_items().len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    /// Put the cursor on `name` if it is visible, otherwise clamp.
    pub(super) fn focus_or_clamp(&mut self, name: Option<&str>) {
        match name.and_then(|name| self.visible_position(name)) {
            Some(pos) => self.cursor = pos,
            None => self.clamp_cursor(),
        }
    }
}
