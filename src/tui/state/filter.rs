use tracing::debug;

use super::{Mode, MultiSelectState};

impl MultiSelectState {
    /// Start editing the filter. Existing filter text is kept.
    pub fn enter_filter(&mut self) {
        self.mode = Mode::Filtering;
    }

    /// Stop editing the filter, keeping it applied.
    pub fn exit_filter(&mut self) {
        self.mode = Mode::Browsing;
        self.clamp_cursor();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.update_filtered();
        self.clamp_cursor();
    }

    pub fn pop_filter_char(&mut self) {
        if self.filter.pop().is_some() {
            self.update_filtered();
            self.clamp_cursor();
        }
    }

    fn update_filtered(&mut self) {
        let needle = self.filter.to_lowercase();
        self.filtered = self
            .items_lower
            .iter()
            .enumerate()
            .filter(|(_, item)| item.contains(&needle))
            .map(|(i, _)| i)
            .collect();
        debug!(filter = %self.filter, matches = self.filtered.len(), "filter updated");
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::super::Mode;
    use crossterm::event::KeyCode;

    #[test]
    fn test_filter_single_match() {
        let mut state = state_with(&["apple", "banana", "cherry"], &[]);
        state.handle_key(ch('/'));
        state.handle_key(ch('b'));
        assert_eq!(state.visible_items(), vec!["banana"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_keeps_order() {
        let mut state = state_with(&["Nginx.conf", "site.CONF", "readme"], &[]);
        state.handle_key(ch('/'));
        type_text(&mut state, "ConF");
        assert_eq!(state.visible_items(), vec!["Nginx.conf", "site.CONF"]);
    }

    #[test]
    fn test_filter_matches_exactly_the_containing_items() {
        let items = ["alpha", "Beta", "gamma", "ALPHABET", "delta", "zeta"];
        for filter in ["a", "ta", "ALP", "et", "x", ""] {
            let mut state = state_with(&items, &[]);
            state.handle_key(ch('/'));
            type_text(&mut state, filter);

            let expected: Vec<&str> = items
                .iter()
                .copied()
                .filter(|item| item.to_lowercase().contains(&filter.to_lowercase()))
                .collect();
            assert_eq!(state.visible_items(), expected, "filter {filter:?}");
        }
    }

    #[test]
    fn test_backspace_widens_filter_and_clamps() {
        let mut state = state_with(&["aa", "ab", "b"], &[]);
        state.handle_key(key(KeyCode::Down));
        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.cursor(), 2);

        state.handle_key(ch('/'));
        type_text(&mut state, "ab");
        assert_eq!(state.visible_items(), vec!["ab"]);
        assert_eq!(state.cursor(), 0);

        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.filter(), "a");
        assert_eq!(state.visible_items(), vec!["aa", "ab"]);

        state.handle_key(key(KeyCode::Backspace));
        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.filter(), "");
        assert_eq!(state.visible_items().len(), 3);
    }

    #[test]
    fn test_reentering_filter_keeps_text() {
        let mut state = state_with(&["apple", "banana"], &[]);
        state.handle_key(ch('/'));
        type_text(&mut state, "app");
        state.handle_key(key(KeyCode::Enter));
        assert_eq!(state.mode(), Mode::Browsing);

        state.handle_key(ch('/'));
        assert_eq!(state.mode(), Mode::Filtering);
        assert_eq!(state.filter(), "app");
        state.handle_key(ch('l'));
        assert_eq!(state.filter(), "appl");
    }

    #[test]
    fn test_hide_mode_is_intersection_of_filter_and_selection() {
        let mut state = state_with(&["a1", "b1", "a2", "b2", "a3"], &["a3", "b1", "a1"]);
        state.handle_key(ch('/'));
        state.handle_key(ch('a'));
        state.handle_key(key(KeyCode::Enter));
        state.handle_key(ch('h'));
        assert_eq!(state.visible_items(), vec!["a1", "a3"]);

        state.handle_key(ch('h'));
        assert_eq!(state.visible_items(), vec!["a1", "a2", "a3"]);
    }
}
