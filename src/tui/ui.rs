use ratatui::prelude::*;

use super::dialogs::ConfirmState;
use super::state::MultiSelectState;
use super::widgets::{render_choice_list, render_confirm_dialog};

/// Render the selection list over the whole frame
pub fn render_selection(frame: &mut Frame, state: &MultiSelectState, max_items: usize) {
    let area = frame.area();
    render_choice_list(frame, area, state, max_items);
}

/// Render the confirmation dialog over the whole frame
pub fn render_confirmation(frame: &mut Frame, state: &ConfirmState) {
    let area = frame.area();
    render_confirm_dialog(frame, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::test_helpers::state_with;
    use ratatui::backend::TestBackend;

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_selection_fits_small_terminal() {
        let state = state_with(&["a", "b", "c", "d", "e", "f"], &["e"]);
        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        terminal
            .draw(|frame| render_selection(frame, &state, 15))
            .unwrap();

        // separator, 3 item rows, blank, help
        assert_eq!(row(&terminal, 1), "  c");
        assert_eq!(row(&terminal, 2), "  d");
        assert_eq!(row(&terminal, 3), "▶ e");
        assert!(row(&terminal, 5).starts_with("3-5 of 6"));
    }

    #[test]
    fn test_confirmation_renders_buttons() {
        let state = ConfirmState::new("Apply these changes?");
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal.draw(|frame| render_confirmation(frame, &state)).unwrap();

        assert_eq!(row(&terminal, 0), "Apply these changes?");
        assert_eq!(row(&terminal, 2), "[ Yes ]  [ No ]");
    }
}
