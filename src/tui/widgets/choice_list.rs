use std::ops::Range;

use ratatui::{layout::Rect, prelude::*, widgets::Paragraph};

use crate::tui::colors::{item_style, prompt_style, CURSOR_COLOR, HEADER_COLOR, HELP_TEXT};
use crate::tui::state::{Mode, MultiSelectState};

const CURSOR_MARKER: &str = "▶";

pub fn render_choice_list(frame: &mut Frame, area: Rect, state: &MultiSelectState, max_items: usize) {
    let rows = (area.height as usize)
        .saturating_sub(chrome_height(state))
        .clamp(1, max_items.max(1));
    frame.render_widget(Paragraph::new(state.view(rows)), area);
}

/// Lines used by everything except the item rows.
fn chrome_height(state: &MultiSelectState) -> usize {
    let filtering = state.mode() == Mode::Filtering;
    let title = if state.title().is_some() { 2 } else { 0 };
    let prompt = if filtering { 2 } else { 0 };
    let separator = if state.title().is_none() && !filtering { 1 } else { 0 };
    title + prompt + separator + 2
}

/// Build the text of the selection list with at most `max_rows` item rows.
pub fn choice_list_text(state: &MultiSelectState, max_rows: usize) -> Text<'static> {
    let max_rows = max_rows.max(1);
    let filtering = state.mode() == Mode::Filtering;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(title) = state.title() {
        lines.push(Line::styled(
            title.to_string(),
            Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::default());
    }

    if filtering {
        lines.push(Line::from(vec![
            Span::styled("$ ", prompt_style()),
            Span::raw(state.filter().to_string()),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ]));
        lines.push(Line::default());
    }

    if state.title().is_none() && !filtering {
        lines.push(Line::default());
    }

    let visible = state.visible_items();
    let window = page_window(visible.len(), state.cursor(), max_rows);
    for (i, name) in visible.iter().enumerate().take(window.end).skip(window.start) {
        let marker = if i == state.cursor() && !filtering { CURSOR_MARKER } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(CURSOR_COLOR)),
            Span::styled(name.to_string(), item_style(state.is_selected(name))),
        ]));
    }

    lines.push(Line::default());
    let paginated = visible.len() > max_rows;
    lines.push(Line::styled(
        help_text(state, visible.len(), paginated.then_some(&window)),
        Style::default().fg(HELP_TEXT),
    ));

    Text::from(lines)
}

/// Rows of a `len`-long list to show so that `cursor` is inside the window.
pub(crate) fn page_window(len: usize, cursor: usize, max_rows: usize) -> Range<usize> {
    if len <= max_rows {
        return 0..len;
    }
    let start = if cursor >= max_rows { cursor + 1 - max_rows } else { 0 };
    let end = (start + max_rows).min(len);
    end.saturating_sub(max_rows)..end
}

fn help_text(state: &MultiSelectState, total: usize, window: Option<&Range<usize>>) -> String {
    let mut help = String::new();
    if let Some(window) = window {
        help.push_str(&format!("{}-{} of {} | ", window.start + 1, window.end, total));
    }

    match state.mode() {
        Mode::Browsing => {
            help.push_str("space: toggle | /: filter");
            if !state.selection().is_empty() {
                help.push_str(if state.hide_unselected() {
                    " | h: show all"
                } else {
                    " | h: linked only"
                });
            }
            help.push_str(" | enter: confirm | esc: abort");
        }
        Mode::Filtering => help.push_str("type to filter | enter: exit filter | esc: abort"),
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::test_helpers::*;
    use crossterm::event::KeyCode;

    fn plain_lines(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_page_window_follows_cursor() {
        assert_eq!(page_window(3, 2, 5), 0..3);
        assert_eq!(page_window(10, 0, 4), 0..4);
        assert_eq!(page_window(10, 3, 4), 0..4);
        assert_eq!(page_window(10, 4, 4), 1..5);
        assert_eq!(page_window(10, 9, 4), 6..10);
    }

    #[test]
    fn test_view_browsing_without_title() {
        let state = state_with(&["a", "b", "c"], &["b"]);
        let lines = plain_lines(&state.view(10));
        assert_eq!(
            lines,
            vec![
                "",
                "  a",
                "▶ b",
                "  c",
                "",
                "space: toggle | /: filter | h: linked only | enter: confirm | esc: abort",
            ]
        );
    }

    #[test]
    fn test_view_with_title_and_no_selection() {
        let state = state_with(&["a"], &[]).with_title("Pick files");
        let lines = plain_lines(&state.view(10));
        assert_eq!(lines[0], "Pick files");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "▶ a");
        assert_eq!(
            lines.last().unwrap(),
            "space: toggle | /: filter | enter: confirm | esc: abort"
        );
    }

    #[test]
    fn test_view_filtering_shows_prompt_without_cursor_marker() {
        let mut state = state_with(&["apple", "banana"], &[]);
        state.handle_key(ch('/'));
        state.handle_key(ch('a'));
        let lines = plain_lines(&state.view(10));
        assert_eq!(lines[0], "$ a ");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "  apple");
        assert_eq!(lines[3], "  banana");
        assert_eq!(lines.last().unwrap(), "type to filter | enter: exit filter | esc: abort");
    }

    #[test]
    fn test_view_hide_mode_hint() {
        let mut state = state_with(&["a", "b"], &["a"]);
        state.handle_key(ch('h'));
        let lines = plain_lines(&state.view(10));
        assert!(lines.last().unwrap().contains("h: show all"));
    }

    #[test]
    fn test_view_paginates_around_cursor() {
        let items: Vec<String> = (0..8).map(|i| format!("item{i}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let mut state = state_with(&refs, &[]);
        for _ in 0..5 {
            state.handle_key(key(KeyCode::Down));
        }

        let lines = plain_lines(&state.view(3));
        assert_eq!(lines[1..4], ["  item3", "  item4", "▶ item5"]);
        assert!(lines.last().unwrap().starts_with("4-6 of 8 | "));
    }

    #[test]
    fn test_view_is_pure() {
        let state = state_with(&["a", "b"], &["a"]);
        let before = (state.cursor(), state.selection().order().to_vec());
        let _ = state.view(1);
        assert_eq!((state.cursor(), state.selection().order().to_vec()), before);
    }

    #[test]
    fn test_selected_and_unselected_styles_differ() {
        let state = state_with(&["a", "b"], &["a"]);
        let text = state.view(10);
        let selected_style = text.lines[1].spans[1].style;
        let unselected_style = text.lines[2].spans[1].style;
        assert_ne!(selected_style, unselected_style);
    }
}
