//! Semantic color constants for consistent TUI styling.

use ratatui::prelude::*;

pub const PROMPT_COLOR: Color = Color::Green;
pub const CURSOR_COLOR: Color = Color::Cyan;
pub const SELECTED_COLOR: Color = Color::White;
pub const UNSELECTED_COLOR: Color = Color::DarkGray;
pub const HELP_TEXT: Color = Color::DarkGray;
pub const HEADER_COLOR: Color = Color::White;

/// Style for the `$ ` filter prompt.
pub fn prompt_style() -> Style {
    Style::default().fg(PROMPT_COLOR).add_modifier(Modifier::BOLD)
}

/// Style for the highlighted choice in a dialog.
pub fn highlight_style() -> Style {
    Style::default().fg(PROMPT_COLOR).add_modifier(Modifier::BOLD)
}

/// Style for list entries depending on whether they are selected.
pub fn item_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(SELECTED_COLOR)
    } else {
        Style::default().fg(UNSELECTED_COLOR)
    }
}
