use ratatui::{layout::Rect, prelude::*, widgets::Paragraph};

use crate::tui::colors::{highlight_style, HELP_TEXT};
use crate::tui::dialogs::ConfirmState;

pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, state: &ConfirmState) {
    frame.render_widget(Paragraph::new(state.view()), area);
}

pub fn confirm_text(state: &ConfirmState) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = state
        .message
        .lines()
        .map(|line| Line::raw(line.to_string()))
        .collect();
    lines.push(Line::default());

    let (yes_style, no_style) = if state.choice {
        (highlight_style(), Style::default())
    } else {
        (Style::default(), highlight_style())
    };
    lines.push(Line::from(vec![
        Span::styled("[ Yes ]", yes_style),
        Span::raw("  "),
        Span::styled("[ No ]", no_style),
    ]));

    lines.push(Line::default());
    lines.push(Line::styled(
        "arrows: move | enter/y/n: select | esc: abort",
        Style::default().fg(HELP_TEXT),
    ));
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_text_highlights_choice() {
        let mut state = ConfirmState::new("Apply?");
        let text = confirm_text(&state);
        assert_eq!(text.lines[0].spans[0].content, "Apply?");
        assert_eq!(text.lines[2].spans[0].style, highlight_style());

        state.choice = false;
        let text = confirm_text(&state);
        assert_eq!(text.lines[2].spans[0].style, Style::default());
        assert_eq!(text.lines[2].spans[2].style, highlight_style());
    }
}
