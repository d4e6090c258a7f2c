use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::Text;

use super::keys::{printable_char, KeyBindings};
use super::state::KeyAction;
use super::widgets::confirm_text;

/// State for the yes/no confirmation dialog
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub message: String,
    /// true = yes, false = no
    pub choice: bool,
    keys: KeyBindings,
}

impl ConfirmState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            choice: true,
            keys: KeyBindings::default(),
        }
    }

    pub fn view(&self) -> Text<'static> {
        confirm_text(self)
    }

    /// Handle a key press. On [`KeyAction::Confirm`] the answer is in `choice`.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if self.keys.is_quit(&key) {
            return KeyAction::Abort;
        }
        if self.keys.confirm.matches(&key) {
            return KeyAction::Confirm;
        }

        match key.code {
            KeyCode::Left => self.choice = true,
            KeyCode::Right => self.choice = false,
            _ => match printable_char(&key) {
                Some('y' | 'Y') => {
                    self.choice = true;
                    return KeyAction::Confirm;
                }
                Some('n' | 'N') => {
                    self.choice = false;
                    return KeyAction::Confirm;
                }
                _ => {}
            },
        }
        KeyAction::Continue
    }
}
