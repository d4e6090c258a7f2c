use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key, optionally with Ctrl held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Shift is ignored (it is already folded into the key code for
    /// characters); Ctrl and Alt must match exactly.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && command_modifiers(key) == self.modifiers
    }
}

/// Keyboard shortcuts for the selection list
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub quit: Vec<KeyBinding>,
    pub confirm: KeyBinding,
    pub filter: KeyBinding,
    pub hide_toggle: KeyBinding,
    pub toggle_select: KeyBinding,
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub backspace: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: vec![KeyBinding::ctrl('c'), KeyBinding::plain(KeyCode::Esc)],
            confirm: KeyBinding::plain(KeyCode::Enter),
            filter: KeyBinding::plain(KeyCode::Char('/')),
            hide_toggle: KeyBinding::plain(KeyCode::Char('h')),
            toggle_select: KeyBinding::plain(KeyCode::Char(' ')),
            up: KeyBinding::plain(KeyCode::Up),
            down: KeyBinding::plain(KeyCode::Down),
            backspace: KeyBinding::plain(KeyCode::Backspace),
        }
    }
}

impl KeyBindings {
    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        self.quit.iter().any(|binding| binding.matches(key))
    }
}

/// The character a key would type into a text field, if any.
pub fn printable_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if command_modifiers(key).is_empty() && !c.is_control() => Some(c),
        _ => None,
    }
}

fn command_modifiers(key: &KeyEvent) -> KeyModifiers {
    key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT)
}
