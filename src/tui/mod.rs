mod app;
pub mod colors;
pub mod dialogs;
pub mod keys;
pub mod state;
mod ui;
pub mod widgets;

pub use app::{
    run_confirmation, run_multi_select, SelectError, SelectOptions, TerminalPrompter,
    DEFAULT_MAX_VISIBLE_ITEMS,
};
pub use dialogs::ConfirmState;
pub use state::{KeyAction, Mode, MultiSelectState};
