mod choice_list;
mod confirm_dialog;

pub use choice_list::{choice_list_text, render_choice_list};
pub use confirm_dialog::{confirm_text, render_confirm_dialog};
