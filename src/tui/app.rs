use std::io::{stdout, Stdout};

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::session::Prompter;

use super::dialogs::ConfirmState;
use super::state::{KeyAction, MultiSelectState};
use super::ui::{render_confirmation, render_selection};

/// Default number of list rows shown before paginating
pub const DEFAULT_MAX_VISIBLE_ITEMS: usize = 15;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("no files available to enable")]
    Empty,
    #[error("user aborted")]
    Aborted,
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Options for the interactive selection list
#[derive(Debug, Clone)]
pub struct SelectOptions {
    pub title: Option<String>,
    pub max_visible_items: usize,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            title: None,
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
        }
    }
}

/// Show the multi-select list and return the selected names in selection
/// order. `enabled` names start out selected.
#[instrument(skip_all, fields(items = items.len(), enabled = enabled.len()))]
pub fn run_multi_select(
    items: Vec<String>,
    enabled: &[String],
    options: &SelectOptions,
) -> Result<Vec<String>, SelectError> {
    if items.is_empty() {
        return Err(SelectError::Empty);
    }

    let mut state = MultiSelectState::new(items, enabled);
    if let Some(title) = &options.title {
        state = state.with_title(title.clone());
    }

    let max_items = options.max_visible_items;
    let action = with_terminal(|terminal| {
        run_loop(
            terminal,
            &mut state,
            |frame, state| render_selection(frame, state, max_items),
            MultiSelectState::handle_key,
        )
    })?;

    match action {
        KeyAction::Abort => Err(SelectError::Aborted),
        _ => {
            info!(selected = state.selection().len(), "selection confirmed");
            Ok(state.into_selected())
        }
    }
}

/// Ask a yes/no question. Defaults to yes.
#[instrument(skip_all)]
pub fn run_confirmation(message: &str) -> Result<bool, SelectError> {
    let mut state = ConfirmState::new(message);

    let action = with_terminal(|terminal| {
        run_loop(
            terminal,
            &mut state,
            render_confirmation,
            ConfirmState::handle_key,
        )
    })?;

    match action {
        KeyAction::Abort => Err(SelectError::Aborted),
        _ => {
            info!(choice = state.choice, "confirmation answered");
            Ok(state.choice)
        }
    }
}

/// [`Prompter`] backed by the real terminal
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompter {
    pub options: SelectOptions,
}

impl TerminalPrompter {
    pub fn new(options: SelectOptions) -> Self {
        Self { options }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, available: Vec<String>, enabled: &[String]) -> Result<Vec<String>, SelectError> {
        run_multi_select(available, enabled, &self.options)
    }

    fn confirm(&mut self, message: &str) -> Result<bool, SelectError> {
        run_confirmation(message)
    }
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run `f` with the terminal in raw mode on the alternate screen, restoring
/// it afterwards whatever `f` returns.
fn with_terminal<T>(
    f: impl FnOnce(&mut CrosstermTerminal) -> std::io::Result<T>,
) -> std::io::Result<T> {
    debug!("setting up terminal");
    enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let result = Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
        terminal.clear()?;
        let result = f(&mut terminal);
        terminal.show_cursor()?;
        result
    });

    // Restore terminal
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    debug!("terminal restored");

    result
}

/// Blocking read-evaluate-render loop: draw, wait for one key press, handle
/// it, repeat until the handler returns something other than `Continue`.
fn run_loop<S>(
    terminal: &mut CrosstermTerminal,
    state: &mut S,
    draw: impl Fn(&mut Frame, &S),
    handle_key: impl Fn(&mut S, KeyEvent) -> KeyAction,
) -> std::io::Result<KeyAction> {
    loop {
        terminal.draw(|frame| draw(frame, state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, modifiers = ?key.modifiers, "key");
            match handle_key(state, key) {
                KeyAction::Continue => {}
                done => return Ok(done),
            }
        }
    }
}
