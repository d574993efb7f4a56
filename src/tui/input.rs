//! Key event handling.
//!
//! Navigation goes through the crossterm-actions dispatcher; raw text entry
//! for the value field and the export dialog bypasses it.

use crossterm_actions::{
    AppEvent, EventDispatcher, InputEvent, NavigationEvent, SelectionEvent, TuiEvent,
    emacs_defaults,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::state::TuiState;

/// What the run loop should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Write the rig state to the export path
    Export,
    None,
}

pub struct EventHandler {
    dispatcher: EventDispatcher<TuiEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            dispatcher: EventDispatcher::new(emacs_defaults()),
        }
    }

    pub fn handle(&self, key: KeyEvent, state: &mut TuiState) -> Action {
        // Modal surfaces swallow everything
        if state.show_help {
            state.show_help = false;
            return Action::None;
        }
        if state.show_export {
            return export_dialog_key(key, state);
        }
        if state.editing_text {
            return text_entry_key(key, state);
        }

        if let Some(event) = self.dispatcher.dispatch(&key) {
            return self.dispatch_event(event, state);
        }

        // Typing straight into the value field starts an edit
        if state.is_text_field()
            && let KeyCode::Char(_) = key.code
        {
            begin_edit(state);
            return text_entry_key(key, state);
        }

        Action::None
    }

    fn dispatch_event(&self, event: TuiEvent, state: &mut TuiState) -> Action {
        match event {
            TuiEvent::App(AppEvent::Quit) => return Action::Quit,
            TuiEvent::App(AppEvent::Help) => state.show_help = !state.show_help,
            TuiEvent::App(AppEvent::Refresh) => state.reset(),

            TuiEvent::Navigation(NavigationEvent::Down)
            | TuiEvent::Selection(SelectionEvent::Next) => {
                state.editing_text = false;
                state.focus_next();
            }
            TuiEvent::Navigation(NavigationEvent::Up)
            | TuiEvent::Selection(SelectionEvent::Prev) => {
                state.editing_text = false;
                state.focus_prev();
            }
            TuiEvent::Navigation(NavigationEvent::Left) => {
                if !state.is_text_field() {
                    state.adjust_intensity(-1.0);
                }
            }
            TuiEvent::Navigation(NavigationEvent::Right) => {
                if !state.is_text_field() {
                    state.adjust_intensity(1.0);
                }
            }

            TuiEvent::Input(InputEvent::Confirm) => {
                if !state.is_text_field() {
                    // Enter on the stepper opens the export dialog
                    state.show_export = true;
                } else if state.editing_text {
                    state.editing_text = false;
                    state.apply_text();
                } else {
                    begin_edit(state);
                }
            }
            TuiEvent::Input(InputEvent::Cancel) => state.editing_text = false,

            _ => {}
        }
        Action::None
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn begin_edit(state: &mut TuiState) {
    state.editing_text = true;
    state.text_cursor = text_len(state);
}

fn text_len(state: &TuiState) -> usize {
    state.focused_text().map(str::len).unwrap_or(0)
}

fn text_entry_key(key: KeyEvent, state: &mut TuiState) -> Action {
    match key.code {
        KeyCode::Char(c) => state.insert_char(c),
        KeyCode::Backspace => state.delete_char_before(),
        KeyCode::Delete => state.delete_char_at(),
        KeyCode::Left => state.cursor_left(),
        KeyCode::Right => state.cursor_right(),
        KeyCode::Home => state.text_cursor = 0,
        KeyCode::End => state.text_cursor = text_len(state),
        KeyCode::Enter => {
            state.editing_text = false;
            state.apply_text();
        }
        KeyCode::Esc => state.editing_text = false,
        KeyCode::Tab => {
            state.editing_text = false;
            state.focus_next();
        }
        _ => {}
    }
    Action::None
}

fn export_dialog_key(key: KeyEvent, state: &mut TuiState) -> Action {
    match key.code {
        KeyCode::Char(c) => state.export_path.push(c),
        KeyCode::Backspace => {
            state.export_path.pop();
        }
        KeyCode::Enter => return Action::Export,
        KeyCode::Esc => state.show_export = false,
        _ => {}
    }
    Action::None
}
