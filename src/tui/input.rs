// ABOUTME: Keyboard input handling for the TUI: translates key events into actions.
// ABOUTME: Editing and navigation mutate state directly; generate/export/quit go back to the loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::tui::state::{Focus, TuiState};

const PAGE_SCROLL: u16 = 10;

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// User asked for a generation.
    Generate,
    /// User asked to export the current content.
    Export,
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current TUI state and return the resulting action.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    debug!(code = ?key.code, modifiers = ?key.modifiers, focus = ?state.focus, "key");

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return InputResult::Quit,
            KeyCode::Char('g') => return InputResult::Generate,
            KeyCode::Char('e') | KeyCode::Char('s') => return InputResult::Export,
            KeyCode::Char('u') if state.focus == Focus::Prompt => {
                state.clear_input();
                return InputResult::None;
            }
            _ => {}
        }
    }

    // PageUp/PageDown always scroll the content pane, regardless of focus.
    if handle_scroll_key(state, key.code) {
        return InputResult::None;
    }

    match key.code {
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return InputResult::None;
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            return InputResult::None;
        }
        KeyCode::Esc => return InputResult::Quit,
        _ => {}
    }

    match state.focus {
        Focus::Style => handle_style_key(state, key),
        Focus::Prompt => handle_prompt_key(state, key),
        Focus::History => handle_history_key(state, key),
    }
}

fn handle_scroll_key(state: &mut TuiState, key: KeyCode) -> bool {
    match key {
        KeyCode::PageUp => {
            state.content_scroll = state.content_scroll.saturating_sub(PAGE_SCROLL);
            true
        }
        KeyCode::PageDown => {
            state.content_scroll = state.content_scroll.saturating_add(PAGE_SCROLL);
            true
        }
        _ => false,
    }
}

/// Handle key events while the style picker has focus.
fn handle_style_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
            state.select_style_offset(false);
            InputResult::None
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
            state.select_style_offset(true);
            InputResult::None
        }
        KeyCode::Enter => {
            state.focus = Focus::Prompt;
            InputResult::None
        }
        _ => InputResult::None,
    }
}

/// Handle key events while the prompt editor has focus.
fn handle_prompt_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        // Shift+Enter or Alt+Enter inserts a newline into the prompt.
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            state.insert_char_at_cursor('\n');
            InputResult::None
        }
        KeyCode::Enter => InputResult::Generate,
        KeyCode::Char(c) => {
            state.insert_char_at_cursor(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace_char();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete_char_at_cursor();
            InputResult::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputResult::None
        }
        _ => InputResult::None,
    }
}

/// Handle key events while the history list has focus.
fn handle_history_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_history_offset(false);
            InputResult::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_history_offset(true);
            InputResult::None
        }
        KeyCode::Enter => {
            state.restore_selected();
            InputResult::None
        }
        _ => InputResult::None,
    }
}
