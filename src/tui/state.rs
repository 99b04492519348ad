// ABOUTME: TUI state: focus, prompt editor buffer, picker/history cursors, and the current toast.
// ABOUTME: Wraps the Studio session and keeps the editor buffer in sync with its prompt.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::FilenameStyle;
use crate::export::ExportSink;
use crate::studio::{GenerationRequest, Notification, Studio};
use crate::styles::Rendered;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Style,
    Prompt,
    History,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Style => Focus::Prompt,
            Focus::Prompt => Focus::History,
            Focus::History => Focus::Style,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Style => Focus::History,
            Focus::Prompt => Focus::Style,
            Focus::History => Focus::Prompt,
        }
    }
}

/// Full TUI application state.
pub struct TuiState {
    pub studio: Studio,
    pub focus: Focus,
    pub input: String,
    pub cursor_pos: usize,
    /// Highlighted row in the style picker.
    pub style_cursor: usize,
    pub history_selected: usize,
    /// Lines scrolled down from the top of the generated content.
    pub content_scroll: u16,
    pub notification: Option<Notification>,
    pub export_dir: String,
    pub naming: FilenameStyle,
    pub session_start: Instant,
}

impl TuiState {
    /// Create UI state around a session, mirroring whatever it already holds.
    pub fn new(studio: Studio, export_dir: String, naming: FilenameStyle) -> Self {
        let mut state = Self {
            studio,
            focus: Focus::Style,
            input: String::new(),
            cursor_pos: 0,
            style_cursor: 0,
            history_selected: 0,
            content_scroll: 0,
            notification: None,
            export_dir,
            naming,
            session_start: Instant::now(),
        };
        state.load_from_studio();
        if !state.studio.style_id().is_empty() {
            state.focus = Focus::Prompt;
        }
        state
    }

    /// Copy the session's prompt and style into the editor and picker.
    pub fn load_from_studio(&mut self) {
        self.input = self.studio.prompt().to_string();
        self.cursor_pos = self.input_char_len();
        if let Some(idx) = self.studio.presets().position(self.studio.style_id()) {
            self.style_cursor = idx;
        }
    }

    /// Push the editor buffer into the session prompt.
    fn sync_prompt(&mut self) {
        self.studio.set_prompt(self.input.clone());
    }

    /// Move the picker highlight and select that style.
    pub fn select_style_offset(&mut self, forward: bool) {
        let count = self.studio.presets().len();
        if count == 0 {
            return;
        }
        let already_selected = self.studio.presets().position(self.studio.style_id()).is_some();
        if already_selected {
            self.style_cursor = if forward {
                (self.style_cursor + 1) % count
            } else {
                (self.style_cursor + count - 1) % count
            };
        }
        let id = self
            .studio
            .presets()
            .at(self.style_cursor)
            .map(|p| p.id.clone());
        if let Some(id) = id {
            self.studio.set_style(id);
        }
    }

    pub fn select_history_offset(&mut self, forward: bool) {
        let len = self.studio.history().len();
        if len == 0 {
            return;
        }
        self.history_selected = if forward {
            (self.history_selected + 1).min(len - 1)
        } else {
            self.history_selected.saturating_sub(1)
        };
    }

    /// Restore the highlighted history entry into the editor and session.
    pub fn restore_selected(&mut self) {
        if self.studio.restore_from_history(self.history_selected).is_ok() {
            self.load_from_studio();
            self.content_scroll = 0;
        }
    }

    /// Validate and start a generation; None if validation failed.
    pub fn start_generation(&mut self) -> Option<GenerationRequest> {
        self.sync_prompt();
        let request = self.studio.begin_generation().ok();
        self.pull_notifications();
        request
    }

    /// Commit a finished render.
    pub fn finish_generation(&mut self, rendered: Rendered) {
        self.studio.complete_generation(rendered);
        self.history_selected = 0;
        self.content_scroll = 0;
        self.pull_notifications();
    }

    /// Export the current content.
    pub fn export(&mut self, sink: &dyn ExportSink, date: NaiveDate) {
        // Failures are already queued as notifications.
        if let Err(err) = self.studio.export(sink, self.naming, date) {
            debug!(error = %err, "export not completed");
        }
        self.pull_notifications();
    }

    /// Show the newest queued notification.
    pub fn pull_notifications(&mut self) {
        if let Some(latest) = self.studio.drain_notifications().pop() {
            self.notification = Some(latest);
        }
    }

    /// Clamp the cursor position to the valid character range of the input buffer.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.input_char_len());
    }

    /// Return the current cursor byte index in the UTF-8 input buffer.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.input, self.cursor_pos)
    }

    /// Return the total number of characters in the input buffer.
    pub fn input_char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor and advance by one character.
    pub fn insert_char_at_cursor(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert(byte_index, c);
        self.cursor_pos += 1;
        self.sync_prompt();
    }

    /// Insert a pasted string at the cursor.
    pub fn insert_str_at_cursor(&mut self, text: &str) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert_str(byte_index, text);
        self.cursor_pos += text.chars().count();
        self.sync_prompt();
    }

    /// Delete the character before the cursor (backspace behavior).
    pub fn backspace_char(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }

        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.input, self.cursor_pos - 1);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
        self.sync_prompt();
    }

    /// Delete the character at the cursor (delete behavior).
    pub fn delete_char_at_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.input_char_len() {
            return;
        }

        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.input, self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
        self.sync_prompt();
    }

    /// Clear the whole prompt.
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.sync_prompt();
    }

    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.input_char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_char_len();
    }

    /// The prompt split into lines (always at least one).
    pub fn input_lines(&self) -> Vec<&str> {
        self.input.split('\n').collect()
    }

    pub fn input_line_count(&self) -> usize {
        self.input_lines().len()
    }

    /// Zero-based line index the cursor sits on.
    pub fn cursor_line(&self) -> usize {
        self.input
            .chars()
            .take(self.cursor_pos)
            .filter(|c| *c == '\n')
            .count()
    }

    /// Character column of the cursor within its line.
    pub fn cursor_column(&self) -> usize {
        self.input
            .chars()
            .take(self.cursor_pos)
            .collect::<Vec<_>>()
            .iter()
            .rev()
            .take_while(|c| **c != '\n')
            .count()
    }
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::Severity;

    fn state() -> TuiState {
        TuiState::new(
            Studio::with_builtin_styles(),
            ".".to_string(),
            FilenameStyle::Date,
        )
    }

    #[test]
    fn new_state_starts_on_style_picker() {
        let state = state();
        assert_eq!(state.focus, Focus::Style);
        assert_eq!(state.input, "");
        assert_eq!(state.cursor_pos, 0);
        assert!(state.notification.is_none());
    }

    #[test]
    fn preselected_style_focuses_prompt() {
        let mut studio = Studio::with_builtin_styles();
        studio.set_style("shane-parrish");
        let state = TuiState::new(studio, ".".to_string(), FilenameStyle::Date);
        assert_eq!(state.focus, Focus::Prompt);
        assert_eq!(state.style_cursor, 2);
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Style.next().next().next(), Focus::Style);
        assert_eq!(Focus::Style.prev(), Focus::History);
    }

    #[test]
    fn first_style_move_selects_highlighted_preset() {
        let mut state = state();
        state.select_style_offset(true);
        assert_eq!(state.studio.style_id(), "tim-ferriss");
        state.select_style_offset(true);
        assert_eq!(state.studio.style_id(), "tim-ferriss-james-clear");
        state.select_style_offset(false);
        state.select_style_offset(false);
        assert_eq!(state.studio.style_id(), "david-perell");
    }

    #[test]
    fn editing_keeps_session_prompt_in_sync() {
        let mut state = state();
        for c in "focus".chars() {
            state.insert_char_at_cursor(c);
        }
        assert_eq!(state.studio.prompt(), "focus");
        state.backspace_char();
        assert_eq!(state.studio.prompt(), "focu");
        state.clear_input();
        assert_eq!(state.studio.prompt(), "");
    }

    #[test]
    fn utf8_input_editing_is_safe() {
        let mut state = state();
        state.insert_char_at_cursor('a');
        state.insert_char_at_cursor('🙂');
        state.insert_char_at_cursor('é');
        assert_eq!(state.input, "a🙂é");
        assert_eq!(state.cursor_pos, 3);

        state.move_cursor_left();
        state.backspace_char();
        assert_eq!(state.input, "aé");
        assert_eq!(state.cursor_pos, 1);

        state.delete_char_at_cursor();
        assert_eq!(state.input, "a");
        assert_eq!(state.cursor_pos, 1);
    }

    #[test]
    fn cursor_line_and_column_track_newlines() {
        let mut state = state();
        state.insert_str_at_cursor("ab\ncde");
        assert_eq!(state.input_line_count(), 2);
        assert_eq!(state.cursor_line(), 1);
        assert_eq!(state.cursor_column(), 3);
        state.move_cursor_home();
        assert_eq!(state.cursor_line(), 0);
        assert_eq!(state.cursor_column(), 0);
    }

    #[test]
    fn failed_generation_shows_error_toast() {
        let mut state = state();
        assert!(state.start_generation().is_none());
        let toast = state.notification.as_ref().unwrap();
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.description, "Please select a writing style");
    }

    #[test]
    fn generation_round_trip_through_state() {
        let mut state = state();
        state.select_style_offset(true);
        state.insert_str_at_cursor("morning routines");

        let request = state.start_generation().expect("valid inputs");
        let rendered = request.render(&state.studio.renderer());
        state.content_scroll = 7;
        state.finish_generation(rendered);

        assert!(state.studio.generated_content().contains("morning routines"));
        assert_eq!(state.content_scroll, 0);
        assert_eq!(
            state.notification.as_ref().map(|n| n.title.as_str()),
            Some("Content generated")
        );
    }

    #[test]
    fn restore_selected_reloads_editor() {
        let mut state = state();
        state.select_style_offset(true);
        state.insert_str_at_cursor("first");
        let req = state.start_generation().unwrap();
        state.finish_generation(req.render(&state.studio.renderer()));

        state.select_style_offset(true);
        state.clear_input();
        state.insert_str_at_cursor("second");
        let req = state.start_generation().unwrap();
        state.finish_generation(req.render(&state.studio.renderer()));

        state.select_history_offset(true);
        assert_eq!(state.history_selected, 1);
        state.restore_selected();

        assert_eq!(state.input, "first");
        assert_eq!(state.cursor_pos, 5);
        assert_eq!(state.studio.style_id(), "tim-ferriss");
        assert_eq!(state.style_cursor, 0);
    }

    #[test]
    fn history_selection_is_clamped() {
        let mut state = state();
        state.select_history_offset(true);
        assert_eq!(state.history_selected, 0);
    }

    #[test]
    fn clamp_cursor_handles_out_of_range_positions() {
        let mut state = state();
        state.input = "hi🙂".to_string();
        state.cursor_pos = 999;
        state.clamp_cursor();
        assert_eq!(state.cursor_pos, 3);
        assert_eq!(state.cursor_byte_index(), state.input.len());
    }

    #[test]
    fn failed_export_surfaces_as_toast() {
        struct ReadOnlySink;

        impl ExportSink for ReadOnlySink {
            fn save(
                &self,
                filename: &str,
                _content: &str,
            ) -> Result<std::path::PathBuf, crate::error::ExportError> {
                Err(crate::error::ExportError::Io {
                    path: filename.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                })
            }
        }

        let mut state = state();
        state.studio.set_style("mark-manson");
        state.insert_str_at_cursor("discipline");
        let req = state.start_generation().unwrap();
        state.finish_generation(req.render(&state.studio.renderer()));

        state.export(&ReadOnlySink, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        let toast = state.notification.as_ref().unwrap();
        assert_eq!(toast.title, "Export failed");
        assert_eq!(toast.severity, Severity::Error);
        assert!(!state.studio.generated_content().is_empty());
    }
}
