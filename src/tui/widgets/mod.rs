// ABOUTME: TUI widget sub-modules for the picker, content pane, history, toast, and status bar.
// ABOUTME: Each widget is a pure rendering function producing ratatui Lines.

pub mod content;
pub mod history;
pub mod notice;
pub mod picker;
pub mod status;
