// ABOUTME: TUI module: ratatui full-screen interface for content-studio.
// ABOUTME: Style picker, prompt editor, content pane, history list, toast, and status bar.

pub mod input;
pub mod state;
pub mod ui;
pub mod widgets;

pub use state::*;
