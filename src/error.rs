// ABOUTME: Domain error types for the studio: validation, export, and history lookup failures.
// ABOUTME: Every variant is recoverable and is surfaced to the user as a notification.

use thiserror::Error;

/// Input problems detected before a generation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("style required")]
    StyleRequired,
    #[error("prompt required")]
    PromptRequired,
    #[error("generation already in progress")]
    GenerationInProgress,
}

/// Failures while packaging generated content as a file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    NothingToExport,
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Any error a studio action can report.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("no history entry at index {0}")]
    UnknownHistoryEntry(usize),
}
