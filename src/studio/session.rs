// ABOUTME: Studio session: owns prompt, style, generated content, and history.
// ABOUTME: generate, restore_from_history, and export are the only ways content changes.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::FilenameStyle;
use crate::error::{ExportError, StudioError, ValidationError};
use crate::export::{ExportSink, export_filename};
use crate::studio::notification::Notification;
use crate::styles::{ContentRenderer, Rendered, StylePresetTable};

/// One past generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub style_id: String,
    pub prompt: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of the inputs a generation was started with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub style_id: String,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn render(&self, renderer: &ContentRenderer) -> Rendered {
        renderer.render(&self.style_id, &self.prompt)
    }
}

/// Where the last export landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub filename: String,
    pub path: std::path::PathBuf,
    pub bytes: usize,
}

/// In-memory session state for one run of the studio.
#[derive(Debug)]
pub struct Studio {
    presets: Arc<StylePresetTable>,
    renderer: Arc<ContentRenderer>,
    prompt: String,
    style_id: String,
    generated: String,
    /// Inputs that produced `generated`; export names files from these.
    generated_from: GenerationRequest,
    /// Newest first.
    history: Vec<HistoryEntry>,
    pending: bool,
    notifications: VecDeque<Notification>,
}

impl Studio {
    pub fn new(presets: Arc<StylePresetTable>, renderer: Arc<ContentRenderer>) -> Self {
        Self {
            presets,
            renderer,
            prompt: String::new(),
            style_id: String::new(),
            generated: String::new(),
            generated_from: GenerationRequest::default(),
            history: Vec::new(),
            pending: false,
            notifications: VecDeque::new(),
        }
    }

    /// A studio with the built-in presets and templates.
    pub fn with_builtin_styles() -> Self {
        Self::new(
            Arc::new(StylePresetTable::builtin()),
            Arc::new(ContentRenderer::builtin()),
        )
    }

    pub fn presets(&self) -> &StylePresetTable {
        &self.presets
    }

    pub fn renderer(&self) -> Arc<ContentRenderer> {
        Arc::clone(&self.renderer)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Display name of the selected style, if it is a known preset.
    pub fn style_name(&self) -> Option<&str> {
        self.presets.display_name(&self.style_id)
    }

    pub fn generated_content(&self) -> &str {
        &self.generated
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_generating(&self) -> bool {
        self.pending
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    pub fn set_style(&mut self, id: impl Into<String>) {
        self.style_id = id.into();
    }

    /// Validate the current inputs and mark a generation as pending.
    ///
    /// On failure an error notification is queued and nothing else changes.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, StudioError> {
        if let Err(err) = self.validate() {
            warn!(error = %err, "generation rejected");
            self.notify(Notification::error("Error", validation_message(&err)));
            return Err(err.into());
        }
        self.pending = true;
        Ok(GenerationRequest {
            style_id: self.style_id.clone(),
            prompt: self.prompt.clone(),
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.pending {
            return Err(ValidationError::GenerationInProgress);
        }
        if self.style_id.is_empty() {
            return Err(ValidationError::StyleRequired);
        }
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::PromptRequired);
        }
        Ok(())
    }

    /// Commit a rendered result as the current content and record it in history.
    pub fn complete_generation(&mut self, rendered: Rendered) -> &HistoryEntry {
        let (style_id, prompt, content) = rendered.into_parts();
        info!(style = %style_id, chars = content.chars().count(), "content generated");

        self.pending = false;
        self.generated = content.clone();
        self.generated_from = GenerationRequest {
            style_id: style_id.clone(),
            prompt: prompt.clone(),
        };
        self.history.insert(
            0,
            HistoryEntry {
                style_id,
                prompt,
                content,
                created_at: Utc::now(),
            },
        );
        self.notify(Notification::success(
            "Content generated",
            "Content generated successfully",
        ));
        &self.history[0]
    }

    /// Validate, render, and commit in one step.
    pub fn generate(&mut self) -> Result<&HistoryEntry, StudioError> {
        let request = self.begin_generation()?;
        let rendered = request.render(&self.renderer);
        Ok(self.complete_generation(rendered))
    }

    /// Copy a history entry back into the current fields.
    pub fn restore_from_history(&mut self, index: usize) -> Result<(), StudioError> {
        let entry = self
            .history
            .get(index)
            .ok_or(StudioError::UnknownHistoryEntry(index))?;
        self.style_id = entry.style_id.clone();
        self.prompt = entry.prompt.clone();
        self.generated = entry.content.clone();
        self.generated_from = GenerationRequest {
            style_id: entry.style_id.clone(),
            prompt: entry.prompt.clone(),
        };
        Ok(())
    }

    /// Export the current content through `sink`, named per `naming` on `date`.
    pub fn export(
        &mut self,
        sink: &dyn ExportSink,
        naming: FilenameStyle,
        date: NaiveDate,
    ) -> Result<ExportReceipt, StudioError> {
        if self.generated.is_empty() {
            warn!("export with no content");
            self.notify(Notification::error("Error", "No content to export"));
            return Err(ExportError::NothingToExport.into());
        }

        let source = &self.generated_from;
        let filename = export_filename(naming, date, &source.prompt, &source.style_id);
        match sink.save(&filename, &self.generated) {
            Ok(path) => {
                info!(path = %path.display(), "content exported");
                self.notify(Notification::success(
                    "Content exported",
                    format!("Content exported as Markdown to {}", path.display()),
                ));
                Ok(ExportReceipt {
                    filename,
                    path,
                    bytes: self.generated.len(),
                })
            }
            Err(err) => {
                warn!(error = %err, "export failed");
                self.notify(Notification::error("Export failed", err.to_string()));
                Err(err.into())
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    /// Take every notification raised since the last call, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}

fn validation_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::StyleRequired => "Please select a writing style",
        ValidationError::PromptRequired => "Please enter a content prompt",
        ValidationError::GenerationInProgress => "A generation is already running",
    }
}
