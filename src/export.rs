// ABOUTME: Markdown export: filename conventions and the sink that writes the artifact.
// ABOUTME: The file-system sink writes atomically via a temporary file and rename.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::FilenameStyle;
use crate::error::ExportError;

/// Maximum number of prompt characters used for a slug filename.
const SLUG_PROMPT_CHARS: usize = 30;

/// Anything that can persist an exported Markdown document.
pub trait ExportSink {
    /// Save `content` under `filename`, returning where it landed.
    fn save(&self, filename: &str, content: &str) -> Result<PathBuf, ExportError>;
}

/// Writes exports into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn save(&self, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(filename);
        let io_err = |source| ExportError::Io {
            path: path.display().to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        let tmp_path = path.with_extension("md.tmp");
        std::fs::write(&tmp_path, content.as_bytes()).map_err(io_err)?;
        std::fs::rename(&tmp_path, &path).map_err(io_err)?;
        Ok(path)
    }
}

/// Pick the export filename for the given naming convention.
pub fn export_filename(style: FilenameStyle, date: NaiveDate, prompt: &str, style_id: &str) -> String {
    match style {
        FilenameStyle::Date => format!("content-{}.md", date.format("%Y-%m-%d")),
        FilenameStyle::PromptSlug => {
            let head: String = prompt.chars().take(SLUG_PROMPT_CHARS).collect();
            let mut slug = slugify(&head);
            if slug.is_empty() {
                slug = "content".to_string();
            }
            if style_id.is_empty() {
                format!("{}.md", slug)
            } else {
                format!("{}-{}.md", slug, slugify(style_id))
            }
        }
    }
}

/// Lowercase ASCII alphanumerics; every other run of characters becomes a single `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
