// ABOUTME: Configuration loading for content-studio.
// ABOUTME: Reads ~/.content-studio/config.toml, falling back to defaults; CLI flags override.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
    pub styles: Vec<CustomStyle>,
}

/// Generation defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Artificial delay before a rendered result is delivered to the UI.
    pub simulated_latency_ms: u64,
    /// Style preselected when the session starts (empty = none).
    pub default_style: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1500,
            default_style: String::new(),
        }
    }
}

/// How exported files are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameStyle {
    /// `content-<YYYY-MM-DD>.md`
    #[default]
    Date,
    /// `<prompt-slug>-<style-id>.md`
    PromptSlug,
}

/// Export destination and naming.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub filename: FilenameStyle,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            filename: FilenameStyle::Date,
        }
    }
}

/// Log file settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file path; defaults to ~/.content-studio/studio.log.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// A user-defined style declared under `[[styles]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomStyle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Template text; every `{prompt}` is replaced by the prompt.
    pub template: String,
}

impl Config {
    /// Load config from ~/.content-studio/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Base directory for studio files.
    pub fn base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".content-studio")
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::base_dir().join("config.toml")
    }

    /// Path of the log file, honoring the configured override.
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::base_dir().join("studio.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.generation.simulated_latency_ms, 1500);
        assert_eq!(config.generation.default_style, "");
        assert_eq!(config.export.directory, PathBuf::from("."));
        assert_eq!(config.export.filename, FilenameStyle::Date);
        assert_eq!(config.logging.level, "info");
        assert!(config.styles.is_empty());
    }

    #[test]
    fn parse_config_toml() {
        let toml_str = r#"
[generation]
simulated_latency_ms = 0
default_style = "mark-manson"

[export]
directory = "/tmp/drafts"
filename = "prompt-slug"

[logging]
level = "debug"
file = "/tmp/studio.log"

[[styles]]
id = "haiku"
name = "Haiku Bot"
description = "Seventeen syllables"
template = "{prompt}\nin five seven five"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.simulated_latency_ms, 0);
        assert_eq!(config.generation.default_style, "mark-manson");
        assert_eq!(config.export.directory, PathBuf::from("/tmp/drafts"));
        assert_eq!(config.export.filename, FilenameStyle::PromptSlug);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.log_path(), PathBuf::from("/tmp/studio.log"));
        assert_eq!(config.styles.len(), 1);
        assert_eq!(config.styles[0].id, "haiku");
        assert_eq!(config.styles[0].description.as_deref(), Some("Seventeen syllables"));
    }

    #[test]
    fn parse_partial_config_uses_defaults() {
        let toml_str = r#"
[export]
filename = "date"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.export.filename, FilenameStyle::Date);
        assert_eq!(config.export.directory, PathBuf::from("."));
        assert_eq!(config.generation.simulated_latency_ms, 1500);
    }

    #[test]
    fn unknown_filename_style_is_rejected() {
        let toml_str = r#"
[export]
filename = "random"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config.generation.simulated_latency_ms, 1500);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[generation\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
