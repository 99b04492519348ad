// ABOUTME: Integration tests for the generate/restore/export flow against a real export directory.
// ABOUTME: Exercises the session, renderer, custom styles, and file-system sink together.

use std::sync::Arc;

use chrono::NaiveDate;

use content_studio::config::{Config, CustomStyle, FilenameStyle};
use content_studio::error::{ExportError, StudioError, ValidationError};
use content_studio::export::DirectorySink;
use content_studio::studio::{Severity, Studio};
use content_studio::styles::build_catalog;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn generate_then_export_produces_identical_file() {
    let tmp = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(tmp.path());
    let mut studio = Studio::with_builtin_styles();
    studio.set_style("mark-manson");
    studio.set_prompt("discipline");

    let content = studio.generate().unwrap().content.clone();
    let receipt = studio.export(&sink, FilenameStyle::Date, date()).unwrap();

    assert_eq!(receipt.path, tmp.path().join("content-2025-06-01.md"));
    let bytes = std::fs::read(&receipt.path).unwrap();
    assert_eq!(bytes, content.as_bytes());
    assert_eq!(receipt.bytes, bytes.len());

    let notes = studio.drain_notifications();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "Content generated");
    assert_eq!(notes[1].title, "Content exported");
    assert!(notes.iter().all(|n| n.severity == Severity::Success));
}

#[test]
fn export_before_generate_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(tmp.path().join("exports"));
    let mut studio = Studio::with_builtin_styles();

    let err = studio.export(&sink, FilenameStyle::Date, date()).unwrap_err();

    assert!(matches!(err, StudioError::Export(ExportError::NothingToExport)));
    assert!(!tmp.path().join("exports").exists());
}

#[test]
fn rejected_generation_leaves_previous_result_intact() {
    let mut studio = Studio::with_builtin_styles();
    studio.set_style("david-perell");
    studio.set_prompt("writing online");
    studio.generate().unwrap();
    let before = studio.generated_content().to_string();

    studio.set_prompt("   ");
    let err = studio.generate().unwrap_err();

    assert!(matches!(
        err,
        StudioError::Validation(ValidationError::PromptRequired)
    ));
    assert_eq!(studio.generated_content(), before);
    assert_eq!(studio.history().len(), 1);
}

#[test]
fn restored_entry_exports_with_its_own_prompt() {
    let tmp = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(tmp.path());
    let mut studio = Studio::with_builtin_styles();

    studio.set_style("tim-ferriss");
    studio.set_prompt("Cold Exposure");
    studio.generate().unwrap();
    studio.set_style("shane-parrish");
    studio.set_prompt("Second Order Effects");
    studio.generate().unwrap();

    studio.restore_from_history(1).unwrap();
    let receipt = studio
        .export(&sink, FilenameStyle::PromptSlug, date())
        .unwrap();

    assert_eq!(receipt.filename, "cold-exposure-tim-ferriss.md");
    let written = std::fs::read_to_string(&receipt.path).unwrap();
    assert!(written.starts_with("# Tim Ferriss Style"));
    assert!(written.contains("Cold Exposure"));
}

#[test]
fn custom_styles_from_config_render_and_list() {
    let toml_str = r#"
[[styles]]
id = "newsletter"
name = "Newsletter Voice"
template = "Hey friends,\n\nThis week: {prompt}.\n\nUntil next time."
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let (presets, renderer) = build_catalog(&config.styles).unwrap();
    let mut studio = Studio::new(Arc::new(presets), Arc::new(renderer));

    studio.set_style("newsletter");
    studio.set_prompt("habit stacking");
    let entry = studio.generate().unwrap();

    assert_eq!(
        entry.content,
        "Hey friends,\n\nThis week: habit stacking.\n\nUntil next time."
    );
    assert_eq!(studio.style_name(), Some("Newsletter Voice"));
    assert_eq!(studio.presets().len(), 6);
}

#[test]
fn custom_style_cannot_shadow_builtin() {
    let styles = vec![CustomStyle {
        id: "tim-ferriss".to_string(),
        name: "Impostor".to_string(),
        description: None,
        template: "{prompt}".to_string(),
    }];
    assert!(build_catalog(&styles).is_err());
}
