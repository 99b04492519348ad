// ABOUTME: Styles module: preset table plus the template registry that renders prompts.
// ABOUTME: Both are built once at startup and shared read-only afterwards.

pub mod presets;
pub mod renderer;

pub use presets::{StylePreset, StylePresetTable};
pub use renderer::{ContentRenderer, Rendered, fallback};

use crate::config::CustomStyle;

/// Error raised when a custom style reuses an existing id.
#[derive(Debug, thiserror::Error)]
#[error("duplicate style id '{0}' in config")]
pub struct DuplicateStyle(pub String);

/// Build the preset table and renderer from the built-ins plus any custom styles.
pub fn build_catalog(
    custom: &[CustomStyle],
) -> Result<(StylePresetTable, ContentRenderer), DuplicateStyle> {
    let mut table = StylePresetTable::builtin();
    let mut renderer = ContentRenderer::builtin();

    for style in custom {
        let preset = StylePreset {
            id: style.id.clone(),
            display_name: style.name.clone(),
            description: style.description.clone(),
        };
        if !table.insert(preset) {
            return Err(DuplicateStyle(style.id.clone()));
        }
        renderer.register_template(&style.id, style.template.clone());
    }

    Ok((table, renderer))
}
