// ABOUTME: Style preset table: the fixed set of writing personas offered in the picker.
// ABOUTME: Built-in presets are compiled in; custom presets from config are appended after them.

use serde::Serialize;

/// A named writing persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylePreset {
    pub id: String,
    pub display_name: String,
    pub description: Option<String>,
}

impl StylePreset {
    pub fn new(id: &str, display_name: &str, description: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            description: description.map(str::to_string),
        }
    }
}

const BUILTIN_PRESETS: &[(&str, &str, &str)] = &[
    (
        "tim-ferriss",
        "Super Writer GPT (Tim Ferriss Style)",
        "Experiments, 80/20 thinking, and minimum effective doses.",
    ),
    (
        "tim-ferriss-james-clear",
        "Super Writer GPT (Tim Ferriss Style) + James Clear (20%)",
        "Ferriss-style exploration blended with habit and systems design.",
    ),
    (
        "shane-parrish",
        "Insight Writer GPT (Shane Parrish Style)",
        "Mental models, first principles, and second-order effects.",
    ),
    (
        "mark-manson",
        "Brutally Honest GPT (Mark Manson Style)",
        "Blunt, irreverent, and focused on what actually matters.",
    ),
    (
        "david-perell",
        "Idea Curator GPT (David Perell Style)",
        "Networked internet writing and idea curation.",
    ),
];

/// Ordered, read-only collection of style presets.
#[derive(Debug, Clone, Default)]
pub struct StylePresetTable {
    presets: Vec<StylePreset>,
}

impl StylePresetTable {
    /// The five compiled-in presets.
    pub fn builtin() -> Self {
        let presets = BUILTIN_PRESETS
            .iter()
            .map(|(id, name, description)| StylePreset::new(id, name, Some(description)))
            .collect();
        Self { presets }
    }

    /// Append a preset. Returns false (and leaves the table untouched) if the id is taken.
    pub fn insert(&mut self, preset: StylePreset) -> bool {
        if self.get(&preset.id).is_some() {
            return false;
        }
        self.presets.push(preset);
        true
    }

    pub fn get(&self, id: &str) -> Option<&StylePreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Display name for an id, or None when the id is unknown.
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.get(id).map(|p| p.display_name.as_str())
    }

    /// Position of a preset in picker order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StylePreset> {
        self.presets.iter()
    }

    pub fn at(&self, index: usize) -> Option<&StylePreset> {
        self.presets.get(index)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_five_presets_in_order() {
        let table = StylePresetTable::builtin();
        assert_eq!(table.len(), 5);
        let ids: Vec<&str> = table.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "tim-ferriss",
                "tim-ferriss-james-clear",
                "shane-parrish",
                "mark-manson",
                "david-perell",
            ]
        );
    }

    #[test]
    fn lookup_by_id() {
        let table = StylePresetTable::builtin();
        assert_eq!(
            table.display_name("mark-manson"),
            Some("Brutally Honest GPT (Mark Manson Style)")
        );
        assert_eq!(table.position("shane-parrish"), Some(2));
    }

    #[test]
    fn unknown_id_is_absent_not_error() {
        let table = StylePresetTable::builtin();
        assert!(table.get("nope").is_none());
        assert_eq!(table.display_name(""), None);
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut table = StylePresetTable::builtin();
        assert!(!table.insert(StylePreset::new("tim-ferriss", "Again", None)));
        assert_eq!(table.len(), 5);

        assert!(table.insert(StylePreset::new("haiku", "Haiku", None)));
        assert_eq!(table.len(), 6);
        assert_eq!(table.at(5).map(|p| p.id.as_str()), Some("haiku"));
    }
}
