// ABOUTME: Style picker widget: one selectable row per style preset.
// ABOUTME: The active style is marked and highlighted; the picker border brightens when focused.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::styles::StylePresetTable;

/// Render the picker rows. `selected_id` is the session's current style.
pub fn picker_lines(presets: &StylePresetTable, selected_id: &str) -> Vec<Line<'static>> {
    presets
        .iter()
        .map(|preset| {
            let active = preset.id == selected_id;
            let (marker, style) = if active {
                (
                    "● ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("○ ", Style::default().fg(Color::White))
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(preset.display_name.clone(), style),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn one_line_per_preset() {
        let table = StylePresetTable::builtin();
        let lines = picker_lines(&table, "");
        assert_eq!(lines.len(), 5);
        assert!(text(&lines[3]).contains("Brutally Honest GPT"));
    }

    #[test]
    fn selected_preset_is_highlighted() {
        let table = StylePresetTable::builtin();
        let lines = picker_lines(&table, "mark-manson");
        assert!(text(&lines[3]).starts_with("● "));
        assert_eq!(lines[3].spans[1].style.bg, Some(Color::Cyan));
        assert!(text(&lines[0]).starts_with("○ "));
        assert_eq!(lines[0].spans[1].style.bg, None);
    }
}
