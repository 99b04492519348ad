// ABOUTME: History widget: lists past generations, newest first, with time and style name.
// ABOUTME: The highlighted entry is the one Enter restores.

use chrono::Local;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::studio::HistoryEntry;
use crate::styles::StylePresetTable;

const PROMPT_PREVIEW_CHARS: usize = 48;

/// Render history entries as two lines each: header and prompt preview.
pub fn history_lines(
    entries: &[HistoryEntry],
    presets: &StylePresetTable,
    selected: usize,
    focused: bool,
) -> Vec<Line<'static>> {
    if entries.is_empty() {
        return vec![Line::from(Span::styled(
            "No history yet",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::with_capacity(entries.len() * 2);
    for (idx, entry) in entries.iter().enumerate() {
        let name = presets
            .display_name(&entry.style_id)
            .unwrap_or(entry.style_id.as_str())
            .to_string();
        let time = entry
            .created_at
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();

        let name_style = if focused && idx == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", time), Style::default().fg(Color::DarkGray)),
            Span::styled(name, name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", preview(&entry.prompt)),
            Style::default().fg(Color::Gray),
        )));
    }
    lines
}

/// First line of the prompt, shortened to fit a list row.
fn preview(prompt: &str) -> String {
    let first = prompt.lines().next().unwrap_or("");
    let truncated: String = first.chars().take(PROMPT_PREVIEW_CHARS).collect();
    if truncated.chars().count() < first.chars().count() || prompt.lines().count() > 1 {
        format!("{}...", truncated)
    } else {
        truncated
    }
}
