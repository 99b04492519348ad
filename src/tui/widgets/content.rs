// ABOUTME: Generated-content widget: renders the current Markdown text into styled Lines.
// ABOUTME: Headings and list items get light highlighting; everything else is shown verbatim.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Render generated content, or a hint when there is none yet.
pub fn content_lines(content: &str, generating: bool) -> Vec<Line<'static>> {
    if generating {
        return vec![Line::from(Span::styled(
            "Generating...",
            Style::default().fg(Color::Yellow),
        ))];
    }

    if content.is_empty() {
        return vec![Line::from(Span::styled(
            "Nothing generated yet. Pick a style, write a prompt, press Enter.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))];
    }

    content.split('\n').map(styled_line).collect()
}

fn styled_line(text: &str) -> Line<'static> {
    if text.starts_with('#') {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else if is_list_item(text) {
        Line::from(Span::styled(text.to_string(), Style::default().fg(Color::White)))
    } else {
        Line::from(Span::raw(text.to_string()))
    }
}

fn is_list_item(text: &str) -> bool {
    let trimmed = text.trim_start();
    if trimmed.starts_with("- ") {
        return true;
    }
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && trimmed[digits..].starts_with(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_shows_hint() {
        let lines = content_lines("", false);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn generating_overrides_content() {
        let lines = content_lines("# Old", true);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "Generating...");
    }

    #[test]
    fn heading_is_bold_cyan() {
        let lines = content_lines("# Title\n\nbody", false);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Cyan));
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[2].spans[0].content, "body");
    }

    #[test]
    fn list_items_are_detected() {
        assert!(is_list_item("- bullet"));
        assert!(is_list_item("12. numbered"));
        assert!(!is_list_item("2024 was a year"));
        assert!(!is_list_item("plain"));
    }

    #[test]
    fn content_is_not_rewritten() {
        let content = "line with <tags> & *stars*";
        let lines = content_lines(content, false);
        assert_eq!(lines[0].spans[0].content, content);
    }
}
