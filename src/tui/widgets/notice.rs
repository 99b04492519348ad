// ABOUTME: Notification line widget: the toast shown after generate and export.
// ABOUTME: Success is green, errors are red; an empty line when nothing has happened yet.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::studio::{Notification, Severity};

pub fn notice_line(notification: Option<&Notification>) -> Line<'static> {
    let Some(note) = notification else {
        return Line::from("");
    };

    let color = match note.severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    };

    Line::from(vec![
        Span::styled(
            format!(" {}: ", note.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(note.description.clone(), Style::default().fg(color)),
    ])
}
