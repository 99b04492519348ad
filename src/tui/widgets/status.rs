// ABOUTME: Status bar widget: style count, history size, export target, and session time.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary with key hints.

use std::time::Instant;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct StatusBarParams<'a> {
    pub style_count: usize,
    pub history_len: usize,
    pub export_dir: &'a str,
    pub session_start: Instant,
    pub generating: bool,
}

/// Render the status bar line.
pub fn status_line(params: &StatusBarParams) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(
            format!(" {} styles ", params.style_count),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} in history ", params.history_len),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("export → {} ", params.export_dir),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} ", format_elapsed(params.session_start.elapsed().as_secs())),
            dim,
        ),
    ];

    if params.generating {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled(
            "generating... ",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        "| Tab focus · Enter generate · ^E export · Esc quit",
        dim,
    ));

    Line::from(spans)
}

/// Format a duration in seconds as `Xm YYs`, or `Xh YYm` past an hour.
pub fn format_elapsed(secs: u64) -> String {
    if secs >= 3600 {
        format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
