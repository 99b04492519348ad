// ABOUTME: Main TUI rendering function: assembles header, picker, prompt, history, content, toast, status.
// ABOUTME: Splits the terminal frame into layout chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::{Focus, TuiState};
use crate::tui::widgets::content::content_lines;
use crate::tui::widgets::history::history_lines;
use crate::tui::widgets::notice::notice_line;
use crate::tui::widgets::picker::picker_lines;
use crate::tui::widgets::status::{StatusBarParams, status_line};

/// Maximum height the prompt editor can grow to (in terminal rows).
const MAX_INPUT_HEIGHT: u16 = 8;

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut TuiState) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(6),    // Body
            Constraint::Length(1), // Notification
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(
            " content studio",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  generate content in various writing styles",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    render_left_column(frame, state, columns[0]);
    render_content(frame, state, columns[1]);

    frame.render_widget(Paragraph::new(notice_line(state.notification.as_ref())), rows[2]);

    let status = status_line(&StatusBarParams {
        style_count: state.studio.presets().len(),
        history_len: state.studio.history().len(),
        export_dir: &state.export_dir,
        session_start: state.session_start,
        generating: state.studio.is_generating(),
    });
    frame.render_widget(Paragraph::new(status), rows[3]);
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", title), border_style))
}

fn render_left_column(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let preset_rows = to_u16(state.studio.presets().len().max(1));
    // +2 accounts for top and bottom borders.
    let input_height = to_u16(
        state
            .input_line_count()
            .saturating_add(2)
            .clamp(3, MAX_INPUT_HEIGHT as usize),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(preset_rows.saturating_add(2)), // Style picker
            Constraint::Length(input_height),                  // Prompt editor
            Constraint::Min(3),                                // History
        ])
        .split(area);

    // Style picker
    let picker = picker_lines(state.studio.presets(), state.studio.style_id());
    let picker_title = if state.studio.style_id().is_empty() {
        "Writing Style (↑/↓ to select)"
    } else {
        "Writing Style"
    };
    frame.render_widget(
        Paragraph::new(picker).block(pane_block(picker_title, state.focus == Focus::Style)),
        chunks[0],
    );

    // Prompt editor
    let prompt_focused = state.focus == Focus::Prompt;
    let input_chunk = chunks[1];
    state.clamp_cursor();
    let cursor_line = state.cursor_line();
    // Last row index inside the borders; scroll so the cursor line stays on screen.
    let max_line = input_chunk.height.saturating_sub(3) as usize;
    let input_scroll = cursor_line.saturating_sub(max_line);

    let prompt_widget = if state.input.is_empty() && !prompt_focused {
        Paragraph::new(Span::styled(
            "Enter your content prompt here...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(state.input.clone()).scroll((to_u16(input_scroll), 0))
    };
    frame.render_widget(
        prompt_widget.block(pane_block("Content Prompt", prompt_focused)),
        input_chunk,
    );

    if prompt_focused && input_chunk.width > 2 && input_chunk.height > 2 {
        let cursor_col = state.cursor_column();

        // Compute the visual (display) width of the text before the cursor on its line.
        let lines = state.input_lines();
        let line_text = lines.get(cursor_line).copied().unwrap_or("");
        let prefix: String = line_text.chars().take(cursor_col).collect();
        let visual_col = UnicodeWidthStr::width(prefix.as_str());

        // Inner area excludes the left and right borders.
        let max_visual_col = input_chunk.width.saturating_sub(3) as usize;
        let clamped_visual_col = visual_col.min(max_visual_col);
        let visible_line = (cursor_line - input_scroll).min(max_line);

        let cursor_x = input_chunk.x + 1 + to_u16(clamped_visual_col);
        let cursor_y = input_chunk.y + 1 + to_u16(visible_line);
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }

    // History
    let history_focused = state.focus == Focus::History;
    let history = history_lines(
        state.studio.history(),
        state.studio.presets(),
        state.history_selected,
        history_focused,
    );
    let history_area = chunks[2];
    // Keep the selected entry (two rows each) in view.
    let visible = history_area.height.saturating_sub(2) as usize;
    let selected_bottom = state.history_selected.saturating_add(1).saturating_mul(2);
    let history_scroll = to_u16(selected_bottom.saturating_sub(visible));
    frame.render_widget(
        Paragraph::new(history)
            .block(pane_block("History", history_focused))
            .scroll((history_scroll, 0)),
        history_area,
    );
}

fn render_content(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let title = match state.studio.style_name() {
        Some(name) if !state.studio.generated_content().is_empty() => {
            format!("Generated Content · {}", name)
        }
        _ => "Generated Content".to_string(),
    };

    let lines = content_lines(
        state.studio.generated_content(),
        state.studio.is_generating(),
    );
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    // Borders take two rows and two columns.
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let total_lines = to_u16(paragraph.line_count(inner_width));
    let max_scroll = total_lines.saturating_sub(inner_height);
    if state.content_scroll > max_scroll {
        state.content_scroll = max_scroll;
    }

    frame.render_widget(
        paragraph
            .block(pane_block(&title, false))
            .scroll((state.content_scroll, 0)),
        area,
    );
}

/// Narrow a row or column count, saturating at the largest terminal coordinate.
fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
