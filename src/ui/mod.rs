use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::mode::Mode;
use crate::session::Session;

/// Render-side state that the engine knows nothing about.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub lesson_name: String,
    pub scroll_offset: usize,
}

impl View {
    pub fn new(lesson_name: impl Into<String>) -> Self {
        Self {
            lesson_name: lesson_name.into(),
            scroll_offset: 0,
        }
    }

    /// Keep the cursor row inside a viewport of `viewport_height` rows.
    pub fn adjust_scroll(&mut self, cursor_row: usize, viewport_height: usize) {
        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        }
        if viewport_height > 0 && cursor_row >= self.scroll_offset + viewport_height {
            self.scroll_offset = cursor_row - viewport_height + 1;
        }
    }
}

/// Render the session: text area, key hints, status bar.
pub fn draw(frame: &mut Frame, session: &Session, view: &mut View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let (row, _) = session.cursor_position();
    view.adjust_scroll(row, chunks[0].height as usize);

    draw_text_area(frame, session, view, chunks[0]);
    draw_hints(frame, session, chunks[1]);
    draw_status_bar(frame, session, view, chunks[2]);
}

/// The width of the line number gutter, including the trailing space.
fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).to_string().len() as u16;
    digits + 1
}

fn draw_text_area(frame: &mut Frame, session: &Session, view: &View, area: Rect) {
    let text_lines: Vec<&str> = session.text().split('\n').collect();
    let gutter_w = gutter_width(text_lines.len());

    let lines: Vec<Line> = (0..area.height as usize)
        .map(|i| {
            let row = view.scroll_offset + i;
            match text_lines.get(row) {
                Some(content) => Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", row + 1, width = (gutter_w - 1) as usize),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(*content),
                ]),
                None => Line::from(Span::styled("~", Style::default().fg(Color::DarkGray))),
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(Block::default()), area);

    let (row, col) = session.cursor_position();
    let cursor_x = area.x + gutter_w + col as u16;
    let cursor_y = area.y + row.saturating_sub(view.scroll_offset) as u16;
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn draw_hints(frame: &mut Frame, session: &Session, area: Rect) {
    let keys = session.available_keys().join(" ");
    let hint = Line::from(Span::styled(
        format!(" keys: {keys}"),
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(hint), area);
}

fn draw_status_bar(frame: &mut Frame, session: &Session, view: &View, area: Rect) {
    let (row, col) = session.cursor_position();
    let position = format!("{}:{}", row + 1, col + 1);
    let undo = session.history().map_or(0, |h| h.undo_depth());

    let mode_str = format!(" {} ", session.mode());
    let status = format!(" {}  undo:{undo}", view.lesson_name);
    let padding = status_padding(
        area.width,
        &[mode_str.as_str(), status.as_str(), position.as_str()],
    );
    let spacing = " ".repeat(padding);

    let mode_color = match session.mode() {
        Mode::Insert => Color::Green,
        _ => Color::Blue,
    };

    let status_line = Line::from(vec![
        Span::styled(
            mode_str,
            Style::default()
                .bg(mode_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{status}{spacing}{position} "),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Spaces left on a bar of `width` cells after `parts` and one trailing
/// space. Counts characters, not bytes.
fn status_padding(width: u16, parts: &[&str]) -> usize {
    let used: usize = parts.iter().map(|p| p.chars().count()).sum();
    (width as usize).saturating_sub(used + 1)
}
