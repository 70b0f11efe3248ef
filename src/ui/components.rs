use ratatui::{
    layout::{Alignment, Rect},
    prelude::Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect_abs;

/// Single-line editable text. `cursor` is a byte offset that always sits on a
/// char boundary.
#[derive(Clone, Default)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn with(text: &str) -> Self {
        Self { text: text.into(), cursor: text.len() }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) { self.cursor = 0; }
    pub fn end(&mut self) { self.cursor = self.text.len(); }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }
}

// Bash-style block cursor that covers the char (no shifting)
pub fn field_line_text<'a>(label: &str, field: &TextField, focused: bool) -> Line<'a> {
    let label_s = format!("{label}: ");
    let text = field.text.as_str();
    let cur = field.cursor.min(text.len());
    let label_span = Span::styled(label_s, Style::default().fg(Color::Yellow));

    if !focused {
        return Line::from(vec![label_span, Span::raw(text.to_string())]);
    }

    let (left, rest) = text.split_at(cur);
    let block = |s: &str| {
        Span::styled(
            s.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    if let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];
        Line::from(vec![
            label_span,
            Span::raw(left.to_string()),
            block(&ch.to_string()),
            Span::raw(after.to_string()),
        ])
    } else {
        Line::from(vec![label_span, Span::raw(left.to_string()), block(" ")])
    }
}

/// `Label: ◀ value ▶` selector, arrows highlighted when focused.
pub fn selector_line<'a>(label: &str, value: String, focused: bool, enabled: bool) -> Line<'a> {
    let label_span = Span::styled(format!("{label}: "), Style::default().fg(Color::Yellow));
    let arrow_style = if focused && enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if !enabled {
        Style::default().fg(Color::Gray)
    } else if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        label_span,
        Span::styled("◀ ", arrow_style),
        Span::styled(value, value_style),
        Span::styled(" ▶", arrow_style),
    ])
}

/// Transient notification pinned to the bottom of the screen.
pub fn draw_toast(f: &mut Frame<'_>, size: Rect, message: &str) {
    let width = (message.chars().count() as u16).saturating_add(4);
    let mut area = centered_rect_abs(width, 3, size);
    area.y = size.bottom().saturating_sub(area.height + 1).max(size.y);

    let body = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Green))
        .block(Block::default().borders(Borders::ALL).style(Style::default().bg(Color::Green)));

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}
