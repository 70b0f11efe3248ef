use ratatui::{
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::style::{span_key, span_sep, span_text};

pub fn help_keygen<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Move"), span_sep(),
        span_key("←/→/Space"), span_text(" Key size"), span_sep(),
        span_key("Enter"), span_text(" Press button"), span_sep(),
        span_key("PgUp/PgDn"), span_text(" Scroll keys"), span_sep(),
        span_key("Esc/Ctrl+Q"), span_text(" Quit"),
    ]);
    Paragraph::new(line).block(Block::default().borders(Borders::ALL)).wrap(Wrap { trim: true })
}
