use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use textwrap::wrap;

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::ui::common_nav::esc_to_back;
use crate::ui::layout::centered_rect_abs;
use crate::ui::style::button_spans;

const MAX_WIDTH: u16 = 72;

/// Modal notification with a single OK button.
pub struct AlertScreen {
    title: String,
    message: String,
}

impl AlertScreen {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into() }
    }
}

#[async_trait]
impl ScreenWidget for AlertScreen {
    fn title(&self) -> &str { &self.title }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let inner_width = MAX_WIDTH.min(size.width.saturating_sub(6)).max(10);
        let lines: Vec<Line> = wrap(&self.message, inner_width as usize)
            .into_iter()
            .map(|seg| Line::from(seg.into_owned()))
            .collect();
        let text_height = lines.len() as u16;

        let area = centered_rect_abs(inner_width + 4, text_height + 4, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        f.render_widget(Clear, area);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(self.title()),
            area,
        );
        f.render_widget(Paragraph::new(lines), rows[0]);
        f.render_widget(
            Paragraph::new(Line::from(button_spans("OK", true))).alignment(Alignment::Center),
            rows[1],
        );
    }

    async fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Result<Transition> {
        if let Some(t) = esc_to_back(k) {
            return Ok(t);
        }
        Ok(match k.code {
            KeyCode::Enter | KeyCode::Char(' ') => Transition::Pop,
            _ => Transition::Stay,
        })
    }
}
