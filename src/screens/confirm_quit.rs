use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::ui::common_nav::esc_to_back;
use crate::ui::layout::centered_rect_abs;
use crate::ui::style;

const MESSAGE: &str = "Quit? Keys that were not copied or downloaded are lost.";

pub struct ConfirmQuitScreen {
    quit_selected: bool,
}

impl ConfirmQuitScreen {
    pub fn new() -> Self {
        Self { quit_selected: false }
    }
}

impl Default for ConfirmQuitScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScreenWidget for ConfirmQuitScreen {
    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let (stay, quit) = ("Don't Quit", "Quit");

        // "< " + label + " >", twice, three spaces apart
        let buttons_len = (4 + stay.len()) + 3 + (4 + quit.len());
        let inner_width = (MESSAGE.len().max(buttons_len) as u16).max(36);

        let area = centered_rect_abs(inner_width + 4, 7, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 4])
            .split(inner);

        let mut spans = style::button_spans(stay, !self.quit_selected);
        spans.push(Span::raw("   "));
        spans.extend(style::button_spans(quit, self.quit_selected));

        f.render_widget(Clear, area);
        f.render_widget(Block::default().borders(Borders::ALL), area);
        f.render_widget(Paragraph::new(MESSAGE).alignment(Alignment::Center), rows[1]);
        f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), rows[3]);
    }

    async fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Result<Transition> {
        if let Some(t) = esc_to_back(k) {
            return Ok(t);
        }
        match k.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char(' ') => {
                self.quit_selected = !self.quit_selected;
            }
            KeyCode::Enter => {
                return Ok(if self.quit_selected { Transition::Quit } else { Transition::Pop });
            }
            _ => {}
        }
        Ok(Transition::Stay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Osc52Clipboard;
    use crossterm::event::KeyModifiers;

    fn ctx() -> AppCtx {
        AppCtx::new(Box::new(Osc52Clipboard::new(Vec::new())))
    }

    #[tokio::test]
    async fn defaults_to_staying() {
        let mut screen = ConfirmQuitScreen::new();
        let t = screen.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut ctx()).await.unwrap();
        assert!(matches!(t, Transition::Pop));
    }

    #[tokio::test]
    async fn toggle_then_enter_quits() {
        let mut ctx = ctx();
        let mut screen = ConfirmQuitScreen::new();
        screen.on_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE), &mut ctx).await.unwrap();
        let t = screen.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut ctx).await.unwrap();
        assert!(matches!(t, Transition::Quit));
    }
}
