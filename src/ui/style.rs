use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use std::borrow::Cow;

pub fn span_key(s: &'static str) -> Span<'static> {
    Span::styled(s, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}
pub fn span_sep() -> Span<'static> {
    Span::styled("  |  ", Style::default().fg(Color::DarkGray))
}
pub fn span_text(s: &'static str) -> Span<'static> {
    Span::raw(s)
}

const ACCENT_BRACKET: Color = Color::Blue;
const SELECTED_TEXT: Color = Color::Red;
const IDLE_TEXT: Color = Color::Blue;

/// "< " + LABEL + " >"
pub fn button_spans<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Vec<Span<'static>> {
    let label = label.into();
    vec![
        Span::styled("< ", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
        Span::styled(
            label,
            Style::default()
                .fg(if selected { SELECTED_TEXT } else { IDLE_TEXT })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" >", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
    ]
}

/// Same shape, greyed out. A focused disabled button keeps an underline so the
/// user can still see where focus is.
pub fn button_spans_disabled<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Vec<Span<'static>> {
    let label = label.into();
    let mut text = Style::default().fg(Color::Gray);
    if selected {
        text = text.add_modifier(Modifier::UNDERLINED);
    }
    vec![
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(label, text),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]
}

/// Picks the enabled or disabled painter.
pub fn button<S: Into<Cow<'static, str>>>(label: S, selected: bool, enabled: bool) -> Vec<Span<'static>> {
    if enabled {
        button_spans(label, selected)
    } else {
        button_spans_disabled(label, selected)
    }
}
