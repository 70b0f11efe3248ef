use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Header box on top, main box in the middle, help bar at the bottom.
pub struct PageRegions {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub header_inner: Rect,
    pub body_inner: Rect,
}

pub fn page_layout(size: Rect, header_needed: u16, footer_height: u16, page_margin: u16) -> PageRegions {
    let available = size
        .height
        .saturating_sub(2 * page_margin)
        .saturating_sub(footer_height);
    // never let the header starve the body on short terminals
    let header_height = header_needed.min(available / 3).max(3.min(available));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(page_margin)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(size);

    PageRegions {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        header_inner: chunks[0].inner(&Margin { horizontal: 2, vertical: 1 }),
        body_inner: chunks[1].inner(&Margin { horizontal: 1, vertical: 1 }),
    }
}

pub fn centered_rect_abs(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width.saturating_sub(2));
    let h = height.min(r.height.saturating_sub(2));
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}
