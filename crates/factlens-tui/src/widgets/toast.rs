//! Toast: draws the session's current notification in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use factlens_core::toast::{Toast, ToastKind};

use crate::theme::Palette;

fn icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✗",
    }
}

/// Area a toast occupies inside `area`: one row under the top border,
/// right-aligned, capped at half the width.
pub fn toast_area(toast: &Toast, area: Rect) -> Rect {
    let max_width = (area.width / 2).clamp(30, 60).min(area.width);
    let text_w = toast.message.width() as u16;
    let w = text_w.saturating_add(4).min(max_width);
    Rect {
        x: area.x + area.width.saturating_sub(w + 1),
        y: area.y + 1.min(area.height.saturating_sub(1)),
        width: w,
        height: 1.min(area.height),
    }
}

pub fn draw_toast(frame: &mut Frame, area: Rect, toast: Option<&Toast>, palette: &Palette) {
    let Some(toast) = toast else {
        return;
    };
    let rect = toast_area(toast, area);
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    frame.render_widget(Clear, rect);
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} {} ", icon(toast.kind), toast.message),
        Style::default()
            .fg(palette.toast(toast.kind))
            .bg(palette.field_bg)
            .add_modifier(Modifier::BOLD),
    )]));
    frame.render_widget(paragraph, rect);
}
