//! Banner line: the live-warning banner shared by both probe channels.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use factlens_core::banner::{BannerMessage, BannerTone};

use crate::theme::Palette;

fn glyph(tone: BannerTone) -> &'static str {
    match tone {
        BannerTone::Warning => "⚠",
        BannerTone::Social => "📱",
        BannerTone::Ok => "✓",
        BannerTone::Caution => "!",
    }
}

pub fn banner_line(message: Option<&BannerMessage>, palette: &Palette) -> Line<'static> {
    match message {
        None => Line::default(),
        Some(m) => {
            let color = palette.banner(m.tone);
            Line::from(vec![
                Span::styled(
                    format!(" {} ", glyph(m.tone)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(m.text.clone(), Style::default().fg(color)),
            ])
        }
    }
}

pub fn draw_banner(frame: &mut Frame, area: Rect, message: Option<&BannerMessage>, palette: &Palette) {
    frame.render_widget(Paragraph::new(banner_line(message, palette)), area);
}
