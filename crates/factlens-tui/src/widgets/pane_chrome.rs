//! PaneChrome: standardized bordered pane with focus styling and badges.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::Palette;

/// A badge shown in the top-right of the pane header (e.g., "FAKE", "12:03").
pub struct Badge<'a> {
    pub text: &'a str,
    pub color: Color,
}

/// Renders a bordered pane with consistent focus styling and optional badge.
pub fn pane_chrome<'a>(
    title: &'a str,
    number_key: Option<char>,
    focused: bool,
    badge: Option<Badge<'a>>,
    palette: &Palette,
) -> Block<'a> {
    let border_style = if focused {
        palette.style_focused_border()
    } else {
        palette.style_unfocused_border()
    };

    let title_style = if focused {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.style_secondary()
    };

    // "[N] title"
    let mut title_spans = Vec::new();
    if let Some(key) = number_key {
        title_spans.push(Span::styled(format!("[{}] ", key), palette.style_muted()));
    }
    title_spans.push(Span::styled(title, title_style));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(title_spans));

    if let Some(b) = badge {
        block.title_top(
            Line::from(Span::styled(
                format!(" {} ", b.text),
                Style::default().fg(b.color).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
    } else {
        block
    }
}

/// Section heading used between panels inside the result pane: " ▸ Title ───".
pub fn section_heading(title: &str, width: u16, palette: &Palette) -> Line<'static> {
    let lead = format!(" ▸ {} ", title);
    let used = lead.chars().count();
    let rule = "─".repeat((width as usize).saturating_sub(used));
    Line::from(vec![
        Span::styled(
            lead,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(rule, Style::default().fg(palette.separator)),
    ])
}
