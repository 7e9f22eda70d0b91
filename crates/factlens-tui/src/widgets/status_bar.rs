//! Status bar: bottom line with the input mode and keybindings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use factlens_core::InputMode;

use crate::action::ComponentId;
use crate::theme::Palette;

fn keys_for(focus: ComponentId) -> &'static str {
    match focus {
        ComponentId::InputPanel => {
            " Enter detect  ^T text/url  ^L clear  ^N another  Tab results  F2 theme  F3 style  Esc quit"
        }
        ComponentId::ResultPane => {
            " ↑↓/jk scroll  PgUp/PgDn page  g/G top/bottom  ^N another  Tab input  F2 theme  F3 style  Esc quit"
        }
    }
}

/// Draw the keybindings footer bar (one row).
pub fn draw_keys_bar(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    focus: ComponentId,
    palette: &Palette,
) {
    let label = match mode {
        InputMode::Text => "TEXT",
        InputMode::Url => "URL",
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(keys_for(focus), palette.style_muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn shows_mode_and_focus_keys() {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        terminal
            .draw(|f| {
                draw_keys_bar(
                    f,
                    f.area(),
                    InputMode::Url,
                    ComponentId::ResultPane,
                    &Palette::default(),
                )
            })
            .unwrap();
        let row: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(row.starts_with(" URL "));
        assert!(row.contains("PgUp/PgDn"));
    }
}
