//! TextField: wraps tui-input as the single-line editor for text and URLs.

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::theme::Palette;

#[derive(Debug, PartialEq)]
pub enum FieldAction {
    Changed(String),
    None,
}

pub struct TextField {
    input: Input,
    placeholder: String,
}

impl TextField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: placeholder.into(),
        }
    }

    /// Replace the value when it differs, keeping the cursor otherwise.
    pub fn sync(&mut self, value: &str) {
        if self.input.value() != value {
            self.input = Input::new(value.to_string());
        }
    }

    /// Insert pasted text at the cursor, newlines folded to spaces.
    pub fn paste(&mut self, pasted: &str) -> FieldAction {
        let cursor = self.input.cursor();
        let value = self.input.value();
        let split = value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(value.len());
        let flat: String = pasted
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        let new_value = format!("{}{}{}", &value[..split], flat, &value[split..]);
        let new_cursor = cursor + flat.chars().count();
        self.input = Input::new(new_value).with_cursor(new_cursor);
        FieldAction::Changed(self.input.value().to_string())
    }

    /// Feed an editing key to the input. Enter and Esc are left to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> FieldAction {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => FieldAction::None,
            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(&Event::Key(key));
                if self.input.value() == before {
                    FieldAction::None
                } else {
                    FieldAction::Changed(self.input.value().to_string())
                }
            }
        }
    }

    /// Render the field into a single row of `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect, focused: bool, palette: &Palette) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width.saturating_sub(1) as usize;
        let scroll = self.input.visual_scroll(width);
        let value = self.input.value();
        let display = if value.is_empty() {
            Span::styled(self.placeholder.as_str(), palette.style_muted())
        } else {
            Span::styled(value, palette.style_field())
        };

        let paragraph = Paragraph::new(Line::from(vec![display]))
            .style(palette.style_field())
            .scroll((0, scroll as u16));
        frame.render_widget(paragraph, area);

        if focused {
            let cursor_x = area.x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width - 1), area.y));
        }
    }
}
