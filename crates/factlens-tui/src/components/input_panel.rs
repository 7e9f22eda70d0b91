//! InputPanel component: mode tabs, the active field, character counter
//! and the primary action.
//!
//! The session owns the field values. Each field is re-synced from the
//! session before handling a key and before drawing, so truncation and
//! clears made by the session show up here without extra bookkeeping.

use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use factlens_core::lifecycle::PrimaryControl;
use factlens_core::validate::MAX_TEXT_CHARS;
use factlens_core::InputMode;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::Palette,
    widgets::{
        pane_chrome::pane_chrome,
        text_field::{FieldAction, TextField},
    },
};

const TEXT_PLACEHOLDER: &str = "Paste or type the news text to analyze...";
const URL_PLACEHOLDER: &str = "https://example.com/news/article";

pub struct InputPanel {
    text: TextField,
    url: TextField,
}

impl InputPanel {
    pub fn new() -> Self {
        Self {
            text: TextField::new(TEXT_PLACEHOLDER),
            url: TextField::new(URL_PLACEHOLDER),
        }
    }

    fn field_mut(&mut self, mode: InputMode) -> &mut TextField {
        match mode {
            InputMode::Text => &mut self.text,
            InputMode::Url => &mut self.url,
        }
    }

    fn sync(&mut self, state: &AppState) {
        let session = &state.session;
        self.text.sync(session.text());
        self.url.sync(session.url());
    }

    /// Bracketed paste goes to the active field wherever focus is.
    pub fn paste(&mut self, pasted: &str, state: &AppState) -> Vec<Action> {
        self.sync(state);
        let mode = state.session.mode();
        match self.field_mut(mode).paste(pasted) {
            FieldAction::Changed(value) => vec![edit_action(mode, value)],
            FieldAction::None => vec![],
        }
    }
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn edit_action(mode: InputMode, value: String) -> Action {
    match mode {
        InputMode::Text => Action::EditText(value),
        InputMode::Url => Action::EditUrl(value),
    }
}

fn mode_tabs(active: InputMode, palette: &Palette) -> Line<'static> {
    let tab = |mode: InputMode, label: &'static str| {
        if mode == active {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), palette.style_secondary())
        }
    };
    Line::from(vec![
        tab(InputMode::Text, "📝 Text"),
        Span::raw(" "),
        tab(InputMode::Url, "🔗 URL"),
        Span::styled("   ^T switch", palette.style_muted()),
    ])
}

fn counter(mode: InputMode, chars: usize, palette: &Palette) -> Span<'static> {
    match mode {
        InputMode::Text => {
            let style = if chars >= MAX_TEXT_CHARS {
                Style::default().fg(palette.caution)
            } else {
                palette.style_muted()
            };
            Span::styled(format!(" {} / {} characters", chars, MAX_TEXT_CHARS), style)
        }
        InputMode::Url => Span::styled(" URL mode", palette.style_muted()),
    }
}

fn primary_button(control: PrimaryControl, palette: &Palette) -> Span<'static> {
    let label = format!("[ {} ]", control.label);
    if control.enabled {
        Span::styled(
            label,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, palette.style_muted())
    }
}

impl Component for InputPanel {
    fn id(&self) -> ComponentId {
        ComponentId::InputPanel
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        self.sync(state);
        let mode = state.session.mode();
        match self.field_mut(mode).handle_key(key) {
            FieldAction::Changed(value) => vec![edit_action(mode, value)],
            FieldAction::None => vec![],
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        if area.height == 0 {
            return;
        }
        self.sync(state);
        frame.render_widget(Clear, area);
        let palette = &state.palette;
        let session = &state.session;

        let block = pane_chrome("Input", Some('1'), focused, None, palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(mode_tabs(session.mode(), palette)), rows[0]);

        let mode = session.mode();
        self.field_mut(mode).draw(frame, rows[1], focused, palette);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(28)])
            .split(rows[2]);
        frame.render_widget(
            Paragraph::new(Line::from(counter(mode, session.char_count(), palette))),
            bottom[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(primary_button(session.primary_control(), palette)))
                .right_aligned(),
            bottom[1],
        );
    }
}
