//! Header component: single top row.
//!
//! App name, analysis server, model status and the active theme. Not
//! focusable.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use factlens_core::api::ModelStatus;

use crate::{app_state::AppState, theme::Palette};

pub struct Header;

fn model_span(status: Option<&ModelStatus>, palette: &Palette) -> Span<'static> {
    match status {
        None => Span::styled("model ?", palette.style_muted()),
        Some(s) if s.model_loaded => Span::styled(
            format!("model {} ●", s.method),
            Style::default().fg(palette.good),
        ),
        Some(s) => Span::styled(
            format!("model {} ○", s.method),
            Style::default().fg(palette.caution),
        ),
    }
}

pub fn build_row(state: &AppState) -> Line<'static> {
    let p = &state.palette;
    let sep = || Span::styled("  ·  ", Style::default().fg(p.separator));
    Line::from(vec![
        Span::styled(
            " factlens",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" fake news detector", p.style_secondary()),
        sep(),
        Span::styled(state.server.clone(), p.style_muted()),
        sep(),
        model_span(state.session.model_status(), p),
        sep(),
        Span::styled(
            format!(
                "{}/{}",
                state.prefs.theme.label(),
                state.prefs.theme_style.label()
            ),
            p.style_muted(),
        ),
    ])
}

impl Header {
    pub fn draw(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Paragraph::new(build_row(state)), area);
    }
}
