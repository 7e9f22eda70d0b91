//! ResultPane component: the scrollable panel list for the displayed result.
//!
//! Draws every visible panel of the session's `ResultView` top to bottom in
//! the view's fixed order. Owns only view state: scroll offset, when the
//! current result arrived (for the staggered reasoning reveal and the time
//! badge) and the loading spinner frame.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use factlens_core::render::{
    ClaimsPanel, CountUp, EmotionBar, IndicatorsPanel, PanelContent, PatternRow,
    ReasoningPanel, SeverityTier, SocialPanel, SourcePanel, Tone, TrustPanel, WordToken,
    NO_CLAIMS,
};
use factlens_core::session::DisplayedResult;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{rgb_or, Palette},
    widgets::{
        pane_chrome::{pane_chrome, section_heading, Badge},
        progress_bar::bar_span,
    },
};

const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const EMOTION_BAR_WIDTH: usize = 24;
const CONFIDENCE_BAR_WIDTH: usize = 32;
const GAUGE_WIDTH: usize = 31;
const INPUT_LABEL_MAX: usize = 120;

pub struct ResultPane {
    scroll: usize,
    shown_seq: Option<u64>,
    revealed_at: Instant,
    analyzed_at: Option<DateTime<Local>>,
    spinner: usize,
}

impl ResultPane {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            shown_seq: None,
            revealed_at: Instant::now(),
            analyzed_at: None,
            spinner: 0,
        }
    }

    #[cfg(test)]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Notice a newly displayed result: start at the top and restart the
    /// reveal clock.
    fn observe(&mut self, state: &AppState) {
        let seq = state.session.displayed().map(|d| d.seq);
        if seq != self.shown_seq {
            self.shown_seq = seq;
            self.scroll = 0;
            self.revealed_at = Instant::now();
            self.analyzed_at = seq.map(|_| Local::now());
        }
    }
}

impl Default for ResultPane {
    fn default() -> Self {
        Self::new()
    }
}

// ── Line builders ─────────────────────────────────────────────────────────────

/// Every line of the result pane, for a reveal clock at `elapsed`.
pub fn result_lines(
    displayed: &DisplayedResult,
    width: u16,
    elapsed: Duration,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(" Analyzed: ", palette.style_muted()),
        Span::styled(
            ellipsize(&displayed.view.input_label, INPUT_LABEL_MAX),
            palette.style_secondary(),
        ),
    ])];

    for (id, content) in displayed.view.visible() {
        lines.push(Line::default());
        lines.push(section_heading(id.title(), width, palette));
        match content {
            PanelContent::Source(p) => source_lines(p, palette, &mut lines),
            PanelContent::Language(p) => {
                lines.push(Line::from(Span::styled(format!("  {}", p.text), palette.style_default())))
            }
            PanelContent::SocialMedia(p) => social_lines(p, palette, &mut lines),
            PanelContent::TrustMeter(p) => trust_lines(p, palette, &mut lines),
            PanelContent::Reasoning(p) => reasoning_lines(p, elapsed, palette, &mut lines),
            PanelContent::Words(tokens) => lines.push(word_line(tokens, palette)),
            PanelContent::Emotions(bars) => {
                lines.extend(bars.iter().map(|b| emotion_line(b, palette)))
            }
            PanelContent::Summary(text) => {
                lines.push(Line::from(Span::styled(format!("  {}", text), palette.style_default())))
            }
            PanelContent::Confidence(_) => lines.push(confidence_line(&displayed.confidence, palette)),
            PanelContent::Claims(p) => claim_lines(p, palette, &mut lines),
            PanelContent::Patterns(rows) => {
                lines.extend(rows.iter().map(|r| pattern_line(r, palette)))
            }
            PanelContent::Indicators(p) => indicator_lines(p, palette, &mut lines),
        }
    }
    lines
}

fn ellipsize(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let mut out: String = flat.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn source_lines(p: &SourcePanel, palette: &Palette, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::raw(format!("  {} ", p.icon)),
        Span::styled(p.url.clone(), palette.style_accent()),
    ]));
    if let Some(badge) = &p.badge {
        lines.push(Line::from(Span::styled(
            format!("  {}", badge),
            Style::default()
                .fg(palette.caution)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(title) = &p.title {
        lines.push(Line::from(Span::styled(
            format!("  {}", title),
            palette.style_default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(format!("  {}", p.extracted), palette.style_muted())));
}

fn social_lines(p: &SocialPanel, palette: &Palette, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        format!("  📱 {}", p.heading),
        Style::default()
            .fg(palette.caution)
            .add_modifier(Modifier::BOLD),
    )));
    if !p.warning.is_empty() {
        lines.push(Line::from(Span::styled(format!("  {}", p.warning), palette.style_default())));
    }
    for indicator in &p.indicators {
        lines.push(Line::from(Span::styled(
            format!("    • {}", indicator),
            palette.style_secondary(),
        )));
    }
}

/// Horizontal rendering of the needle: `angle` -90..=90 maps across `width`.
pub fn needle_gauge(angle: f64, width: usize) -> String {
    let width = width.max(3);
    let t = ((angle + 90.0) / 180.0).clamp(0.0, 1.0);
    let pos = (t * (width - 1) as f64).round() as usize;
    (0..width)
        .map(|i| {
            if i == pos {
                '●'
            } else if i == 0 {
                '├'
            } else if i == width - 1 {
                '┤'
            } else {
                '─'
            }
        })
        .collect()
}

fn trust_tone(score: f64) -> Tone {
    if score < 40.0 {
        Tone::Danger
    } else if score < 70.0 {
        Tone::Caution
    } else {
        Tone::Good
    }
}

fn trust_lines(p: &TrustPanel, palette: &Palette, lines: &mut Vec<Line<'static>>) {
    let color = rgb_or(p.color, palette.tone(trust_tone(p.score)));
    let mut head = vec![
        Span::raw(format!("  {} ", p.icon)),
        Span::styled(
            p.level.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", p.score_label), Style::default().fg(color)),
        Span::styled("/100", palette.style_muted()),
    ];
    if let Some(prediction) = &p.prediction {
        let fg = if prediction.eq_ignore_ascii_case("fake") {
            palette.danger
        } else {
            palette.good
        };
        head.push(Span::raw("  "));
        head.push(Span::styled(
            format!(" {} ", prediction),
            Style::default()
                .fg(palette.bg)
                .bg(fg)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(head));
    lines.push(Line::from(vec![
        Span::styled("  0 ", palette.style_muted()),
        Span::styled(needle_gauge(p.angle, GAUGE_WIDTH), Style::default().fg(color)),
        Span::styled(" 100", palette.style_muted()),
        Span::styled(format!("   needle {:+.0}°", p.angle), palette.style_muted()),
    ]));
}

fn tier_color(tier: SeverityTier, palette: &Palette) -> ratatui::style::Color {
    match tier {
        SeverityTier::High => palette.danger,
        SeverityTier::Medium => palette.caution,
        SeverityTier::Low => palette.info,
    }
}

fn reasoning_lines(
    p: &ReasoningPanel,
    elapsed: Duration,
    palette: &Palette,
    lines: &mut Vec<Line<'static>>,
) {
    if !p.summary.is_empty() {
        lines.push(Line::from(Span::styled(format!("  {}", p.summary), palette.style_default())));
    }
    let mut stats = Vec::new();
    if let Some(score) = p.severity_score {
        stats.push(format!("severity score {}", score));
    }
    if let Some(total) = p.total_indicators {
        stats.push(format!("{} indicators", total));
    }
    if !stats.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", stats.join(" · ")),
            palette.style_muted(),
        )));
    }

    for card in p.reasons.iter().filter(|c| c.reveal_delay <= elapsed) {
        let color = tier_color(card.tier, palette);
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", card.icon)),
            Span::styled(
                card.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
        if !card.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("     {}", card.description),
                palette.style_secondary(),
            )));
        }
        if !card.evidence.is_empty() {
            let mut tags = vec![Span::raw("     ")];
            for evidence in &card.evidence {
                tags.push(Span::styled(
                    format!("[{}]", evidence),
                    Style::default().fg(palette.accent),
                ));
                tags.push(Span::raw(" "));
            }
            lines.push(Line::from(tags));
        }
    }
}

fn word_line(tokens: &[WordToken], palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(token.text.clone(), palette.word(token.category)));
    }
    Line::from(spans)
}

fn emotion_line(bar: &EmotionBar, palette: &Palette) -> Line<'static> {
    let label = format!("  {} {}", bar.emotion.emoji(), bar.emotion.label());
    let pad = 18usize.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(label, palette.style_default()),
        Span::raw(" ".repeat(pad)),
        bar_span(
            bar.value,
            EMOTION_BAR_WIDTH,
            rgb_or(Some(bar.emotion.color()), palette.accent),
            palette.field_bg,
        ),
        Span::styled(format!(" {}", bar.value_label()), palette.style_secondary()),
    ])
}

fn confidence_line(count: &CountUp, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        bar_span(count.current(), CONFIDENCE_BAR_WIDTH, palette.accent, palette.field_bg),
        Span::styled(
            format!(" {}", count.label()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn claim_lines(p: &ClaimsPanel, palette: &Palette, lines: &mut Vec<Line<'static>>) {
    match p {
        ClaimsPanel::Placeholder => {
            lines.push(Line::from(Span::styled(format!("  {}", NO_CLAIMS), palette.style_muted())))
        }
        ClaimsPanel::Cards(cards) => {
            for card in cards {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {} ", card.icon())),
                    Span::styled(card.claim.clone(), Style::default().fg(palette.tone(card.tone()))),
                ]));
                if !card.status.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("     {}", card.status),
                        palette.style_muted(),
                    )));
                }
            }
        }
    }
}

fn pattern_line(row: &PatternRow, palette: &Palette) -> Line<'static> {
    let style = if row.detected {
        Style::default()
            .fg(palette.danger)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.style_muted()
    };
    Line::from(vec![
        Span::raw(format!("  {} {} ", row.mark(), row.icon)),
        Span::styled(row.label, style),
    ])
}

fn indicator_lines(p: &IndicatorsPanel, palette: &Palette, lines: &mut Vec<Line<'static>>) {
    let row = |label: &str, items: &[String]| {
        Line::from(vec![
            Span::styled(format!("  {}: ", label), palette.style_secondary()),
            Span::styled(items.join(", "), Style::default().fg(palette.caution)),
        ])
    };
    if !p.sensational_words.is_empty() {
        lines.push(row("Sensational words", &p.sensational_words));
    }
    if !p.misleading_phrases.is_empty() {
        lines.push(row("Misleading phrases", &p.misleading_phrases));
    }
    if p.excessive_capitals {
        lines.push(Line::from(Span::styled(
            "  Excessive capital letters",
            Style::default().fg(palette.caution),
        )));
    }
}

/// Rows `lines` occupy once wrapped to `width`.
fn wrapped_rows(lines: &[Line<'_>], width: u16) -> usize {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(width))
        .sum()
}

// ── Component ─────────────────────────────────────────────────────────────────

impl Component for ResultPane {
    fn id(&self) -> ComponentId {
        ComponentId::ResultPane
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => vec![Action::ScrollUp(1)],
            KeyCode::Down | KeyCode::Char('j') => vec![Action::ScrollDown(1)],
            KeyCode::Home | KeyCode::Char('g') => vec![Action::ScrollTop],
            KeyCode::End | KeyCode::Char('G') => vec![Action::ScrollBottom],
            _ => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        match event.kind {
            MouseEventKind::ScrollUp => vec![Action::ScrollUp(3)],
            MouseEventKind::ScrollDown => vec![Action::ScrollDown(3)],
            _ => vec![],
        }
    }

    fn tick(&mut self, state: &AppState) -> Vec<Action> {
        self.observe(state);
        if state.session.is_loading() {
            self.spinner = (self.spinner + 1) % SPINNER_FRAMES.len();
        }
        vec![]
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        match action {
            Action::ScrollUp(n) => self.scroll = self.scroll.saturating_sub(*n),
            // Clamped against the content height on the next draw.
            Action::ScrollDown(n) => self.scroll = self.scroll.saturating_add(*n),
            Action::ScrollTop => self.scroll = 0,
            Action::ScrollBottom => self.scroll = usize::MAX,
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        if area.height == 0 {
            return;
        }
        self.observe(state);
        frame.render_widget(Clear, area);
        let palette = &state.palette;

        let time = self
            .analyzed_at
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default();
        let badge = (!time.is_empty()).then(|| Badge {
            text: time.as_str(),
            color: palette.secondary,
        });
        let block = pane_chrome("Results", Some('2'), focused, badge, palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(displayed) = state.session.displayed() else {
            let hint = if state.session.is_loading() {
                Line::from(Span::styled(
                    format!(
                        " {} {}",
                        SPINNER_FRAMES[self.spinner % SPINNER_FRAMES.len()],
                        state.session.primary_control().label
                    ),
                    palette.style_accent(),
                ))
            } else {
                Line::from(Span::styled(
                    " Results appear here after you press Enter.",
                    palette.style_muted(),
                ))
            };
            frame.render_widget(Paragraph::new(hint), inner);
            return;
        };

        let lines = result_lines(displayed, inner.width, self.revealed_at.elapsed(), palette);
        let total = wrapped_rows(&lines, inner.width);
        let max_scroll = total.saturating_sub(inner.height as usize);
        self.scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.min(u16::MAX as usize) as u16, 0));
        frame.render_widget(paragraph, inner);
    }
}
