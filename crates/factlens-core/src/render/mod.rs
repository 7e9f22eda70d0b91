//! Rendering engine: a pure projection of one `AnalysisResult` onto the
//! fixed, ordered list of result panels.
//!
//! Every render pass emits one `PanelUpdate` per panel, hidden ones included,
//! so a consumer can replace its whole panel state in one step. Placement is
//! declarative: panels never move, only their visibility changes. The source
//! block therefore always leads, and the social-media panel always sits
//! directly after the language panel, which puts it at the top of the
//! analysis panels whenever language is hidden.

pub mod claims;
pub mod confidence;
pub mod emotions;
pub mod meta;
pub mod patterns;
pub mod reasoning;
pub mod trust;
pub mod words;

use crate::api::AnalysisResult;

pub use claims::{ClaimCard, ClaimsPanel, NO_CLAIMS};
pub use confidence::{CountUp, COUNT_UP_STEPS, COUNT_UP_TICK};
pub use emotions::{Emotion, EmotionBar};
pub use meta::{IndicatorsPanel, LanguagePanel, SocialPanel, SourcePanel};
pub use patterns::{PatternRow, PATTERNS};
pub use reasoning::{ReasonCard, ReasoningPanel, SeverityTier};
pub use trust::{needle_angle, TrustPanel};
pub use words::WordToken;

/// Label used in place of the input text for URL submissions without a title.
pub const ARTICLE_FALLBACK_LABEL: &str = "Article content";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`.
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Semantic colour, resolved against the active theme by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Caution,
    Good,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Source,
    Language,
    SocialMedia,
    TrustMeter,
    Reasoning,
    Words,
    Emotions,
    Summary,
    Confidence,
    Claims,
    Patterns,
    Indicators,
}

impl PanelId {
    pub const ORDER: [PanelId; 12] = [
        PanelId::Source,
        PanelId::Language,
        PanelId::SocialMedia,
        PanelId::TrustMeter,
        PanelId::Reasoning,
        PanelId::Words,
        PanelId::Emotions,
        PanelId::Summary,
        PanelId::Confidence,
        PanelId::Claims,
        PanelId::Patterns,
        PanelId::Indicators,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Source => "Source URL",
            Self::Language => "Language",
            Self::SocialMedia => "Social Media",
            Self::TrustMeter => "Trust Meter",
            Self::Reasoning => "AI Reasoning",
            Self::Words => "Word Analysis",
            Self::Emotions => "Emotional Tone",
            Self::Summary => "Summary",
            Self::Confidence => "Confidence",
            Self::Claims => "Fact Check",
            Self::Patterns => "Pattern Checklist",
            Self::Indicators => "Indicators",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Source(SourcePanel),
    Language(LanguagePanel),
    SocialMedia(SocialPanel),
    TrustMeter(TrustPanel),
    Reasoning(ReasoningPanel),
    Words(Vec<WordToken>),
    Emotions(Vec<EmotionBar>),
    Summary(String),
    /// Target value; the animated counter lives with the session.
    Confidence(f64),
    Claims(ClaimsPanel),
    Patterns(Vec<PatternRow>),
    Indicators(IndicatorsPanel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelUpdate {
    pub id: PanelId,
    /// `None` hides the panel.
    pub content: Option<PanelContent>,
}

impl PanelUpdate {
    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub input_label: String,
    pub panels: Vec<PanelUpdate>,
}

impl ResultView {
    pub fn panel(&self, id: PanelId) -> Option<&PanelContent> {
        self.panels
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.content.as_ref())
    }

    pub fn is_visible(&self, id: PanelId) -> bool {
        self.panel(id).is_some()
    }

    pub fn visible(&self) -> impl Iterator<Item = (PanelId, &PanelContent)> {
        self.panels
            .iter()
            .filter_map(|p| p.content.as_ref().map(|c| (p.id, c)))
    }
}

/// Input label for a URL submission: the article title, else a fallback.
pub fn url_input_label(result: &AnalysisResult) -> String {
    result
        .source
        .as_ref()
        .and_then(|s| s.title.as_deref())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(ARTICLE_FALLBACK_LABEL)
        .to_string()
}

pub fn project(input_label: &str, result: &AnalysisResult) -> ResultView {
    let panels = PanelId::ORDER
        .iter()
        .map(|&id| PanelUpdate {
            id,
            content: panel_content(id, input_label, result),
        })
        .collect();
    ResultView {
        input_label: input_label.to_string(),
        panels,
    }
}

fn panel_content(id: PanelId, input_label: &str, r: &AnalysisResult) -> Option<PanelContent> {
    match id {
        PanelId::Source => r.source.as_ref().map(|s| PanelContent::Source(SourcePanel::new(s))),
        PanelId::Language => r
            .language
            .as_ref()
            .and_then(LanguagePanel::new)
            .map(PanelContent::Language),
        PanelId::SocialMedia => r
            .social_media
            .as_ref()
            .map(|s| PanelContent::SocialMedia(SocialPanel::new(s))),
        PanelId::TrustMeter => Some(PanelContent::TrustMeter(TrustPanel::new(
            &r.trust_level,
            r.prediction.as_deref(),
        ))),
        PanelId::Reasoning => r
            .ai_reasoning
            .as_ref()
            .map(|a| PanelContent::Reasoning(ReasoningPanel::new(a))),
        PanelId::Words => Some(PanelContent::Words(words::highlight(
            input_label,
            &r.highlighted_words,
        ))),
        PanelId::Emotions => Some(PanelContent::Emotions(emotions::bars(&r.emotions))),
        PanelId::Summary => meta::summary(r.summary.as_deref(), input_label).map(PanelContent::Summary),
        PanelId::Confidence => Some(PanelContent::Confidence(r.confidence)),
        PanelId::Claims => Some(PanelContent::Claims(ClaimsPanel::new(&r.claims))),
        PanelId::Patterns => Some(PanelContent::Patterns(patterns::checklist(&r.patterns))),
        PanelId::Indicators => r
            .indicators
            .as_ref()
            .and_then(IndicatorsPanel::new)
            .map(PanelContent::Indicators),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LanguageInfo, SocialMediaInfo, SourceInfo, TrustLevel};

    fn minimal() -> AnalysisResult {
        AnalysisResult {
            trust_level: TrustLevel {
                trust_score: 50.0,
                ..Default::default()
            },
            confidence: 50.0,
            ..Default::default()
        }
    }

    fn visible_ids(view: &ResultView) -> Vec<PanelId> {
        view.visible().map(|(id, _)| id).collect()
    }

    #[test]
    fn minimal_result_shows_only_unconditional_panels() {
        let view = project("some input text", &minimal());
        assert_eq!(view.panels.len(), PanelId::ORDER.len());
        assert_eq!(
            visible_ids(&view),
            vec![
                PanelId::TrustMeter,
                PanelId::Words,
                PanelId::Emotions,
                PanelId::Confidence,
                PanelId::Claims,
                PanelId::Patterns,
            ]
        );
        assert_eq!(
            view.panel(PanelId::Claims),
            Some(&PanelContent::Claims(ClaimsPanel::Placeholder))
        );
    }

    #[test]
    fn social_follows_language_or_leads() {
        let mut result = minimal();
        result.social_media = Some(SocialMediaInfo {
            platform: "Twitter".to_string(),
            ..Default::default()
        });
        result.source = Some(SourceInfo {
            url: "https://x.com/a".to_string(),
            ..Default::default()
        });

        let ids = visible_ids(&project(ARTICLE_FALLBACK_LABEL, &result));
        assert_eq!(&ids[..3], &[PanelId::Source, PanelId::SocialMedia, PanelId::TrustMeter]);

        result.language = Some(LanguageInfo {
            detected: true,
            name: "English".to_string(),
            code: "en".to_string(),
        });
        let ids = visible_ids(&project(ARTICLE_FALLBACK_LABEL, &result));
        assert_eq!(
            &ids[..4],
            &[
                PanelId::Source,
                PanelId::Language,
                PanelId::SocialMedia,
                PanelId::TrustMeter
            ]
        );
    }

    #[test]
    fn projection_is_deterministic() {
        let mut result = minimal();
        result.summary = Some("condensed".to_string());
        let a = project("the original words", &result);
        let b = project("the original words", &result);
        assert_eq!(a, b);
        assert!(a.is_visible(PanelId::Summary));
    }

    #[test]
    fn url_label_prefers_title() {
        let mut result = minimal();
        assert_eq!(url_input_label(&result), ARTICLE_FALLBACK_LABEL);
        result.source = Some(SourceInfo {
            url: "https://a.b".to_string(),
            title: Some("Headline".to_string()),
            ..Default::default()
        });
        assert_eq!(url_input_label(&result), "Headline");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgb::parse_hex("#10b981"), Some(Rgb(0x10, 0xb9, 0x81)));
        assert_eq!(Rgb::parse_hex("10b981"), None);
        assert_eq!(Rgb::parse_hex("#fff"), None);
        assert_eq!(Rgb::parse_hex("#gggggg"), None);
    }
}
