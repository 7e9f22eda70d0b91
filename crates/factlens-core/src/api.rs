//! Wire contract of the analysis service.
//!
//! Every field other than `trust_level` and `confidence` is optional on the
//! wire; absent collections deserialize to empty and absent objects to `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const PREDICT_PATH: &str = "/predict";
pub const ANALYZE_URL_PATH: &str = "/analyze-url";
pub const TEXT_PROBE_PATH: &str = "/analyze-realtime";
pub const URL_PROBE_PATH: &str = "/analyze-url-realtime";
pub const MODEL_STATUS_PATH: &str = "/model-status";

/// Which input section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    Url,
}

impl InputMode {
    pub fn other(self) -> Self {
        match self {
            Self::Text => Self::Url,
            Self::Url => Self::Text,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Url => "URL",
        }
    }
}

/// One full-analysis submission. Created per submit, dropped after the round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub mode: InputMode,
    pub content: String,
}

impl AnalysisRequest {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            mode: InputMode::Text,
            content: content.into(),
        }
    }

    pub fn url(content: impl Into<String>) -> Self {
        Self {
            mode: InputMode::Url,
            content: content.into(),
        }
    }

    pub fn path(&self) -> &'static str {
        match self.mode {
            InputMode::Text => PREDICT_PATH,
            InputMode::Url => ANALYZE_URL_PATH,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TextBody<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UrlBody<'a> {
    pub url: &'a str,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ── Live probes ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeWarning {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub message: String,
    #[serde(default)]
    pub severity: String,
}

/// `/analyze-realtime` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextProbeResult {
    #[serde(default)]
    pub warnings: Vec<ProbeWarning>,
}

/// `/analyze-url-realtime` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlProbeResult {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_social_media: bool,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Either probe's result, tagged by the channel that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveProbeResult {
    Text(TextProbeResult),
    Url(UrlProbeResult),
}

// ── Model status ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStatus {
    #[serde(default)]
    pub ml_available: bool,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub method: String,
}

// ── Full analysis ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Verdict label (`FAKE` / `REAL`).
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub language: Option<LanguageInfo>,
    #[serde(default)]
    pub social_media: Option<SocialMediaInfo>,
    #[serde(default)]
    pub source: Option<SourceInfo>,
    pub trust_level: TrustLevel,
    pub confidence: f64,
    #[serde(default)]
    pub ai_reasoning: Option<AiReasoning>,
    #[serde(default)]
    pub highlighted_words: Vec<HighlightedWord>,
    #[serde(default)]
    pub emotions: Emotions,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub patterns: BTreeMap<String, bool>,
    #[serde(default)]
    pub indicators: Option<Indicators>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    #[serde(default)]
    pub detected: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaInfo {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub warning: String,
    #[serde(default)]
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_social_media: bool,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub content_length: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustLevel {
    pub trust_score: f64,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiReasoning {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub reasons: Vec<Reason>,
    #[serde(default)]
    pub severity_score: Option<u32>,
    #[serde(default)]
    pub total_indicators: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Kept as the raw string; unknown values fall back to the lowest tier.
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Suspicious,
    Trusted,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightedWord {
    pub index: usize,
    #[serde(rename = "type", default)]
    pub kind: WordCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Emotions {
    #[serde(default)]
    pub fear: f64,
    #[serde(default)]
    pub anger: f64,
    #[serde(default)]
    pub urgency: f64,
    #[serde(default)]
    pub sensational: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClaimKind {
    Suspicious,
    Verifiable,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(default)]
    pub claim: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub kind: ClaimKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub sensational_words: Vec<String>,
    #[serde(default)]
    pub excessive_capitals: bool,
    #[serde(default)]
    pub misleading_phrases: Vec<String>,
}

impl Indicators {
    pub fn is_empty(&self) -> bool {
        self.sensational_words.is_empty()
            && self.misleading_phrases.is_empty()
            && !self.excessive_capitals
    }
}
