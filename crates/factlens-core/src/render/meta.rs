//! Presence-driven panels: language, social media, source, summary, indicators.

use crate::api::{Indicators, LanguageInfo, SocialMediaInfo, SourceInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePanel {
    pub text: String,
}

impl LanguagePanel {
    /// `None` unless the service reports a detected language.
    pub fn new(info: &LanguageInfo) -> Option<Self> {
        if !info.detected {
            return None;
        }
        let emoji = match info.code.as_str() {
            "ta" | "hi" => "🇮🇳",
            "en" => "🇬🇧",
            _ => "🌐",
        };
        let mut text = format!("{} {} ({})", emoji, info.name, info.code.to_uppercase());
        if info.code == "ta" {
            text.push_str(" - Tamil language detected and analyzed!");
        }
        Some(Self { text })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPanel {
    pub heading: String,
    pub warning: String,
    pub indicators: Vec<String>,
}

impl SocialPanel {
    pub fn new(info: &SocialMediaInfo) -> Self {
        Self {
            heading: format!("{} Content Detected", info.platform),
            warning: info.warning.clone(),
            indicators: info.indicators.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePanel {
    pub icon: &'static str,
    pub url: String,
    /// `"{platform} - Social Media"` for social sources.
    pub badge: Option<String>,
    pub title: Option<String>,
    pub extracted: String,
}

impl SourcePanel {
    pub fn new(source: &SourceInfo) -> Self {
        let badge = source.is_social_media.then(|| {
            format!(
                "{} - Social Media",
                source.platform.as_deref().unwrap_or("Unknown")
            )
        });
        Self {
            icon: if source.is_social_media { "📱" } else { "🔗" },
            url: source.url.clone(),
            badge,
            title: source.title.clone().filter(|t| !t.trim().is_empty()),
            extracted: format!("Content extracted: {} characters", source.content_length),
        }
    }
}

/// `None` when absent, blank, or identical to the input label.
pub fn summary(summary: Option<&str>, input_label: &str) -> Option<String> {
    summary
        .filter(|s| !s.trim().is_empty() && *s != input_label)
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorsPanel {
    pub sensational_words: Vec<String>,
    pub misleading_phrases: Vec<String>,
    pub excessive_capitals: bool,
}

impl IndicatorsPanel {
    pub fn new(indicators: &Indicators) -> Option<Self> {
        if indicators.is_empty() {
            return None;
        }
        Some(Self {
            sensational_words: indicators.sensational_words.clone(),
            misleading_phrases: indicators.misleading_phrases.clone(),
            excessive_capitals: indicators.excessive_capitals,
        })
    }
}
