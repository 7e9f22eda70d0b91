//! The single live-warning banner shared by both probe channels.

use crate::api::{InputMode, TextProbeResult, UrlProbeResult};

/// Colour family of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    /// Text probe warning.
    Warning,
    /// Valid URL on a social-media platform.
    Social,
    /// Valid URL.
    Ok,
    /// Rejected URL.
    Caution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerMessage {
    pub text: String,
    pub tone: BannerTone,
    /// Channel that wrote the message.
    pub source: InputMode,
}

impl BannerMessage {
    /// `None` means the probe asks for the banner to be hidden.
    pub fn from_text_probe(probe: &TextProbeResult) -> Option<Self> {
        probe.warnings.first().map(|w| Self {
            text: w.message.clone(),
            tone: BannerTone::Warning,
            source: InputMode::Text,
        })
    }

    pub fn from_url_probe(probe: &UrlProbeResult) -> Self {
        let (text, tone) = match (probe.valid, probe.is_social_media, &probe.warning) {
            (true, true, Some(warning)) => (
                format!("{} ⚠️ {}", probe.message, warning),
                BannerTone::Social,
            ),
            (true, true, None) => (probe.message.clone(), BannerTone::Social),
            (true, false, _) => (probe.message.clone(), BannerTone::Ok),
            (false, _, _) => (probe.message.clone(), BannerTone::Caution),
        };
        Self {
            text,
            tone,
            source: InputMode::Url,
        }
    }
}

/// Last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveBanner {
    current: Option<BannerMessage>,
}

impl LiveBanner {
    pub fn show(&mut self, message: BannerMessage) {
        self.current = Some(message);
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    pub fn apply(&mut self, message: Option<BannerMessage>) {
        self.current = message;
    }

    pub fn current(&self) -> Option<&BannerMessage> {
        self.current.as_ref()
    }
}
