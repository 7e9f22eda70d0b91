//! Mode controller: which input section is active, the two field values,
//! and the gating of the primary action.

use crate::api::{AnalysisRequest, InputMode};
use crate::validate::{self, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: InputMode,
    text: String,
    url: String,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch the active section. Returns `false` when `mode` was already active.
    pub fn set_mode(&mut self, mode: InputMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Value of the field belonging to `mode`.
    pub fn value(&self, mode: InputMode) -> &str {
        match mode {
            InputMode::Text => &self.text,
            InputMode::Url => &self.url,
        }
    }

    /// Replace the text field, truncating past the character cap.
    /// Returns `true` when truncation happened.
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        match validate::truncate_text(&value) {
            Some(cut) => {
                self.text = cut;
                true
            }
            None => {
                self.text = value;
                false
            }
        }
    }

    pub fn set_url(&mut self, value: impl Into<String>) {
        self.url = value.into();
    }

    /// Empty the active field only.
    pub fn clear_active(&mut self) {
        match self.mode {
            InputMode::Text => self.text.clear(),
            InputMode::Url => self.url.clear(),
        }
    }

    pub fn char_count(&self) -> usize {
        validate::text_char_count(&self.text)
    }

    pub fn primary_enabled(&self) -> bool {
        validate::primary_enabled(self.mode, &self.text, &self.url)
    }

    pub fn request(&self) -> Result<AnalysisRequest, ValidationError> {
        validate::build_request(self.mode, &self.text, &self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gating_follows_active_mode() {
        let mut ctl = ModeController::new();
        ctl.set_text("long enough text here");
        ctl.set_url("not a url");
        assert!(ctl.primary_enabled());

        assert!(ctl.set_mode(InputMode::Url));
        assert!(!ctl.primary_enabled());

        ctl.set_url("https://example.com/story");
        assert!(ctl.primary_enabled());
        assert!(!ctl.set_mode(InputMode::Url));
    }

    #[test]
    fn clear_only_touches_active_field() {
        let mut ctl = ModeController::new();
        ctl.set_text("some words to keep");
        ctl.set_url("https://example.com");
        ctl.set_mode(InputMode::Url);
        ctl.clear_active();
        assert_eq!(ctl.url(), "");
        assert_eq!(ctl.text(), "some words to keep");
    }

    #[test]
    fn oversize_text_is_truncated_and_stays_enabled() {
        let mut ctl = ModeController::new();
        assert!(ctl.set_text("x".repeat(5001)));
        assert_eq!(ctl.char_count(), 5000);
        assert!(ctl.primary_enabled());
        assert!(!ctl.set_text("x".repeat(9)));
        assert!(!ctl.primary_enabled());
    }
}
