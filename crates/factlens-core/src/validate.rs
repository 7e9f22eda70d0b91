//! Mode-specific input validators shared by the mode controller and the
//! detection lifecycle.

use thiserror::Error;
use url::Url;

use crate::api::{AnalysisRequest, InputMode};

pub const MIN_TEXT_CHARS: usize = 10;
pub const MAX_TEXT_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter at least {min} characters")]
    TextTooShort { min: usize },
    #[error("Please enter at most {max} characters")]
    TextTooLong { max: usize },
    #[error("Please enter a valid URL")]
    InvalidUrl,
}

/// Cap raw text-box content at `MAX_TEXT_CHARS` characters.
/// Returns `None` when the value already fits.
pub fn truncate_text(raw: &str) -> Option<String> {
    match raw.char_indices().nth(MAX_TEXT_CHARS) {
        Some((byte_idx, _)) => Some(raw[..byte_idx].to_string()),
        None => None,
    }
}

/// Character count shown beside the text box (trimmed, in chars).
pub fn text_char_count(raw: &str) -> usize {
    raw.trim().chars().count()
}

pub fn validate_text(raw: &str) -> Result<String, ValidationError> {
    let text = raw.trim();
    let len = text.chars().count();
    if len < MIN_TEXT_CHARS {
        return Err(ValidationError::TextTooShort {
            min: MIN_TEXT_CHARS,
        });
    }
    if len > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong {
            max: MAX_TEXT_CHARS,
        });
    }
    Ok(text.to_string())
}

/// Absolute `http`/`https` URL with a host.
pub fn is_valid_url(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

pub fn validate_url(raw: &str) -> Result<String, ValidationError> {
    let url = raw.trim();
    if is_valid_url(url) {
        Ok(url.to_string())
    } else {
        Err(ValidationError::InvalidUrl)
    }
}

/// Build the request for `mode` from the current field values.
pub fn build_request(
    mode: InputMode,
    text: &str,
    url: &str,
) -> Result<AnalysisRequest, ValidationError> {
    match mode {
        InputMode::Text => validate_text(text).map(AnalysisRequest::text),
        InputMode::Url => validate_url(url).map(AnalysisRequest::url),
    }
}

/// Whether the primary action should be enabled for the given inputs.
pub fn primary_enabled(mode: InputMode, text: &str, url: &str) -> bool {
    match mode {
        InputMode::Text => validate_text(text).is_ok(),
        InputMode::Url => is_valid_url(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_boundaries() {
        assert!(!primary_enabled(InputMode::Text, &"a".repeat(9), ""));
        assert!(primary_enabled(InputMode::Text, &"a".repeat(10), ""));
        assert!(primary_enabled(InputMode::Text, &"a".repeat(5000), ""));
        assert!(!primary_enabled(InputMode::Text, &"a".repeat(5001), ""));
        // Padding does not count towards the minimum.
        assert!(!primary_enabled(InputMode::Text, "   abcdefghi   ", ""));
    }

    #[test]
    fn truncation_caps_at_limit() {
        assert_eq!(truncate_text(&"a".repeat(5000)), None);
        let cut = truncate_text(&"a".repeat(5001)).unwrap();
        assert_eq!(cut.chars().count(), MAX_TEXT_CHARS);
        assert!(primary_enabled(InputMode::Text, &cut, ""));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let raw = "த".repeat(5003);
        let cut = truncate_text(&raw).unwrap();
        assert_eq!(cut.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://example.com/a?b=c"));
        assert!(is_valid_url("  http://example.com  "));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn build_request_trims_and_reports() {
        let req = build_request(InputMode::Text, "  hello brave world  ", "").unwrap();
        assert_eq!(req.content, "hello brave world");
        assert_eq!(
            build_request(InputMode::Text, "short", ""),
            Err(ValidationError::TextTooShort { min: 10 })
        );
        assert_eq!(
            build_request(InputMode::Url, "", "nope"),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            ValidationError::TextTooShort { min: 10 }.to_string(),
            "Please enter at least 10 characters"
        );
    }
}
