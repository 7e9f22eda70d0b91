use crate::api::TrustLevel;

use super::Rgb;

/// Needle rotation in degrees: score 0 → -90°, 100 → +90°.
pub fn needle_angle(trust_score: f64) -> f64 {
    -90.0 + (trust_score / 100.0) * 180.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrustPanel {
    pub score: f64,
    /// Score rounded to one decimal, e.g. `"42.5"`.
    pub score_label: String,
    pub angle: f64,
    pub level: String,
    pub icon: String,
    /// `None` when the service colour is not a `#rrggbb` string.
    pub color: Option<Rgb>,
    pub prediction: Option<String>,
}

impl TrustPanel {
    pub fn new(trust: &TrustLevel, prediction: Option<&str>) -> Self {
        Self {
            score: trust.trust_score,
            score_label: format!("{:.1}", trust.trust_score),
            angle: needle_angle(trust.trust_score),
            level: trust.level.clone(),
            icon: trust.icon.clone(),
            color: Rgb::parse_hex(&trust.color),
            prediction: prediction
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needle_is_affine_in_score() {
        assert_eq!(needle_angle(0.0), -90.0);
        assert_eq!(needle_angle(50.0), 0.0);
        assert_eq!(needle_angle(100.0), 90.0);
        assert_eq!(needle_angle(25.0), -45.0);
    }

    #[test]
    fn panel_formats_score_and_colour() {
        let trust = TrustLevel {
            trust_score: 42.46,
            level: "Medium Risk".to_string(),
            color: "#f59e0b".to_string(),
            icon: "🟡".to_string(),
        };
        let panel = TrustPanel::new(&trust, Some("REAL"));
        assert_eq!(panel.score_label, "42.5");
        assert_eq!(panel.color, Some(Rgb(0xf5, 0x9e, 0x0b)));
        assert_eq!(panel.prediction.as_deref(), Some("REAL"));

        let bare = TrustPanel::new(&TrustLevel::default(), Some("  "));
        assert_eq!(bare.score_label, "0.0");
        assert!(bare.color.is_none());
        assert!(bare.prediction.is_none());
    }
}
