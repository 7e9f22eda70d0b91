use std::time::Duration;

use crate::api::{AiReasoning, Reason};

pub const DEFAULT_REASON_ICON: &str = "📌";
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    High,
    Medium,
    Low,
}

impl SeverityTier {
    /// Unrecognized values fall to `Low`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReasonCard {
    pub title: String,
    pub description: String,
    pub tier: SeverityTier,
    pub icon: String,
    pub evidence: Vec<String>,
    pub reveal_delay: Duration,
}

impl ReasonCard {
    fn new(position: usize, reason: &Reason) -> Self {
        Self {
            title: reason.title.clone(),
            description: reason.description.clone(),
            tier: SeverityTier::parse(&reason.severity),
            icon: reason
                .icon
                .as_deref()
                .filter(|i| !i.is_empty())
                .unwrap_or(DEFAULT_REASON_ICON)
                .to_string(),
            evidence: reason.evidence.clone(),
            reveal_delay: REVEAL_STAGGER * position as u32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReasoningPanel {
    pub summary: String,
    pub reasons: Vec<ReasonCard>,
    pub severity_score: Option<u32>,
    pub total_indicators: Option<u32>,
}

impl ReasoningPanel {
    pub fn new(reasoning: &AiReasoning) -> Self {
        Self {
            summary: reasoning.summary.clone(),
            reasons: reasoning
                .reasons
                .iter()
                .enumerate()
                .map(|(i, r)| ReasonCard::new(i, r))
                .collect(),
            severity_score: reasoning.severity_score,
            total_indicators: reasoning.total_indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(title: &str, severity: &str, icon: Option<&str>) -> Reason {
        Reason {
            title: title.to_string(),
            description: String::new(),
            severity: severity.to_string(),
            icon: icon.map(str::to_string),
            evidence: vec!["SHOCKING".to_string()],
        }
    }

    #[test]
    fn order_tiers_and_stagger() {
        let panel = ReasoningPanel::new(&AiReasoning {
            summary: "s".to_string(),
            reasons: vec![
                reason("a", "high", Some("🔴")),
                reason("b", "MEDIUM", None),
                reason("c", "critical", Some("")),
            ],
            severity_score: Some(5),
            total_indicators: None,
        });
        let titles: Vec<_> = panel.reasons.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert_eq!(panel.reasons[0].tier, SeverityTier::High);
        assert_eq!(panel.reasons[1].tier, SeverityTier::Medium);
        assert_eq!(panel.reasons[2].tier, SeverityTier::Low);
        assert_eq!(panel.reasons[1].icon, DEFAULT_REASON_ICON);
        assert_eq!(panel.reasons[2].icon, DEFAULT_REASON_ICON);
        assert_eq!(panel.reasons[2].reveal_delay, Duration::from_millis(200));
        assert_eq!(panel.reasons[0].evidence, ["SHOCKING"]);
    }
}
