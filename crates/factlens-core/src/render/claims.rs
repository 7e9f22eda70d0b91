use crate::api::{Claim, ClaimKind};

use super::Tone;

pub const NO_CLAIMS: &str = "No specific claims detected.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimCard {
    pub claim: String,
    pub status: String,
    pub kind: ClaimKind,
}

impl ClaimCard {
    pub fn icon(&self) -> &'static str {
        match self.kind {
            ClaimKind::Suspicious => "❌",
            ClaimKind::Verifiable => "✅",
            ClaimKind::Other => "⚠️",
        }
    }

    pub fn tone(&self) -> Tone {
        match self.kind {
            ClaimKind::Suspicious => Tone::Danger,
            ClaimKind::Verifiable => Tone::Good,
            ClaimKind::Other => Tone::Caution,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimsPanel {
    /// Shows [`NO_CLAIMS`].
    Placeholder,
    Cards(Vec<ClaimCard>),
}

impl ClaimsPanel {
    pub fn new(claims: &[Claim]) -> Self {
        if claims.is_empty() {
            return Self::Placeholder;
        }
        Self::Cards(
            claims
                .iter()
                .map(|c| ClaimCard {
                    claim: c.claim.clone(),
                    status: c.status.clone(),
                    kind: c.kind,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_placeholder() {
        assert_eq!(ClaimsPanel::new(&[]), ClaimsPanel::Placeholder);
    }

    #[test]
    fn cards_keyed_by_kind() {
        let claims = [
            Claim {
                claim: "Miracle cure".to_string(),
                status: "Medically unrealistic".to_string(),
                kind: ClaimKind::Suspicious,
            },
            Claim {
                claim: "Reported by Reuters".to_string(),
                status: "Verifiable".to_string(),
                kind: ClaimKind::Verifiable,
            },
            Claim {
                claim: "Some say".to_string(),
                status: "Unclear".to_string(),
                kind: ClaimKind::Other,
            },
        ];
        let ClaimsPanel::Cards(cards) = ClaimsPanel::new(&claims) else {
            panic!("expected cards");
        };
        let icons: Vec<_> = cards.iter().map(ClaimCard::icon).collect();
        assert_eq!(icons, ["❌", "✅", "⚠️"]);
        assert_eq!(cards[2].tone(), Tone::Caution);
    }
}
