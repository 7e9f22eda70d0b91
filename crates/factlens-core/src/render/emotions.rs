use crate::api::Emotions;

use super::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Fear,
    Anger,
    Urgency,
    Sensational,
}

impl Emotion {
    pub const ORDER: [Emotion; 4] = [
        Emotion::Fear,
        Emotion::Anger,
        Emotion::Urgency,
        Emotion::Sensational,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Fear => "Fear",
            Self::Anger => "Anger",
            Self::Urgency => "Urgency",
            Self::Sensational => "Sensational",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Fear => "😨",
            Self::Anger => "😡",
            Self::Urgency => "⏰",
            Self::Sensational => "📢",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Fear => Rgb(0xef, 0x44, 0x44),
            Self::Anger => Rgb(0xf9, 0x73, 0x16),
            Self::Urgency => Rgb(0xea, 0xb3, 0x08),
            Self::Sensational => Rgb(0xec, 0x48, 0x99),
        }
    }

    fn value(self, emotions: &Emotions) -> f64 {
        match self {
            Self::Fear => emotions.fear,
            Self::Anger => emotions.anger,
            Self::Urgency => emotions.urgency,
            Self::Sensational => emotions.sensational,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionBar {
    pub emotion: Emotion,
    /// Percentage as sent; not clamped.
    pub value: f64,
}

impl EmotionBar {
    pub fn value_label(&self) -> String {
        format!("{}%", self.value)
    }
}

pub fn bars(emotions: &Emotions) -> Vec<EmotionBar> {
    Emotion::ORDER
        .iter()
        .map(|&emotion| EmotionBar {
            emotion,
            value: emotion.value(emotions),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_order_and_unclamped_values() {
        let emotions = Emotions {
            fear: 10.0,
            anger: 0.0,
            urgency: 25.5,
            sensational: 140.0,
        };
        let bars = bars(&emotions);
        let order: Vec<_> = bars.iter().map(|b| b.emotion).collect();
        assert_eq!(order, Emotion::ORDER.to_vec());
        assert_eq!(bars[2].value_label(), "25.5%");
        assert_eq!(bars[3].value, 140.0);
        assert_eq!(bars[1].value_label(), "0%");
    }
}
