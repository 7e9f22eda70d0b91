use std::collections::BTreeMap;

/// The checklist rows, in display order: `(key, label, icon)`.
pub const PATTERNS: [(&str, &str, &str); 6] = [
    ("clickbait_language", "Clickbait language", "📰"),
    ("anonymous_source", "Anonymous source", "👤"),
    ("exaggerated_claim", "Exaggerated claim", "📈"),
    ("no_evidence", "No evidence", "📋"),
    ("emotional_manipulation", "Emotional manipulation", "🎭"),
    ("urgency_pressure", "Urgency pressure", "⏱️"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRow {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub detected: bool,
}

impl PatternRow {
    pub fn mark(&self) -> &'static str {
        if self.detected {
            "✅"
        } else {
            "⚪"
        }
    }
}

/// Always six rows; keys the service omitted read as not detected and
/// unknown keys are ignored.
pub fn checklist(patterns: &BTreeMap<String, bool>) -> Vec<PatternRow> {
    PATTERNS
        .iter()
        .map(|&(key, label, icon)| PatternRow {
            key,
            label,
            icon,
            detected: patterns.get(key).copied().unwrap_or(false),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_six_rows_even_when_sparse() {
        let mut patterns = BTreeMap::new();
        patterns.insert("no_evidence".to_string(), true);
        patterns.insert("made_up_key".to_string(), true);

        let rows = checklist(&patterns);
        assert_eq!(rows.len(), 6);
        let detected: Vec<_> = rows.iter().filter(|r| r.detected).map(|r| r.key).collect();
        assert_eq!(detected, ["no_evidence"]);
        assert_eq!(rows[0].mark(), "⚪");
        assert_eq!(rows[3].mark(), "✅");

        assert!(checklist(&BTreeMap::new()).iter().all(|r| !r.detected));
    }
}
