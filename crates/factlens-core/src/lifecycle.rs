//! Detection request lifecycle: `idle → validating → loading → success | failed → idle`.

use crate::api::InputMode;

pub const IDLE_LABEL: &str = "Detect Fake News";
pub const TEXT_LOADING_LABEL: &str = "Analyzing...";
pub const URL_LOADING_LABEL: &str = "Fetching & Analyzing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
    /// Rejected locally; no request was sent.
    Invalid,
}

/// How a completion relates to the outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Not the outstanding request; ignore it.
    Stale,
    /// The outstanding request, but its result must not be shown.
    Discarded,
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Loading {
        seq: u64,
        mode: InputMode,
        discarded: bool,
    },
}

/// State of the primary action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryControl {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Default)]
pub struct DetectionLifecycle {
    phase: Phase,
    seq: u64,
    last_outcome: Option<Outcome>,
}

impl DetectionLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Enter `loading`. Returns the request's sequence number, or `None`
    /// while another request is still outstanding.
    pub fn begin(&mut self, mode: InputMode) -> Option<u64> {
        if self.is_loading() {
            return None;
        }
        self.seq += 1;
        self.phase = Phase::Loading {
            seq: self.seq,
            mode,
            discarded: false,
        };
        Some(self.seq)
    }

    pub fn reject(&mut self) {
        self.last_outcome = Some(Outcome::Invalid);
    }

    /// Keep the outstanding request running but mark its result unwanted.
    /// The control stays disabled until it completes.
    pub fn discard(&mut self) {
        if let Phase::Loading { discarded, .. } = &mut self.phase {
            *discarded = true;
        }
    }

    /// Return to `idle` for the completion of request `seq`.
    pub fn finish(&mut self, seq: u64, outcome: Outcome) -> Completion {
        match self.phase {
            Phase::Loading {
                seq: current,
                discarded,
                ..
            } if current == seq => {
                self.phase = Phase::Idle;
                self.last_outcome = Some(outcome);
                if discarded {
                    Completion::Discarded
                } else {
                    Completion::Current
                }
            }
            _ => Completion::Stale,
        }
    }

    /// The control is disabled while loading; otherwise it follows `input_valid`.
    pub fn control(&self, input_valid: bool) -> PrimaryControl {
        match self.phase {
            Phase::Idle => PrimaryControl {
                enabled: input_valid,
                label: IDLE_LABEL,
            },
            Phase::Loading { mode, .. } => PrimaryControl {
                enabled: false,
                label: loading_label(mode),
            },
        }
    }
}

fn loading_label(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Text => TEXT_LOADING_LABEL,
        InputMode::Url => URL_LOADING_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_while_loading() {
        let mut lc = DetectionLifecycle::new();
        let seq = lc.begin(InputMode::Url).unwrap();
        assert!(lc.begin(InputMode::Url).is_none());
        assert_eq!(
            lc.control(true),
            PrimaryControl {
                enabled: false,
                label: URL_LOADING_LABEL
            }
        );
        assert_eq!(lc.finish(seq, Outcome::Success), Completion::Current);
        assert_eq!(lc.control(true).label, IDLE_LABEL);
    }

    #[test]
    fn stale_completion_is_refused() {
        let mut lc = DetectionLifecycle::new();
        let first = lc.begin(InputMode::Text).unwrap();
        assert_eq!(lc.finish(first + 1, Outcome::Success), Completion::Stale);
        assert!(lc.is_loading());
        assert_eq!(lc.finish(first, Outcome::Failed), Completion::Current);
        assert_eq!(lc.last_outcome(), Some(Outcome::Failed));

        // Already idle: a repeated completion is stale too.
        assert_eq!(lc.finish(first, Outcome::Success), Completion::Stale);
    }

    #[test]
    fn discarded_request_keeps_control_disabled() {
        let mut lc = DetectionLifecycle::new();
        let seq = lc.begin(InputMode::Text).unwrap();
        lc.discard();
        assert!(lc.is_loading());
        assert!(!lc.control(true).enabled);
        assert_eq!(lc.finish(seq, Outcome::Success), Completion::Discarded);
        assert!(lc.control(true).enabled);

        // Discarding while idle marks nothing.
        lc.discard();
        let next = lc.begin(InputMode::Text).unwrap();
        assert_eq!(lc.finish(next, Outcome::Success), Completion::Current);
    }

    #[test]
    fn idle_control_follows_validity() {
        let lc = DetectionLifecycle::new();
        assert!(!lc.control(false).enabled);
        assert!(lc.control(true).enabled);
    }
}
