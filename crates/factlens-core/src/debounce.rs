//! Debounce channel for live probes.
//!
//! Each keystroke aborts the pending timer and bumps the channel's sequence
//! number. The timer task only carries its sequence number; the owner reads
//! the field value when the timer fires, so the probe always uses the value
//! present at the last edit. A probe response is applied only while its
//! sequence number is still the latest one issued.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// A timer is running for this sequence number.
    Pending(u64),
    /// Input below the probe threshold; nothing scheduled.
    BelowThreshold,
}

#[derive(Debug)]
pub struct ProbeChannel {
    mode: InputMode,
    delay: Duration,
    min_chars: usize,
    seq: u64,
    timer: Option<JoinHandle<()>>,
}

impl ProbeChannel {
    pub fn new(mode: InputMode, delay: Duration, min_chars: usize) -> Self {
        Self {
            mode,
            delay,
            min_chars,
            seq: 0,
            timer: None,
        }
    }

    /// Latest issued sequence number.
    #[cfg(test)]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// React to an edit of this channel's field.
    ///
    /// `make` builds the event delivered to `tx` once the delay elapses
    /// uninterrupted.
    pub fn on_input<E, F>(&mut self, value: &str, tx: &mpsc::Sender<E>, make: F) -> Schedule
    where
        E: Send + 'static,
        F: FnOnce(u64) -> E,
    {
        self.cancel();

        if value.trim().chars().count() < self.min_chars {
            return Schedule::BelowThreshold;
        }

        let seq = self.seq;
        let event = make(seq);
        let tx = tx.clone();
        let delay = self.delay;
        debug!("{:?} probe #{} scheduled in {:?}", self.mode, seq, delay);
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event).await;
        }));
        Schedule::Pending(seq)
    }

    /// Abort the pending timer and invalidate any probe already in flight.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.seq += 1;
    }
}

impl Drop for ProbeChannel {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
