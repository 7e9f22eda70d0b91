//! Session: single-owner state machine for one client window.
//!
//! Owns the mode controller, both probe channels, the shared banner, the
//! detection lifecycle, the toast and the displayed result. Nothing else
//! mutates them. Timers and HTTP round trips run as spawned tasks that only
//! report back through `SessionEvent`s; the owner applies each event with
//! `handle`, which is where every stale-response check lives.
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::{AnalysisRequest, AnalysisResult, InputMode, LiveProbeResult, ModelStatus};
use crate::banner::{BannerMessage, LiveBanner};
use crate::client::{AnalysisClient, ClientError};
use crate::config::Config;
use crate::debounce::{ProbeChannel, Schedule};
use crate::lifecycle::{Completion, DetectionLifecycle, Outcome, PrimaryControl};
use crate::mode::ModeController;
use crate::render::{self, CountUp, ResultView};
use crate::toast::{Toast, ToastKind, ToastNotifier};

// ── SessionEvent ──────────────────────────────────────────────────────────────

/// Everything spawned work can report back.
#[derive(Debug)]
pub enum SessionEvent {
    /// A debounce timer elapsed.
    ProbeDue { mode: InputMode, seq: u64 },
    ProbeReturned {
        mode: InputMode,
        seq: u64,
        result: Result<LiveProbeResult, ClientError>,
    },
    DetectionFinished {
        seq: u64,
        request: AnalysisRequest,
        result: Result<AnalysisResult, ClientError>,
    },
    ToastExpired { generation: u64 },
    ScrollDue { seq: u64 },
    ModelStatus(ModelStatus),
}

/// Where the front end should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Bring the result area into view.
    Results,
    /// Back to the input.
    Top,
}

/// The result currently on screen.
#[derive(Debug, Clone)]
pub struct DisplayedResult {
    /// Detection sequence number that produced this result.
    pub seq: u64,
    pub view: ResultView,
    pub confidence: CountUp,
}

// ── Session ───────────────────────────────────────────────────────────────────

pub struct Session {
    client: AnalysisClient,
    tx: mpsc::Sender<SessionEvent>,
    inputs: ModeController,
    text_probe: ProbeChannel,
    url_probe: ProbeChannel,
    banner: LiveBanner,
    detection: DetectionLifecycle,
    toast: ToastNotifier,
    displayed: Option<DisplayedResult>,
    scroll_delay: Duration,
    scroll_seq: u64,
    scroll_timer: Option<JoinHandle<()>>,
    scroll_request: Option<ScrollRequest>,
    model_status: Option<ModelStatus>,
}

impl Session {
    pub fn new(config: &Config, client: AnalysisClient, tx: mpsc::Sender<SessionEvent>) -> Self {
        let debounce = config.live.debounce();
        Self {
            client,
            tx,
            inputs: ModeController::new(),
            text_probe: ProbeChannel::new(InputMode::Text, debounce, config.live.text_min_chars),
            url_probe: ProbeChannel::new(InputMode::Url, debounce, config.live.url_min_chars),
            banner: LiveBanner::default(),
            detection: DetectionLifecycle::new(),
            toast: ToastNotifier::new(config.ui.toast_duration()),
            displayed: None,
            scroll_delay: config.ui.scroll_delay(),
            scroll_seq: 0,
            scroll_timer: None,
            scroll_request: None,
            model_status: None,
        }
    }

    // ── Read side ─────────────────────────────────────────────────────────────

    pub fn mode(&self) -> InputMode {
        self.inputs.mode()
    }

    pub fn text(&self) -> &str {
        self.inputs.text()
    }

    pub fn url(&self) -> &str {
        self.inputs.url()
    }

    pub fn char_count(&self) -> usize {
        self.inputs.char_count()
    }

    pub fn primary_control(&self) -> PrimaryControl {
        self.detection.control(self.inputs.primary_enabled())
    }

    pub fn is_loading(&self) -> bool {
        self.detection.is_loading()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.detection.last_outcome()
    }

    pub fn banner(&self) -> Option<&BannerMessage> {
        self.banner.current()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.current()
    }

    pub fn displayed(&self) -> Option<&DisplayedResult> {
        self.displayed.as_ref()
    }

    pub fn model_status(&self) -> Option<&ModelStatus> {
        self.model_status.as_ref()
    }

    #[cfg(test)]
    fn probe_seq(&self, mode: InputMode) -> u64 {
        self.channel(mode).seq()
    }

    /// Consume the pending scroll request, if any.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll_request.take()
    }

    // ── Mode controller ───────────────────────────────────────────────────────

    /// Switch input mode: cancels the probe of the mode being left, hides
    /// the banner and clears the displayed result, including one still in
    /// flight.
    pub fn set_mode(&mut self, mode: InputMode) -> bool {
        let previous = self.inputs.mode();
        if !self.inputs.set_mode(mode) {
            return false;
        }
        debug!("mode {:?} -> {:?}", previous, mode);
        self.channel_mut(previous).cancel();
        self.banner.hide();
        self.clear_result();
        self.detection.discard();
        true
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.inputs.mode().other());
    }

    /// Replace the text field. Returns `true` when the value was truncated.
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        let truncated = self.inputs.set_text(value);
        if self.inputs.mode() == InputMode::Text {
            self.reschedule(InputMode::Text);
        }
        truncated
    }

    pub fn set_url(&mut self, value: impl Into<String>) {
        self.inputs.set_url(value);
        if self.inputs.mode() == InputMode::Url {
            self.reschedule(InputMode::Url);
        }
    }

    /// Empty the active field, hide the banner and drop the result. A
    /// request still in flight completes, but its result is not shown.
    pub fn clear(&mut self) {
        self.inputs.clear_active();
        let mode = self.inputs.mode();
        self.channel_mut(mode).cancel();
        self.banner.hide();
        self.clear_result();
        self.detection.discard();
    }

    pub fn analyze_another(&mut self) {
        self.clear();
        self.scroll_request = Some(ScrollRequest::Top);
    }

    // ── Detection lifecycle ───────────────────────────────────────────────────

    /// Validate and issue the full analysis. Returns `true` when a request
    /// went out.
    pub fn submit(&mut self) -> bool {
        if self.detection.is_loading() {
            debug!("submit ignored: request already in flight");
            return false;
        }

        let request = match self.inputs.request() {
            Ok(request) => request,
            Err(e) => {
                self.detection.reject();
                self.show_toast(e.to_string(), ToastKind::Error);
                return false;
            }
        };

        let Some(seq) = self.detection.begin(request.mode) else {
            return false;
        };
        self.clear_result();

        info!("detection #{} {} ({} chars)", seq, request.path(), request.content.len());
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.analyze(&request).await;
            let _ = tx
                .send(SessionEvent::DetectionFinished {
                    seq,
                    request,
                    result,
                })
                .await;
        });
        true
    }

    /// Advance the confidence count-up. Returns `true` while it is running.
    pub fn tick_count_up(&mut self) -> bool {
        match self.displayed.as_mut() {
            Some(displayed) => displayed.confidence.tick(),
            None => false,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast.show(message, kind, &self.tx, |generation| {
            SessionEvent::ToastExpired { generation }
        });
    }

    /// Ask the service for its model status; failure is silent.
    pub fn fetch_model_status(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.model_status().await {
                Ok(status) => {
                    let _ = tx.send(SessionEvent::ModelStatus(status)).await;
                }
                Err(e) => debug!("model status unavailable: {}", e),
            }
        });
    }

    // ── Event application ─────────────────────────────────────────────────────

    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ProbeDue { mode, seq } => self.fire_probe(mode, seq),

            SessionEvent::ProbeReturned { mode, seq, result } => {
                if !self.probe_applies(mode, seq) {
                    debug!("discarding stale {:?} probe #{}", mode, seq);
                    return;
                }
                match result {
                    Ok(LiveProbeResult::Text(probe)) => {
                        self.banner.apply(BannerMessage::from_text_probe(&probe))
                    }
                    Ok(LiveProbeResult::Url(probe)) => {
                        self.banner.show(BannerMessage::from_url_probe(&probe))
                    }
                    Err(e) => debug!("{:?} probe #{} failed: {}", mode, seq, e),
                }
            }

            SessionEvent::DetectionFinished {
                seq,
                request,
                result,
            } => self.finish_detection(seq, request, result),

            SessionEvent::ToastExpired { generation } => {
                self.toast.expire(generation);
            }

            SessionEvent::ScrollDue { seq } => {
                if seq == self.scroll_seq && self.displayed.is_some() {
                    self.scroll_timer = None;
                    self.scroll_request = Some(ScrollRequest::Results);
                }
            }

            SessionEvent::ModelStatus(status) => {
                info!(
                    "model status: method={} loaded={}",
                    status.method, status.model_loaded
                );
                self.model_status = Some(status);
            }
        }
    }

    fn finish_detection(
        &mut self,
        seq: u64,
        request: AnalysisRequest,
        result: Result<AnalysisResult, ClientError>,
    ) {
        let outcome = if result.is_ok() {
            Outcome::Success
        } else {
            Outcome::Failed
        };
        let completion = self.detection.finish(seq, outcome);
        if completion == Completion::Stale {
            debug!("discarding stale detection #{}", seq);
            return;
        }

        match result {
            Ok(result) if completion == Completion::Current => {
                info!(
                    "detection #{} done: trust {:.1}, confidence {:.1}",
                    seq, result.trust_level.trust_score, result.confidence
                );
                // The full result owns the screen now.
                self.text_probe.cancel();
                self.url_probe.cancel();
                self.banner.hide();

                let label = match request.mode {
                    InputMode::Text => request.content.clone(),
                    InputMode::Url => render::url_input_label(&result),
                };
                let view = render::project(&label, &result);
                self.displayed = Some(DisplayedResult {
                    seq,
                    confidence: CountUp::new(result.confidence),
                    view,
                });
                self.schedule_scroll();
            }
            Ok(_) => {
                debug!("detection #{} done after its input was cleared; not shown", seq);
                self.resume_probe();
            }
            Err(e) => {
                warn!("detection #{} failed: {}", seq, e);
                let message = e.user_message(request.mode);
                self.show_toast(message, ToastKind::Error);
                self.resume_probe();
            }
        }
    }

    // ── Probes ────────────────────────────────────────────────────────────────

    fn channel(&self, mode: InputMode) -> &ProbeChannel {
        match mode {
            InputMode::Text => &self.text_probe,
            InputMode::Url => &self.url_probe,
        }
    }

    fn channel_mut(&mut self, mode: InputMode) -> &mut ProbeChannel {
        match mode {
            InputMode::Text => &mut self.text_probe,
            InputMode::Url => &mut self.url_probe,
        }
    }

    fn reschedule(&mut self, mode: InputMode) {
        let channel = match mode {
            InputMode::Text => &mut self.text_probe,
            InputMode::Url => &mut self.url_probe,
        };
        let value = self.inputs.value(mode);
        let schedule = channel.on_input(value, &self.tx, |seq| SessionEvent::ProbeDue {
            mode,
            seq,
        });
        if schedule == Schedule::BelowThreshold {
            self.banner.hide();
        }
    }

    /// Probes that came due during a detection were skipped; give the
    /// active field another one.
    fn resume_probe(&mut self) {
        let mode = self.inputs.mode();
        self.reschedule(mode);
    }

    /// A probe result may touch the banner only when it is the newest for
    /// its channel, that channel is active, and no full request is running.
    fn probe_applies(&self, mode: InputMode, seq: u64) -> bool {
        self.channel(mode).is_current(seq)
            && self.inputs.mode() == mode
            && !self.detection.is_loading()
    }

    fn fire_probe(&mut self, mode: InputMode, seq: u64) {
        if !self.probe_applies(mode, seq) {
            debug!("skipping superseded {:?} probe #{}", mode, seq);
            return;
        }
        let value = self.inputs.value(mode).trim().to_string();
        debug!("{:?} probe #{} firing", mode, seq);

        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = match mode {
                InputMode::Text => client.probe_text(&value).await.map(LiveProbeResult::Text),
                InputMode::Url => client.probe_url(&value).await.map(LiveProbeResult::Url),
            };
            let _ = tx
                .send(SessionEvent::ProbeReturned { mode, seq, result })
                .await;
        });
    }

    // ── Result area ───────────────────────────────────────────────────────────

    fn clear_result(&mut self) {
        self.displayed = None;
        self.cancel_scroll();
    }

    /// Last scroll wins: a newer render aborts the older timer.
    fn schedule_scroll(&mut self) {
        self.cancel_scroll();
        let seq = self.scroll_seq;
        let tx = self.tx.clone();
        let delay = self.scroll_delay;
        self.scroll_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(SessionEvent::ScrollDue { seq }).await;
        }));
    }

    fn cancel_scroll(&mut self) {
        if let Some(timer) = self.scroll_timer.take() {
            timer.abort();
        }
        self.scroll_seq += 1;
        if self.scroll_request == Some(ScrollRequest::Results) {
            self.scroll_request = None;
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(timer) = self.scroll_timer.take() {
            timer.abort();
        }
    }
}
