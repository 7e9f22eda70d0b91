#![allow(dead_code)]

//! In-process stand-in for the analysis service.
//!
//! Behaviour is keyed off the submitted content so tests stay declarative:
//! - content containing `slow` is answered after `SLOW_DELAY`
//! - `/predict` text containing `FAIL` returns 500 with an `error` body,
//!   `NOMSG` returns 500 with an empty object
//! - URLs containing `social` come back flagged as social media
//!
//! Every request is recorded so tests can count calls per endpoint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::Json, routing::get, routing::post, Router};
use factlens_core::config::{Config, ServerConfig};
use factlens_core::{AnalysisClient, Session, SessionEvent};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

pub const SLOW_DELAY: Duration = Duration::from_millis(300);
pub const SERVER_ERROR: &str = "Model exploded";

#[derive(Debug, Clone)]
pub struct Call {
    pub path: &'static str,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockState {
    fn record(&self, path: &'static str, body: &Value) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(Call {
                path,
                body: body.clone(),
            });
        }
    }
}

pub struct MockService {
    pub base_url: String,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockService {
    pub async fn start() -> Result<Self> {
        let state = MockState::default();
        let calls = Arc::clone(&state.calls);

        let app = Router::new()
            .route("/predict", post(predict))
            .route("/analyze-url", post(analyze_url))
            .route("/analyze-realtime", post(text_probe))
            .route("/analyze-url-realtime", post(url_probe))
            .route("/model-status", get(model_status))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            calls,
        })
    }

    pub fn calls(&self, path: &str) -> Vec<Call> {
        self.calls
            .lock()
            .map(|calls| calls.iter().filter(|c| c.path == path).cloned().collect())
            .unwrap_or_default()
    }
}

/// Session wired to `base_url` with short timers.
pub fn session(base_url: &str) -> (Session, mpsc::Receiver<SessionEvent>) {
    let mut config = Config::default();
    config.server = ServerConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    };
    config.live.debounce_ms = 50;
    config.ui.scroll_delay_ms = 20;
    config.ui.toast_ms = 200;

    let (tx, rx) = mpsc::channel(64);
    let client = AnalysisClient::new(&config.server).expect("client");
    (Session::new(&config, client, tx), rx)
}

/// Apply events until `done` holds or `within` elapses. Returns whether
/// `done` was reached.
///
/// `done` is re-checked at least every `POLL`, so it may also watch state
/// outside the session such as the mock's call log.
pub async fn drive_until<F>(
    session: &mut Session,
    rx: &mut mpsc::Receiver<SessionEvent>,
    within: Duration,
    mut done: F,
) -> bool
where
    F: FnMut(&Session) -> bool,
{
    const POLL: Duration = Duration::from_millis(10);
    let deadline = tokio::time::Instant::now() + within;
    while !done(&*session) {
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        match tokio::time::timeout(POLL, rx.recv()).await {
            Ok(Some(event)) => session.handle(event),
            Ok(None) => return false,
            Err(_) => {}
        }
    }
    true
}

/// Apply every event that arrives within `window`.
pub async fn drain_for(
    session: &mut Session,
    rx: &mut mpsc::Receiver<SessionEvent>,
    window: Duration,
) {
    let _ = drive_until(session, rx, window, |_| false).await;
}

/// A URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}", addr)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn maybe_slow(content: &str) {
    if content.contains("slow") {
        tokio::time::sleep(SLOW_DELAY).await;
    }
}

fn content_of<'a>(body: &'a Value, key: &str) -> &'a str {
    body.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn base_result() -> Value {
    json!({
        "prediction": "FAKE",
        "confidence": 87.5,
        "trust_level": {"trust_score": 12.5, "level": "High Risk", "color": "#ef4444", "icon": "🔴"},
        "highlighted_words": [{"index": 1, "word": "B", "type": "suspicious"}],
        "emotions": {"fear": 10, "anger": 0, "urgency": 25.5, "sensational": 40},
        "patterns": {"clickbait_language": true, "no_evidence": true},
        "claims": [],
        "summary": "A condensed summary.",
        "ai_reasoning": {
            "summary": "Several red flags.",
            "reasons": [
                {"title": "Sensational wording", "description": "d", "severity": "high", "icon": "🔴", "evidence": ["SHOCKING"]},
                {"title": "Missing sources", "description": "d", "severity": "unknown"}
            ]
        }
    })
}

async fn predict(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.record("/predict", &body);
    let text = content_of(&body, "text");
    maybe_slow(text).await;

    if text.contains("FAIL") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": SERVER_ERROR})),
        );
    }
    if text.contains("NOMSG") {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})));
    }

    let mut result = base_result();
    result["language"] = json!({"detected": true, "name": "English", "code": "en"});
    (StatusCode::OK, Json(result))
}

async fn analyze_url(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.record("/analyze-url", &body);
    let url = content_of(&body, "url").to_string();
    maybe_slow(&url).await;

    let social = url.contains("social");
    let platform = if social { Value::from("Twitter") } else { Value::Null };
    let mut result = base_result();
    result["source"] = json!({
        "type": "url",
        "url": url,
        "title": "Headline",
        "is_social_media": social,
        "platform": platform,
        "content_length": 1200
    });
    if social {
        result["social_media"] = json!({
            "platform": "Twitter",
            "warning": "Social posts are often unverified.",
            "indicators": ["No editorial review"]
        });
    }
    (StatusCode::OK, Json(result))
}

async fn text_probe(State(state): State<MockState>, Json(body): Json<Value>) -> Json<Value> {
    state.record("/analyze-realtime", &body);
    let text = content_of(&body, "text").to_string();
    maybe_slow(&text).await;
    Json(json!({
        "warnings": [{"type": "probe", "message": format!("warning for {}", text), "severity": "medium"}]
    }))
}

async fn url_probe(State(state): State<MockState>, Json(body): Json<Value>) -> Json<Value> {
    state.record("/analyze-url-realtime", &body);
    let url = content_of(&body, "url").to_string();
    maybe_slow(&url).await;
    Json(json!({
        "valid": true,
        "message": format!("checked {}", url),
        "is_social_media": url.contains("social"),
        "platform": null,
        "warning": null
    }))
}

async fn model_status(State(state): State<MockState>) -> Json<Value> {
    state.record("/model-status", &Value::Null);
    Json(json!({"ml_available": true, "model_loaded": true, "method": "ml"}))
}
