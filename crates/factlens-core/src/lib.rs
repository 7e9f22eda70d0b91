//! Orchestration core of the factlens client: wire contract, HTTP client,
//! live-probe debouncing, the detection lifecycle and the result projection.

pub mod api;
pub mod banner;
pub mod client;
pub mod config;
pub mod debounce;
pub mod lifecycle;
pub mod mode;
pub mod platform;
pub mod prefs;
pub mod render;
pub mod session;
pub mod toast;
pub mod validate;

pub use api::{AnalysisRequest, AnalysisResult, InputMode};
pub use client::{AnalysisClient, ClientError};
pub use config::Config;
pub use session::{Session, SessionEvent};
