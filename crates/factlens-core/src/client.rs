//! HTTP client for the analysis service.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{
    AnalysisRequest, AnalysisResult, ErrorBody, InputMode, ModelStatus, TextBody,
    TextProbeResult, UrlBody, UrlProbeResult, MODEL_STATUS_PATH, TEXT_PROBE_PATH, URL_PROBE_PATH,
};
use crate::config::ServerConfig;

pub const CONNECT_FAILED: &str = "Failed to connect to server";
pub const PREDICT_FAILED: &str = "Failed to get prediction";
pub const URL_ANALYSIS_FAILED: &str = "Failed to fetch or analyze URL";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response, with the service's `error` field when it sent one.
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    /// 2xx response whose body does not match the contract.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The request never completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Text surfaced to the user for a failed full analysis in `mode`.
    pub fn user_message(&self, mode: InputMode) -> String {
        match self {
            Self::Server {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            Self::Server { .. } | Self::Decode(_) => match mode {
                InputMode::Text => PREDICT_FAILED.to_string(),
                InputMode::Url => URL_ANALYSIS_FAILED.to_string(),
            },
            Self::Transport(_) => CONNECT_FAILED.to_string(),
        }
    }
}

/// Cheap to clone; share one per session.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Full analysis for either mode.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        match request.mode {
            InputMode::Text => {
                self.post(
                    request.path(),
                    &TextBody {
                        text: &request.content,
                    },
                )
                .await
            }
            InputMode::Url => {
                self.post(
                    request.path(),
                    &UrlBody {
                        url: &request.content,
                    },
                )
                .await
            }
        }
    }

    pub async fn probe_text(&self, text: &str) -> Result<TextProbeResult, ClientError> {
        self.post(TEXT_PROBE_PATH, &TextBody { text }).await
    }

    pub async fn probe_url(&self, url: &str) -> Result<UrlProbeResult, ClientError> {
        self.post(URL_PROBE_PATH, &UrlBody { url }).await
    }

    pub async fn model_status(&self) -> Result<ModelStatus, ClientError> {
        let response = self.http.get(self.endpoint(MODEL_STATUS_PATH)).send().await?;
        Self::decode(MODEL_STATUS_PATH, response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let response = self.http.post(self.endpoint(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.error);
            warn!("{} returned {}: {:?}", path, status, message);
            return Err(ClientError::Server { status, message });
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_passes_through_verbatim() {
        let err = ClientError::Server {
            status: StatusCode::BAD_REQUEST,
            message: Some("Text must be at least 10 characters long".to_string()),
        };
        assert_eq!(
            err.user_message(InputMode::Text),
            "Text must be at least 10 characters long"
        );
    }

    #[test]
    fn missing_message_falls_back_per_mode() {
        let err = ClientError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.user_message(InputMode::Text), PREDICT_FAILED);
        assert_eq!(err.user_message(InputMode::Url), URL_ANALYSIS_FAILED);

        let decode = ClientError::Decode("eof".to_string());
        assert_eq!(decode.user_message(InputMode::Url), URL_ANALYSIS_FAILED);
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = ServerConfig {
            base_url: "http://localhost:5000/".to_string(),
            request_timeout_secs: 5,
        };
        let client = AnalysisClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.endpoint("/predict"), "http://localhost:5000/predict");
    }
}
