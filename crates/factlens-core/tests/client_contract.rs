mod common;

use common::mock_service::{dead_url, MockService, SERVER_ERROR};
use factlens_core::api::AnalysisRequest;
use factlens_core::client::{AnalysisClient, ClientError};
use factlens_core::config::ServerConfig;
use reqwest::StatusCode;

fn client(base_url: &str) -> AnalysisClient {
    AnalysisClient::new(&ServerConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    })
    .expect("client")
}

#[tokio::test]
async fn requests_use_mode_endpoints_and_bodies() {
    let mock = MockService::start().await.unwrap();
    let client = client(&mock.base_url);

    let text = client
        .analyze(&AnalysisRequest::text("some article text"))
        .await
        .unwrap();
    assert_eq!(text.confidence, 87.5);
    assert!(text.source.is_none());

    let url = client
        .analyze(&AnalysisRequest::url("https://example.com/a"))
        .await
        .unwrap();
    let source = url.source.expect("source block");
    assert_eq!(source.title.as_deref(), Some("Headline"));
    assert!(!source.is_social_media);

    assert_eq!(mock.calls("/predict")[0].body["text"], "some article text");
    assert_eq!(mock.calls("/analyze-url")[0].body["url"], "https://example.com/a");
}

#[tokio::test]
async fn probes_decode() {
    let mock = MockService::start().await.unwrap();
    let client = client(&mock.base_url);

    let text = client.probe_text("hello there everyone").await.unwrap();
    assert_eq!(text.warnings.len(), 1);
    assert_eq!(text.warnings[0].kind.as_deref(), Some("probe"));

    let url = client.probe_url("https://social.example.com").await.unwrap();
    assert!(url.valid);
    assert!(url.is_social_media);
    assert!(url.platform.is_none());

    let status = client.model_status().await.unwrap();
    assert!(status.model_loaded);
}

#[tokio::test]
async fn error_bodies_map_to_server_errors() {
    let mock = MockService::start().await.unwrap();
    let client = client(&mock.base_url);

    match client.analyze(&AnalysisRequest::text("FAIL")).await {
        Err(ClientError::Server { status, message }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message.as_deref(), Some(SERVER_ERROR));
        }
        other => panic!("expected server error, got {:?}", other),
    }

    match client.analyze(&AnalysisRequest::text("NOMSG")).await {
        Err(ClientError::Server { message, .. }) => assert!(message.is_none()),
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let client = client(&dead_url().await);
    let err = client.probe_text("anything").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
