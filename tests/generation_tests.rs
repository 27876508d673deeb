use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use ygpt::{Credentials, GenError, GenerationClient, GenerationConfig, Prompt, PromptBuilder};

const ENDPOINT: &str = "/foundationModels/v1/completion";

fn client_for(server: &MockServer) -> GenerationClient {
    GenerationClient::new(Credentials::new("test-key", "test-folder"))
        .expect("client construction")
        .with_base_url(format!("{}{}", server.uri(), ENDPOINT))
}

fn prompt(text: &str) -> Prompt {
    PromptBuilder::new()
        .add_user_message(text)
        .expect("non-empty message")
        .build()
}

fn completion_body(text: &str) -> Value {
    json!({
        "result": {
            "alternatives": [{
                "message": { "role": "assistant", "text": text },
                "status": "ALTERNATIVE_STATUS_FINAL"
            }],
            "usage": {
                "inputTextTokens": "5",
                "completionTokens": "3",
                "totalTokens": "8"
            },
            "modelVersion": "07.03.2024"
        }
    })
}

async fn request_body(server: &MockServer, index: usize) -> Value {
    let requests = server
        .received_requests()
        .await
        .expect("recorded requests");
    serde_json::from_slice(&requests[index].body).expect("JSON request body")
}

#[tokio::test]
async fn returns_first_alternative_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi there")))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .generate(&prompt("Hello"), GenerationConfig::default())
        .await
        .expect("completion");

    assert_eq!(result.text, "Hi there");
    assert_eq!(result.finish_reason, ygpt::FinishReason::Stop);
    assert_eq!(result.raw["result"]["modelVersion"], "07.03.2024");
}

#[tokio::test]
async fn sends_credentials_headers_and_request_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("Authorization", "Api-Key test-key"))
        .and(header("x-folder-id", "test-folder"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .generate(&prompt("Hello"), GenerationConfig::default())
        .await
        .expect("completion");

    let body = request_body(&server, 0).await;
    assert_eq!(body["modelUri"], "gpt://test-folder/yandexgpt/latest");
    assert_eq!(body["completionOptions"]["stream"], false);
    assert_eq!(body["completionOptions"]["maxTokens"], 2000);
    let temperature = body["completionOptions"]["temperature"]
        .as_f64()
        .expect("temperature");
    assert!((temperature - 0.6).abs() < 1e-6);

    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["text"], "Hello");
}

#[tokio::test]
async fn per_call_overrides_win_over_client_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .mount(&server)
        .await;

    let client = client_for(&server).with_defaults(GenerationConfig {
        temperature: Some(0.3),
        max_tokens: Some(100),
    });

    let overrides = GenerationConfig {
        temperature: Some(0.9),
        max_tokens: None,
    };
    client
        .generate(&prompt("Hello"), overrides)
        .await
        .expect("completion");

    let body = request_body(&server, 0).await;
    let temperature = body["completionOptions"]["temperature"]
        .as_f64()
        .expect("temperature");
    assert!((temperature - 0.9).abs() < 1e-6);
    // absent override falls back to the client default, not the built-in
    assert_eq!(body["completionOptions"]["maxTokens"], 100);
}

#[tokio::test]
async fn rate_limit_status_maps_to_rate_limit_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .generate(&prompt("Hello"), GenerationConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(error, GenError::RateLimit(_)));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn server_error_maps_to_transient_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .generate(&prompt("Hello"), GenerationConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(error, GenError::Transient(_)));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn auth_statuses_map_to_authentication_error() {
    for status in [401u16, 403] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .generate(&prompt("Hello"), GenerationConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(error, GenError::Authentication(_)));
        assert!(!error.is_retryable());
    }
}

#[tokio::test]
async fn other_client_errors_map_to_invalid_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_string("unknown model"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .generate(&prompt("Hello"), GenerationConfig::default())
        .await
        .unwrap_err();

    match error {
        GenError::InvalidRequest(detail) => assert!(detail.contains("unknown model")),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn success_body_without_alternatives_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": {} })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .generate(&prompt("Hello"), GenerationConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(error, GenError::ResponseParse(_)));
}

#[tokio::test]
async fn invalid_config_fails_before_any_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("never")))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let error = client
        .generate(
            &prompt("Hello"),
            GenerationConfig {
                temperature: Some(5.0),
                max_tokens: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(error, GenError::Validation(_)));

    let error = client
        .generate(
            &prompt("Hello"),
            GenerationConfig {
                temperature: None,
                max_tokens: Some(0),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(error, GenError::Validation(_)));

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty(), "validation must precede the transport");
}

#[tokio::test]
async fn connection_failure_maps_to_transient_error() {
    // Grab a port that stops listening before the call is made. A bare
    // (non-pooled) server is required: pooled servers from `start()` keep
    // their listener alive after drop.
    let dead_uri = {
        let server = MockServer::builder().start().await;
        server.uri()
    };

    let client = GenerationClient::new(Credentials::new("test-key", "test-folder"))
        .expect("client construction")
        .with_base_url(format!("{dead_uri}{ENDPOINT}"));

    let error = client
        .generate(&prompt("Hello"), GenerationConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(error, GenError::Transient(_)));
}

#[test]
fn missing_credentials_fail_at_construction() {
    let error = GenerationClient::new(Credentials::new("", "folder")).unwrap_err();
    assert!(matches!(error, GenError::Configuration(_)));

    let error = GenerationClient::new(Credentials::new("key", "")).unwrap_err();
    assert!(matches!(error, GenError::Configuration(_)));
}
