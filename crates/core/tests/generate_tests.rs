//! Generation client tests against a mock chat-completions endpoint

use std::time::Duration;

use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use viralscript_core::{
    GenerationOptions, GenerationRequest, Phase, Session, ViralscriptError, generate_at,
    request_generation,
};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

fn sample_request() -> GenerationRequest {
    GenerationRequest::new("a script that went viral", "how to boil eggs").unwrap()
}

fn options() -> GenerationOptions {
    GenerationOptions {
        language: "en".to_string(),
        timeout: Duration::from_secs(5),
    }
}

/// Chat envelope whose assistant content is the given string
fn envelope(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

fn result_payload() -> serde_json::Value {
    json!({
        "analysis": {
            "hookStrategy": "opens on the payoff",
            "pacingAndTone": "fast and playful",
            "retentionTactics": ["curiosity gap", "countdown"]
        },
        "newScript": {
            "title": "Eggs, But Faster",
            "thumbnailIdea": "Cracked egg with a stopwatch",
            "sections": [
                { "sectionName": "Hook", "spokenAudio": "Hi there", "visualCue": "fast zoom" },
                { "sectionName": "Body", "spokenAudio": "More info", "visualCue": "b-roll" },
                { "sectionName": "CTA", "spokenAudio": "Subscribe", "visualCue": "end card" }
            ]
        }
    })
}

async fn mount_reply(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn well_formed_reply_parses_and_keeps_section_order() {
    let server = MockServer::start().await;
    let content = serde_json::to_string(&result_payload()).unwrap();
    mount_reply(&server, ResponseTemplate::new(200).set_body_json(envelope(&content))).await;

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    let result = request_generation(&url, "test-key", "test-model", &sample_request(), &options())
        .await
        .unwrap();

    let names: Vec<&str> = result
        .new_script
        .sections
        .iter()
        .map(|s| s.section_name.as_str())
        .collect();
    assert_eq!(names, ["Hook", "Body", "CTA"]);
    assert_eq!(result.analysis.retention_tactics.len(), 2);
}

#[tokio::test]
async fn request_carries_the_structured_output_constraint() {
    let server = MockServer::start().await;
    let content = serde_json::to_string(&result_payload()).unwrap();
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_partial_json(json!({
            "model": "test-model",
            "response_format": { "type": "json_schema" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&content)))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    request_generation(&url, "test-key", "test-model", &sample_request(), &options())
        .await
        .unwrap();
}

#[tokio::test]
async fn success_drives_the_session_to_complete() {
    let server = MockServer::start().await;
    let content = serde_json::to_string(&result_payload()).unwrap();
    mount_reply(&server, ResponseTemplate::new(200).set_body_json(envelope(&content))).await;

    let mut session = Session::new();
    session.begin("Analyzing script structure...").unwrap();
    assert!(session.is_busy());

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    match request_generation(&url, "test-key", "test-model", &sample_request(), &options()).await {
        Ok(result) => session.complete(result),
        Err(e) => session.fail(e.to_string()),
    }

    assert_eq!(session.phase(), Phase::Complete);
    assert!(session.result().is_some());
}

#[tokio::test]
async fn http_error_is_a_service_failure() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        ResponseTemplate::new(500).set_body_string("upstream exploded"),
    )
    .await;

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    let err = request_generation(&url, "test-key", "test-model", &sample_request(), &options())
        .await
        .unwrap_err();

    match err {
        ViralscriptError::ServiceFailure { status, reason } => {
            assert_eq!(status, 500);
            assert_eq!(reason, "upstream exploded");
        }
        other => panic!("expected ServiceFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_assistant_content_is_an_empty_response() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })),
    )
    .await;

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    let err = request_generation(&url, "test-key", "test-model", &sample_request(), &options())
        .await
        .unwrap_err();
    assert!(matches!(err, ViralscriptError::EmptyResponse));
}

#[tokio::test]
async fn blank_assistant_content_is_an_empty_response() {
    let server = MockServer::start().await;
    mount_reply(&server, ResponseTemplate::new(200).set_body_json(envelope("   "))).await;

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    let err = request_generation(&url, "test-key", "test-model", &sample_request(), &options())
        .await
        .unwrap_err();
    assert!(matches!(err, ViralscriptError::EmptyResponse));
}

#[tokio::test]
async fn non_schema_content_is_a_malformed_response() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(envelope("this is prose, not JSON")),
    )
    .await;

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    let err = request_generation(&url, "test-key", "test-model", &sample_request(), &options())
        .await
        .unwrap_err();
    assert!(matches!(err, ViralscriptError::MalformedResponse { .. }));
}

#[tokio::test]
async fn schema_violating_content_is_a_malformed_response() {
    let server = MockServer::start().await;
    // Valid JSON, but missing the newScript object entirely
    let content = serde_json::to_string(&json!({
        "analysis": {
            "hookStrategy": "s",
            "pacingAndTone": "p",
            "retentionTactics": []
        }
    }))
    .unwrap();
    mount_reply(&server, ResponseTemplate::new(200).set_body_json(envelope(&content))).await;

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    let err = request_generation(&url, "test-key", "test-model", &sample_request(), &options())
        .await
        .unwrap_err();
    assert!(matches!(err, ViralscriptError::MalformedResponse { .. }));
}

#[tokio::test]
async fn failure_drives_the_session_to_error_with_no_result() {
    let server = MockServer::start().await;
    mount_reply(&server, ResponseTemplate::new(503).set_body_string("down")).await;

    let mut session = Session::new();
    session.begin("Analyzing script structure...").unwrap();

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    match request_generation(&url, "test-key", "test-model", &sample_request(), &options()).await {
        Ok(result) => session.complete(result),
        Err(e) => session.fail(e.to_string()),
    }

    assert_eq!(session.phase(), Phase::Error);
    assert!(session.result().is_none());
    assert!(session.loading().message.is_some());
}

#[tokio::test]
async fn cancellation_wins_the_race_against_a_slow_reply() {
    let server = MockServer::start().await;
    let content = serde_json::to_string(&result_payload()).unwrap();
    mount_reply(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(envelope(&content))
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let url = format!("{}{}", server.uri(), COMPLETIONS_PATH);
    let err = generate_at(
        &url,
        "test-key",
        "test-model",
        &sample_request(),
        &options(),
        &cancel,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ViralscriptError::Cancelled));
}
