//! Integration tests for the EmailJS dispatch client
//!
//! A wiremock server stands in for the provider endpoint.

use basket_camp::config::EmailJsSettings;
use basket_camp::dispatch::{DispatchError, EmailJsClient, RegistrationDispatcher};
use basket_camp::registration::{Registration, RegistrationForm};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registration() -> Registration {
    RegistrationForm {
        parent_name: "Eleni Papadaki".into(),
        parent_email: "eleni@example.gr".into(),
        parent_phone: "6971234567".into(),
        athlete_name: "Nikos Papadakis".into(),
        athlete_age: "12".into(),
        position: "Forward".into(),
        tshirt_size: "S".into(),
        notes: String::new(),
        consent: Some("on".into()),
    }
    .validate_submission()
    .expect("form is valid")
}

fn settings(server: &MockServer) -> EmailJsSettings {
    EmailJsSettings {
        api_url: format!("{}/api/v1.0/email/send", server.uri()),
        service_id: Some("service_camp".into()),
        template_id: Some("template_registration".into()),
        public_key: Some("pk_123".into()),
        target_email: Some("camp@asanagennisi.gr".into()),
        ..EmailJsSettings::default()
    }
}

#[tokio::test]
async fn test_dispatch_posts_flat_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "service_id": "service_camp",
            "template_id": "template_registration",
            "user_id": "pk_123",
            "template_params": {
                "parent_name": "Eleni Papadaki",
                "athlete_name": "Nikos Papadakis",
                "position": "Forward",
                "tshirt_size": "S",
                "notes": "-",
                "consent": "Yes",
                "to_email": "camp@asanagennisi.gr"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let client = EmailJsClient::new(settings(&server)).expect("client builds");
    client
        .dispatch(&registration())
        .await
        .expect("dispatch succeeds");
}

#[tokio::test]
async fn test_access_token_is_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "accessToken": "secret_token" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let client = EmailJsClient::new(EmailJsSettings {
        access_token: Some("secret_token".into()),
        ..settings(&server)
    })
    .expect("client builds");

    assert!(client.dispatch(&registration()).await.is_ok());
}

#[tokio::test]
async fn test_provider_rejection_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The Public Key is invalid"))
        .expect(1)
        .mount(&server)
        .await;

    let client = EmailJsClient::new(settings(&server)).expect("client builds");
    let err = client.dispatch(&registration()).await.unwrap_err();

    match err {
        DispatchError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "The Public Key is invalid");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_config_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = EmailJsClient::new(EmailJsSettings {
        service_id: None,
        ..settings(&server)
    })
    .expect("client builds");

    let err = client.dispatch(&registration()).await.unwrap_err();
    assert!(matches!(err, DispatchError::MissingConfig("service_id")));
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    // Reserve a free port, then close it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("binds");
    let port = listener.local_addr().expect("has address").port();
    drop(listener);

    let server = MockServer::start().await;
    let client = EmailJsClient::new(EmailJsSettings {
        api_url: format!("http://127.0.0.1:{port}/api/v1.0/email/send"),
        ..settings(&server)
    })
    .expect("client builds");

    let err = client.dispatch(&registration()).await.unwrap_err();
    assert!(matches!(err, DispatchError::Transport(_)), "got {err:?}");
    assert!(!err.is_config());
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = EmailJsClient::new(EmailJsSettings {
        timeout_ms: 100,
        ..settings(&server)
    })
    .expect("client builds");

    let err = client.dispatch(&registration()).await.unwrap_err();
    match err {
        DispatchError::Transport(source) => assert!(source.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}
