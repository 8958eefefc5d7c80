//! Verify client against a mocked Twilio API.

use serde_json::json;
use twilio::models::VerificationStatus;
use twilio::{TwilioError, TwilioOptions, TwilioService};
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE_SID: &str = "VA00000000000000000000000000000000";
const CALLER: &str = "+15557654321";

fn service_for(server: &MockServer) -> TwilioService {
    TwilioService::new(
        TwilioOptions::new("ACtest", "test_auth_token", SERVICE_SID)
            .with_verify_base_url(server.uri()),
    )
}

fn verification_json(status: &str) -> serde_json::Value {
    json!({
        "sid": "VE11111111111111111111111111111111",
        "service_sid": SERVICE_SID,
        "to": CALLER,
        "channel": "sms",
        "status": status,
        "valid": false
    })
}

fn not_found_json() -> serde_json::Value {
    json!({
        "code": 20404,
        "message": "The requested resource was not found",
        "more_info": "https://www.twilio.com/docs/errors/20404",
        "status": 404
    })
}

#[tokio::test]
async fn fetch_verification_returns_pending_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/Services/{}/Verifications/{}", SERVICE_SID, CALLER)))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(verification_json("pending")))
        .expect(1)
        .mount(&server)
        .await;

    let verification = service_for(&server)
        .fetch_verification(CALLER)
        .await
        .unwrap()
        .expect("pending verification");

    assert_eq!(verification.to, CALLER);
    assert_eq!(verification.status, VerificationStatus::Pending);
    assert_eq!(verification.channel.as_deref(), Some("sms"));
}

#[tokio::test]
async fn fetch_verification_maps_not_found_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_json()))
        .mount(&server)
        .await;

    let result = service_for(&server).fetch_verification(CALLER).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn fetch_verification_surfaces_other_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .fetch_verification(CALLER)
        .await
        .unwrap_err();

    match err {
        TwilioError::Api { status, code, message } => {
            assert_eq!(status, 503);
            assert_eq!(code, None);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn send_otp_posts_recipient_and_sms_channel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/Services/{}/Verifications", SERVICE_SID)))
        .and(body_string_contains("To=%2B15557654321"))
        .and(body_string_contains("Channel=sms"))
        .respond_with(ResponseTemplate::new(201).set_body_json(verification_json("pending")))
        .expect(1)
        .mount(&server)
        .await;

    let verification = service_for(&server).send_otp(CALLER).await.unwrap();

    assert!(verification.status.is_pending());
}

#[tokio::test]
async fn send_otp_uses_email_channel_for_addresses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Channel=email"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": "VE22222222222222222222222222222222",
            "to": "alice@example.com",
            "channel": "email",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verification = service_for(&server)
        .send_otp("alice@example.com")
        .await
        .unwrap();

    assert_eq!(verification.channel.as_deref(), Some("email"));
}

#[tokio::test]
async fn check_otp_reports_approval() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/Services/{}/VerificationCheck", SERVICE_SID)))
        .and(body_string_contains("Code=123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "VE11111111111111111111111111111111",
            "to": CALLER,
            "status": "approved",
            "valid": true
        })))
        .mount(&server)
        .await;

    let check = service_for(&server).check_otp(CALLER, "123456").await.unwrap();

    assert!(check.is_approved());
    assert_eq!(check.valid, Some(true));
}

#[tokio::test]
async fn check_otp_wrong_code_stays_pending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "to": CALLER,
            "status": "pending",
            "valid": false
        })))
        .mount(&server)
        .await;

    let check = service_for(&server).check_otp(CALLER, "000000").await.unwrap();

    assert!(!check.is_approved());
}

#[tokio::test]
async fn check_otp_without_open_verification_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_json()))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .check_otp(CALLER, "123456")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, TwilioError::Api { code: Some(20404), .. }));
}
