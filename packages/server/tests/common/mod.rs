//! Shared helpers for webhook integration tests.
//!
//! Builds the real router over `MockVerifyService` and drives it in-process
//! with `tower::ServiceExt::oneshot`, so no network or provider is involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use gate_core::domains::callers::KnownParticipants;
use gate_core::kernel::{MockVerifyService, ServerDeps};
use gate_core::server::build_app;
use tower::util::ServiceExt;

pub const ALICE: &str = "+15557654321";
pub const BOB: &str = "+15550001111";
pub const STRANGER: &str = "+15551234567";
pub const CONFERENCE: &str = "My conference";

/// Response captured from a single webhook call
pub struct WebhookResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct TestHarness {
    pub verify: MockVerifyService,
    app: Router,
}

impl TestHarness {
    /// Alice and Bob are known, Alice moderates.
    pub fn new(verify: MockVerifyService) -> Self {
        Self::with_moderator(verify, ALICE)
    }

    pub fn with_moderator(verify: MockVerifyService, moderator: &str) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let participants: KnownParticipants =
            [(ALICE, "Alice"), (BOB, "Bob")].into_iter().collect();
        let deps = ServerDeps::new(
            Arc::new(verify.clone()),
            participants,
            moderator.to_string(),
            CONFERENCE.to_string(),
        );

        Self {
            verify,
            app: build_app(deps),
        }
    }

    /// POST a urlencoded form the way Twilio does.
    pub async fn post(&self, path: &str, params: &[(&str, &str)]) -> WebhookResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode(params)))
            .unwrap();
        self.send(request).await
    }

    /// GET with the parameters in the query string.
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> WebhookResponse {
        let uri = if params.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, encode(params))
        };
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> WebhookResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        WebhookResponse {
            status,
            content_type,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// Minimal urlencoding for test parameters (phone numbers, digits, SIDs).
fn encode(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v.replace('+', "%2B").replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&")
}
