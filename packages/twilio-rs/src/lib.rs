//! Minimal Twilio client: the Verify v2 endpoints used for one-time codes
//! and a TwiML builder for voice webhook responses.

pub mod error;
pub mod models;
pub mod twiml;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

pub use crate::error::TwilioError;
use crate::models::{ApiErrorBody, Channel, Verification, VerificationCheck};

pub const DEFAULT_VERIFY_BASE_URL: &str = "https://verify.twilio.com/v2";

#[derive(Debug, Clone)]
pub struct TwilioOptions {
    pub account_sid: String,
    pub auth_token: String,
    pub service_id: String,
    pub verify_base_url: String,
}

impl TwilioOptions {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            service_id: service_id.into(),
            verify_base_url: DEFAULT_VERIFY_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different Verify host (used by tests).
    pub fn with_verify_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.verify_base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct TwilioService {
    options: TwilioOptions,
    client: Client,
}

impl TwilioService {
    pub fn new(options: TwilioOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    /// Fetch the verification currently open for `recipient`.
    ///
    /// Twilio only keeps pending verifications addressable by recipient, so a
    /// 404 means there is nothing outstanding and is returned as `Ok(None)`.
    pub async fn fetch_verification(
        &self,
        recipient: &str,
    ) -> Result<Option<Verification>, TwilioError> {
        let url = self.endpoint(&["Verifications", recipient])?;

        let response = self
            .client
            .get(url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .send()
            .await?;

        match parse_response::<Verification>(response).await {
            Ok(verification) => Ok(Some(verification)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Start a new verification, which makes Twilio deliver a code.
    pub async fn send_otp(&self, recipient: &str) -> Result<Verification, TwilioError> {
        let url = self.endpoint(&["Verifications"])?;
        let channel = Channel::for_recipient(recipient);

        let response = self
            .client
            .post(url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&[("To", recipient), ("Channel", channel.as_str())])
            .send()
            .await?;

        parse_response(response).await
    }

    /// Submit a code for `recipient`. Twilio does the comparison; inspect
    /// [`VerificationCheck::is_approved`] for the outcome.
    pub async fn check_otp(
        &self,
        recipient: &str,
        code: &str,
    ) -> Result<VerificationCheck, TwilioError> {
        let url = self.endpoint(&["VerificationCheck"])?;

        let response = self
            .client
            .post(url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&[("To", recipient), ("Code", code)])
            .send()
            .await?;

        parse_response(response).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, TwilioError> {
        let base = &self.options.verify_base_url;
        let mut url = Url::parse(base).map_err(|e| TwilioError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| TwilioError::InvalidUrl(base.clone()))?
            .pop_if_empty()
            .push("Services")
            .push(&self.options.service_id)
            .extend(segments);
        Ok(url)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, TwilioError> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, response).await);
    }

    Ok(response.json::<T>().await?)
}

async fn api_error(status: StatusCode, response: Response) -> TwilioError {
    let body = response.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<ApiErrorBody>(&body).ok();

    let code = parsed.as_ref().and_then(|b| b.code);
    let message = parsed
        .and_then(|b| b.message)
        .unwrap_or(body);

    TwilioError::Api {
        status: status.as_u16(),
        code,
        message,
    }
}
