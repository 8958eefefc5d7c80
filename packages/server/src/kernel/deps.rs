//! Server dependencies for handlers (using traits for testability)
//!
//! Built once at startup from `Config` and shared read-only with every
//! request. All external services sit behind trait objects.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use twilio::TwilioService;

use crate::config::Config;
use crate::domains::callers::KnownParticipants;
use crate::kernel::{BaseVerifyService, PendingVerification};

// =============================================================================
// TwilioService Adapter (implements BaseVerifyService trait)
// =============================================================================

/// Wrapper around TwilioService that implements BaseVerifyService trait
pub struct TwilioAdapter(pub Arc<TwilioService>);

impl TwilioAdapter {
    pub fn new(service: Arc<TwilioService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseVerifyService for TwilioAdapter {
    async fn find_pending_verification(
        &self,
        phone_number: &str,
    ) -> Result<Option<PendingVerification>> {
        let verification = self
            .0
            .fetch_verification(phone_number)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch verification: {}", e))?;

        Ok(verification
            .filter(|v| v.status.is_pending())
            .map(|v| PendingVerification { sid: v.sid }))
    }

    async fn send_verification(&self, phone_number: &str) -> Result<()> {
        self.0
            .send_otp(phone_number)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("Failed to send verification: {}", e))
    }

    async fn check_verification(&self, phone_number: &str, code: &str) -> Result<bool> {
        match self.0.check_otp(phone_number, code).await {
            Ok(check) => Ok(check.is_approved()),
            // Nothing left to check against (expired or already used)
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(anyhow::anyhow!("Failed to check verification: {}", e)),
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub verify: Arc<dyn BaseVerifyService>,
    pub known_participants: Arc<KnownParticipants>,
    /// Caller identity that starts and ends the conference
    pub moderator: String,
    pub conference_name: String,
}

impl ServerDeps {
    pub fn new(
        verify: Arc<dyn BaseVerifyService>,
        known_participants: KnownParticipants,
        moderator: String,
        conference_name: String,
    ) -> Self {
        Self {
            verify,
            known_participants: Arc::new(known_participants),
            moderator,
            conference_name,
        }
    }

    /// Wire the real Twilio client from configuration.
    pub fn from_config(config: Config) -> Self {
        let mut options = twilio::TwilioOptions::new(
            config.twilio_account_sid,
            config.twilio_auth_token,
            config.twilio_verify_service_sid,
        );
        if let Some(base_url) = config.twilio_verify_base_url {
            options = options.with_verify_base_url(base_url);
        }
        let twilio = Arc::new(TwilioService::new(options));

        Self::new(
            Arc::new(TwilioAdapter::new(twilio)),
            config.known_participants,
            config.moderator,
            config.conference_name,
        )
    }
}
