// Trait abstractions for external services
//
// Handlers and actions only ever talk to the telephony provider through
// these traits so tests can swap in `MockVerifyService`.

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Verify Service Trait (Infrastructure - OTP)
// =============================================================================

/// A verification attempt the provider still considers open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    pub sid: String,
}

#[async_trait]
pub trait BaseVerifyService: Send + Sync {
    /// Look up the open verification for a phone number, if any.
    async fn find_pending_verification(
        &self,
        phone_number: &str,
    ) -> Result<Option<PendingVerification>>;

    /// Send a new one-time code via SMS.
    async fn send_verification(&self, phone_number: &str) -> Result<()>;

    /// Submit a code; `true` when the provider approves it.
    async fn check_verification(&self, phone_number: &str, code: &str) -> Result<bool>;
}
