//! Start verification action

use anyhow::Result;
use tracing::{debug, error, info};

use crate::common::mask_phone_number;
use crate::kernel::ServerDeps;

/// Result of starting verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartVerificationResult {
    /// A code is already on its way; nothing was sent.
    AlreadyPending,
    CodeSent,
}

/// Make sure the caller has a code to enter.
///
/// Repeat hits on `/voice` (the gather timeout loop, retries) must not spam
/// the caller with new codes, so an open verification is reused.
pub async fn start_verification(
    caller: &str,
    deps: &ServerDeps,
) -> Result<StartVerificationResult> {
    let masked = mask_phone_number(caller);

    if let Some(pending) = deps.verify.find_pending_verification(caller).await? {
        debug!(caller = %masked, sid = %pending.sid, "Verification already pending");
        return Ok(StartVerificationResult::AlreadyPending);
    }

    info!(caller = %masked, "No pending verification, sending code");
    deps.verify.send_verification(caller).await.map_err(|e| {
        error!(caller = %masked, error = %e, "Failed to send verification code");
        e
    })?;

    Ok(StartVerificationResult::CodeSent)
}
