//! Check verification action

use anyhow::Result;
use tracing::{info, warn};

use crate::common::mask_phone_number;
use crate::kernel::ServerDeps;

/// Result of checking a submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckVerificationResult {
    Approved,
    Rejected,
}

impl CheckVerificationResult {
    pub fn is_approved(self) -> bool {
        self == CheckVerificationResult::Approved
    }
}

/// Ask the provider whether `code` is the one it sent to `caller`.
///
/// There is no attempt limit; a rejected caller can retry indefinitely.
pub async fn check_verification(
    caller: &str,
    code: &str,
    deps: &ServerDeps,
) -> Result<CheckVerificationResult> {
    let masked = mask_phone_number(caller);

    if deps.verify.check_verification(caller, code).await? {
        info!(caller = %masked, "Verification approved");
        Ok(CheckVerificationResult::Approved)
    } else {
        warn!(caller = %masked, "Verification code rejected");
        Ok(CheckVerificationResult::Rejected)
    }
}
