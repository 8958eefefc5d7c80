// TestDependencies - mock implementations for testing
//
// Provides a mock Verify service that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::{BaseVerifyService, PendingVerification};

// =============================================================================
// Mock Verify Service
// =============================================================================

/// Arguments captured from a check call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCallArgs {
    pub phone_number: String,
    pub code: String,
}

/// In-memory stand-in for Twilio Verify.
///
/// Sending a code marks the number pending; an approved check clears it,
/// the way Twilio drops approved verifications.
#[derive(Clone, Default)]
pub struct MockVerifyService {
    pending: Arc<Mutex<HashSet<String>>>,
    approved_codes: Arc<Mutex<HashSet<String>>>,
    sent: Arc<Mutex<Vec<String>>>,
    checks: Arc<Mutex<Vec<CheckCallArgs>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockVerifyService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend a verification is already open for this number
    pub fn with_pending(self, phone_number: &str) -> Self {
        self.pending.lock().unwrap().insert(phone_number.to_string());
        self
    }

    /// Codes the provider will approve
    pub fn with_approved_code(self, code: &str) -> Self {
        self.approved_codes.lock().unwrap().insert(code.to_string());
        self
    }

    /// Make every call fail as if the provider were unreachable
    pub fn failing(self, message: &str) -> Self {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Numbers a code was sent to, in order
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    /// How many codes were sent to this number
    pub fn send_count(&self, phone_number: &str) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|n| *n == phone_number)
            .count()
    }

    /// All check calls with their arguments
    pub fn checks(&self) -> Vec<CheckCallArgs> {
        self.checks.lock().unwrap().clone()
    }

    pub fn is_pending(&self, phone_number: &str) -> bool {
        self.pending.lock().unwrap().contains(phone_number)
    }

    fn fail_if_configured(&self) -> Result<()> {
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BaseVerifyService for MockVerifyService {
    async fn find_pending_verification(
        &self,
        phone_number: &str,
    ) -> Result<Option<PendingVerification>> {
        self.fail_if_configured()?;

        let pending = self.pending.lock().unwrap().contains(phone_number);
        Ok(pending.then(|| PendingVerification {
            sid: format!("VE-mock-{}", phone_number),
        }))
    }

    async fn send_verification(&self, phone_number: &str) -> Result<()> {
        self.fail_if_configured()?;

        self.sent.lock().unwrap().push(phone_number.to_string());
        self.pending.lock().unwrap().insert(phone_number.to_string());
        Ok(())
    }

    async fn check_verification(&self, phone_number: &str, code: &str) -> Result<bool> {
        self.fail_if_configured()?;

        self.checks.lock().unwrap().push(CheckCallArgs {
            phone_number: phone_number.to_string(),
            code: code.to_string(),
        });

        let approved = self.approved_codes.lock().unwrap().contains(code);
        if approved {
            self.pending.lock().unwrap().remove(phone_number);
        }
        Ok(approved)
    }
}
