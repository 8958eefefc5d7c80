use serde::{Deserialize, Serialize};

/// Lifecycle of a Verify attempt as reported by Twilio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Canceled,
    Expired,
    Failed,
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    pub fn is_pending(self) -> bool {
        self == VerificationStatus::Pending
    }

    pub fn is_approved(self) -> bool {
        self == VerificationStatus::Approved
    }
}

/// Delivery channel requested for a one-time code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Sms,
    Email,
}

impl Channel {
    /// Email recipients get an email code, everything else an SMS.
    pub fn for_recipient(recipient: &str) -> Self {
        if recipient.contains('@') {
            Channel::Email
        } else {
            Channel::Sms
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Email => "email",
        }
    }
}

/// Verification resource returned by create and fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verification {
    pub sid: String,
    pub to: String,
    pub status: VerificationStatus,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub service_sid: Option<String>,
    #[serde(default)]
    pub valid: Option<bool>,
}

/// Result of submitting a code to the VerificationCheck endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCheck {
    #[serde(default)]
    pub sid: Option<String>,
    pub to: String,
    pub status: VerificationStatus,
    #[serde(default)]
    pub valid: Option<bool>,
}

impl VerificationCheck {
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }
}

/// Error body Twilio returns alongside non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub more_info: Option<String>,
}
