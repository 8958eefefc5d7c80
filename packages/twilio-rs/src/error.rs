use thiserror::Error;

/// Errors returned by the Twilio client.
#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("request to Twilio failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Twilio returned {status}: {message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    #[error("invalid Twilio base URL: {0}")]
    InvalidUrl(String),
}

impl TwilioError {
    /// Twilio answers 404 when a Verify resource does not exist (never
    /// created, already approved, canceled or expired).
    pub fn is_not_found(&self) -> bool {
        matches!(self, TwilioError::Api { status: 404, .. })
    }
}
