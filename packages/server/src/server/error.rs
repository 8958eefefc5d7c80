use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body for 500s; provider error text stays in the logs.
pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Failures that end a webhook request without TwiML
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing request parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Provider error: {0}")]
    Provider(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::MissingParameter(name) => {
                tracing::warn!(parameter = %name, "Rejecting webhook with missing parameter");
            }
            ApiError::Provider(e) => {
                tracing::error!(error = %e, "Webhook failed on provider call");
            }
        }

        let body = match self {
            ApiError::MissingParameter(_) => self.to_string(),
            ApiError::Provider(_) => INTERNAL_ERROR_BODY.to_string(),
        };

        (status, body).into_response()
    }
}
