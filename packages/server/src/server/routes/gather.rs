//! `/gather` - receives the digits collected by the `/voice` prompt.

use axum::extract::{Extension, Form, Query};
use tracing::info;
use twilio::twiml::VoiceResponse;

use crate::common::mask_phone_number;
use crate::domains::conference::conference_directive;
use crate::domains::verification::{check_verification, CheckVerificationResult};
use crate::kernel::ServerDeps;
use crate::server::app::{AppState, VOICE_PATH};
use crate::server::error::ApiError;
use crate::server::routes::{CallParams, Twiml};

pub const CODE_ACCEPTED_MESSAGE: &str = "That was correct. Joining conference.";
pub const CODE_REJECTED_MESSAGE: &str = "Please try again.";

pub async fn gather_get_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<CallParams>,
) -> Result<Twiml, ApiError> {
    handle_gather(&state.deps, params).await
}

pub async fn gather_post_handler(
    Extension(state): Extension<AppState>,
    Form(params): Form<CallParams>,
) -> Result<Twiml, ApiError> {
    handle_gather(&state.deps, params).await
}

/// Check the entered code. Approved callers are dialed into the conference;
/// anyone else is told to try again and sent back to `/voice`.
#[tracing::instrument(name = "gather", skip_all, fields(call_sid = %params.call_sid()))]
pub async fn handle_gather(deps: &ServerDeps, params: CallParams) -> Result<Twiml, ApiError> {
    let Some(code) = params.digits() else {
        return Ok(VoiceResponse::new().into());
    };
    let caller = params.caller().ok_or(ApiError::MissingParameter("From"))?;

    match check_verification(caller, code, deps).await? {
        CheckVerificationResult::Approved => {
            info!(caller = %mask_phone_number(caller), "Admitting caller to conference");
            let dial = conference_directive(caller, &deps.moderator, &deps.conference_name);
            Ok(VoiceResponse::new()
                .say(CODE_ACCEPTED_MESSAGE)
                .dial(dial)
                .into())
        }
        CheckVerificationResult::Rejected => Ok(VoiceResponse::new()
            .say(CODE_REJECTED_MESSAGE)
            .redirect(VOICE_PATH)
            .into()),
    }
}
