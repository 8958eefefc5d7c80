//! `/voice` - entry point for every inbound call.

use axum::extract::{Extension, Form, Query};
use tracing::{info, warn};
use twilio::twiml::{Gather, VoiceResponse};

use crate::common::mask_phone_number;
use crate::domains::callers::UNRECOGNIZED_CALLER_MESSAGE;
use crate::domains::verification::{start_verification, CODE_LENGTH};
use crate::kernel::ServerDeps;
use crate::server::app::{AppState, GATHER_PATH, VOICE_PATH};
use crate::server::error::ApiError;
use crate::server::routes::{CallParams, Twiml};

pub async fn voice_get_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<CallParams>,
) -> Result<Twiml, ApiError> {
    handle_voice(&state.deps, params).await
}

pub async fn voice_post_handler(
    Extension(state): Extension<AppState>,
    Form(params): Form<CallParams>,
) -> Result<Twiml, ApiError> {
    handle_voice(&state.deps, params).await
}

/// Reject unknown callers; otherwise make sure a code is on its way and
/// prompt for it. If the caller enters nothing the redirect loops back here,
/// and the pending code is reused rather than resent.
#[tracing::instrument(name = "voice", skip_all, fields(call_sid = %params.call_sid()))]
pub async fn handle_voice(deps: &ServerDeps, params: CallParams) -> Result<Twiml, ApiError> {
    let caller = params.caller();
    let name = caller.and_then(|c| deps.known_participants.display_name(c));

    let (caller, name) = match (caller, name) {
        (Some(caller), Some(name)) => (caller, name),
        _ => {
            warn!(
                caller = %caller.map(mask_phone_number).unwrap_or_default(),
                "Unrecognized caller"
            );
            return Ok(VoiceResponse::new().say(UNRECOGNIZED_CALLER_MESSAGE).into());
        }
    };

    info!(caller = %mask_phone_number(caller), "Known caller, starting verification");
    start_verification(caller, deps).await?;

    let gather = Gather::new()
        .num_digits(CODE_LENGTH)
        .action(GATHER_PATH)
        .say(welcome_prompt(name));

    Ok(VoiceResponse::new()
        .gather(gather)
        .redirect(VOICE_PATH)
        .into())
}

fn welcome_prompt(name: &str) -> String {
    format!(
        "Welcome {}. Please enter the {} digit code sent to your device.",
        name, CODE_LENGTH
    )
}
