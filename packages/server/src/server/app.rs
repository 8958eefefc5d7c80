//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    gather_get_handler, gather_post_handler, health_handler, voice_get_handler,
    voice_post_handler,
};

/// Webhook paths Twilio is pointed at. TwiML redirects and gather actions
/// refer back to these.
pub const VOICE_PATH: &str = "/voice";
pub const GATHER_PATH: &str = "/gather";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    Router::new()
        // Twilio sends GET or POST depending on the number's webhook setting
        .route(VOICE_PATH, get(voice_get_handler).post(voice_post_handler))
        .route(
            GATHER_PATH,
            get(gather_get_handler).post(gather_post_handler),
        )
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}
