// Conference Gate - API Core
//
// Answers inbound calls, checks the caller against a known-participant list,
// verifies them with a one-time code via Twilio Verify and bridges verified
// callers into a shared conference.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
