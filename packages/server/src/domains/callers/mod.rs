//! Callers domain - the static allow-list of people who may dial in.

pub mod models;

pub use models::KnownParticipants;

/// Spoken to any caller whose number is not on the allow-list.
pub const UNRECOGNIZED_CALLER_MESSAGE: &str =
    "Sorry, I don't recognize the number you're calling from.";
