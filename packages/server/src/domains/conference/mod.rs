//! Conference domain - how a verified caller is bridged into the call.

pub mod admission;

pub use admission::{conference_directive, ParticipantRole};
