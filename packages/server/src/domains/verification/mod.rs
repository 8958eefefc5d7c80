//! Verification domain - one-time code gate in front of the conference
//!
//! Flow per caller:
//!   /voice  → start_verification (send a code unless one is pending)
//!   /gather → check_verification → admitted, or retry back to /voice
//!
//! The provider owns every verification record; nothing is stored here.

pub mod actions;

pub use actions::{
    check_verification, start_verification, CheckVerificationResult, StartVerificationResult,
};

/// Length of the code callers are asked to key in.
pub const CODE_LENGTH: u32 = 6;
