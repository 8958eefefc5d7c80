//! Verification actions - business logic functions
//!
//! Actions are async functions called directly from the webhook handlers.

mod check_verification;
mod start_verification;

pub use check_verification::{check_verification, CheckVerificationResult};
pub use start_verification::{start_verification, StartVerificationResult};
