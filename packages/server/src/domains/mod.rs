// Business domains for the gated conference line
pub mod callers;
pub mod conference;
pub mod verification;
