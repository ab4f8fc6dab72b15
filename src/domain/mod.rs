//! Domain layer: login requests and the outcomes they map to.
//!
//! # Architecture
//!
//! - [`login_attempt`] - Submitted credentials and validation outcomes
//!
//! The domain layer has no dependencies on the HTTP or rendering layers.
//! The decision itself lives in [`crate::application::services`].

pub mod login_attempt;

pub use login_attempt::{LoginOutcome, LoginRequest, RejectReason};
