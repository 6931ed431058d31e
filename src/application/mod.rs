//! Application layer managing form state and the booking workflow.
//!
//! This module sits between the domain layer and the presentation layer,
//! tracking what the user has entered, which field has focus, and the
//! verdict of the last submission.

pub mod state;

pub use state::*;
