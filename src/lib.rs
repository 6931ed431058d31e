//! APPTBOOK - Terminal Appointment Booking Library
//!
//! A terminal-based doctor appointment booking form with field validation, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
