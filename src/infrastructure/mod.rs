//! Infrastructure layer for external concerns.
//!
//! This module holds file I/O for the hospital directory; nothing else in
//! the application touches the filesystem.

pub mod persistence;

pub use persistence::*;
