//! Error handling
//!
//! Defines error types and handling for the sandboxed filesystem.

pub mod handlers;
pub mod types;

pub use types::*;
