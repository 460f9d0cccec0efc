//! Shared types for the cronfmt workspace: the common error type, layered
//! configuration, and structured trace events.

pub mod config;
pub mod error;
pub mod trace;

pub use error::{Error, Result};
