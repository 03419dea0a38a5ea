//! Core module - shared infrastructure for the AgentCore tool layer
//!
//! This module contains foundational types, configuration, and error handling
//! used throughout the crate.

pub mod config;
pub mod error;
pub mod types;

pub use config::{resolve_region, Config};
pub use error::{AgentCoreError, Result};
pub use types::*;
