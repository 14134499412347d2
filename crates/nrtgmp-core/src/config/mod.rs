//! Generated configuration artifacts
//!
//! This module provides:
//! - Random token generation for session secrets
//! - Materialization of package metadata and the `.env` file

pub mod generator;
pub mod secret;

pub use generator::materialize;
pub use secret::alphanumeric_token;
