//! External process invocations
//!
//! This module provides:
//! - Git subprocess helpers (clone, init, add, commit)
//! - Development-environment bootstrap (dependency install + initial commit)

pub mod bootstrap;
pub mod git;

pub use bootstrap::bootstrap;
