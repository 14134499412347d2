//! NRTGMP Core - Shared library for the create-nrtgmp-app scaffolder
//!
//! This library provides the core functionality for generating a new NRTGMP
//! project from a remote template repository. It is designed so that the CLI
//! binary stays a thin shell around it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure answer-to-variant resolution, token
//!   generation, artifact rewriting, git/npm subprocess helpers
//! - **Layer 2: Workflow Types** - `ProductConfig` trait, `ProjectTarget`,
//!   `ScaffoldError` for custom frontends
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts and the
//!   `run` orchestrator (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use nrtgmp_core::{resolve, ConfigurationAnswers, Resolution};
//!
//! let answers = ConfigurationAnswers::default_supported();
//! match resolve(&answers) {
//!     Resolution::Supported(variant) => println!("branch {}", variant.branch()),
//!     Resolution::Unsupported(reason) => eprintln!("{}", reason.message()),
//! }
//! ```

pub mod answers;
pub mod config;
pub mod error;
pub mod product;
pub mod runtime;
pub mod target;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{ConfigurationAnswers, SqlDialect};
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use target::ProjectTarget;
pub use templates::{resolve, Resolution, TemplateSource, TemplateVariant, UnsupportedReason};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};

/// Length of the generated session secret written into `.env`
pub const SESSION_SECRET_LEN: usize = 40;
