//! Template variants, resolution, and provisioning
//!
//! This module provides:
//! - The template repository source (remote URL with env override)
//! - The pure answers-to-variant resolution table
//! - Provisioning: clone a variant, strip its history, re-init

pub mod provisioner;
pub mod source;
pub mod variant;

pub use provisioner::provision;
pub use source::TemplateSource;
pub use variant::{resolve, Resolution, TemplateVariant, UnsupportedReason};
