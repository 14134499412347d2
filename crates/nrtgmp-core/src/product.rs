//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a product binary implements to configure
//! the scaffolding behavior for its template repository.

use crate::answers::ConfigurationAnswers;
use std::path::Path;

/// Configuration trait for a scaffolded product
///
/// The binary crate implements this to define:
/// - Product identity (name, display name)
/// - Template repository location
/// - Initial commit message
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Git repository the template variants are cloned from
    fn template_repo_url(&self) -> &'static str;

    /// Environment variable name for overriding the template repository URL
    fn template_url_env(&self) -> &'static str;

    /// Commit message for the initial commit in the generated project
    fn initial_commit_message(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, answers: &ConfigurationAnswers) -> Vec<String>;
}
