//! Template provisioning
//!
//! Fetches a template variant into the target directory and detaches it from
//! the template repository's history: shallow clone of the variant branch,
//! remove the cloned `.git`, initialize a fresh repository.

use crate::runtime::git;
use crate::templates::source::TemplateSource;
use crate::templates::variant::TemplateVariant;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Fetch `variant` from `source` into `target` with fresh, history-free
/// version control.
///
/// On failure a partially fetched tree may remain on disk; the caller decides
/// whether to abort (no cleanup is attempted here).
pub async fn provision(
    source: &TemplateSource,
    variant: &TemplateVariant,
    target: &Path,
) -> Result<()> {
    git::clone_branch(source.url(), variant.branch(), target).await?;

    let git_dir = target.join(".git");
    fs::remove_dir_all(&git_dir)
        .await
        .with_context(|| format!("Failed to remove template history: {}", git_dir.display()))?;

    git::init(target).await
}
