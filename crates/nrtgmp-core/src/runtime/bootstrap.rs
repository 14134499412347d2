//! Development-environment bootstrap
//!
//! Installs the generated project's dependencies and creates the initial
//! commit. Both steps run inside the provisioned directory; a failure in
//! either leaves whatever is already on disk in place.

use crate::runtime::git;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Run `npm install` scoped to `dir`
pub async fn install_dependencies(dir: &Path) -> Result<()> {
    let output = Command::new("npm")
        .arg("install")
        .current_dir(dir)
        .output()
        .await
        .context("Failed to execute npm install")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "npm install failed (exit code {}): {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
    }

    Ok(())
}

/// Stage everything and create the initial commit
pub async fn create_initial_commit(dir: &Path, message: &str) -> Result<()> {
    git::add_all(dir).await?;
    git::commit(dir, message).await
}

/// Install dependencies, then create the initial commit
pub async fn bootstrap(dir: &Path, commit_message: &str) -> Result<()> {
    install_dependencies(dir).await?;
    create_initial_commit(dir, commit_message).await
}
