//! Git subprocess helpers
//!
//! Thin wrappers around the `git` binary. Each call waits for the command to
//! finish and folds a non-zero exit status, with its stderr, into the error.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Run a git command and check its exit status
async fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd
        .output()
        .await
        .with_context(|| format!("Failed to execute: git {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "git {} failed (exit code {}): {}",
            args.join(" "),
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
    }

    Ok(())
}

/// Shallow-clone a single branch of a repository into `dest`
pub async fn clone_branch(repo_url: &str, branch: &str, dest: &Path) -> Result<()> {
    let branch_arg = format!("--branch={}", branch);
    let dest_str = dest.to_string_lossy();
    run_git(
        &[
            "clone",
            &branch_arg,
            "--single-branch",
            "--depth=1",
            repo_url,
            &dest_str,
        ],
        None,
    )
    .await
}

/// Initialize a fresh repository in `dir`
pub async fn init(dir: &Path) -> Result<()> {
    run_git(&["init"], Some(dir)).await
}

/// Stage all files in `dir`
pub async fn add_all(dir: &Path) -> Result<()> {
    run_git(&["add", "."], Some(dir)).await
}

/// Create a commit with the given message in `dir`
pub async fn commit(dir: &Path, message: &str) -> Result<()> {
    run_git(&["commit", "-m", message], Some(dir)).await
}
