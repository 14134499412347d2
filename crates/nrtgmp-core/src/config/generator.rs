//! Materialization of generated artifacts
//!
//! Two independent, non-atomic writes inside the provisioned directory:
//! the template's `package.json` gets its name field overwritten with the
//! target directory's base name, and a fresh `.env` is written with the
//! fixed key set and a new session secret. The `.env` write truncates any
//! existing file; it never merges.

use crate::config::secret;
use crate::SESSION_SECRET_LEN;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// The subset of package.json this tool touches; everything else is
/// preserved verbatim through the flatten map.
#[derive(Debug, Serialize, Deserialize)]
struct PackageManifest {
    name: String,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/// Render the `.env` contents with the given session secret.
///
/// The connection values are intentionally insecure placeholders (empty
/// database password included); filling them in is a documented hand-off to
/// the user.
fn render_env(session_secret: &str) -> String {
    format!(
        r#"# MongoDB Configuration
MONGODB_URI=mongodb://<-add-your-mongodb-uri->

# Sequelize Configuration
DB_HOST="localhost"
DB_PORT="5432"
DB_NAME="nrtgmp"
DB_USER="postgres"
DB_PASS=""

SEQUELIZE_PREFIX="pg"

# Iron Session
SESSION_COOKIE_NAME="NSESSION"
SESSION_SECRET="{session_secret}""#
    )
}

/// Overwrite the name field of `<project_dir>/package.json`, keeping all
/// other fields as they are.
async fn rewrite_package_name(project_dir: &Path, name: &str) -> Result<()> {
    let package_json_path = project_dir.join("package.json");

    let content = fs::read_to_string(&package_json_path)
        .await
        .with_context(|| format!("Failed to read {}", package_json_path.display()))?;
    let mut manifest: PackageManifest =
        serde_json::from_str(&content).context("Failed to parse package.json")?;

    manifest.name = name.to_string();

    let updated =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize package.json")?;
    fs::write(&package_json_path, updated)
        .await
        .with_context(|| format!("Failed to write {}", package_json_path.display()))?;

    Ok(())
}

/// Write `<project_dir>/.env`, replacing any existing file.
async fn write_env_file(project_dir: &Path) -> Result<()> {
    let env_path = project_dir.join(".env");
    let session_secret = secret::alphanumeric_token(SESSION_SECRET_LEN);

    fs::write(&env_path, render_env(&session_secret))
        .await
        .with_context(|| format!("Failed to write {}", env_path.display()))?;

    Ok(())
}

/// Rewrite the generated artifacts in a provisioned project directory.
///
/// `project_name` becomes the package name; the `.env` gets a fresh secret
/// per run. Not atomic: the metadata write can succeed while the `.env`
/// write fails, and nothing is rolled back.
pub async fn materialize(project_dir: &Path, project_name: &str) -> Result<()> {
    rewrite_package_name(project_dir, project_name).await?;
    write_env_file(project_dir).await
}
