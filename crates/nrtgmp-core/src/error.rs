//! Stage-level error taxonomy
//!
//! Every stage of the workflow reports failure through `ScaffoldError`, so
//! the binary decides exit codes in exactly one place instead of each stage
//! terminating the process itself.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reasons for a scaffolding run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user cancelled an interactive prompt
    #[error("Setup cancelled.")]
    Cancelled,

    /// The user declined falling back to the default template
    #[error("Declined the default template. Nothing was created.")]
    FallbackDeclined,

    /// A project name was supplied but is empty
    #[error("Project name must not be empty")]
    EmptyName,

    /// The target directory already exists
    #[error("Directory {} already exists", .0.display())]
    TargetExists(PathBuf),

    /// The configured template repository URL failed to parse
    #[error("Invalid template URL: {url}")]
    InvalidTemplateUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Fetching the template variant failed (network or git failure)
    #[error("Failed to get template data: {0}")]
    Provision(#[source] anyhow::Error),

    /// Rewriting generated artifacts failed
    #[error(transparent)]
    Materialize(anyhow::Error),

    /// Dependency installation or the initial commit failed
    #[error("Failed to set up development environment: {0}")]
    Bootstrap(#[source] anyhow::Error),

    /// Terminal interaction failed for a reason other than cancellation
    #[error("Prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}

impl ScaffoldError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Cancelled => 130,
            _ => 1,
        }
    }
}

// cliclack reports a cancelled prompt as an Interrupted I/O error.
impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            ScaffoldError::Cancelled
        } else {
            ScaffoldError::Prompt(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_maps_to_cancelled() {
        let io = std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c");
        let err = ScaffoldError::from(io);
        assert!(matches!(err, ScaffoldError::Cancelled));
        assert_eq!(err.exit_code(), 130);
    }

    #[test]
    fn test_other_io_maps_to_prompt() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err = ScaffoldError::from(io);
        assert!(matches!(err, ScaffoldError::Prompt(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
