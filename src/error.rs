use thiserror::Error;

/// Unified error type for doc-versions operations
#[derive(Error, Debug)]
pub enum DocVersionsError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The branch matched the inclusion pattern but its `version` capture is not numeric.
    #[error("Malformed branch '{branch}': cannot parse version '{version_text}' as MAJOR.MINOR")]
    MalformedBranch {
        branch: String,
        version_text: String,
    },

    /// Zero or several records claim to be the current version.
    #[error("Current branch '{current_branch}' matched {matches} versions, expected exactly one")]
    AmbiguousCurrentBranch {
        current_branch: String,
        matches: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in doc-versions
pub type Result<T> = std::result::Result<T, DocVersionsError>;

impl DocVersionsError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocVersionsError::Config(msg.into())
    }

    pub fn malformed_branch(branch: impl Into<String>, version_text: impl Into<String>) -> Self {
        DocVersionsError::MalformedBranch {
            branch: branch.into(),
            version_text: version_text.into(),
        }
    }
}
