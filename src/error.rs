use thiserror::Error;

/// Unified error type for git-changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Branch error: {0}")]
    Branch(String),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        ChangelogError::Template(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        ChangelogError::Branch(msg.into())
    }
}
