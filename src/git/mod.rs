//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two things the
//! changelog needs from version control: the commit history and the tags
//! pointing into it.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use git_changelog::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let history = repo.commits(Some("main"))?;
//! let tags = repo.tags()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{RawCommit, TagMap};
use crate::error::Result;

/// Read-only view of a repository's history and tags
///
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::ChangelogError] variants.
pub trait Repository {
    /// Commits reachable from a branch, newest first
    ///
    /// # Arguments
    /// * `branch` - Branch (or any revision) to walk from; `None` walks from `HEAD`
    ///
    /// # Returns
    /// * `Ok(Vec<RawCommit>)` - History in newest-first order
    /// * `Err` - If the branch cannot be resolved or the walk fails
    fn commits(&self, branch: Option<&str>) -> Result<Vec<RawCommit>>;

    /// All tags, keyed by the commit they point at
    ///
    /// Annotated tags are peeled to their target commit. Tag names are
    /// short names with the `refs/tags/` prefix removed.
    fn tags(&self) -> Result<TagMap>;
}
