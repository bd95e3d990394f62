use crate::domain::{CommitRef, RawCommit, Tag, TagMap};
use crate::error::{ChangelogError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Commits are returned in the order they were added, so add them newest first.
pub struct MockRepository {
    history: Vec<RawCommit>,
    tags: TagMap,
    branches: HashMap<String, Vec<RawCommit>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            history: Vec::new(),
            tags: TagMap::new(),
            branches: HashMap::new(),
        }
    }

    /// Append a commit to the `HEAD` history
    pub fn add_commit(&mut self, commit: RawCommit) {
        self.history.push(commit);
    }

    /// Add a tag pointing to a commit
    pub fn add_tag(&mut self, name: impl Into<String>, commit: impl Into<String>) {
        self.tags
            .entry(CommitRef::new(commit))
            .or_default()
            .insert(Tag::new(name));
    }

    /// Set the history reachable from a branch
    pub fn set_branch(&mut self, branch: impl Into<String>, history: Vec<RawCommit>) {
        self.branches.insert(branch.into(), history);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn commits(&self, branch: Option<&str>) -> Result<Vec<RawCommit>> {
        match branch {
            None => Ok(self.history.clone()),
            Some(name) => self
                .branches
                .get(name)
                .cloned()
                .ok_or_else(|| ChangelogError::branch(format!("Branch not found: {}", name))),
        }
    }

    fn tags(&self) -> Result<TagMap> {
        Ok(self.tags.clone())
    }
}
