use crate::domain::{ConventionalCommit, ReleaseBucketMap, ReleaseType, Tag, TagPattern};
use tracing::debug;

/// Partitions a newest-first commit sequence into release buckets
pub struct ReleaseGrouper {
    pattern: TagPattern,
}

impl ReleaseGrouper {
    /// Create a new grouper for the given release tag pattern
    pub fn new(pattern: TagPattern) -> Self {
        ReleaseGrouper { pattern }
    }

    /// The release tag on a commit, if any.
    ///
    /// When several tags match, the lexicographically greatest one wins.
    pub fn release_tag<'a>(&self, commit: &'a ConventionalCommit) -> Option<&'a Tag> {
        commit.tags.iter().rev().find(|tag| self.pattern.matches(tag))
    }

    /// Group commits by release.
    ///
    /// Commits must be newest first. A tagged commit opens its release and
    /// every later (older) untagged commit joins it until the next tag.
    /// Commits seen before any tag are unreleased.
    pub fn group(&self, commits: Vec<ConventionalCommit>) -> ReleaseBucketMap {
        let mut buckets = ReleaseBucketMap::new();
        let mut current = ReleaseType::Unreleased;

        for commit in commits {
            if let Some(tag) = self.release_tag(&commit) {
                current = ReleaseType::Released(tag.name.clone());
            }
            buckets.push(current.clone(), commit);
        }

        debug!(
            buckets = buckets.len(),
            commits = buckets.commit_count(),
            pattern = self.pattern.as_str(),
            "grouped commits into releases"
        );
        buckets
    }
}
