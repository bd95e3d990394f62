use super::commit::ConventionalCommit;

/// Heading used for commits not yet covered by a release tag
pub const UNRELEASED_HEADING: &str = "Unreleased Changes";

/// Release a commit is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Unreleased,
    Released(String),
}

impl ReleaseType {
    pub fn is_released(&self) -> bool {
        matches!(self, ReleaseType::Released(_))
    }

    /// Text shown for this release in the changelog
    pub fn heading(&self) -> &str {
        match self {
            ReleaseType::Unreleased => UNRELEASED_HEADING,
            ReleaseType::Released(version) => version,
        }
    }
}

/// Commits bucketed by release, kept in the order buckets were first touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseBucketMap {
    buckets: Vec<(ReleaseType, Vec<ConventionalCommit>)>,
}

impl ReleaseBucketMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit to a release's bucket, creating the bucket at the end if needed
    pub fn push(&mut self, release: ReleaseType, commit: ConventionalCommit) {
        match self.buckets.iter_mut().find(|(r, _)| *r == release) {
            Some((_, commits)) => commits.push(commit),
            None => self.buckets.push((release, vec![commit])),
        }
    }

    pub fn get(&self, release: &ReleaseType) -> Option<&[ConventionalCommit]> {
        self.buckets
            .iter()
            .find(|(r, _)| r == release)
            .map(|(_, commits)| commits.as_slice())
    }

    pub fn unreleased(&self) -> &[ConventionalCommit] {
        self.get(&ReleaseType::Unreleased).unwrap_or(&[])
    }

    /// Released buckets in insertion order
    pub fn released(&self) -> impl Iterator<Item = (&str, &[ConventionalCommit])> {
        self.buckets.iter().filter_map(|(release, commits)| match release {
            ReleaseType::Released(version) => Some((version.as_str(), commits.as_slice())),
            ReleaseType::Unreleased => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ReleaseType, &[ConventionalCommit])> {
        self.buckets
            .iter()
            .map(|(release, commits)| (release, commits.as_slice()))
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of commits across all buckets
    pub fn commit_count(&self) -> usize {
        self.buckets.iter().map(|(_, commits)| commits.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CommitKind;
    use std::collections::{BTreeMap, BTreeSet};

    fn commit(description: &str) -> ConventionalCommit {
        ConventionalCommit {
            kind: CommitKind::Feature,
            tags: BTreeSet::new(),
            description: description.to_string(),
            body: None,
            footers: BTreeMap::new(),
            time_of_commit: 0,
        }
    }

    #[test]
    fn test_release_heading() {
        assert_eq!(ReleaseType::Unreleased.heading(), "Unreleased Changes");
        assert_eq!(
            ReleaseType::Released("v1.0.0".to_string()).heading(),
            "v1.0.0"
        );
    }

    #[test]
    fn test_release_equality() {
        assert_eq!(
            ReleaseType::Released("v1.0.0".to_string()),
            ReleaseType::Released("v1.0.0".to_string())
        );
        assert_ne!(
            ReleaseType::Released("v1.0.0".to_string()),
            ReleaseType::Released("v1.0.1".to_string())
        );
        assert!(!ReleaseType::Unreleased.is_released());
    }

    #[test]
    fn test_buckets_keep_first_touch_order() {
        let mut map = ReleaseBucketMap::new();
        map.push(ReleaseType::Released("v2.0.0".to_string()), commit("a"));
        map.push(ReleaseType::Released("v1.0.0".to_string()), commit("b"));
        map.push(ReleaseType::Released("v2.0.0".to_string()), commit("c"));

        let versions: Vec<_> = map.released().map(|(v, _)| v).collect();
        assert_eq!(versions, vec!["v2.0.0", "v1.0.0"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.commit_count(), 3);

        let v2 = map.get(&ReleaseType::Released("v2.0.0".to_string())).unwrap();
        assert_eq!(v2[0].description, "a");
        assert_eq!(v2[1].description, "c");
    }

    #[test]
    fn test_unreleased_defaults_to_empty() {
        let map = ReleaseBucketMap::new();
        assert!(map.unreleased().is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn test_released_skips_unreleased_bucket() {
        let mut map = ReleaseBucketMap::new();
        map.push(ReleaseType::Unreleased, commit("u"));
        map.push(ReleaseType::Released("v1.0.0".to_string()), commit("r"));

        assert_eq!(map.released().count(), 1);
        assert_eq!(map.unreleased().len(), 1);
    }
}
