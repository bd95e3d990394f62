use super::tag::{CommitRef, Tag};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Unparsed commit as delivered by the repository walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    pub id: CommitRef,
    pub message: String,
    /// Commit time in seconds since the epoch
    pub time: i64,
}

impl RawCommit {
    pub fn new(id: impl Into<String>, message: impl Into<String>, time: i64) -> Self {
        RawCommit {
            id: CommitRef::new(id),
            message: message.into(),
            time,
        }
    }
}

/// The changelog category a commit is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitKind {
    Feature,
    Fix,
    Change,
}

impl CommitKind {
    /// All kinds, in the order the changelog renders them
    pub const ALL: [CommitKind; 3] = [CommitKind::Feature, CommitKind::Fix, CommitKind::Change];

    /// Classify a commit message by its leading type prefix
    pub fn classify(message: &str) -> Option<Self> {
        if message.starts_with("feat") {
            Some(CommitKind::Feature)
        } else if message.starts_with("fix") {
            Some(CommitKind::Fix)
        } else if message.starts_with("change") {
            Some(CommitKind::Change)
        } else {
            None
        }
    }

    /// Key of this kind's section in the changelog template
    pub fn template_key(&self) -> &'static str {
        match self {
            CommitKind::Feature => "feat",
            CommitKind::Fix => "fix",
            CommitKind::Change => "change",
        }
    }
}

impl fmt::Display for CommitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_key())
    }
}

/// A commit that passed classification, split into its message parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalCommit {
    pub kind: CommitKind,
    pub tags: BTreeSet<Tag>,
    pub description: String,
    pub body: Option<String>,
    pub footers: BTreeMap<String, String>,
    pub time_of_commit: i64,
}

impl ConventionalCommit {
    /// Body text, if the commit has a non-empty one
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}
