use crate::error::Result;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Reference namespace that git stores tags under
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Represents a short git tag name (e.g., "v1.2.3")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a short name
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Create a tag from a full reference name ("refs/tags/v1.2.3" -> "v1.2.3")
    pub fn from_ref_name(ref_name: &str) -> Self {
        let short = ref_name.strip_prefix(TAG_REF_PREFIX).unwrap_or(ref_name);
        Tag::new(short)
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Opaque commit identity used to key the tag lookup
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommitRef(pub String);

impl CommitRef {
    pub fn new(hash: impl Into<String>) -> Self {
        CommitRef(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<git2::Oid> for CommitRef {
    fn from(oid: git2::Oid) -> Self {
        CommitRef(oid.to_string())
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every tag pointing at a commit, keyed by the commit it points at
pub type TagMap = HashMap<CommitRef, BTreeSet<Tag>>;

/// Regex that a tag's short name must match to mark a release boundary
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Default pattern for `vMAJOR.MINOR.PATCH` release tags
    pub const DEFAULT: &'static str = r"^v\d{1,20}.\d{1,20}.\d{1,20}$";

    /// Compile a tag pattern
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(TagPattern {
            regex: Regex::new(pattern)?,
        })
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &Tag) -> bool {
        self.regex.is_match(tag.as_str())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
