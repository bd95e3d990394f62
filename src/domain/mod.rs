//! Domain logic - pure changelog types independent of git operations

pub mod commit;
pub mod release;
pub mod tag;

pub use commit::{CommitKind, ConventionalCommit, RawCommit};
pub use release::{ReleaseBucketMap, ReleaseType, UNRELEASED_HEADING};
pub use tag::{CommitRef, Tag, TagMap, TagPattern, TAG_REF_PREFIX};
