//! Analysis engine for attributing commits to releases

pub mod release_grouper;

pub use release_grouper::ReleaseGrouper;
