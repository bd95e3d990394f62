use crate::domain::{CommitRef, RawCommit, Tag, TagMap, TAG_REF_PREFIX};
use crate::error::{ChangelogError, Result};
use git2::{ObjectType, Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Resolve a branch name, falling back to any revision git understands
    fn resolve_branch(&self, branch_name: &str) -> Result<Oid> {
        if let Ok(branch) = self.repo.find_branch(branch_name, git2::BranchType::Local) {
            return branch.get().target().ok_or_else(|| {
                ChangelogError::branch(format!("Branch '{}' has no target", branch_name))
            });
        }

        self.repo
            .revparse_single(branch_name)
            .and_then(|object| object.peel(ObjectType::Commit))
            .map(|commit| commit.id())
            .map_err(|e| {
                ChangelogError::branch(format!("Cannot find branch '{}': {}", branch_name, e))
            })
    }
}

impl super::Repository for Git2Repository {
    fn commits(&self, branch: Option<&str>) -> Result<Vec<RawCommit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        match branch {
            Some(name) => revwalk.push(self.resolve_branch(name)?)?,
            None => revwalk.push_head().map_err(|e| {
                ChangelogError::branch(format!("Cannot resolve HEAD: {}", e))
            })?,
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

            commits.push(RawCommit {
                id: CommitRef::from(oid),
                message,
                time: commit.time().seconds(),
            });
        }

        debug!(count = commits.len(), branch = branch.unwrap_or("HEAD"), "walked history");
        Ok(commits)
    }

    fn tags(&self) -> Result<TagMap> {
        let mut tags = TagMap::new();

        for reference in self.repo.references_glob(&format!("{}*", TAG_REF_PREFIX))? {
            let reference = reference?;
            let Some(name) = reference.name() else {
                continue;
            };

            // Tags on trees or blobs have no place in history
            let commit = match reference.peel(ObjectType::Commit) {
                Ok(commit) => commit,
                Err(e) => {
                    debug!(tag = name, error = %e, "skipping tag that does not point at a commit");
                    continue;
                }
            };

            tags.entry(CommitRef::from(commit.id()))
                .or_default()
                .insert(Tag::from_ref_name(name));
        }

        debug!(tagged_commits = tags.len(), "collected tags");
        Ok(tags)
    }
}
