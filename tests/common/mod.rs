// Shared helpers for tests that need a real repository on disk
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        TestRepo { dir, repo }
    }

    /// Commit the current index on HEAD with a fixed timestamp
    pub fn commit(&self, message: &str, time: i64) -> Oid {
        let sig = Signature::new("Test", "test@example.com", &Time::new(time, 0)).unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parents = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<_> = parents.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    pub fn lightweight_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn annotated_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        self.repo
            .tag(name, &object, &sig, &format!("Release {}", name), false)
            .unwrap();
    }

    /// A small history: one unreleased fix on top of two tagged releases
    pub fn with_release_history() -> Self {
        let test_repo = TestRepo::new();
        let first = test_repo.commit("feat: initial api", 1_000);
        test_repo.commit("chore: tidy", 1_500);
        test_repo.lightweight_tag("v0.1.0", first);

        let second = test_repo.commit(
            "fix: reject empty names\n\nNames are now validated.\n\nCloses: #7",
            2_000,
        );
        test_repo.annotated_tag("v0.2.0", second);

        test_repo.commit("change: rename config key", 3_000);
        test_repo
    }
}
