// Shared fixture helpers for integration tests
#![allow(dead_code)]

use git2::{Repository, Signature};
use tempfile::TempDir;

/// Initialize a repository with a single commit and the given lightweight tags
pub fn repo_with_tags(tags: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let repo = Repository::init(dir.path()).expect("init repository");

    let sig = Signature::now("Fixture", "fixture@example.com").expect("signature");
    let tree_id = repo
        .index()
        .expect("index")
        .write_tree()
        .expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
        .expect("commit");
    let object = repo.find_object(oid, None).expect("find commit object");

    for tag in tags {
        repo.tag_lightweight(tag, &object, false)
            .expect("create tag");
    }

    dir
}

/// A directory that is not under version control
pub fn plain_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

pub fn path_str(dir: &TempDir) -> &str {
    dir.path().to_str().expect("utf-8 temp path")
}
