#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

pub use gitdemo_test_utils::init_tracing;

/// A fresh temp dir plus a sandbox path inside it that does not exist yet.
pub fn temp_sandbox() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let sandbox = dir.path().join("git_demo");
    (dir, sandbox)
}
