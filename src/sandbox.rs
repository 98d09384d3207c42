// src/sandbox.rs

//! The throwaway directory every walkthrough command runs in.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{DemoError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Relative location of the sandbox, next to the directory holding the
/// `gitdemo` executable.
pub const SANDBOX_DIR_NAME: &str = "git_demo";

/// Owns the demo's working directory.
///
/// After [`reset`](Self::reset) the directory exists and is empty; from then
/// on only walkthrough commands and setup writes touch it.
#[derive(Debug, Clone)]
pub struct SandboxDirectory {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl SandboxDirectory {
    /// Sandbox on the real filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, Arc::new(RealFileSystem))
    }

    pub fn with_fs(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fs(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }

    /// Remove the directory (if present) with everything below it, then
    /// recreate it empty.
    ///
    /// Idempotent. Any filesystem failure is fatal to startup and reported as
    /// [`DemoError::SandboxReset`].
    pub fn reset(&self) -> Result<()> {
        let path = &self.path;
        if self.fs.exists(path) {
            debug!(path = %path.display(), "removing previous sandbox contents");
        }

        self.fs
            .remove_dir_all(path)
            .and_then(|()| self.fs.create_dir_all(path))
            .map_err(|e| DemoError::SandboxReset {
                path: path.clone(),
                reason: format!("{e:#}"),
            })?;

        info!(path = %path.display(), "sandbox ready");
        Ok(())
    }
}

/// Default sandbox location: `<dir of the running executable>/../git_demo`.
pub fn default_sandbox_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().ok_or_else(|| {
        DemoError::ConfigError(format!("executable path {:?} has no parent directory", exe))
    })?;
    Ok(exe_dir.join("..").join(SANDBOX_DIR_NAME))
}
