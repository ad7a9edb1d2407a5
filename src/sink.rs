//! Stub file output.
//!
//! One `<Class>.lua` file per class identifier in the output directory.
//! Each write replaces the file, so callers hand over one complete unit per
//! identifier (see `pipeline::group_classes`).

use crate::error::StubError;
use crate::model::Identifier;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const STUB_EXTENSION: &str = "lua";

pub struct StubSink {
    dir: PathBuf,
}

impl StubSink {
    /// Create the output directory and remove stubs left by a previous run.
    pub fn prepare(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

        let pattern = dir.join(format!("*.{}", STUB_EXTENSION));
        let pattern = pattern.to_string_lossy();
        for stale in glob::glob(&pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
        {
            fs::remove_file(&stale)
                .with_context(|| format!("failed to remove {}", stale.display()))?;
        }

        Ok(StubSink {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, class: &Identifier) -> PathBuf {
        self.dir.join(format!("{}.{}", class, STUB_EXTENSION))
    }

    /// Write the finished stub unit for `class`, replacing any earlier one.
    pub fn write(&self, class: &Identifier, text: &str) -> Result<PathBuf, StubError> {
        let path = self.path_for(class);
        fs::write(&path, text).map_err(|source| StubError::Sink {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
