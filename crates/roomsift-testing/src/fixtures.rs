//! Sample item sources shipped with this crate under `samples/`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ROOMS: &str = "rooms.json";
pub const RESERVATIONS: &str = "reservations.json";

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        fs::copy(self.path(sample_name), dest)
            .with_context(|| format!("failed to copy sample {}", sample_name))?;
        Ok(())
    }
}
