// Shared helpers for integration tests that need scenario files on disk.
use std::{
    fs,
    path::{Path, PathBuf},
};

// Scenario file in the OS temp dir, removed again when dropped.
pub struct TempScenario {
    path: PathBuf,
}

impl TempScenario {
    pub fn write(contents: &str) -> Self {
        // Unique name so parallel tests never share a file.
        let path = std::env::temp_dir().join(format!("worms-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, contents).expect("write temp scenario");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempScenario {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
