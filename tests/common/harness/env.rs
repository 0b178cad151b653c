//! Isolated test environment with temp directory.

use super::MarklintCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary project tree.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for creating target files and a marks file.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the project root
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Creates an environment pre-populated with the standard sample tree
    /// (`src/main.ts`, `src/utils.ts`, `README.md`).
    pub fn with_sample_tree() -> Self {
        let env = Self::new();
        env.add_target("src/main.ts", "hello\n");
        env.add_target("src/utils.ts", "world\n");
        env.add_target("README.md", "readme\n");
        env
    }

    /// Returns the path to the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path to the default marks file in this environment.
    pub fn marks_path(&self) -> PathBuf {
        self.root.join("marks.md")
    }

    /// Creates a target file (and any parent directories) under the root.
    pub fn add_target(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.join(rel_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write target file");
        path
    }

    /// Writes the marks file for this environment and returns its path.
    pub fn write_marks(&self, content: &str) -> PathBuf {
        let path = self.marks_path();
        std::fs::write(&path, content).expect("Failed to write marks file");
        path
    }

    /// Writes raw bytes as the marks file (for encoding tests).
    pub fn write_marks_bytes(&self, bytes: &[u8]) -> PathBuf {
        let path = self.marks_path();
        std::fs::write(&path, bytes).expect("Failed to write marks file");
        path
    }

    /// Creates a MarklintCommand configured for this test environment.
    pub fn cmd(&self) -> MarklintCommand {
        MarklintCommand::new().root(&self.root)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
