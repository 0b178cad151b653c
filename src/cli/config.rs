//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default marks file to validate
    pub marks_file: Option<PathBuf>,

    /// Root directory relative mark paths resolve against
    pub root: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/marklint/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marklint")
            .join("config.toml")
    }

    /// Resolve the marks file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI positional argument
    /// 2. Config file `marks_file` setting
    /// 3. `marks.md` in the current directory
    pub fn marks_file(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.marks_file.clone())
            .unwrap_or_else(|| PathBuf::from("marks.md"))
    }

    /// Resolve the root directory mark paths are checked against.
    ///
    /// Precedence order:
    /// 1. CLI `--root` argument
    /// 2. Config file `root` setting
    /// 3. The marks file's parent directory
    /// 4. Current working directory (stdin input, bare filename)
    pub fn root(&self, cli_root: Option<&PathBuf>, marks_file: &Path) -> PathBuf {
        cli_root
            .cloned()
            .or_else(|| self.root.clone())
            .or_else(|| {
                if marks_file == Path::new("-") {
                    return None;
                }
                marks_file
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
