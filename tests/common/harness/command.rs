//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `marklint` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct MarklintCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl MarklintCommand {
    /// Creates a new command for the `marklint` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--root` option to specify the resolution root.
    pub fn root(mut self, path: &Path) -> Self {
        self.args.push("--root".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Pipes the given content to the command's stdin.
    pub fn stdin(mut self, content: &str) -> Self {
        self.stdin = Some(content.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("marklint").expect("Failed to find marklint binary");
        cmd.args(&self.args);
        if let Some(stdin) = self.stdin {
            cmd.write_stdin(stdin);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `check` command on the given marks file.
    pub fn check(self, marks_file: &Path) -> Self {
        let file = marks_file.to_string_lossy().to_string();
        self.args(["check", &file])
    }

    /// Configures for the `check` command reading stdin.
    pub fn check_stdin(self) -> Self {
        self.args(["check", "-"])
    }

    /// Configures for the `ls` command on the given marks file.
    pub fn ls(self, marks_file: &Path) -> Self {
        let file = marks_file.to_string_lossy().to_string();
        self.args(["ls", &file])
    }

    /// Adds `--format json`.
    pub fn json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths`.
    pub fn paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for MarklintCommand {
    fn default() -> Self {
        Self::new()
    }
}
