//! Diagnostic types produced by marks-file validation.
//!
//! Every validation failure is reported as a `Diagnostic` carrying the
//! 1-based input line it was found on; the validator never panics or
//! returns early on malformed input.

use std::fmt;

use crate::domain::ParseMarkError;

/// A problem found on one line of a marks file.
///
/// Diagnostics are immutable once created and are produced in input order,
/// at most one per physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line in the marks file where the problem was found.
    pub line_no: usize,
    /// The kind of problem.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(line_no: usize, kind: DiagnosticKind) -> Self {
        Self { line_no, kind }
    }

    /// Creates a diagnostic from a mark syntax error.
    pub fn syntax(line_no: usize, error: ParseMarkError) -> Self {
        let kind = match error {
            ParseMarkError::NoColon => DiagnosticKind::NoColon,
            ParseMarkError::MarkdownTable => DiagnosticKind::MarkdownTable,
            ParseMarkError::InvalidLineNumber { token } => {
                DiagnosticKind::InvalidLineNumber { token }
            }
        };
        Self::new(line_no, kind)
    }

    /// Creates a file-not-found diagnostic for a mark's raw path.
    pub fn file_not_found(line_no: usize, path: impl Into<String>) -> Self {
        Self::new(line_no, DiagnosticKind::FileNotFound { path: path.into() })
    }

    /// Creates a duplicate-location diagnostic referencing the first use.
    pub fn duplicate_location(
        line_no: usize,
        path: impl Into<String>,
        line: u64,
        first_line_no: usize,
    ) -> Self {
        Self::new(
            line_no,
            DiagnosticKind::DuplicateLocation {
                path: path.into(),
                line,
                first_line_no,
            },
        )
    }

    /// Creates a diagnostic for an existence check that failed with an I/O
    /// error (unreadable directory, permission problem).
    pub fn stat(line_no: usize, path: impl Into<String>, source: &std::io::Error) -> Self {
        Self::new(
            line_no,
            DiagnosticKind::Stat {
                path: path.into(),
                message: source.to_string(),
            },
        )
    }

    /// Renders the human-readable message for this diagnostic.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Returns true if this is a missing-colon syntax error.
    pub fn is_no_colon(&self) -> bool {
        matches!(self.kind, DiagnosticKind::NoColon)
    }

    /// Returns true if this is a markdown-table syntax error.
    pub fn is_markdown_table(&self) -> bool {
        matches!(self.kind, DiagnosticKind::MarkdownTable)
    }

    /// Returns true if this is an invalid line-number error.
    pub fn is_invalid_line_number(&self) -> bool {
        matches!(self.kind, DiagnosticKind::InvalidLineNumber { .. })
    }

    /// Returns true if this is a missing-file error.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self.kind, DiagnosticKind::FileNotFound { .. })
    }

    /// Returns true if this is a duplicate-location error.
    pub fn is_duplicate_location(&self) -> bool {
        matches!(self.kind, DiagnosticKind::DuplicateLocation { .. })
    }

    /// Returns true if this is an environment-level stat failure.
    pub fn is_stat(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Stat { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_no, self.kind)
    }
}

/// The kind of problem a diagnostic reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line contains no colon, so no location can be split off.
    NoColon,

    /// The line starts with `|` and is almost certainly a markdown table row.
    MarkdownTable,

    /// The token after the final colon is not a base-10 line number.
    InvalidLineNumber {
        /// The offending token.
        token: String,
    },

    /// The referenced path does not exist under the root.
    FileNotFound {
        /// The raw path as written in the marks file.
        path: String,
    },

    /// Another mark already claimed the same resolved location.
    DuplicateLocation {
        /// The raw path as written in the marks file.
        path: String,
        /// The line number inside the target file.
        line: u64,
        /// The marks-file line where the location was first used.
        first_line_no: usize,
    },

    /// The existence check itself failed (environment-level condition).
    Stat {
        /// The raw path as written in the marks file.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::NoColon => {
                write!(
                    f,
                    "no colon found in line - expected 'name: path:line' or 'path:line'"
                )
            }
            DiagnosticKind::MarkdownTable => {
                write!(
                    f,
                    "line looks like a markdown table row - expected 'name: path:line'"
                )
            }
            DiagnosticKind::InvalidLineNumber { token } => {
                write!(f, "invalid line number '{}'", token)
            }
            DiagnosticKind::FileNotFound { path } => {
                write!(
                    f,
                    "file not found: '{}' - remove this mark or fix the path",
                    path
                )
            }
            DiagnosticKind::DuplicateLocation {
                path,
                line,
                first_line_no,
            } => {
                write!(
                    f,
                    "duplicate location: '{}:{}' already used at line {}",
                    path, line, first_line_no
                )
            }
            DiagnosticKind::Stat { path, message } => {
                write!(f, "cannot stat '{}': {}", path, message)
            }
        }
    }
}
