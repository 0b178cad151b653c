//! Mark syntax: `name: path:line` entries and comment skipping.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single parsed mark associating an optional label with a `path:line`
/// location.
///
/// Marks are transient records produced per input line during validation or
/// listing; they are never persisted.
///
/// # Grammar
///
/// ```text
/// [<label>:] <path>:<line>
/// ```
///
/// The *final* colon on the line separates the line number; one more
/// right-split separates an optional label. This reverse scan is what lets
/// labels themselves contain colons (namespaced symbols like
/// `@mlir::populatePatterns`) without confusing the parser.
///
/// # Examples
///
/// ```
/// use marklint::domain::Mark;
///
/// let mark = Mark::parse("entry: src/main.ts:1").unwrap();
/// assert_eq!(mark.label(), Some("entry"));
/// assert_eq!(mark.path(), "src/main.ts");
/// assert_eq!(mark.line(), 1);
///
/// // Anonymous mark: no label prefix
/// let mark = Mark::parse("src/main.ts:1").unwrap();
/// assert_eq!(mark.label(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    label: Option<String>,
    path: String,
    line: u64,
}

/// Error returned when a mark candidate line fails syntax checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMarkError {
    /// The line contains no colon at all, so no location can be split off.
    #[error("no colon found in line - expected 'name: path:line' or 'path:line'")]
    NoColon,

    /// The line starts with `|`, the telltale of a markdown table row.
    #[error("line looks like a markdown table row - expected 'name: path:line'")]
    MarkdownTable,

    /// The text after the final colon is not a base-10 line number.
    #[error("invalid line number '{token}'")]
    InvalidLineNumber {
        /// The offending token, trimmed.
        token: String,
    },
}

impl Mark {
    /// Parses a mark from a trimmed candidate line.
    ///
    /// # Errors
    ///
    /// Returns `ParseMarkError::MarkdownTable` if the line starts with `|`,
    /// `ParseMarkError::NoColon` if it contains no colon, and
    /// `ParseMarkError::InvalidLineNumber` if the token after the final
    /// colon is not made of ASCII digits (sign characters and embedded
    /// garbage are rejected, not truncated).
    pub fn parse(trimmed: &str) -> Result<Self, ParseMarkError> {
        // Table rows rarely contain a colon, so this check has to come
        // before the colon check to keep the table hint reachable.
        if trimmed.starts_with('|') {
            return Err(ParseMarkError::MarkdownTable);
        }

        let Some((rest, token)) = trimmed.rsplit_once(':') else {
            return Err(ParseMarkError::NoColon);
        };

        let token = token.trim();
        let line = parse_line_number(token).ok_or_else(|| ParseMarkError::InvalidLineNumber {
            token: token.to_string(),
        })?;

        // Second right-split separates an optional label; no further colon
        // means an anonymous mark.
        let (label, path) = match rest.rsplit_once(':') {
            Some((label, path)) => (Some(label.trim()), path.trim()),
            None => (None, rest.trim()),
        };

        Ok(Self {
            label: label.filter(|l| !l.is_empty()).map(str::to_string),
            path: path.to_string(),
            line,
        })
    }

    /// Returns the label, or `None` for anonymous marks.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the raw path as written in the marks file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the 1-based line number inside the target file.
    pub fn line(&self) -> u64 {
        self.line
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}:{}", label, self.path, self.line),
            None => write!(f, "{}:{}", self.path, self.line),
        }
    }
}

impl FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim())
    }
}

/// Parses a line-number token: non-empty, ASCII digits only, in `u64` range.
fn parse_line_number(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Two-state comment machine for scanning marks files line by line.
///
/// Tracks whether the scan is inside a `<!-- ... -->` block comment; the
/// state is a single boolean because block comments do not nest. Used by
/// both validation and mark listing so the two agree on which lines count.
#[derive(Debug, Default)]
pub struct LineScanner {
    in_block_comment: bool,
}

impl LineScanner {
    /// Creates a scanner in the normal (outside-comment) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one physical line.
    ///
    /// Returns the trimmed text of a mark candidate, or `None` when the line
    /// is skipped: blank lines, `#` comments, single-line HTML comments, the
    /// `<!--` / `-->` block markers, and everything in between them.
    pub fn candidate<'a>(&mut self, raw: &'a str) -> Option<&'a str> {
        let trimmed = raw.trim();

        if self.in_block_comment {
            if trimmed == "-->" {
                self.in_block_comment = false;
            }
            return None;
        }

        if trimmed == "<!--" {
            self.in_block_comment = true;
            return None;
        }

        if trimmed.starts_with("<!--") && trimmed.ends_with("-->") {
            return None;
        }

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        Some(trimmed)
    }
}
