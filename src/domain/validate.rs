//! Marks-file validation.
//!
//! This module provides the pure validation pass over a marks file: a single
//! forward scan that classifies lines, parses mark candidates, checks that
//! referenced paths exist under a root directory, and detects duplicate
//! locations. The only filesystem access is existence checks; target file
//! contents are never read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{Diagnostic, LineScanner, Mark};

/// Validates the content of a marks file against a root directory.
///
/// Runs the per-line checks in order (missing colon, markdown table row,
/// invalid line number, missing file, duplicate location) and short-circuits
/// on the first failure, so each physical line yields at most one diagnostic.
/// Line numbering is 1-based and preserved across skipped comment and blank
/// lines.
///
/// Duplicate detection keys on the resolved `(path, line)` location only;
/// labels never participate. The seen-set is local to each call, keeping the
/// function reentrant.
///
/// # Arguments
///
/// * `content` - The full text of the marks file (may be empty)
/// * `root` - Directory that relative mark paths resolve against
///
/// # Returns
///
/// Diagnostics in ascending line order; empty for a valid file.
pub fn validate(content: &str, root: &Path) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen: HashMap<(PathBuf, u64), usize> = HashMap::new();
    let mut scanner = LineScanner::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let Some(candidate) = scanner.candidate(raw) else {
            continue;
        };

        let mark = match Mark::parse(candidate) {
            Ok(mark) => mark,
            Err(error) => {
                diagnostics.push(Diagnostic::syntax(line_no, error));
                continue;
            }
        };

        let resolved = resolve_path(mark.path(), root);
        match resolved.try_exists() {
            Ok(true) => {}
            Ok(false) => {
                diagnostics.push(Diagnostic::file_not_found(line_no, mark.path()));
                continue;
            }
            Err(error) => {
                diagnostics.push(Diagnostic::stat(line_no, mark.path(), &error));
                continue;
            }
        }

        let location = (resolved, mark.line());
        if let Some(&first_line_no) = seen.get(&location) {
            diagnostics.push(Diagnostic::duplicate_location(
                line_no,
                mark.path(),
                mark.line(),
                first_line_no,
            ));
        } else {
            seen.insert(location, line_no);
        }
    }

    diagnostics
}

/// Resolves a raw mark path: absolute paths pass through, relative paths
/// join the root.
pub fn resolve_path(raw: &str, root: &Path) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// A parseable mark together with its resolved location and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMark {
    /// 1-based position among the parseable marks in the file.
    pub index: usize,
    /// The parsed mark (label, raw path, line).
    pub mark: Mark,
    /// The mark's path resolved against the root.
    pub resolved: PathBuf,
}

/// Collects every parseable mark from a marks file, in input order.
///
/// Lines that fail syntax checks are skipped silently; existence is not
/// checked (use [`validate`] for that). This is the enumeration the recall
/// side builds on: mark indices here are what navigation refers to.
pub fn collect_marks(content: &str, root: &Path) -> Vec<ResolvedMark> {
    let mut marks = Vec::new();
    let mut scanner = LineScanner::new();

    for raw in content.lines() {
        let Some(candidate) = scanner.candidate(raw) else {
            continue;
        };
        let Ok(mark) = Mark::parse(candidate) else {
            continue;
        };
        let resolved = resolve_path(mark.path(), root);
        marks.push(ResolvedMark {
            index: marks.len() + 1,
            mark,
            resolved,
        });
    }

    marks
}
