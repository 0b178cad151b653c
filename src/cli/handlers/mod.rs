//! Command handlers for the marklint CLI.

mod check;
mod list;

pub use check::handle_check;
pub use list::handle_list;

use std::path::Path;

use anyhow::{Context, Result};

use crate::infra::{read_marks_file, read_marks_from_stdin};

/// Display name for a marks source ('-' reads stdin).
pub(crate) fn display_name(marks_file: &Path) -> String {
    if marks_file == Path::new("-") {
        "<stdin>".to_string()
    } else {
        marks_file.display().to_string()
    }
}

/// Reads marks content from the given file, or stdin for '-'.
pub(crate) fn read_marks(marks_file: &Path) -> Result<String> {
    if marks_file == Path::new("-") {
        read_marks_from_stdin().context("failed to read marks from stdin")
    } else {
        read_marks_file(marks_file)
            .with_context(|| format!("failed to read marks file: {}", marks_file.display()))
    }
}
