//! Core types: Mark, LineScanner, Diagnostic, and the validator

mod diagnostic;
mod mark;
mod validate;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use mark::{LineScanner, Mark, ParseMarkError};
pub use validate::{ResolvedMark, collect_marks, resolve_path, validate};
