//! Infrastructure: marks-file I/O and encoding checks

mod fs;

pub use fs::{FsError, read_marks_file, read_marks_from_stdin};
