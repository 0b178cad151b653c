//! Reading marks files from disk or stdin.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors while reading a marks file.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("marks file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads a marks file into a string.
///
/// Marks files must be UTF-8. CRLF line endings are accepted (line splitting
/// strips the `\r`); a leading UTF-8 BOM is stripped.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` for UTF-16 byte order marks or
/// invalid UTF-8.
pub fn read_marks_file(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    decode_marks_bytes(bytes, path)
}

/// Reads marks content from stdin, applying the same decoding rules as
/// [`read_marks_file`].
pub fn read_marks_from_stdin() -> Result<String, FsError> {
    let stdin_path = Path::new("<stdin>");
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| FsError::from_io(stdin_path, e))?;
    decode_marks_bytes(bytes, stdin_path)
}

/// Decodes marks-file bytes, rejecting non-UTF-8 encodings with a
/// remediation hint.
fn decode_marks_bytes(bytes: Vec<u8>, path: &Path) -> Result<String, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    // Strip UTF-8 BOM if present
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_bytes(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write test file");
        path
    }

    #[test]
    fn reads_plain_utf8() {
        let dir = TempDir::new().unwrap();
        let path = write_bytes(&dir, "marks.md", b"entry: src/main.ts:1\n");
        let content = read_marks_file(&path).unwrap();
        assert_eq!(content, "entry: src/main.ts:1\n");
    }

    #[test]
    fn strips_utf8_bom() {
        let dir = TempDir::new().unwrap();
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"src/main.ts:1\n");
        let path = write_bytes(&dir, "marks.md", &bytes);
        let content = read_marks_file(&path).unwrap();
        assert_eq!(content, "src/main.ts:1\n");
    }

    #[test]
    fn rejects_utf16_le_bom() {
        let dir = TempDir::new().unwrap();
        let path = write_bytes(&dir, "marks.md", &[0xFF, 0xFE, 0x61, 0x00]);
        let err = read_marks_file(&path).unwrap_err();
        assert!(matches!(err, FsError::InvalidEncoding { .. }));
        assert!(err.to_string().contains("UTF-16 LE"));
    }

    #[test]
    fn rejects_utf16_be_bom() {
        let dir = TempDir::new().unwrap();
        let path = write_bytes(&dir, "marks.md", &[0xFE, 0xFF, 0x00, 0x61]);
        let err = read_marks_file(&path).unwrap_err();
        assert!(matches!(err, FsError::InvalidEncoding { .. }));
        assert!(err.to_string().contains("UTF-16 BE"));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = write_bytes(&dir, "marks.md", &[0x73, 0x72, 0x63, 0xC0, 0x80]);
        let err = read_marks_file(&path).unwrap_err();
        assert!(matches!(err, FsError::InvalidEncoding { .. }));
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_marks_file(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }
}
