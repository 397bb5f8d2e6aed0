//! Filesystem helpers shared by the differ and the server.

use std::env;
use std::fs;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::DifferError;

/// Absolute form of a path that may not exist, resolved lexically
/// against the current directory. Error messages should name the full
/// path even when canonicalization is impossible.
pub fn absolutize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Resolve a path to its canonical absolute form.
pub fn canonicalize(path: impl AsRef<Path>) -> Result<PathBuf, DifferError> {
    let path = path.as_ref();
    match dunce::canonicalize(path) {
        Ok(canonical) => Ok(canonical),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(DifferError::not_found(absolutize(path)))
        }
        Err(err) if err.kind() == ErrorKind::PermissionDenied => {
            Err(DifferError::permission_denied(path))
        }
        Err(err) => Err(DifferError::IO(err)),
    }
}

/// Whether the file can actually be opened for reading. `fs::metadata`
/// alone does not prove read access.
pub fn is_readable(path: impl AsRef<Path>) -> bool {
    File::open(path.as_ref()).is_ok()
}

/// Read the full contents of a file as strict UTF-8. Invalid byte
/// sequences are an error, never silently substituted.
pub fn read_from_path(path: impl AsRef<Path>) -> Result<String, DifferError> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(DifferError::not_found(path));
        }
        Err(err) if err.kind() == ErrorKind::PermissionDenied => {
            return Err(DifferError::permission_denied(path));
        }
        Err(err) => return Err(DifferError::IO(err)),
    };
    String::from_utf8(bytes).map_err(|_| DifferError::encoding(path))
}

/// Split contents into lines, keeping the line-ending markers so the
/// original document can be reconstructed exactly. An empty string yields
/// no lines.
pub fn split_lines(contents: &str) -> Vec<String> {
    contents.split_inclusive('\n').map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::DifferError;

    #[test]
    fn test_absolutize_relative_path() {
        let abs = absolutize("some/missing/file.txt");
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/missing/file.txt"));
    }

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines = split_lines("one\ntwo\nthree");
        assert_eq!(lines, vec!["one\n", "two\n", "three"]);
        assert_eq!(lines.concat(), "one\ntwo\nthree");
    }

    #[test]
    fn test_split_lines_empty_contents() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        let lines = split_lines("one\n");
        assert_eq!(lines, vec!["one\n"]);
    }

    #[test]
    fn test_read_from_path_rejects_invalid_utf8() -> Result<(), DifferError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("binary.dat");
        let mut file = std::fs::File::create(&path)?;
        file.write_all(&[0xf0, 0x28, 0x8c, 0x28])?;

        match read_from_path(&path) {
            Err(DifferError::Encoding(p)) => assert_eq!(p, path),
            other => panic!("expected encoding error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_canonicalize_missing_file() {
        let err = canonicalize("/no/such/file/anywhere.txt").unwrap_err();
        assert!(matches!(err, DifferError::NotFound(_)));
    }
}
