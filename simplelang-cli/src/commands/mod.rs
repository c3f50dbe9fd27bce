//! CLI command implementations.

pub mod ast;
pub mod check;
pub mod grammar;
pub mod repl;
pub mod tokens;

use std::fs;

/// Read a source file, mapping I/O failures to a user-facing message.
pub fn read_source(file: &str) -> Result<String, String> {
    fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "int x = 1;").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert_eq!(read_source(&path).unwrap(), "int x = 1;");
    }

    #[test]
    fn test_read_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sl");
        let err = read_source(&path.to_string_lossy()).unwrap_err();
        assert!(err.starts_with("cannot read file"));
    }
}
