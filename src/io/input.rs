use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Error type for reading the text to parse
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read stdin: {0}")]
    StdinError(#[source] std::io::Error),
}

/// Read the whole input: a file, or stdin when the path is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).map_err(|e| InputError::ReadError {
                path: p.to_path_buf(),
                source: e,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(InputError::StdinError)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("page.txt");
        fs::write(&path, "# Hello\n").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "# Hello\n");
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_input(Some(&tmp.path().join("missing.txt"))).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
