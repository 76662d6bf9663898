use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "noteblocks.toml";

/// Error type for loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the explicit config file if one was given, otherwise
/// `noteblocks.toml` from `dir` when it exists, otherwise defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
        read_config(&candidate)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert!(!config.output.json);
        assert!(config.output.pretty);
        assert!(!config.output.stable_ids);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_discovers_file_in_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[output]\njson = true\nstable_ids = true\n\n[log]\nfilter = \"noteblocks=debug\"\n",
        )
        .unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert!(config.output.json);
        assert!(config.output.stable_ids);
        assert!(config.output.pretty);
        assert_eq!(config.log.filter, "noteblocks=debug");
    }

    #[test]
    fn test_partial_file_and_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "colour = \"blue\"\n[output]\npretty = false\n").unwrap();
        let config = load_config(Some(&path), tmp.path()).unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("nope.toml")), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[output\njson = ").unwrap();
        let err = load_config(None, tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
