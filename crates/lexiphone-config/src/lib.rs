use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::output::OutputConfig;

pub mod dictionary;
pub mod output;

pub use self::output::OutputFormat;

/// Picked up from the working directory when no config is named
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to open config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, else `config.json` in `dir` if present, else
    /// the defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use lexiphone_core::TextEncoding;

    use super::*;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.dictionary.path.is_none());
        assert!(config.dictionary.keep_ambiguous);
        assert_eq!(config.dictionary.encoding, TextEncoding::Latin1);
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config(r#"{ "dictionary": { "path": "data/cmudict.dict" } }"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(
            config.dictionary.path.as_deref(),
            Some(Path::new("data/cmudict.dict"))
        );
        assert!(config.dictionary.keep_ambiguous);
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"{
                "dictionary": { "path": "d.txt", "keep_ambiguous": false, "encoding": "utf8" },
                "output": { "format": "json" }
            }"#,
        );
        let config = Config::load(file.path()).unwrap();
        assert!(!config.dictionary.keep_ambiguous);
        assert_eq!(config.dictionary.encoding, TextEncoding::Utf8);
        assert_eq!(config.output.format, OutputFormat::Json);

        let options = config.dictionary.load_options();
        assert!(!options.keep_ambiguous);
        assert_eq!(options.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("{ not json");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert!(config.dictionary.path.is_none());
        assert!(config.dictionary.keep_ambiguous);
    }

    #[test]
    fn test_discover_reads_config_json_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "dictionary": { "path": "data/sample.dict", "keep_ambiguous": false } }"#,
        )
        .unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(
            config.dictionary.path.as_deref(),
            Some(Path::new("data/sample.dict"))
        );
        assert!(!config.dictionary.keep_ambiguous);
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
        let explicit = write_config(r#"{ "output": { "format": "json" } }"#);
        let config = Config::discover(Some(explicit.path()), dir.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_discover_reports_broken_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
        assert!(matches!(
            Config::discover(None, dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
