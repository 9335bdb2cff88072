use std::path::PathBuf;

use supportdump_core::OutputFormat;

use crate::error::ConfigError;

pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_CACHE_PATH: &str = "crunched_corpus.json";

/// Session configuration loaded from environment variables.
///
/// | Env Var                | Default                | Meaning                                   |
/// |------------------------|------------------------|-------------------------------------------|
/// | `SUPPORTDUMP_DATA_DIR` | (prompted)             | Directory holding the three `.jsons` files |
/// | `SUPPORTDUMP_OUT_DIR`  | `.`                    | Directory receiving the extracts          |
/// | `SUPPORTDUMP_CACHE`    | `crunched_corpus.json` | Corpus cache path; empty disables caching |
/// | `SUPPORTDUMP_FORMAT`   | `text`                 | `text`, `json` or `both`                  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means ask on the terminal.
    pub data_dir: Option<PathBuf>,
    pub out_dir: PathBuf,
    /// `None` disables the corpus cache.
    pub cache_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            cache_path: Some(PathBuf::from(DEFAULT_CACHE_PATH)),
            format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; `from_env` uses the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("SUPPORTDUMP_DATA_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let out_dir = lookup("SUPPORTDUMP_OUT_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_OUT_DIR.into());

        let cache_path = match lookup("SUPPORTDUMP_CACHE") {
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(PathBuf::from(s.trim())),
            None => Some(PathBuf::from(DEFAULT_CACHE_PATH)),
        };

        let format = match lookup("SUPPORTDUMP_FORMAT") {
            Some(s) => OutputFormat::parse(&s).map_err(|source| ConfigError::Invalid {
                var: "SUPPORTDUMP_FORMAT",
                source,
            })?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            data_dir,
            out_dir: PathBuf::from(out_dir),
            cache_path,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("SUPPORTDUMP_DATA_DIR", "/exports"),
            ("SUPPORTDUMP_OUT_DIR", "out"),
            ("SUPPORTDUMP_CACHE", "cache.json"),
            ("SUPPORTDUMP_FORMAT", "both"),
        ])
        .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/exports")));
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.cache_path, Some(PathBuf::from("cache.json")));
        assert_eq!(config.format, OutputFormat::Both);
    }

    #[test]
    fn empty_cache_disables_caching() {
        let config = config_from(&[("SUPPORTDUMP_CACHE", "")]).unwrap();
        assert_eq!(config.cache_path, None);
    }

    #[test]
    fn blank_data_dir_means_prompt() {
        let config = config_from(&[("SUPPORTDUMP_DATA_DIR", "  ")]).unwrap();
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn invalid_format_is_rejected() {
        let err = config_from(&[("SUPPORTDUMP_FORMAT", "yaml")]).unwrap_err();
        assert!(err.to_string().contains("SUPPORTDUMP_FORMAT"));
    }
}
