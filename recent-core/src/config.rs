//! Module configuration (schema and loading)

use crate::control::{ControlDirs, IPT_RECENT_DIR, XT_RECENT_DIR};
use crate::error::{RecentError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PAM_RECENT_CONFIG";
/// Default config file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/security/pam_recent.toml";

/// Complete module configuration.
///
/// Everything defaults to the stock kernel locations, so running without a
/// config file is the normal case.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub control: ControlConfig,
}

/// Control-interface directory overrides.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControlConfig {
    /// Directory for the current-generation kernel interface.
    #[serde(default = "default_current_dir")]
    pub current_dir: PathBuf,
    /// Directory for the legacy kernel interface.
    #[serde(default = "default_legacy_dir")]
    pub legacy_dir: PathBuf,
}

fn default_current_dir() -> PathBuf {
    PathBuf::from(XT_RECENT_DIR)
}

fn default_legacy_dir() -> PathBuf {
    PathBuf::from(IPT_RECENT_DIR)
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            current_dir: default_current_dir(),
            legacy_dir: default_legacy_dir(),
        }
    }
}

impl Config {
    /// Control directories as configured.
    pub fn control_dirs(&self) -> ControlDirs {
        ControlDirs::new(
            self.control.current_dir.clone(),
            self.control.legacy_dir.clone(),
        )
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file path, honoring the environment override.
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        PathBuf::from(DEFAULT_CONFIG_PATH)
    }

    /// Load config from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| RecentError::ConfigLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with fallback to defaults.
    pub fn load() -> Result<Config> {
        let path = Self::default_config_path();

        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Load config from an explicit path, or fall back to the default chain.
    pub fn load_or_default(path: Option<PathBuf>) -> Result<Config> {
        if let Some(p) = path {
            Self::load_from_file(&p)
        } else {
            Self::load()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.control.current_dir, PathBuf::from(XT_RECENT_DIR));
        assert_eq!(config.control.legacy_dir, PathBuf::from(IPT_RECENT_DIR));
    }

    #[test]
    fn test_parse_full_document() {
        let toml_str = r#"
[control]
current_dir = "/run/test/xt_recent"
legacy_dir = "/run/test/ipt_recent"
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.control.current_dir,
            PathBuf::from("/run/test/xt_recent")
        );
        assert_eq!(
            config.control.legacy_dir,
            PathBuf::from("/run/test/ipt_recent")
        );
    }

    #[test]
    fn test_parse_partial_document_keeps_defaults() {
        let toml_str = r#"
[control]
current_dir = "/run/test/xt_recent"
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.control.current_dir,
            PathBuf::from("/run/test/xt_recent")
        );
        assert_eq!(config.control.legacy_dir, PathBuf::from(IPT_RECENT_DIR));
    }

    #[test]
    fn test_parse_empty_document() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.control.current_dir, PathBuf::from(XT_RECENT_DIR));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[control]\ncurrent_dir = \"/run/test/xt_recent\"").unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(
            config.control.current_dir,
            PathBuf::from("/run/test/xt_recent")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::load_from_file("/no/such/pam_recent.toml").unwrap_err();
        assert!(matches!(err, RecentError::ConfigLoad { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[control\ncurrent_dir = 3").unwrap();

        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, RecentError::ConfigParse(_)));
    }

    #[test]
    fn test_control_dirs_from_config() {
        let config: Config = toml::from_str(
            "[control]\ncurrent_dir = \"/a\"\nlegacy_dir = \"/b\"",
        )
        .unwrap();

        assert_eq!(config.control_dirs(), ControlDirs::new("/a", "/b"));
    }
}
