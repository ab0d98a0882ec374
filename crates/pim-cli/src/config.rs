//! `pim.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pim_core::roster::{resolve_path_with, DEFAULT_DATA_PATH};

/// Top-level pim configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PimConfig {
    /// Roster file used when neither `--data` nor `PIM_DATA_PATH` is given.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Default `tracing` directive, combined with `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "pim=warn".to_string()
}

impl Default for PimConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl PimConfig {
    /// Resolve the roster path: `--data`, then `PIM_DATA_PATH`, then
    /// `data_path` from the config file, then the built-in default.
    pub fn resolve_data_path(&self, explicit: Option<&Path>) -> PathBuf {
        let fallback = self
            .data_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_PATH));
        resolve_path_with(explicit, fallback)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `pim.toml` in the current directory
/// 2. `~/.config/pim/config.toml`
///
/// With nothing found, the defaults apply.
pub fn load_config_from(path: Option<&Path>) -> Result<PimConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pim.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<PimConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(PimConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pim"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PimConfig::default();
        assert_eq!(config.data_path, None);
        assert_eq!(config.log_filter, "pim=warn");
    }

    #[test]
    fn parse_config() {
        let config: PimConfig = toml::from_str(
            r#"
data_path = "/srv/pim/alunos.json"
log_filter = "pim=debug"
"#,
        )
        .unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/pim/alunos.json")));
        assert_eq!(config.log_filter, "pim=debug");
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config: PimConfig = toml::from_str("").unwrap();
        assert_eq!(config, PimConfig::default());
    }

    #[test]
    fn explicit_data_path_wins_over_config() {
        let config = PimConfig {
            data_path: Some(PathBuf::from("from-config.json")),
            ..PimConfig::default()
        };
        assert_eq!(
            config.resolve_data_path(Some(Path::new("explicit.json"))),
            PathBuf::from("explicit.json")
        );
    }

    #[test]
    fn load_explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pim.toml");
        std::fs::write(&path, "data_path = \"roster.json\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("roster.json")));
    }

    #[test]
    fn load_invalid_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pim.toml");
        std::fs::write(&path, "data_path = [").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
