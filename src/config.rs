use crate::kernel::{Language, DEFAULT_ARCHIVE, DEFAULT_RUNTIME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional overrides for a non-default engine deployment
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct KernelConfig {
    /// Install root containing `core/`; discovered from the executable when unset
    pub root: Option<PathBuf>,
    pub archive: Option<String>,
    pub runtime: Option<String>,
    pub language: Option<Language>,
}

impl KernelConfig {
    /// Config written by `init`, spelling out the built-in defaults
    pub fn starter() -> Self {
        Self {
            root: None,
            archive: Some(DEFAULT_ARCHIVE.to_string()),
            runtime: Some(DEFAULT_RUNTIME.to_string()),
            language: Some(Language::default()),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("kernel.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<KernelConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: KernelConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &KernelConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.display().to_string()));
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("kernel.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kernel.toml");
        let config = KernelConfig {
            root: Some(PathBuf::from("/srv/nlp")),
            language: Some(Language::Fr),
            ..KernelConfig::starter()
        };

        write_config(&path, &config, false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_write_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kernel.toml");

        write_config(&path, &KernelConfig::starter(), false).unwrap();
        let err = write_config(&path, &KernelConfig::starter(), false).unwrap_err();
        assert!(matches!(err, Error::ConfigExists(_)));
        write_config(&path, &KernelConfig::default(), true).unwrap();
    }

    #[test]
    fn test_parse_partial_config() {
        let config: KernelConfig = toml::from_str("language = \"it\"\n").unwrap();
        assert_eq!(config.language, Some(Language::It));
        assert!(config.root.is_none());
    }

    #[test]
    fn test_invalid_language_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kernel.toml");
        std::fs::write(&path, "language = \"de\"\n").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(Error::ConfigParse(_))));
    }
}
