use std::path::Path;

use crate::errors::ConfigError;

use super::types::{AppConfig, FileStoreConfig, StoreProvider};

pub const DEFAULT_CONFIG_FILE: &str = "osprey.toml";

/// Loads `osprey.toml` from the working directory when present, else defaults.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let mut cfg = if Path::new(DEFAULT_CONFIG_FILE).exists() {
        read_file(Path::new(DEFAULT_CONFIG_FILE))?
    } else {
        AppConfig::default()
    };
    apply_env_overrides(&mut cfg);
    validate(&cfg)?;
    Ok(cfg)
}

/// Loads an explicit config file; a missing file is an error here.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let mut cfg = read_file(path)?;
    apply_env_overrides(&mut cfg);
    validate(&cfg)?;
    Ok(cfg)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let cfg = toml::from_str::<AppConfig>(&s).map_err(|e| ConfigError::Parse(e.into()))?;
    tracing::debug!(target: "osprey.config", path = %path.display(), "config loaded");
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(v) = std::env::var("OSPREY_THEME") {
        if !v.trim().is_empty() {
            cfg.theme = v.trim().to_string();
        }
    }

    if let Ok(v) = std::env::var("OSPREY_STORE_DIR") {
        if !v.trim().is_empty() {
            cfg.store.provider = StoreProvider::File(FileStoreConfig { dir: Some(v) });
        }
    }

    if let Ok(v) = std::env::var("OSPREY_GITHUB_API") {
        if !v.trim().is_empty() {
            cfg.sync.api_base = v;
        }
    }
    if let Ok(v) = std::env::var("OSPREY_GITHUB_OWNER") {
        if !v.trim().is_empty() {
            cfg.sync.owner = v;
        }
    }
}

fn validate(cfg: &AppConfig) -> Result<(), ConfigError> {
    if cfg.fallback_message.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fallback_message must not be empty".to_string(),
        ));
    }
    if cfg.sync.enabled && cfg.sync.api_base.trim().is_empty() {
        return Err(ConfigError::Validation(
            "sync.api_base must be set when sync is enabled".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_missing_file_is_not_found() {
        let err = load_from(Path::new("/definitely/not/here/osprey.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "theme = [unterminated").unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_rejects_empty_fallback_message() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "fallback_message = \"  \"").unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
