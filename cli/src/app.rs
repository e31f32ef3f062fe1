use std::path::Path;

use osprey_core::api::{self as core_api, AppConfig, AppContext, CliError, FileStoreConfig, StoreProvider};
use osprey_plugins::services::PluginServicesFactory;

use crate::commands::cli::Args;

/// `--config` must exist; otherwise `osprey.toml` is optional.
pub fn load_config(args: &Args) -> Result<AppConfig, CliError> {
    let mut cfg = match args.config.as_deref() {
        Some(path) => core_api::load_from(Path::new(path))?,
        None => core_api::load_default()?,
    };
    apply_overrides(&mut cfg, args);
    Ok(cfg)
}

/// Command-line flags win over the file and the environment.
fn apply_overrides(cfg: &mut AppConfig, args: &Args) {
    if let Some(dir) = &args.store_dir {
        cfg.store.provider = StoreProvider::File(FileStoreConfig {
            dir: Some(dir.clone()),
        });
    }
    if let Some(theme) = &args.theme {
        cfg.theme = theme.clone();
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
}

pub fn build_context(cfg: AppConfig, args: &Args) -> Result<AppContext, CliError> {
    AppContext::new(cfg, &PluginServicesFactory::new(args.offline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["osprey", "--store-dir", "/tmp/osprey-state", "--theme", "art", "--seed", "9"]);
        let mut cfg = AppConfig::default();
        apply_overrides(&mut cfg, &args);

        assert_eq!(cfg.theme, "art");
        assert_eq!(cfg.seed, Some(9));
        match cfg.store.provider {
            StoreProvider::File(file) => assert_eq!(file.dir.as_deref(), Some("/tmp/osprey-state")),
            StoreProvider::Memory(_) => panic!("expected file store"),
        }
    }

    #[test]
    fn missing_flags_leave_config_alone() {
        let args = Args::parse_from(["osprey"]);
        let mut cfg = AppConfig {
            seed: Some(4),
            ..AppConfig::default()
        };
        apply_overrides(&mut cfg, &args);
        assert_eq!(cfg.theme, "electronics");
        assert_eq!(cfg.seed, Some(4));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let args = Args::parse_from(["osprey", "--config", "/no/such/osprey.toml"]);
        assert!(matches!(load_config(&args), Err(CliError::Config(_))));
    }
}
