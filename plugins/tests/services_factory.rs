//! Integration tests for building services from config

use osprey_core::api::{AppConfig, FileStoreConfig, KeyValueStore, ServicesFactory, StoreProvider};
use osprey_plugins::services::PluginServicesFactory;

#[test]
fn test_offline_factory_skips_network() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = AppConfig::default();
    cfg.store.provider = StoreProvider::File(FileStoreConfig {
        dir: Some(dir.path().to_string_lossy().into_owned()),
    });

    let services = PluginServicesFactory::new(true).build_services(&cfg).unwrap();
    assert!(services.repo_source.is_none());
    assert!(services.fetcher.is_none());
    assert_eq!(services.store.name(), "file");

    services.store.set("osprey_counters", "{}").unwrap();
    assert!(dir.path().join("osprey_counters.json").exists());
}

#[test]
fn test_disabled_sync_has_no_repo_source() {
    let mut cfg = AppConfig::default();
    cfg.sync.enabled = false;
    cfg.store.provider = StoreProvider::Memory(Default::default());

    let services = PluginServicesFactory::new(false).build_services(&cfg).unwrap();
    assert!(services.repo_source.is_none());
    assert!(services.fetcher.is_some());
    assert_eq!(services.store.name(), "memory");
}
