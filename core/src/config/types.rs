use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Seed for the novelty readouts. Unset means a fresh seed per session.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Persist session state every N commands; 0 only persists on `save` and exit.
    #[serde(default = "default_autosave_every")]
    pub autosave_every: u64,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub mongoose: MongooseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_theme() -> String {
    "electronics".to_string()
}

fn default_fallback_message() -> String {
    "Command not recognized.".to_string()
}

fn default_autosave_every() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            seed: None,
            fallback_message: default_fallback_message(),
            autosave_every: default_autosave_every(),
            store: StoreConfig::default(),
            sync: SyncConfig::default(),
            mongoose: MongooseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_provider")]
    #[serde(flatten)]
    pub provider: StoreProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum StoreProvider {
    #[serde(rename = "file")]
    File(FileStoreConfig),
    #[serde(rename = "memory")]
    Memory(MemoryStoreConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileStoreConfig {
    /// Directory holding one `<key>.json` per entry. Defaults to the user data dir.
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemoryStoreConfig {}

fn default_store_provider() -> StoreProvider {
    StoreProvider::File(FileStoreConfig::default())
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_store_provider(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_sync_enabled")]
    pub enabled: bool,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_initial_delay_secs")]
    pub initial_delay_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_sync_enabled() -> bool {
    true
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_owner() -> String {
    "pewpi-infinity".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_interval_secs() -> u64 {
    300
}

fn default_initial_delay_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("osprey-terminal/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: default_sync_enabled(),
            api_base: default_api_base(),
            owner: default_owner(),
            timeout_ms: default_timeout_ms(),
            interval_secs: default_interval_secs(),
            initial_delay_secs: default_initial_delay_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongooseConfig {
    #[serde(default = "default_mongoose_mode")]
    pub mode: String,

    #[serde(default = "default_operator")]
    pub operator: String,
}

fn default_mongoose_mode() -> String {
    "passive".to_string()
}

fn default_operator() -> String {
    "osprey".to_string()
}

impl Default for MongooseConfig {
    fn default() -> Self {
        Self {
            mode: default_mongoose_mode(),
            operator: default_operator(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Optional log file; rotated daily next to the given path.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
