mod cache_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use cache_config::CacheConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use store_config::StoreConfig;

const DEFAULT_CONFIG_DIR: &str = ".cm";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_DATABASE_FILENAME: &str = "certs.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_STORAGE_DIRECTORY: &str = "objects";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8000/objects";
