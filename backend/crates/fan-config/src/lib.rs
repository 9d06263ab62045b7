mod config;
mod document_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod simulation_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use document_config::DocumentConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use simulation_config::SimulationConfig;
pub use storage_config::StorageConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_STORAGE_FILENAME: &str = "fan.db";
const DEFAULT_STORAGE_KEY: &str = "userData";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "FAN_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".fan";
const CONFIG_FILE_NAME: &str = "config.toml";
