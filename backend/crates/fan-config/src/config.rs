use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DocumentConfig, LoggingConfig, ServerConfig, SimulationConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
    pub documents: DocumentConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. FAN_CONFIG_DIR env var, else ./.fan/
    /// 2. Create the config directory if missing
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply FAN_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FAN_CONFIG_DIR env var > ./.fan/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all sections; call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.simulation.validate()?;
        self.documents.validate()?;
        Ok(())
    }

    /// Absolute path of the SQLite file backing the record store.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.path))
    }

    /// Directory log files are written to, resolved against the config dir.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        let dir = Path::new(&self.logging.dir);
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }
        Ok(Self::config_dir()?.join(dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  storage: {} (key: {})",
            self.storage.path, self.storage.key
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
        info!(
            "  simulation: submit={}ms, document={}ms, social={}+{}ms, esports={}+{}ms, random charts={}",
            self.simulation.submit_delay_ms,
            self.simulation.document_verification_ms,
            self.simulation.social_analysis_start_ms,
            self.simulation.social_analysis_ms,
            self.simulation.esports_analysis_start_ms,
            self.simulation.esports_analysis_ms,
            self.simulation.randomize_charts
        );
        info!(
            "  documents: max {} bytes, types [{}]",
            self.documents.max_size_bytes,
            self.documents.allowed_mime_types.join(", ")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FAN_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FAN_SERVER_PORT", &mut self.server.port);

        // Storage
        Self::apply_env_string("FAN_STORAGE_PATH", &mut self.storage.path);
        Self::apply_env_string("FAN_STORAGE_KEY", &mut self.storage.key);

        // Logging
        Self::apply_env_parse("FAN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FAN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FAN_LOG_FILE", &mut self.logging.file);

        // Simulation
        Self::apply_env_parse("FAN_SUBMIT_DELAY_MS", &mut self.simulation.submit_delay_ms);
        Self::apply_env_parse(
            "FAN_DOCUMENT_VERIFICATION_MS",
            &mut self.simulation.document_verification_ms,
        );
        Self::apply_env_parse(
            "FAN_SOCIAL_ANALYSIS_START_MS",
            &mut self.simulation.social_analysis_start_ms,
        );
        Self::apply_env_parse(
            "FAN_SOCIAL_ANALYSIS_MS",
            &mut self.simulation.social_analysis_ms,
        );
        Self::apply_env_parse(
            "FAN_ESPORTS_ANALYSIS_START_MS",
            &mut self.simulation.esports_analysis_start_ms,
        );
        Self::apply_env_parse(
            "FAN_ESPORTS_ANALYSIS_MS",
            &mut self.simulation.esports_analysis_ms,
        );
        Self::apply_env_bool(
            "FAN_RANDOMIZE_CHARTS",
            &mut self.simulation.randomize_charts,
        );

        // Documents
        Self::apply_env_parse(
            "FAN_DOCUMENT_MAX_SIZE_BYTES",
            &mut self.documents.max_size_bytes,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
