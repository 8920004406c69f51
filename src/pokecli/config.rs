use crate::client::DEFAULT_API_URL;
use crate::error::{PokeError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_TEST_MODE: &str = "POKE_CLI_TEST_MODE";
pub const ENV_API_URL: &str = "POKE_CLI_API_URL";
pub const ENV_CONFIG_DIR: &str = "POKE_CLI_CONFIG_DIR";

/// Configuration file contents, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokeConfig {
    /// Base URL of the reference API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for PokeConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PokeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| PokeError::Config(format!("{}: {}", config_path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PokeError::Config(format!("{}: {}", config_path.display(), e)))?;

        if config.timeout_secs == 0 {
            return Err(PokeError::Config(format!(
                "{}: timeout_secs must be at least 1",
                config_path.display()
            )));
        }
        Ok(config)
    }

    /// Platform config directory, unless overridden by `POKE_CLI_CONFIG_DIR`.
    pub fn default_dir(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        if let Some(dir) = env(ENV_CONFIG_DIR) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("dev", "poke-cli", "poke-cli").map(|d| d.config_dir().to_path_buf())
    }
}

/// Everything the pipeline needs from the environment, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub timeout_secs: u64,
    /// Return errors as output instead of failing the process.
    pub test_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_parts(PokeConfig::default(), |_| None)
    }
}

impl Settings {
    /// Merge file config with environment overrides.
    pub fn from_parts(config: PokeConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = env(ENV_API_URL)
            .filter(|url| !url.is_empty())
            .unwrap_or(config.api_url);
        let test_mode = test_mode_from(&env);

        Self {
            api_url,
            timeout_secs: config.timeout_secs,
            test_mode,
        }
    }

    /// Read the config file and environment of the current process.
    pub fn load() -> Result<Self> {
        let env = |key: &str| std::env::var(key).ok();
        let config = match PokeConfig::default_dir(env) {
            Some(dir) => PokeConfig::load(dir)?,
            None => PokeConfig::default(),
        };
        Ok(Self::from_parts(config, env))
    }
}

/// Whether `POKE_CLI_TEST_MODE` is set to a truthy value. Readable without
/// loading the config file, so a broken file still honours test mode.
pub fn test_mode_from(env: impl Fn(&str) -> Option<String>) -> bool {
    env(ENV_TEST_MODE).is_some_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
