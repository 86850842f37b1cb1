use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_AUTOCOMPLETE_URL: &str = "https://autocomplete.clearbit.com/v1/companies/suggest";
pub const DEFAULT_PALETTE_URL: &str =
    "https://wt-centurion_javier-gmail_com-0.sandbox.auth0-extend.com/colors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub autocomplete_url: String,
    pub palette_url: String,
    pub debounce_ms: u64,
    pub request_timeout_secs: u64,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            autocomplete_url: DEFAULT_AUTOCOMPLETE_URL.to_string(),
            palette_url: DEFAULT_PALETTE_URL.to_string(),
            debounce_ms: 250,
            request_timeout_secs: 10,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads `~/.config/brandhue/config.toml`, falling back to defaults.
    ///
    /// Returns a warning alongside the config when the file existed but could
    /// not be used. Logging is not up yet at this point, so the caller reports it.
    #[must_use]
    pub fn load() -> (Self, Option<String>) {
        match get_config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.toml")),
            None => (Self::default(), None),
        }
    }

    #[must_use]
    pub fn load_from(path: &Path) -> (Self, Option<String>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<AppConfig>(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("Ignoring {}: {e}", path.display())),
            ),
        }
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Where the log goes: the configured file, else next to the config.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| {
            get_config_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("brandhue.log")
        })
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("brandhue");
        path
    })
}
