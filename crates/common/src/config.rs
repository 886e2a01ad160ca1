//! Configuration loading: defaults, then one file, then environment

use anyhow::{Context, Result};
use domain::{BusinessConfig, Profile};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_paths: Self::default_config_paths(),
            env_prefix: "INSTALLDESK_".to_string(),
        }
    }

    /// Check `path` before the default locations
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_paths.insert(0, path.into());
        self
    }

    /// Replace every candidate location
    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.config_paths = paths;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    fn default_config_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("installdesk.toml"),
            PathBuf::from("installdesk.json"),
        ]
    }

    pub fn load(&self) -> Result<BusinessConfig> {
        let mut config = self.load_base_config();

        if let Some(profile) = self.detect_profile() {
            debug!("Detected profile: {}", profile.name());
            config.profile = profile;
        }
        config.apply_profile();

        let config = self.apply_env_overrides(config);

        config
            .validate()
            .context("Configuration failed validation")?;
        Ok(config)
    }

    /// Profile named by `<prefix>ENV`, if set
    pub fn detect_profile(&self) -> Option<Profile> {
        env::var(format!("{}ENV", self.env_prefix))
            .ok()
            .map(|value| Profile::from_str(&value).unwrap_or_default())
    }

    /// First readable file among the candidate paths, defaults otherwise
    fn load_base_config(&self) -> BusinessConfig {
        for path in &self.config_paths {
            if path.exists() {
                match self.load_file(path) {
                    Ok(file_config) => {
                        info!("Loaded configuration from: {}", path.display());
                        return file_config;
                    }
                    Err(e) => {
                        warn!("Failed to load config from {}: {:#}", path.display(), e);
                    }
                }
            }
        }
        debug!("No configuration file found, using defaults");
        BusinessConfig::default()
    }

    pub fn load_file(&self, path: &Path) -> Result<BusinessConfig> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        match extension {
            "toml" | "" => toml::from_str(&content).context("Failed to parse TOML config"),
            "json" => serde_json::from_str(&content).context("Failed to parse JSON config"),
            _ => toml::from_str(&content)
                .or_else(|_| serde_json::from_str(&content))
                .context("Failed to parse config file"),
        }
    }

    fn apply_env_overrides(&self, mut config: BusinessConfig) -> BusinessConfig {
        if let Ok(level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
            config.logging.level = level;
        }

        if let Ok(json) = env::var(format!("{}LOG_JSON", self.env_prefix)) {
            config.logging.json_output = parse_flag(&json);
        }

        if let Ok(rate) = env::var(format!("{}SALARY_BONUS_RATE", self.env_prefix)) {
            match rate.parse() {
                Ok(rate) => config.salary.install_bonus_rate = rate,
                Err(_) => warn!("Ignoring unparsable {}SALARY_BONUS_RATE={rate}", self.env_prefix),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
