use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{DomainError, DomainResult};

/// Configuration profile for different environments
///
/// Files and environment variables accept the same names: `dev`,
/// `development`, `prod`, `production`, anything else is a custom profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Profile {
    /// Development profile with verbose, human-readable logging
    #[default]
    Dev,
    /// Production profile with structured logging
    Prod,
    /// Custom profile with user-defined name
    Custom(String),
}

impl Profile {
    /// Get the profile name as a string
    pub fn name(&self) -> &str {
        match self {
            Profile::Dev => "dev",
            Profile::Prod => "prod",
            Profile::Custom(name) => name,
        }
    }
}

impl FromStr for Profile {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "dev" | "development" => Profile::Dev,
            "prod" | "production" => Profile::Prod,
            custom => Profile::Custom(custom.to_string()),
        })
    }
}

impl From<String> for Profile {
    fn from(value: String) -> Self {
        match Profile::from_str(&value) {
            Ok(profile) => profile,
            Err(never) => match never {},
        }
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.name().to_string()
    }
}

/// Top-level settings of the business layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BusinessConfig {
    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub salary: SalaryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// One JSON object per event instead of human-readable lines
    #[serde(default)]
    pub json_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// Share of a month's install prices paid on top of the post salary
    #[serde(default = "default_install_bonus_rate")]
    pub install_bonus_rate: f64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_output: false,
        }
    }
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            install_bonus_rate: default_install_bonus_rate(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_install_bonus_rate() -> f64 {
    0.1
}

impl BusinessConfig {
    /// Defaults for `profile`, with production logging for `Prod`
    pub fn for_profile(profile: Profile) -> Self {
        let mut config = Self {
            profile,
            ..Self::default()
        };
        config.apply_profile();
        config
    }

    /// Apply profile overrides to logging
    pub fn apply_profile(&mut self) {
        if self.profile == Profile::Prod {
            self.logging.level = "warn".to_string();
            self.logging.json_output = true;
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        let rate = self.salary.install_bonus_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(DomainError::validation(
                "salary.install_bonus_rate",
                format!("Install bonus rate must be between 0.0 and 1.0, got {rate}"),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(DomainError::validation("logging.level", "Log level is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parsing() {
        assert_eq!(Profile::from_str("production").unwrap(), Profile::Prod);
        assert_eq!(Profile::from_str("DEV").unwrap(), Profile::Dev);
        assert_eq!(
            Profile::from_str("staging").unwrap(),
            Profile::Custom("staging".to_string())
        );
        assert_eq!(Profile::Custom("staging".to_string()).name(), "staging");
    }

    #[test]
    fn test_profile_deserializes_like_from_str() {
        let config: BusinessConfig = serde_json::from_str(r#"{ "profile": "production" }"#).unwrap();
        assert_eq!(config.profile, Profile::Prod);

        let config: BusinessConfig = serde_json::from_str(r#"{ "profile": "Staging" }"#).unwrap();
        assert_eq!(config.profile, Profile::Custom("staging".to_string()));

        let json = serde_json::to_string(&BusinessConfig::for_profile(Profile::Prod)).unwrap();
        assert!(json.contains(r#""profile":"prod""#));
    }

    #[test]
    fn test_defaults() {
        let config = BusinessConfig::default();
        assert_eq!(config.profile, Profile::Dev);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_output);
        assert_eq!(config.salary.install_bonus_rate, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prod_profile_overrides_logging() {
        let config = BusinessConfig::for_profile(Profile::Prod);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json_output);
    }

    #[test]
    fn test_bonus_rate_range() {
        let mut config = BusinessConfig::default();
        config.salary.install_bonus_rate = 1.5;
        assert_eq!(
            config.validate().unwrap_err().field(),
            Some("salary.install_bonus_rate")
        );
        config.salary.install_bonus_rate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: BusinessConfig =
            serde_json::from_str(r#"{ "salary": { "install_bonus_rate": 0.25 } }"#).unwrap();
        assert_eq!(config.salary.install_bonus_rate, 0.25);
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
