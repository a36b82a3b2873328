//! Server configuration.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. `~/.config/timebox/config.toml`
//! 3. `timebox.toml` in the working directory
//! 4. the file named by `TIMEBOX_CONFIG` (must exist if set)
//! 5. `TIMEBOX__*` environment variables, e.g. `TIMEBOX__PORT=9000` or
//!    `TIMEBOX__INSIGHTS__MIN_GAP_MINUTES=15`

use std::path::PathBuf;

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use anyhow::{Context, Result};
use serde::Deserialize;
use timebox_core::InsightsConfig;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS (the frontend dev servers by default)
    pub allowed_origins: Vec<String>,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    pub insights: InsightsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            log_json: false,
            insights: InsightsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(user_config) = dirs::config_dir().map(|dir| dir.join("timebox").join("config.toml")) {
            builder = builder.add_source(File::from(user_config).required(false));
        }
        builder = builder.add_source(File::from(PathBuf::from("timebox.toml")).required(false));

        if let Ok(path) = std::env::var("TIMEBOX_CONFIG") {
            builder = builder.add_source(File::from(PathBuf::from(path)).required(true));
        }

        Self::from_builder(builder.add_source(env_source()))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: ServerConfig = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.insights.validate()?;

        Ok(config)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TIMEBOX")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("allowed_origins")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::FileFormat;
    use chrono::NaiveTime;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_sources() {
        let config = ServerConfig::from_builder(Config::builder()).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(!config.log_json);
        assert_eq!(config.insights, InsightsConfig::default());
    }

    #[test]
    fn test_toml_file() {
        let toml = r#"
            port = 9000
            log_json = true

            [insights]
            work_day_start = "09:00"
            lookahead_days = 5
        "#;
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        let config = ServerConfig::from_builder(builder).unwrap();

        assert_eq!(config.port, 9000);
        assert!(config.log_json);
        assert_eq!(
            config.insights.work_day_start,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(config.insights.lookahead_days, 5);
        assert_eq!(config.insights.min_gap_minutes, 30);
    }

    #[test]
    fn test_environment_overrides_file() {
        let toml = "port = 9000";
        let env: HashMap<String, String> = [
            ("TIMEBOX__PORT".to_string(), "9100".to_string()),
            ("TIMEBOX__INSIGHTS__MIN_GAP_MINUTES".to_string(), "15".to_string()),
            (
                "TIMEBOX__ALLOWED_ORIGINS".to_string(),
                "http://a.test,http://b.test".to_string(),
            ),
        ]
        .into_iter()
        .collect();

        let builder = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(env_source().source(Some(env)));
        let config = ServerConfig::from_builder(builder).unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.insights.min_gap_minutes, 15);
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_working_window_is_rejected() {
        let toml = r#"
            [insights]
            work_day_start = "18:00"
            work_day_end = "08:00"
        "#;
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        assert!(ServerConfig::from_builder(builder).is_err());
    }
}
