//! Configuration - YAML file plus command-line overrides
//!
//! Looked up at ~/.enade-dash/config.yml unless a path is given. A missing
//! default file is not an error; every field has a default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend origin, e.g. http://localhost:5000
    pub base_url: String,
    /// Path prefix every endpoint lives under
    pub api_prefix: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Priorities shown in the summary list
    pub summary_priority_limit: usize,
    /// Priorities shown in the detail table
    pub table_priority_limit: usize,
    /// Questions that get an extremes card when an area is selected
    pub highlighted_questions: Vec<String>,
    /// Institution excluded from competitor averages
    pub subject_institution: String,
    /// Log destination while the dashboard owns the terminal
    pub log_file: Option<PathBuf>,
    /// UI poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            api_prefix: "/api/enade".to_string(),
            timeout_secs: 10,
            summary_priority_limit: 8,
            table_priority_limit: 10,
            highlighted_questions: ["Q27", "Q55", "Q43", "Q30", "Q60", "Q45"]
                .iter()
                .map(|q| q.to_string())
                .collect(),
            subject_institution: "UNIFOR".to_string(),
            log_file: None,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Directory holding config and log files
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".enade-dash")
    }

    /// Get the default config path
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.yml")
    }

    /// Load from an explicit path, or from the default location if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    log::debug!("No config at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the dashboard cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://, got {}", self.base_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be positive");
        }
        Ok(())
    }

    /// Full URL for an endpoint name
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", base, endpoint)
        } else {
            format!("{}/{}/{}", base, prefix, endpoint)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Log file used in dashboard mode
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("enade-dash.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.summary_priority_limit, 8);
        assert_eq!(config.table_priority_limit, 10);
        assert_eq!(config.highlighted_questions.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("base_url: http://10.0.0.5:8080\n").unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:8080");
        assert_eq!(config.api_prefix, "/api/enade");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        let mut config = Config::default();
        config.base_url = "http://host:5000/".to_string();
        assert_eq!(
            config.endpoint_url("dashboard-data"),
            "http://host:5000/api/enade/dashboard-data"
        );

        config.api_prefix = String::new();
        assert_eq!(config.endpoint_url("areas"), "http://host:5000/areas");
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = Config {
            base_url: "localhost:5000".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
