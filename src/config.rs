//! Runtime configuration for dsa-log, loaded from environment variables.
//!
//! A `.env` file is honored when present (see `load_env` in lib.rs). Every
//! knob has a default so the CLI works out of the box without any setup
//! beyond `OPENAI_API_KEY`.

use crate::error::{DsaLogError, Result};
use std::path::PathBuf;

/// Configuration snapshot shared across components
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file for the problem log
    pub database_path: PathBuf,
    /// Directory for generated report files
    pub report_dir: PathBuf,
    /// API key for the completion service; enrichment degrades without it
    pub openai_api_key: Option<String>,
    /// Base URL of the chat-completions endpoint
    pub openai_base_url: String,
    /// Completion model name
    pub openai_model: String,
    /// Sampling temperature, kept low for focused output
    pub ai_temperature: f32,
    /// Output length bound for the completion call
    pub ai_max_tokens: u32,
    /// Hard timeout on the completion call
    pub ai_timeout_secs: u64,
    /// Base URL of the site scraped for company tags
    pub lookup_base_url: String,
    /// Per-request timeout for the two scrape calls
    pub lookup_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        let data_dir = std::env::var("DSA_DATA_DIR")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::data_dir().map(|d| d.join("dsa-log")))
            .unwrap_or_else(|| PathBuf::from("data"));

        let cfg = Self {
            database_path: std::env::var("DSA_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("dsa_log.db")),
            report_dir: std::env::var("DSA_REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_base_url: std::env::var("DSA_OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: std::env::var("DSA_OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            ai_temperature: std::env::var("DSA_AI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.3),
            ai_max_tokens: std::env::var("DSA_AI_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            ai_timeout_secs: std::env::var("DSA_AI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            lookup_base_url: std::env::var("DSA_LOOKUP_BASE_URL")
                .unwrap_or_else(|_| "https://www.geeksforgeeks.org".to_string()),
            lookup_timeout_secs: std::env::var("DSA_LOOKUP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        };

        cfg.validate()
            .map_err(|e| DsaLogError::Config {
                message: e.to_string(),
            })?;
        Ok(cfg)
    }

    /// Validate the configuration
    fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=2.0).contains(&self.ai_temperature) {
            anyhow::bail!("DSA_AI_TEMPERATURE must be between 0.0 and 2.0");
        }
        if self.ai_max_tokens == 0 {
            anyhow::bail!("DSA_AI_MAX_TOKENS must be > 0");
        }
        if self.ai_timeout_secs == 0 || self.lookup_timeout_secs == 0 {
            anyhow::bail!("timeouts must be > 0 seconds");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let cfg = Config::load().expect("default config should load");
        assert_eq!(cfg.lookup_timeout_secs, 10);
        assert!((0.0..=2.0).contains(&cfg.ai_temperature));
    }
}
