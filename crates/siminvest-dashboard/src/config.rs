//! Configuration for the SimInvest dashboard

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration loaded from config.toml
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    pub dashboard: DashboardConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub cloud: Option<CloudConfig>,
    #[serde(default)]
    pub ai: Option<AiConfig>,
}

/// Dashboard header/reporting settings
#[derive(Debug, Deserialize)]
pub struct DashboardConfig {
    /// Province name shown in view headers
    pub province: String,
    /// Reporting year
    pub year: u16,
}

/// Dashboard login credentials
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

/// Cloud persistence settings (Supabase project)
#[derive(Debug, Clone, Deserialize)]
pub struct CloudConfig {
    /// Project URL, e.g. https://xyz.supabase.co
    pub url: String,
    /// API key sent as both `apikey` and bearer token
    pub api_key: String,
}

/// Narrative AI analysis settings
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    pub api_key: String,
    /// Model override; falls back to the product default
    #[serde(default)]
    pub model: Option<String>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).with_context(|| {
            "Failed to parse config.toml. Check for:\n\
             - Missing required fields (dashboard.province, auth.username, etc.)\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Incorrect data types (strings vs numbers)\n\n\
             See config.toml.example for the expected format."
        })
    }

    /// Cloud settings, or a helpful error when the section is missing
    pub fn cloud(&self) -> Result<&CloudConfig> {
        self.cloud
            .as_ref()
            .context("No [cloud] section in config.toml; cloud sync is not configured")
    }

    /// AI settings, or a helpful error when the section is missing
    pub fn ai(&self) -> Result<&AiConfig> {
        self.ai
            .as_ref()
            .context("No [ai] section in config.toml; AI analysis is not configured")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses() {
        let config: FileConfig = toml::from_str(
            r#"
            [dashboard]
            province = "Nusa Tenggara Barat"
            year = 2025

            [auth]
            username = "admin"
            password = "admin"
            "#,
        )
        .unwrap();

        assert_eq!(config.dashboard.year, 2025);
        assert!(config.cloud.is_none());
        assert!(config.cloud().is_err());
        assert!(config.ai().is_err());
    }

    #[test]
    fn test_optional_sections_parse() {
        let config: FileConfig = toml::from_str(
            r#"
            [dashboard]
            province = "Nusa Tenggara Barat"
            year = 2025

            [auth]
            username = "admin"
            password = "admin"

            [cloud]
            url = "https://example.supabase.co"
            api_key = "anon-key"

            [ai]
            api_key = "gemini-key"
            "#,
        )
        .unwrap();

        assert_eq!(config.cloud().unwrap().url, "https://example.supabase.co");
        assert!(config.ai().unwrap().model.is_none());
    }
}
