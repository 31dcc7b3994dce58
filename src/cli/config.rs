use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the dashboard server
///
/// This file is ordinary YAML, unlike the scores documents it points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Title shown on the dashboard
    #[serde(default = "default_title")]
    pub title: String,

    /// Short description shown under the title
    #[serde(default)]
    pub description: String,

    /// URL of the scores document to fetch
    pub data_url: String,

    /// Port the dashboard listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_title() -> String {
    "Benchmark Leaderboard".to_string()
}

fn default_port() -> u16 {
    8080
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context(format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: DashboardConfig =
            serde_yaml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .context(format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Build a config from a bare data URL, using defaults for the rest
    pub fn for_url(url: &str) -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            data_url: url.to_string(),
            port: default_port(),
        }
    }

    /// Generate a sample configuration
    pub fn sample() -> Self {
        Self {
            title: "ChemBench-Discovery".to_string(),
            description: "AI-model results on the ChemBench-Discovery benchmark".to_string(),
            data_url: "https://example.com/scores.yaml".to_string(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config() {
        let config = DashboardConfig::sample();
        assert!(!config.title.is_empty());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = DashboardConfig::sample();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: DashboardConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.title, config.title);
        assert_eq!(parsed.data_url, config.data_url);
    }

    #[test]
    fn test_defaults_fill_in() {
        let parsed: DashboardConfig =
            serde_yaml::from_str("data_url: https://example.com/s.yaml\n").unwrap();
        assert_eq!(parsed.port, 8080);
        assert_eq!(parsed.title, "Benchmark Leaderboard");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tacboard.yaml");

        let config = DashboardConfig::sample();
        config.save(&path).unwrap();

        let loaded = DashboardConfig::load(&path).unwrap();
        assert_eq!(loaded.data_url, config.data_url);
    }
}
