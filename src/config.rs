use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::nlp::Language;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub kms: KmsConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Core settings
#[derive(Debug, Clone, Deserialize)]
pub struct KmsConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Language of analysed text, patterns and generated phrasing.
    #[serde(default)]
    pub language: Language,
}

impl Default for KmsConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            language: Language::default(),
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Characters of document content shown in a result snippet.
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
    /// Minimum number of query suggestions.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snippet_chars: default_snippet_chars(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// Startup data
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Seed the demonstration graphs at startup.
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// Optional folder of documents to ingest at startup.
    #[serde(default)]
    pub documents_dir: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            documents_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_snippet_chars() -> usize {
    100
}

fn default_suggestion_limit() -> usize {
    3
}

fn default_seed() -> bool {
    true
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in KMS_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        let config_path = std::env::var("KMS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        Self::from_file(&config_path)
    }

    /// Load and validate configuration from an explicit path
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.search.snippet_chars == 0 {
            anyhow::bail!("search.snippet_chars must be greater than 0");
        }

        if self.search.suggestion_limit == 0 {
            anyhow::bail!("search.suggestion_limit must be greater than 0");
        }

        if let Some(dir) = &self.demo.documents_dir {
            if !dir.is_dir() {
                anyhow::bail!(
                    "demo.documents_dir must be an existing directory: {}",
                    dir.display()
                );
            }
        }

        Ok(())
    }

    pub fn language(&self) -> Language {
        self.kms.language
    }

    pub fn documents_dir(&self) -> Option<&Path> {
        self.demo.documents_dir.as_deref()
    }
}
