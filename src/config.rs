// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, VisibilityError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_owner_type")]
    pub owner_type: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub extra_patterns: Vec<String>,
    #[serde(default)]
    pub extra_suffixes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// Wait for Enter before exiting, for executables started outside a terminal.
    #[serde(default)]
    pub pause_on_exit: bool,
}

/// `FT_VISIBILITY__GITHUB__API_BASE` style overrides; list keys are comma separated.
fn environment() -> config::Environment {
    config::Environment::with_prefix("FT_VISIBILITY")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("classifier.extra_patterns")
        .with_list_parse_key("classifier.extra_suffixes")
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_owner_type() -> String {
    "owner".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            per_page: default_per_page(),
            owner_type: default_owner_type(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::build(path, environment())
    }

    /// Loads `path` when it exists; a missing file leaves defaults plus environment.
    /// An existing file that fails to parse or validate is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(Some(path))
        } else {
            debug!(
                "Config file {} not found, using defaults and environment",
                path.display()
            );
            Self::load(None)
        }
    }

    fn build(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(env);

        let settings = builder
            .build()
            .map_err(|e| VisibilityError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| VisibilityError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            github: GithubConfig::default(),
            classifier: ClassifierConfig::default(),
            ui: UiConfig::default(),
        }
    }

    /// Token from the config file or environment overrides, then `GITHUB_TOKEN`.
    pub fn resolve_token(&self) -> Result<String> {
        self.resolve_token_with(std::env::var(TOKEN_ENV).ok())
    }

    /// Blank values count as unset, so an empty configured token still falls back.
    fn resolve_token_with(&self, fallback: Option<String>) -> Result<String> {
        let not_blank = |token: &String| !token.trim().is_empty();

        self.github
            .token
            .clone()
            .filter(not_blank)
            .or_else(|| fallback.filter(not_blank))
            .map(|token| token.trim().to_string())
            .ok_or(VisibilityError::MissingToken)
    }

    fn validate(&self) -> Result<()> {
        if self.github.per_page == 0 || self.github.per_page > MAX_PER_PAGE {
            return Err(VisibilityError::Config(format!(
                "per_page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        if self.github.timeout_secs == 0 {
            return Err(VisibilityError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !self.github.api_base.starts_with("http://")
            && !self.github.api_base.starts_with("https://")
        {
            return Err(VisibilityError::Config(format!(
                "Invalid api_base URL: {}",
                self.github.api_base
            )));
        }

        Ok(())
    }
}
