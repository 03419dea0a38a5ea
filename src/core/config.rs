//! Configuration management for the AgentCore tool layer
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/agentcore-tools/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{AgentCoreError, Result};

/// Region used when neither an explicit region nor the environment provides one
pub const DEFAULT_REGION: &str = "us-west-2";

/// Default browser sandbox identifier
pub const DEFAULT_BROWSER_IDENTIFIER: &str = "aws.browser.v1";

/// Default browser session timeout in seconds
pub const DEFAULT_BROWSER_SESSION_TIMEOUT_SECS: u64 = 3600;

/// Default expiry for browser live view presigned URLs in seconds
pub const DEFAULT_LIVE_VIEW_EXPIRES_SECS: u64 = 300;

/// Default code interpreter sandbox identifier
pub const DEFAULT_CODE_INTERPRETER_IDENTIFIER: &str = "aws.codeinterpreter.v1";

/// Default code interpreter session timeout in seconds
pub const DEFAULT_CODE_INTERPRETER_SESSION_TIMEOUT_SECS: u64 = 900;

/// Resolve the AWS region for sandbox clients.
///
/// Priority: explicit argument > `AWS_REGION` > `AWS_DEFAULT_REGION` > `"us-west-2"`.
/// Empty environment values count as unset.
pub fn resolve_region(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| env_non_empty("AWS_REGION"))
        .or_else(|| env_non_empty("AWS_DEFAULT_REGION"))
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Main configuration for the AgentCore tool layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// AWS region the sandbox clients are constructed for
    pub region: String,
    /// Browser sandbox configuration
    pub browser: BrowserSettings,
    /// Code interpreter sandbox configuration
    pub code_interpreter: CodeInterpreterSettings,
}

/// Browser sandbox configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Sandbox identifier passed to session start
    pub identifier: String,
    /// Session timeout in seconds
    pub session_timeout_secs: u64,
    /// Expiry for live view presigned URLs in seconds
    pub live_view_expires_secs: u64,
}

/// Code interpreter sandbox configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeInterpreterSettings {
    /// Sandbox identifier passed to session start
    pub identifier: String,
    /// Session timeout in seconds
    pub session_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: resolve_region(None),
            browser: BrowserSettings::default(),
            code_interpreter: CodeInterpreterSettings::default(),
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            identifier: env::var("AGENTCORE_BROWSER_IDENTIFIER")
                .unwrap_or_else(|_| DEFAULT_BROWSER_IDENTIFIER.to_string()),
            session_timeout_secs: DEFAULT_BROWSER_SESSION_TIMEOUT_SECS,
            live_view_expires_secs: DEFAULT_LIVE_VIEW_EXPIRES_SECS,
        }
    }
}

impl Default for CodeInterpreterSettings {
    fn default() -> Self {
        Self {
            identifier: env::var("AGENTCORE_CODE_INTERPRETER_IDENTIFIER")
                .unwrap_or_else(|_| DEFAULT_CODE_INTERPRETER_IDENTIFIER.to_string()),
            session_timeout_secs: DEFAULT_CODE_INTERPRETER_SESSION_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("agentcore-tools")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(AgentCoreError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| AgentCoreError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AgentCoreError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| AgentCoreError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AgentCoreError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| AgentCoreError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }
}
