//
//  fullcontact-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module holds [`ClientOptions`], the named options every request is
//! resolved against, and their on-disk TOML representation.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/fullcontact/config.toml`
//! - **macOS**: `~/Library/Application Support/fullcontact/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\fullcontact\config.toml`
//!
//! A missing file is not an error: the defaults are used.
//!
//! ## Example Configuration File
//!
//! ```toml
//! base_url = "https://api.fullcontact.com"
//! user_agent = "my-app/1.0"
//! timeout = 10
//! api_limit = 600
//! api_version = "v2"
//! format = "json"
//! api_key = "your-api-key"
//! ```
//!
//! ## Named Options
//!
//! Options can also be read and changed by name, which is how the client
//! facade exposes them:
//!
//! ```rust
//! use fullcontact_client::config::ClientOptions;
//!
//! let mut options = ClientOptions::default();
//! options.set("format", "xml").unwrap();
//! assert_eq!(options.get("format").unwrap(), "xml");
//!
//! assert!(options.set("api_version", "v3").is_err());
//! assert!(options.set("colour", "blue").is_err());
//! ```

use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::common::ApiError;

/// Every option name accepted by [`ClientOptions::get`] and [`ClientOptions::set`].
pub const OPTION_NAMES: [&str; 8] = [
    "base_url",
    "user_agent",
    "timeout",
    "api_limit",
    "api_version",
    "format",
    "api_key",
    "max_pages",
];

/// Supported API versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Version 2 of the FullContact API
    #[default]
    V2,
}

impl ApiVersion {
    /// All versions this client can talk to.
    pub const SUPPORTED: [ApiVersion; 1] = [ApiVersion::V2];

    /// Wire name of the version.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|version| version.as_str() == s)
            .ok_or_else(|| {
                ApiError::InvalidArgument(format!(
                    "Invalid API version (\"{}\"), valid are: {}",
                    s,
                    join(Self::SUPPORTED.iter().map(|v| v.as_str()))
                ))
            })
    }
}

/// Response formats the API can produce.
///
/// The format is appended to GET paths (`/person.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// JSON responses
    #[default]
    Json,
    /// XML responses, returned to callers as raw text
    Xml,
}

impl ResponseFormat {
    /// All formats this client accepts.
    pub const SUPPORTED: [ResponseFormat; 2] = [ResponseFormat::Json, ResponseFormat::Xml];

    /// Path extension for the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                ApiError::InvalidArgument(format!(
                    "Invalid format (\"{}\"), valid are: {}",
                    s,
                    join(Self::SUPPORTED.iter().map(|f| f.as_str()))
                ))
            })
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// Options every request is resolved against.
///
/// # Fields
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `base_url` | `https://api.fullcontact.com` | API root |
/// | `user_agent` | `fullcontact-client/<version>` | `User-Agent` header |
/// | `timeout` | `10` | Per-request timeout in seconds |
/// | `api_limit` | `600` | Absolute call quota, used in error messages |
/// | `api_version` | `v2` | Version sent in the `Accept` header |
/// | `format` | `json` | Extension appended to GET paths |
/// | `api_key` | none | Key used by [`FullContactClient::from_config`](crate::FullContactClient::from_config) |
/// | `max_pages` | none | Upper bound on pages fetched by one call, at least 1 |
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// API root, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `User-Agent` header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Absolute call quota of the account
    #[serde(default = "default_api_limit")]
    pub api_limit: u64,

    /// API version sent in the `Accept` header
    #[serde(default)]
    pub api_version: ApiVersion,

    /// Response format appended to GET paths
    #[serde(default)]
    pub format: ResponseFormat,

    /// API key to authenticate with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Maximum number of pages one call may fetch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<NonZeroU32>,
}

fn default_base_url() -> String {
    "https://api.fullcontact.com".to_string()
}

fn default_user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}

fn default_timeout() -> u64 {
    10
}

fn default_api_limit() -> u64 {
    600
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout: default_timeout(),
            api_limit: default_api_limit(),
            api_version: ApiVersion::default(),
            format: ResponseFormat::default(),
            api_key: None,
            max_pages: None,
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("api_limit", &self.api_limit)
            .field("api_version", &self.api_version)
            .field("format", &self.format)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

impl ClientOptions {
    /// Loads options from the default configuration file.
    ///
    /// Returns the defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads options from a specific TOML file.
    ///
    /// Returns the defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves options to the default configuration file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves options to a specific TOML file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path of the default configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "fullcontact")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Per-request timeout.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Value of the `Accept` header for the configured version.
    pub fn accept_header(&self) -> String {
        format!("application/vnd.FullContact.{}+json", self.api_version)
    }

    /// Reads an option by name.
    ///
    /// Unset optional values read as an empty string.
    pub fn get(&self, name: &str) -> Result<String, ApiError> {
        let value = match name {
            "base_url" => self.base_url.clone(),
            "user_agent" => self.user_agent.clone(),
            "timeout" => self.timeout.to_string(),
            "api_limit" => self.api_limit.to_string(),
            "api_version" => self.api_version.to_string(),
            "format" => self.format.to_string(),
            "api_key" => self.api_key.clone().unwrap_or_default(),
            "max_pages" => self.max_pages.map(|n| n.to_string()).unwrap_or_default(),
            _ => return Err(unknown_option(name)),
        };
        Ok(value)
    }

    /// Changes an option by name.
    ///
    /// The name must be one of [`OPTION_NAMES`]; `api_version` and `format`
    /// only accept their supported values and numeric options must parse.
    /// Nothing is changed when validation fails.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        match name {
            "base_url" => self.base_url = value.to_string(),
            "user_agent" => self.user_agent = value.to_string(),
            "timeout" => self.timeout = parse_number(name, value)?,
            "api_limit" => self.api_limit = parse_number(name, value)?,
            "api_version" => self.api_version = value.parse()?,
            "format" => self.format = value.parse()?,
            "api_key" => self.api_key = non_empty(value),
            "max_pages" => {
                self.max_pages = match non_empty(value) {
                    Some(v) => Some(parse_page_bound(&v)?),
                    None => None,
                }
            }
            _ => return Err(unknown_option(name)),
        }
        Ok(())
    }
}

fn unknown_option(name: &str) -> ApiError {
    ApiError::InvalidArgument(format!("Undefined option called: \"{}\"", name))
}

fn parse_number<T: FromStr>(name: &str, value: &str) -> Result<T, ApiError> {
    value.trim().parse().map_err(|_| {
        ApiError::InvalidArgument(format!(
            "Option \"{}\" expects a number, got \"{}\"",
            name, value
        ))
    })
}

fn parse_page_bound(value: &str) -> Result<NonZeroU32, ApiError> {
    let pages: u32 = parse_number("max_pages", value)?;
    NonZeroU32::new(pages).ok_or_else(|| {
        ApiError::InvalidArgument("Option \"max_pages\" must be at least 1".to_string())
    })
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url, "https://api.fullcontact.com");
        assert_eq!(options.timeout, 10);
        assert_eq!(options.api_limit, 600);
        assert_eq!(options.api_version, ApiVersion::V2);
        assert_eq!(options.format, ResponseFormat::Json);
        assert_eq!(options.accept_header(), "application/vnd.FullContact.v2+json");
    }

    #[test]
    fn test_set_api_version() {
        let mut options = ClientOptions::default();
        assert!(matches!(
            options.set("api_version", "v3"),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(options.set("api_version", "v2").is_ok());
        assert_eq!(options.get("api_version").unwrap(), "v2");
    }

    #[test]
    fn test_set_format() {
        let mut options = ClientOptions::default();
        options.set("format", "xml").unwrap();
        assert_eq!(options.format, ResponseFormat::Xml);

        assert!(options.set("format", "yaml").is_err());
        assert_eq!(options.format, ResponseFormat::Xml);
    }

    #[test]
    fn test_unknown_option() {
        let mut options = ClientOptions::default();
        assert!(matches!(
            options.set("cache_dir", "/tmp"),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(matches!(
            options.get("cache_dir"),
            Err(ApiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_numeric_options() {
        let mut options = ClientOptions::default();
        options.set("timeout", "30").unwrap();
        assert_eq!(options.timeout_duration(), Duration::from_secs(30));

        assert!(options.set("timeout", "soon").is_err());
        assert_eq!(options.timeout, 30);

        options.set("max_pages", "5").unwrap();
        assert_eq!(options.max_pages.map(NonZeroU32::get), Some(5));
        assert!(matches!(
            options.set("max_pages", "0"),
            Err(ApiError::InvalidArgument(_))
        ));
        assert_eq!(options.max_pages.map(NonZeroU32::get), Some(5));
        options.set("max_pages", "").unwrap();
        assert_eq!(options.max_pages, None);
    }

    #[test]
    fn test_every_option_name_is_readable() {
        let options = ClientOptions::default();
        for name in OPTION_NAMES {
            assert!(options.get(name).is_ok(), "option {} not readable", name);
        }
    }

    #[test]
    fn test_debug_hides_api_key() {
        let options = ClientOptions {
            api_key: Some("topsecret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", options).contains("topsecret"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut options = ClientOptions::default();
        options.set("format", "xml").unwrap();
        options.set("api_key", "abc123").unwrap();
        options.save_to(&path).unwrap();

        let loaded = ClientOptions::load_from(&path).unwrap();
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout = 3\nformat = \"xml\"\n").unwrap();

        let loaded = ClientOptions::load_from(&path).unwrap();
        assert_eq!(loaded.timeout, 3);
        assert_eq!(loaded.format, ResponseFormat::Xml);
        assert_eq!(loaded.base_url, "https://api.fullcontact.com");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ClientOptions::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, ClientOptions::default());
    }

    #[test]
    fn test_zero_max_pages_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_pages = 0\n").unwrap();

        assert!(ClientOptions::load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_version_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_version = \"v9\"\n").unwrap();

        assert!(ClientOptions::load_from(&path).is_err());
    }
}
