//! Runtime configuration for the FAQ service.
//!
//! Settings come from an optional `settings.toml` file merged with
//! environment variables; the environment wins. The CMS base URL and the
//! bearer token have no defaults and must be supplied through one of the two
//! sources.
//!
//! | Field            | File key         | Environment variable       |
//! |------------------|------------------|----------------------------|
//! | CMS base URL     | `api_url`        | `FAQBOARD_API_URL`         |
//! | CMS bearer token | `api_token`      | `FAQBOARD_API_TOKEN`       |
//! | Bind address     | `listen_addr`    | `FAQBOARD_LISTEN_ADDR`     |
//! | Default locale   | `default_locale` | `FAQBOARD_DEFAULT_LOCALE`  |

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub listen_addr: Option<String>,
    #[serde(default)]
    pub default_locale: Option<String>,
}

impl Config {
    /// CMS base URL. Required.
    pub fn api_url(&self) -> Result<&str> {
        self.api_url
            .as_deref()
            .ok_or_else(|| Error::Config("api_url is not set (FAQBOARD_API_URL)".to_string()))
    }

    /// CMS bearer token. Required.
    pub fn api_token(&self) -> Result<&str> {
        self.api_token
            .as_deref()
            .ok_or_else(|| Error::Config("api_token is not set (FAQBOARD_API_TOKEN)".to_string()))
    }

    pub fn listen_addr(&self) -> &str {
        self.listen_addr.as_deref().unwrap_or(DEFAULT_LISTEN_ADDR)
    }

    pub fn default_locale(&self) -> &str {
        self.default_locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    fn merge_from<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = get("FAQBOARD_API_URL") {
            self.api_url = Some(value);
        }
        if let Some(value) = get("FAQBOARD_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Some(value) = get("FAQBOARD_LISTEN_ADDR") {
            self.listen_addr = Some(value);
        }
        if let Some(value) = get("FAQBOARD_DEFAULT_LOCALE") {
            self.default_locale = Some(value);
        }
    }
}

/// Loads the configuration file (when given) and applies environment
/// overrides.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_path(path)?,
        None => Config::default(),
    };
    config.merge_from(|key| env::var(key).ok());
    Ok(config)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
