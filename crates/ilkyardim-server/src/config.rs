//! Server configuration
//!
//! Read once from the process environment at startup (a `.env` file is
//! honoured through dotenvy) and handed to the router by value.

use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ilkyardim::{ModelSelector, DEFAULT_HISTORY_LIMIT};
use thiserror::Error;

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 5000);
const DEFAULT_KNOWLEDGE_FILE: &str = "first_aid_data.csv";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SESSION_TTL_HOURS: u32 = 24;
const MAX_SESSION_TTL_HOURS: u32 = 24 * 366;
const DEFAULT_SESSION_STORE_CAPACITY: u64 = 10_000;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// API keys of the external providers. Never printed.
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    keys: HashMap<ModelSelector, String>,
}

impl ProviderCredentials {
    /// Key for a provider, if one is configured and non-empty
    pub fn get(&self, selector: ModelSelector) -> Option<&str> {
        self.keys.get(&selector).map(String::as_str)
    }

    pub fn with_key(mut self, selector: ModelSelector, key: impl Into<String>) -> Self {
        let key = key.into();
        if key.trim().is_empty() {
            self.keys.remove(&selector);
        } else {
            self.keys.insert(selector, key.trim().to_string());
        }
        self
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut configured: Vec<String> = self.keys.keys().map(|s| s.to_string()).collect();
        configured.sort();
        f.debug_struct("ProviderCredentials")
            .field("configured", &configured)
            .finish()
    }
}

/// Base URLs of the provider APIs (overridable for proxies and tests)
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub gemini: String,
    pub deepseek: String,
    pub openai: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            gemini: DEFAULT_GEMINI_BASE_URL.to_string(),
            deepseek: DEFAULT_DEEPSEEK_BASE_URL.to_string(),
            openai: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// CSV file with `keyword,response` columns
    pub knowledge_file: PathBuf,
    pub credentials: ProviderCredentials,
    pub endpoints: ProviderEndpoints,
    pub provider_timeout: Duration,
    /// Exchanges kept per session, 0 = unbounded
    pub history_limit: usize,
    pub session_ttl: time::Duration,
    /// Most sessions held in memory at once
    pub session_store_capacity: u64,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr: SocketAddr = parse_var(&get, "BIND_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_BIND_ADDR));
        let knowledge_file = get("KNOWLEDGE_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KNOWLEDGE_FILE));

        let credentials = ModelSelector::ALL
            .into_iter()
            .fold(ProviderCredentials::default(), |creds, selector| {
                match get(selector.credential_var()) {
                    Some(key) => creds.with_key(selector, key),
                    None => creds,
                }
            });

        let defaults = ProviderEndpoints::default();
        let endpoints = ProviderEndpoints {
            gemini: get("GEMINI_BASE_URL").unwrap_or(defaults.gemini),
            deepseek: get("DEEPSEEK_BASE_URL").unwrap_or(defaults.deepseek),
            openai: get("OPENAI_BASE_URL").unwrap_or(defaults.openai),
        };

        let timeout_secs: u64 =
            parse_var(&get, "PROVIDER_TIMEOUT_SECS")?.unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "PROVIDER_TIMEOUT_SECS",
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }

        let history_limit: usize =
            parse_var(&get, "HISTORY_LIMIT")?.unwrap_or(DEFAULT_HISTORY_LIMIT);
        let ttl_hours: u32 =
            parse_var(&get, "SESSION_TTL_HOURS")?.unwrap_or(DEFAULT_SESSION_TTL_HOURS);
        if ttl_hours == 0 || ttl_hours > MAX_SESSION_TTL_HOURS {
            return Err(ConfigError::Invalid {
                var: "SESSION_TTL_HOURS",
                value: ttl_hours.to_string(),
                reason: format!("must be between 1 and {MAX_SESSION_TTL_HOURS} hours"),
            });
        }

        let session_store_capacity: u64 = parse_var(&get, "SESSION_STORE_CAPACITY")?
            .unwrap_or(DEFAULT_SESSION_STORE_CAPACITY);
        if session_store_capacity == 0 {
            return Err(ConfigError::Invalid {
                var: "SESSION_STORE_CAPACITY",
                value: "0".to_string(),
                reason: "the store must hold at least one session".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            knowledge_file,
            credentials,
            endpoints,
            provider_timeout: Duration::from_secs(timeout_secs),
            history_limit,
            session_ttl: time::Duration::hours(i64::from(ttl_hours)),
            session_store_capacity,
        })
    }
}

fn parse_var<F, T>(get: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match get(var).filter(|v| !v.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var,
                value: value.clone(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}
