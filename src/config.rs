// src/config.rs
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:1234/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "meta-llama-3-8b-instruct";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_PORT: u16 = 5050;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Startup configuration. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub host: IpAddr,
    pub port: u16,
    pub backend_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub static_dir: PathBuf,
    pub index_file: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            static_dir: PathBuf::from("static"),
            index_file: "index.html".to_string(),
        }
    }
}

impl RelayConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: parse_or("RELAY_HOST", &lookup, defaults.host)?,
            port: parse_or("RELAY_PORT", &lookup, defaults.port)?,
            backend_url: lookup("LLM_BACKEND_URL").unwrap_or(defaults.backend_url),
            model: lookup("LLM_MODEL").unwrap_or(defaults.model),
            temperature: parse_or("LLM_TEMPERATURE", &lookup, defaults.temperature)?,
            max_tokens: parse_or("LLM_MAX_TOKENS", &lookup, defaults.max_tokens)?,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            index_file: lookup("STATIC_INDEX").unwrap_or(defaults.index_file),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(&self.index_file)
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
