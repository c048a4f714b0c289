use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use dreamgarden_api::service::DEFAULT_CHAT_HISTORY;
use dreamgarden_engine::DEFAULT_WINDOW;

/// Server settings, read from `DREAMGARDEN_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub plant_window: usize,
    pub chat_history: usize,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            host: lookup("DREAMGARDEN_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "DREAMGARDEN_PORT", 3000)?,
            plant_window: parse_or(&lookup, "DREAMGARDEN_PLANT_WINDOW", DEFAULT_WINDOW)?,
            chat_history: parse_or(&lookup, "DREAMGARDEN_CHAT_LIMIT", DEFAULT_CHAT_HISTORY)?,
            seed_demo: parse_or(&lookup, "DREAMGARDEN_SEED_DEMO", true)?,
        };

        if config.plant_window == 0 {
            bail!("DREAMGARDEN_PLANT_WINDOW must be at least 1");
        }
        Ok(config)
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key}={raw:?} is invalid: {e}")),
        None => Ok(default),
    }
}
