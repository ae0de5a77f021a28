use anyhow::{Context, Result};
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings read from the process environment at startup
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: url::Url,
    pub bind_addr: SocketAddr,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;

        let endpoint = lookup("OPENAI_ENDPOINT").context("OPENAI_ENDPOINT must be set")?;
        let endpoint = url::Url::parse(&endpoint)
            .with_context(|| format!("OPENAI_ENDPOINT is not a valid URL: {}", endpoint))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a valid socket address: {}", bind_addr))?;

        Ok(Self {
            api_key,
            endpoint,
            bind_addr,
        })
    }
}
