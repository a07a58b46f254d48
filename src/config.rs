use std::env;
use anyhow::{bail, Context, Result};

const DEFAULT_HOST_PORT: &str = ":8080";
const DEFAULT_REDIS_HOST_PORT: &str = "127.0.0.1:6379";

#[derive(Debug, Clone)]
pub struct Config {
    /// Listener address. A bare `:port` binds every interface.
    pub host_port: String,
    /// Redis address as `host:port` or a `redis://` URL.
    pub redis_host_port: String,
    /// When set, content stored under a key can never be rewritten.
    pub lock_versions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_port = lookup("HOST_PORT")
            .unwrap_or_else(|| DEFAULT_HOST_PORT.to_string());

        let redis_host_port = lookup("REDIS_HOST_PORT")
            .unwrap_or_else(|| DEFAULT_REDIS_HOST_PORT.to_string());

        let lock_versions = match lookup("LOCK_VERSIONS") {
            Some(raw) => parse_bool(&raw)
                .context("LOCK_VERSIONS must be a boolean (true/false)")?,
            None => false,
        };

        if host_port.trim().is_empty() {
            bail!("HOST_PORT must not be empty");
        }
        if redis_host_port.trim().is_empty() {
            bail!("REDIS_HOST_PORT must not be empty");
        }

        Ok(Config {
            host_port,
            redis_host_port,
            lock_versions,
        })
    }

    /// Address handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        if self.host_port.starts_with(':') {
            format!("0.0.0.0{}", self.host_port)
        } else {
            self.host_port.clone()
        }
    }

    /// Connection URL for the Redis pool.
    pub fn redis_url(&self) -> String {
        if self.redis_host_port.contains("://") {
            self.redis_host_port.clone()
        } else {
            format!("redis://{}", self.redis_host_port)
        }
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_addr());
        tracing::info!("  Redis: {}", self.redis_host_port);
        tracing::info!("  Lock versions: {}",
            if self.lock_versions { "enabled" } else { "disabled" });
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean value '{}'", other),
    }
}
