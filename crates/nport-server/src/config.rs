//! Server configuration from the environment.

use axum::http::HeaderValue;
use nport_data::{NportError, Result, SecApiConfig};
use std::{net::SocketAddr, time::Duration};

const LISTEN_ADDR_VAR: &str = "NPORT_LISTEN_ADDR";
const CORS_VAR: &str = "NPORT_CORS_ALLOW_ORIGINS";
const REQUEST_TIMEOUT_VAR: &str = "NPORT_REQUEST_TIMEOUT_SECS";
const LOG_JSON_VAR: &str = "NPORT_LOG_JSON";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,https://nport-drab.vercel.app";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Origins allowed to call the relay from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials
    Any,
    /// Explicit allowlist
    List(Vec<HeaderValue>),
}

/// Server settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the listener binds to
    pub listen_addr: SocketAddr,
    /// CORS allowlist
    pub cors_allow: CorsOrigins,
    /// Upper bound on handling a single inbound request
    pub request_timeout: Duration,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
    /// Upstream credential and endpoint
    pub sec_api: SecApiConfig,
}

impl Config {
    /// Read `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve every setting through `lookup`; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sec_api = SecApiConfig::from_lookup(&lookup)?;

        let raw_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen_addr = raw_addr.trim().parse().map_err(|_| {
            NportError::InvalidConfig(format!("{LISTEN_ADDR_VAR} is not a socket address: {raw_addr:?}"))
        })?;

        let cors_allow = parse_origins(
            &lookup(CORS_VAR).unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into()),
        )?;

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                NportError::InvalidConfig(format!(
                    "{REQUEST_TIMEOUT_VAR} must be whole seconds, got {raw:?}"
                ))
            })?),
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        // The outbound timeout must fire first so callers get a 500 with a detail.
        if request_timeout <= sec_api.timeout {
            return Err(NportError::InvalidConfig(format!(
                "{REQUEST_TIMEOUT_VAR} ({}s) must exceed the upstream timeout ({}s)",
                request_timeout.as_secs(),
                sec_api.timeout.as_secs()
            )));
        }

        let log_json = log_json_from_lookup(&lookup);

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            log_json,
            sec_api,
        })
    }
}

/// Whether `NPORT_LOG_JSON` asks for JSON log lines, read from the environment.
pub fn log_json_from_env() -> bool {
    log_json_from_lookup(|key| std::env::var(key).ok())
}

fn log_json_from_lookup<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_JSON_VAR)
        .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

fn parse_origins(raw: &str) -> Result<CorsOrigins> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| NportError::InvalidConfig(format!("invalid CORS origin {origin:?}")))
        })
        .collect::<Result<Vec<_>>>()
        .map(CorsOrigins::List)
}
