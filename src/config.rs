use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};

pub const HOST_VAR: &str = "MEDIBOOK_HOST";
pub const PORT_VAR: &str = "MEDIBOOK_PORT";
pub const CATALOG_PATH_VAR: &str = "MEDIBOOK_CATALOG_PATH";
pub const SESSION_IDLE_VAR: &str = "MEDIBOOK_SESSION_IDLE_SECS";
pub const MAX_SESSIONS_VAR: &str = "MEDIBOOK_MAX_SESSIONS";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
const DEFAULT_MAX_SESSIONS: u64 = 10_000;
/// moka refuses idle timeouts longer than 1000 years
const MAX_SESSION_IDLE_SECS: u64 = 1000 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// CSV catalog; the built-in doctors are used when unset
    pub catalog_path: Option<PathBuf>,
    pub session_idle: Duration,
    pub max_sessions: u64,
}

impl Config {
    /// Reads the process environment. Call after `dotenv()` so `.env` values are visible.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let idle_secs: u64 = parse_or(
            value(SESSION_IDLE_VAR),
            SESSION_IDLE_VAR,
            DEFAULT_SESSION_IDLE_SECS,
        )?;
        if idle_secs == 0 || idle_secs > MAX_SESSION_IDLE_SECS {
            bail!(
                "{} must be between 1 and {}, got {}",
                SESSION_IDLE_VAR,
                MAX_SESSION_IDLE_SECS,
                idle_secs
            );
        }

        let max_sessions: u64 = parse_or(
            value(MAX_SESSIONS_VAR),
            MAX_SESSIONS_VAR,
            DEFAULT_MAX_SESSIONS,
        )?;
        if max_sessions == 0 {
            bail!("{} must be at least 1", MAX_SESSIONS_VAR);
        }

        Ok(Config {
            host: value(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(value(PORT_VAR), PORT_VAR, DEFAULT_PORT)?,
            catalog_path: value(CATALOG_PATH_VAR).map(PathBuf::from),
            session_idle: Duration::from_secs(idle_secs),
            max_sessions,
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", key, raw)),
        None => Ok(default),
    }
}
