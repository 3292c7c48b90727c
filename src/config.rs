// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    session_ttl: Duration,
    allowed_origins: Vec<String>,
    rate_limit: Option<RateLimitSettings>,
    admin_account: Option<AdminAccount>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst: 20,
        }
    }
}

#[derive(Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://articles.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8000".into()
}

fn default_session_ttl() -> u64 {
    60 * 60 * 24 * 14
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses defaults for
    /// optional values and rejects values that do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let session_ttl_secs = parse_or(&lookup, "SESSION_TTL_SECONDS", default_session_ttl())?;
        if session_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "SESSION_TTL_SECONDS must be greater than zero".into(),
            ));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);
        let rate_limit = if rate_limit_enabled {
            let defaults = RateLimitSettings::default();
            let per_second = parse_or(&lookup, "RATE_LIMIT_PER_SECOND", defaults.per_second)?;
            let burst = parse_or(&lookup, "RATE_LIMIT_BURST", defaults.burst)?;
            if per_second == 0 || burst == 0 {
                return Err(ConfigError::Invalid(
                    "rate limit values must be greater than zero".into(),
                ));
            }
            Some(RateLimitSettings { per_second, burst })
        } else {
            None
        };

        let admin_account = match (lookup("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminAccount { username, password }),
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_USERNAME")),
            (None, None) => None,
        };

        Ok(Self {
            database_url,
            listen_addr,
            session_ttl: Duration::from_secs(session_ttl_secs),
            allowed_origins,
            rate_limit,
            admin_account,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// `None` when rate limiting is switched off.
    pub fn rate_limit(&self) -> Option<RateLimitSettings> {
        self.rate_limit
    }

    pub fn admin_account(&self) -> Option<&AdminAccount> {
        self.admin_account.as_ref()
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {raw}"))),
        None => Ok(default),
    }
}
