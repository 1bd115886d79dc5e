//! Server configuration parsed from environment variables.
//!
//! Parsing is split into pure `parse_*` helpers over `Option<&str>` so the
//! rules can be tested without touching the process environment.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Upstream GoTrue-compatible provider the relay forwards to.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthProviderConfig {
    /// Base URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    pub api_key: String,
    pub timeouts: AuthTimeouts,
}

impl std::fmt::Debug for AuthProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` when the provider URL or key is missing; the relay then answers 503.
    pub auth: Option<AuthProviderConfig>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_PROVIDER_URL` + `AUTH_PROVIDER_API_KEY`: both needed to enable the relay
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 15
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |key: &str| std::env::var(key).ok();
        Self::from_vars(
            var("PORT").as_deref(),
            var("AUTH_PROVIDER_URL").as_deref(),
            var("AUTH_PROVIDER_API_KEY").as_deref(),
            var("AUTH_REQUEST_TIMEOUT_SECS").as_deref(),
            var("AUTH_CONNECT_TIMEOUT_SECS").as_deref(),
        )
    }

    fn from_vars(
        port: Option<&str>,
        provider_url: Option<&str>,
        provider_key: Option<&str>,
        request_timeout: Option<&str>,
        connect_timeout: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let port = parse_port(port)?;
        let timeouts = AuthTimeouts {
            request_secs: parse_secs("AUTH_REQUEST_TIMEOUT_SECS", request_timeout, DEFAULT_AUTH_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_secs("AUTH_CONNECT_TIMEOUT_SECS", connect_timeout, DEFAULT_AUTH_CONNECT_TIMEOUT_SECS)?,
        };
        let auth = parse_provider(provider_url, provider_key).map(|(base_url, api_key)| AuthProviderConfig {
            base_url,
            api_key,
            timeouts,
        });
        Ok(Self { port, auth })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_secs(key: &'static str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    match non_blank(raw) {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: v.to_owned() }),
    }
}

fn parse_provider(url: Option<&str>, key: Option<&str>) -> Option<(String, String)> {
    let url = non_blank(url)?.trim_end_matches('/');
    let key = non_blank(key)?;
    Some((url.to_owned(), key.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
