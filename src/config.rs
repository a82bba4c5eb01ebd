//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). A missing `MONGO_URL` is not an
//! error — store-backed endpoints degrade to 503 instead.

use std::net::SocketAddr;

/// Default sheet-logging webhook endpoint, used when `GOOGLE_SHEETS_URL`
/// is not set.
pub const DEFAULT_SHEETS_URL: &str = "https://script.google.com/macros/s/AKfycbyT65djHFUaZiVA1Jj86BwIuVYrWdttp96KxRlcyb_jMCJN4OL1wP3eCGfL6Lqz7VS6IA/exec";

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// MongoDB connection string. `None` when `MONGO_URL` is unset, in
    /// which case all store-backed endpoints answer 503.
    pub mongo_url: Option<String>,

    /// MongoDB database name.
    pub db_name: String,

    /// Allowed CORS origins. The single entry `"*"` allows any origin.
    pub cors_origins: Vec<String>,

    /// Outbound sheet-logging webhook URL.
    pub sheets_webhook_url: String,

    /// Timeout in seconds for the outbound webhook call.
    pub webhook_timeout_secs: u64,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let mongo_url = std::env::var("MONGO_URL").ok().filter(|s| !s.is_empty());

        let db_name =
            std::env::var("DB_NAME").unwrap_or_else(|_| "test_database".to_string());

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let sheets_webhook_url = std::env::var("GOOGLE_SHEETS_URL")
            .unwrap_or_else(|_| DEFAULT_SHEETS_URL.to_string());

        let webhook_timeout_secs = parse_env("WEBHOOK_TIMEOUT_SECS", 15);

        Ok(Self {
            listen_addr,
            mongo_url,
            db_name,
            cors_origins,
            sheets_webhook_url,
            webhook_timeout_secs,
        })
    }

    /// Whether every origin is allowed (`CORS_ORIGINS` unset or `"*"`).
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_config(cors_origins: Vec<String>) -> GatewayConfig {
        let Ok(listen_addr) = "127.0.0.1:0".parse() else {
            panic!("valid addr");
        };
        GatewayConfig {
            listen_addr,
            mongo_url: None,
            db_name: "test_database".to_string(),
            cors_origins,
            sheets_webhook_url: DEFAULT_SHEETS_URL.to_string(),
            webhook_timeout_secs: 15,
        }
    }

    #[test]
    fn wildcard_origin_allows_any() {
        let config = make_config(vec!["*".to_string()]);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn explicit_origin_list_is_restrictive() {
        let config = make_config(vec![
            "https://example.com".to_string(),
            "https://admin.example.com".to_string(),
        ]);
        assert!(!config.allows_any_origin());
    }
}
