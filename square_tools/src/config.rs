use std::time::Duration;

use log::*;

use crate::Secret;

#[derive(Debug, Clone, Default)]
pub struct SquareConfig {
    /// The host serving the Square REST API, e.g. "connect.squareup.com".
    pub api_host: String,
    pub access_token: Secret<String>,
    /// Overall request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl SquareConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_host = std::env::var("SQN_SQUARE_HOST").unwrap_or_else(|_| {
            warn!("SQN_SQUARE_HOST not set, using connect.squareup.com as default");
            "connect.squareup.com".to_string()
        });
        let access_token = Secret::new(std::env::var("SQN_SQUARE_ACCESS_TOKEN").unwrap_or_else(|_| {
            warn!("SQN_SQUARE_ACCESS_TOKEN not set, using (probably useless) default");
            "EAAA0000000000000000".to_string()
        }));
        let timeout = std::env::var("SQN_SQUARE_TIMEOUT").ok().and_then(|s| {
            s.parse::<u64>()
                .map_err(|e| warn!("Ignoring invalid SQN_SQUARE_TIMEOUT ({s}): {e}"))
                .ok()
                .map(Duration::from_secs)
        });
        Self { api_host, access_token, timeout }
    }
}
