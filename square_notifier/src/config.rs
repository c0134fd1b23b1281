use std::env;

use log::*;
use square_tools::SquareConfig;

/// Process-wide configuration. Loaded once at startup and read-only after
/// that; pipeline runs share nothing else.
#[derive(Debug, Clone, Default)]
pub struct NotifierConfig {
    /// Opaque webhook identifier. The host uses it to route inbound webhook
    /// deliveries to this pipeline; the pipeline itself never reads it.
    pub webhook_id: String,
    pub square: SquareConfig,
}

impl NotifierConfig {
    pub fn from_env_or_default() -> Self {
        let webhook_id = env::var("SQN_WEBHOOK_ID").unwrap_or_else(|_| {
            error!("🪛️ SQN_WEBHOOK_ID is not set. The host will not be able to route webhook deliveries here.");
            String::default()
        });
        let square = SquareConfig::new_from_env_or_default();
        Self { webhook_id, square }
    }
}
