use log::*;
use serde::Deserialize;

use crate::errors::PipelineError;

const DRAFT_STATE: &str = "DRAFT";

/// The inbound `order.created` webhook payload.
///
/// The fields of interest sit at `data.object.order_created`, but no level of
/// that path is guaranteed to exist, so every step is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub data: Option<WebhookData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookData {
    #[serde(default)]
    pub object: Option<WebhookObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookObject {
    #[serde(default)]
    pub order_created: Option<OrderCreated>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderCreated {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default, alias = "order_state")]
    pub state: Option<String>,
}

impl WebhookEvent {
    fn order_created(&self) -> Option<&OrderCreated> {
        self.data.as_ref()?.object.as_ref()?.order_created.as_ref()
    }
}

/// What to do with a webhook delivery after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// The order is still in draft. Expected and frequent; not an error.
    Skip,
    /// Continue with the fetch. A missing id is passed on as-is rather than
    /// guessed at here; the pipeline fails deterministically before fetching.
    Proceed { order_id: Option<String> },
}

pub fn validate_payload(body: &str) -> Result<Disposition, PipelineError> {
    let event =
        serde_json::from_str::<WebhookEvent>(body).map_err(|e| PipelineError::MalformedPayload(e.to_string()))?;
    let order_created = event.order_created();
    let order_id = order_created.and_then(|o| o.order_id.clone());
    info!("🧾️ Received webhook payload. Order ID: {}", order_id.as_deref().unwrap_or("<none>"));
    if order_created.and_then(|o| o.state.as_deref()) == Some(DRAFT_STATE) {
        return Ok(Disposition::Skip);
    }
    Ok(Disposition::Proceed { order_id })
}
