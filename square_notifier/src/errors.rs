use square_tools::SquareApiError;
use thiserror::Error;

/// Everything that can terminate a pipeline run early.
///
/// All of these are terminal for the current run only. Nothing is retried and
/// nothing is surfaced back through the webhook transport; the host
/// acknowledges the delivery either way.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Could not parse webhook payload. {0}")]
    MalformedPayload(String),
    #[error("Webhook payload did not contain an order id")]
    MissingOrderId,
    #[error("Could not fetch order from Square. {0}")]
    OrderFetch(#[from] SquareApiError),
    #[error("Could not dispatch notification. {0}")]
    Notification(#[from] NotifyError),
}

#[derive(Debug, Clone, Error)]
#[error("Notification delivery failed. {0}")]
pub struct NotifyError(pub String);
