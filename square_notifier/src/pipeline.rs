use log::*;

use crate::{
    errors::PipelineError,
    extract::extract_order,
    format::format_message,
    traits::{NotificationSink, OrderLookup},
    webhook::{validate_payload, Disposition},
};

/// How a pipeline run ended when it did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The order was still in draft; nothing was fetched or sent.
    Skipped,
    /// A notification was handed to the sink.
    Notified,
}

/// The enrichment-and-formatting pipeline for one webhook delivery: validate
/// the payload, fetch the authoritative order record, project it, and
/// dispatch the rendered message.
///
/// Runs are independent and share nothing mutable; the only suspend point is
/// the order fetch. Nothing is retried: any failure terminates the run with a
/// log record, and the host acknowledges the webhook regardless.
pub struct OrderNotifier<S, N> {
    orders: S,
    sink: N,
}

impl<S, N> OrderNotifier<S, N>
where
    S: OrderLookup,
    N: NotificationSink,
{
    pub fn new(orders: S, sink: N) -> Self {
        Self { orders, sink }
    }

    pub async fn handle_webhook(&self, body: &str) -> Result<PipelineOutcome, PipelineError> {
        let disposition = validate_payload(body).map_err(|e| {
            error!("🧾️ {e}");
            e
        })?;
        let order_id = match disposition {
            Disposition::Skip => {
                info!("🧾️ Order is in DRAFT state. Skipping further processing.");
                return Ok(PipelineOutcome::Skipped);
            },
            Disposition::Proceed { order_id } => order_id.ok_or_else(|| {
                error!("🧾️ Webhook payload did not contain an order id. Not fetching anything.");
                PipelineError::MissingOrderId
            })?,
        };
        let order = self.orders.order(&order_id).await.map_err(|e| {
            error!("🧾️ Could not retrieve order {order_id} from Square. {e}");
            PipelineError::from(e)
        })?;
        let extracted = extract_order(&order);
        let message = format_message(&extracted, &order_id);
        self.sink.send(&message).await?;
        info!("🔔️ Dispatched notification for order {order_id}");
        Ok(PipelineOutcome::Notified)
    }
}
