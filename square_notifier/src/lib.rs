//! Turns Square `order.created` webhooks into human-readable notifications.
//!
//! A webhook delivery carries little more than an order id and state, so the
//! pipeline enriches it: validate the payload, fetch the authoritative order
//! record from the Square Orders API, project the loosely-typed document onto
//! the handful of fields the notification needs, and render the final text.
//!
//! The HTTP host that receives webhook deliveries and the channel that
//! delivers the finished message are not part of this crate. They plug in
//! through the [`traits::OrderLookup`] and [`traits::NotificationSink`] seams
//! on [`pipeline::OrderNotifier`].

pub mod config;
pub mod errors;
pub mod extract;
pub mod format;
pub mod pipeline;
pub mod traits;
pub mod webhook;

pub use config::NotifierConfig;
pub use errors::{NotifyError, PipelineError};
pub use extract::{extract_order, ExtractedOrder, LineItem};
pub use format::format_message;
pub use pipeline::{OrderNotifier, PipelineOutcome};
pub use traits::{NotificationSink, OrderLookup};
pub use webhook::{validate_payload, Disposition, WebhookEvent};
