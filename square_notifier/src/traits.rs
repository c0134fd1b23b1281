//! Interface contracts for the pipeline's external collaborators.
//!
//! The host process owns the HTTP transport and the notification channel; the
//! pipeline only ever sees these two seams. [`square_tools::SquareApi`]
//! implements [`OrderLookup`] for production use, and tests substitute mocks.

use square_tools::{SquareApi, SquareApiError, SquareOrder};

use crate::errors::NotifyError;

#[allow(async_fn_in_trait)]
pub trait OrderLookup {
    /// Fetch the authoritative order record for the given id.
    async fn order(&self, order_id: &str) -> Result<SquareOrder, SquareApiError>;
}

impl OrderLookup for SquareApi {
    async fn order(&self, order_id: &str) -> Result<SquareOrder, SquareApiError> {
        self.get_order(order_id).await
    }
}

#[allow(async_fn_in_trait)]
pub trait NotificationSink {
    /// Deliver the finished message text. Fire-and-forget: the pipeline does
    /// not track delivery beyond this call returning.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}
