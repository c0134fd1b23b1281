mod api;
mod config;
mod error;
mod secret;
mod square_order;

pub use api::SquareApi;
pub use config::SquareConfig;
pub use error::SquareApiError;
pub use secret::Secret;
pub use square_order::{
    DeliveryDetails,
    Fulfillment,
    Money,
    OrderBuilder,
    OrderLineItem,
    OrderSource,
    PickupDetails,
    Recipient,
    SquareOrder,
};
