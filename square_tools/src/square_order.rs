use serde::{Deserialize, Serialize};

/// A Square order document, as returned by the Orders API.
///
/// Only the fields the notifier consumes are modelled, and every intermediate
/// level is optional. Orders arrive in many shapes (no fulfillments yet, no
/// recipient, no total) and an absent substructure must never fail
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SquareOrder {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub source: Option<OrderSource>,
    #[serde(default)]
    pub fulfillments: Vec<Fulfillment>,
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
    #[serde(default)]
    pub total_money: Option<Money>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSource {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fulfillment {
    #[serde(rename = "type", default)]
    pub fulfillment_type: Option<String>,
    #[serde(default)]
    pub pickup_details: Option<PickupDetails>,
    #[serde(default)]
    pub delivery_details: Option<DeliveryDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickupDetails {
    #[serde(default)]
    pub recipient: Option<Recipient>,
    #[serde(default)]
    pub pickup_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryDetails {
    #[serde(default)]
    pub recipient: Option<Recipient>,
    #[serde(default)]
    pub deliver_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Quantities are decimal strings in the Square API, not integers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLineItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Money {
    /// Amount in minor currency units (cents for USD).
    #[serde(default)]
    pub amount: Option<i64>,
}

impl Recipient {
    pub fn named(name: &str) -> Self {
        Self { display_name: Some(name.to_string()) }
    }
}

impl Fulfillment {
    pub fn pickup(recipient: Option<&str>, pickup_at: Option<&str>) -> Self {
        let details = PickupDetails { recipient: recipient.map(Recipient::named), pickup_at: pickup_at.map(String::from) };
        Self { fulfillment_type: Some("PICKUP".to_string()), pickup_details: Some(details), delivery_details: None }
    }

    pub fn delivery(recipient: Option<&str>, deliver_at: Option<&str>) -> Self {
        let details =
            DeliveryDetails { recipient: recipient.map(Recipient::named), deliver_at: deliver_at.map(String::from) };
        Self { fulfillment_type: Some("DELIVERY".to_string()), pickup_details: None, delivery_details: Some(details) }
    }
}

/// Fluent constructor for order documents, mostly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    order: SquareOrder,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.order.id = Some(id.to_string());
        self
    }

    pub fn source_name(mut self, name: &str) -> Self {
        self.order.source = Some(OrderSource { name: Some(name.to_string()) });
        self
    }

    pub fn fulfillment(mut self, fulfillment: Fulfillment) -> Self {
        self.order.fulfillments.push(fulfillment);
        self
    }

    pub fn line_item(mut self, name: &str, quantity: &str) -> Self {
        self.order.line_items.push(OrderLineItem { name: Some(name.to_string()), quantity: Some(quantity.to_string()) });
        self
    }

    pub fn total_amount(mut self, amount: i64) -> Self {
        self.order.total_money = Some(Money { amount: Some(amount) });
        self
    }

    pub fn build(self) -> SquareOrder {
        self.order
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_full_order() {
        let order = include_str!("./test_assets/order.json");
        let order: SquareOrder = serde_json::from_str(order).unwrap();
        assert_eq!(order.id.as_deref(), Some("CAISENgvlJ6jLWAzERDzjyHVybY"));
        assert_eq!(order.source.unwrap().name.as_deref(), Some("Uber"));
        assert_eq!(order.fulfillments.len(), 1);
        let pickup = order.fulfillments[0].pickup_details.as_ref().unwrap();
        assert_eq!(pickup.pickup_at.as_deref(), Some("2024-05-10T17:30:00.000Z"));
        assert_eq!(pickup.recipient.as_ref().unwrap().display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(order.line_items.len(), 2);
        assert_eq!(order.line_items[1].quantity.as_deref(), Some("1"));
        assert_eq!(order.total_money.unwrap().amount, Some(1599));
    }

    #[test]
    fn deserialize_sparse_order() {
        // A freshly created order can be little more than an id.
        let order: SquareOrder = serde_json::from_str(r#"{"id": "abc123", "state": "OPEN"}"#).unwrap();
        assert_eq!(order.id.as_deref(), Some("abc123"));
        assert!(order.source.is_none());
        assert!(order.fulfillments.is_empty());
        assert!(order.line_items.is_empty());
        assert!(order.total_money.is_none());
    }
}
