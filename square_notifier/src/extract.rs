use chrono::{DateTime, Utc};
use square_tools::{Fulfillment, SquareOrder};

/// The normalized projection of a Square order that the formatter consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedOrder {
    pub source_name: String,
    pub recipient_name: Option<String>,
    pub line_items: Vec<LineItem>,
    pub fulfillment_type: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Order total in minor currency units. Absent on orders that have no
    /// total yet; the formatter must not do arithmetic on it in that case.
    pub total_amount: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub quantity: String,
}

/// Project a raw order document onto the fields the notification needs.
///
/// Pure and infallible: anything missing from the document becomes an absent
/// field, never an error.
///
/// The recipient is taken from the first fulfillment that names one, while
/// the fulfillment type and schedule always come from the first fulfillment
/// entry, even when the recipient was found elsewhere. That asymmetry matches
/// the upstream notifier behaviour and is deliberate.
pub fn extract_order(order: &SquareOrder) -> ExtractedOrder {
    let source_name =
        order.source.as_ref().and_then(|s| s.name.as_deref()).unwrap_or_default().to_uppercase();
    let recipient_name =
        order.fulfillments.iter().find_map(recipient_of).and_then(|r| r.display_name.as_deref()).map(str::to_uppercase);
    let first = order.fulfillments.first();
    let fulfillment_type = first.and_then(|f| f.fulfillment_type.as_deref()).map(str::to_uppercase);
    let scheduled_at = first.and_then(scheduled_time_of);
    let line_items = order
        .line_items
        .iter()
        .map(|item| LineItem {
            name: item.name.clone().unwrap_or_default(),
            quantity: item.quantity.clone().unwrap_or_default(),
        })
        .collect();
    let total_amount = order.total_money.as_ref().and_then(|m| m.amount);
    ExtractedOrder { source_name, recipient_name, line_items, fulfillment_type, scheduled_at, total_amount }
}

/// The recipient of a single fulfillment entry. When pickup details are
/// present, delivery details are not consulted for the same entry.
fn recipient_of(f: &Fulfillment) -> Option<&square_tools::Recipient> {
    if let Some(pickup) = &f.pickup_details {
        pickup.recipient.as_ref()
    } else if let Some(delivery) = &f.delivery_details {
        delivery.recipient.as_ref()
    } else {
        None
    }
}

fn scheduled_time_of(f: &Fulfillment) -> Option<DateTime<Utc>> {
    let raw = f
        .pickup_details
        .as_ref()
        .and_then(|p| p.pickup_at.as_deref())
        .or_else(|| f.delivery_details.as_ref().and_then(|d| d.deliver_at.as_deref()))?;
    // Square timestamps are RFC 3339. Unparseable values degrade to "no
    // schedule" rather than failing the extraction.
    DateTime::parse_from_rfc3339(raw).ok().map(|t| t.with_timezone(&Utc))
}
