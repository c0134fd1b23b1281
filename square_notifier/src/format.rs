use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::extract::ExtractedOrder;

const DASHBOARD_URL: &str = "https://squareup.com/dashboard/orders/overview";

/// Render the notification text for an extracted order.
///
/// The scheduled instant is converted from UTC into the local timezone, and
/// "today" is judged against the local date at the moment of rendering.
pub fn format_message(order: &ExtractedOrder, order_id: &str) -> String {
    render(order, order_id, Local::now())
}

pub(crate) fn render<Tz: TimeZone>(order: &ExtractedOrder, order_id: &str, now: DateTime<Tz>) -> String
where Tz::Offset: Display {
    let recipient = order.recipient_name.as_deref().unwrap_or_default();
    let mut message = format!("New {} order from {recipient} containing:\n\n", order.source_name);
    for item in &order.line_items {
        message += &format!("{} x {}\n", item.name, item.quantity);
    }
    message += "\n";
    if let Some(fulfillment_type) = &order.fulfillment_type {
        message += &format!("{} is scheduled for ", capitalize(fulfillment_type));
        if let Some(scheduled_at) = order.scheduled_at {
            let local = scheduled_at.with_timezone(&now.timezone());
            if local.date_naive() == now.date_naive() {
                message += &format!("{} today", local.format("%I:%M%p"));
            } else {
                message += &local.format("%I:%M%p on %m/%d/%Y").to_string();
            }
        }
    }
    message += &format!("\n\n{DASHBOARD_URL}/{order_id}");
    // The total can legitimately be absent; the clause is dropped rather than
    // dividing a missing amount.
    if let Some(total) = order.total_amount {
        message += &format!("\n\nThe order total is ${:.2}", total as f64 / 100.0);
    }
    message
}

/// Upper-cases the first character and lower-cases the rest, so "PICKUP"
/// renders as "Pickup".
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use chrono::{FixedOffset, Utc};

    use super::*;
    use crate::extract::LineItem;

    fn sample_order() -> ExtractedOrder {
        ExtractedOrder {
            source_name: "UBER".to_string(),
            recipient_name: Some("JANE".to_string()),
            line_items: vec![
                LineItem { name: "Burger".to_string(), quantity: "2".to_string() },
                LineItem { name: "Fries".to_string(), quantity: "1".to_string() },
            ],
            fulfillment_type: Some("PICKUP".to_string()),
            scheduled_at: None,
            total_amount: Some(1599),
        }
    }

    // Two hours east of UTC, so the conversion is visible in the output.
    fn tz() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn schedule_on_the_same_local_date_renders_today() {
        let mut order = sample_order();
        // 11:05 UTC is 13:05 local.
        order.scheduled_at = Some(Utc.with_ymd_and_hms(2026, 3, 14, 11, 5, 0).unwrap());
        let now = tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let message = render(&order, "O1", now);
        assert!(message.contains("Pickup is scheduled for 01:05PM today"), "{message}");
    }

    #[test]
    fn schedule_on_another_date_renders_the_date() {
        let mut order = sample_order();
        order.scheduled_at = Some(Utc.with_ymd_and_hms(2026, 3, 15, 11, 5, 0).unwrap());
        let now = tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let message = render(&order, "O1", now);
        assert!(message.contains("Pickup is scheduled for 01:05PM on 03/15/2026"), "{message}");
    }

    #[test]
    fn full_message_layout() {
        let mut order = sample_order();
        order.scheduled_at = Some(Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0).unwrap());
        let now = tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let expected = "New UBER order from JANE containing:\n\
                        \n\
                        Burger x 2\n\
                        Fries x 1\n\
                        \n\
                        Pickup is scheduled for 10:00AM on 03/15/2026\n\
                        \n\
                        https://squareup.com/dashboard/orders/overview/O1\n\
                        \n\
                        The order total is $15.99";
        assert_eq!(render(&order, "O1", now), expected);
    }

    #[test]
    fn absent_recipient_renders_an_empty_name() {
        let mut order = sample_order();
        order.recipient_name = None;
        let message = render(&order, "O1", tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());
        assert!(message.starts_with("New UBER order from  containing:"), "{message}");
    }

    #[test]
    fn missing_schedule_leaves_the_clause_open() {
        let order = sample_order();
        let message = render(&order, "O1", tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());
        assert!(message.contains("Pickup is scheduled for \n\nhttps://"), "{message}");
    }

    #[test]
    fn missing_fulfillment_type_omits_the_schedule_clause() {
        let mut order = sample_order();
        order.fulfillment_type = None;
        let message = render(&order, "O1", tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());
        assert!(!message.contains("scheduled"));
    }

    #[test]
    fn total_renders_with_two_decimals() {
        let mut order = sample_order();
        order.total_amount = Some(4250);
        let message = render(&order, "O1", tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());
        assert!(message.ends_with("The order total is $42.50"), "{message}");
    }

    #[test]
    fn missing_total_omits_the_total_clause() {
        let mut order = sample_order();
        order.total_amount = None;
        let message = render(&order, "O1", tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());
        assert!(!message.contains("order total"));
        assert!(message.ends_with("/O1"), "{message}");
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut order = sample_order();
        order.scheduled_at = Some(Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0).unwrap());
        let now = tz().with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        assert_eq!(render(&order, "O1", now.clone()), render(&order, "O1", now));
    }

    #[test]
    fn capitalize_handles_mixed_case() {
        assert_eq!(capitalize("PICKUP"), "Pickup");
        assert_eq!(capitalize("delivery"), "Delivery");
        assert_eq!(capitalize(""), "");
    }
}
