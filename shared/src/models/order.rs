//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// Orders stored without a status are treated as `Pending`. Any other
/// label the backend sends decodes as `Unknown` so a single odd record does
/// not fail the whole list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Completed,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// All statuses in workflow order
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != OrderStatus::Unknown
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a status label is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrderStatusError(pub String);

impl fmt::Display for ParseOrderStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status: {}", self.0)
    }
}

impl std::error::Error for ParseOrderStatusError {}

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseOrderStatusError(s.to_string()))
    }
}

fn status_or_pending<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OrderStatus>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_quantity() -> u32 {
    1
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Unit price in currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    /// Customer name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    /// Total amount in currency unit
    pub total: f64,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: OrderStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Number of lines shown in listings
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_null_status_is_pending() {
        let missing: Order = serde_json::from_str(
            r#"{"_id":"o1","name":"Asha","items":[],"total":10,"createdAt":"2025-03-01T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(missing.status, OrderStatus::Pending);

        let null: Order = serde_json::from_str(
            r#"{"_id":"o2","items":[],"total":10,"status":null,"createdAt":"2025-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(null.status, OrderStatus::Pending);
        assert!(null.name.is_none());
    }

    #[test]
    fn test_unknown_status_keeps_the_rest_of_the_list() {
        let orders: Vec<Order> = serde_json::from_str(
            r#"[
                {"_id":"o3","items":[],"total":1,"status":"Cancelled","createdAt":"2025-03-01T10:00:00Z"},
                {"_id":"o4","items":[],"total":2,"status":"Completed","createdAt":"2025-03-01T11:00:00Z"}
            ]"#,
        )
        .unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, OrderStatus::Unknown);
        assert!(!orders[0].status.is_known());
        assert_eq!(orders[1].status, OrderStatus::Completed);
    }

    #[test]
    fn test_line_quantity_defaults_to_one() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o4","items":[{"name":"Thali"},{"name":"Lassi","quantity":2}],"total":350.5,"status":"Preparing","createdAt":"2025-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.items[1].quantity, 2);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!("Completed".parse::<OrderStatus>(), Ok(OrderStatus::Completed));
        assert!("completed".parse::<OrderStatus>().is_err());
        assert!("Unknown".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::Preparing.to_string(), "Preparing");
        assert_eq!(
            serde_json::to_string(&OrderStatusUpdate { status: OrderStatus::Completed }).unwrap(),
            r#"{"status":"Completed"}"#
        );
    }
}
