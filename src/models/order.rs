use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentMode {
    Pickup,
    Delivery,
}

impl FulfillmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentMode::Pickup => "pickup",
            FulfillmentMode::Delivery => "delivery",
        }
    }
}

/// Order status, declared in progression order. `Ord` follows that order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InProgress,
    Ready,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    pub fn index(&self) -> usize {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Ready => 3,
            OrderStatus::Delivered => 4,
        }
    }

    pub fn successor(&self) -> Option<OrderStatus> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn predecessor(&self) -> Option<OrderStatus> {
        self.index().checked_sub(1).map(|idx| Self::ALL[idx])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Completed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Waiting for tailor confirmation",
            OrderStatus::Confirmed => "Tailor has accepted your order",
            OrderStatus::InProgress => "Work is underway",
            OrderStatus::Ready => "Your item is ready",
            OrderStatus::Delivered => "Order completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == raw)
            .ok_or_else(|| AppError::InvalidStatus(raw.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub provider_id: String,
    pub provider_name: String,
    pub service: String,
    pub total_price: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_completion: DateTime<Utc>,
    pub fulfillment: FulfillmentMode,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus;
    use crate::error::AppError;

    #[test]
    fn successor_and_predecessor_walk_the_progression() {
        assert_eq!(OrderStatus::Pending.predecessor(), None);
        assert_eq!(OrderStatus::Pending.successor(), Some(OrderStatus::Confirmed));
        assert_eq!(OrderStatus::Ready.successor(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.successor(), None);
        assert_eq!(OrderStatus::InProgress.predecessor(), Some(OrderStatus::Confirmed));
    }

    #[test]
    fn index_matches_position_in_all() {
        for (idx, status) in OrderStatus::ALL.iter().enumerate() {
            assert_eq!(status.index(), idx);
        }
    }

    #[test]
    fn parses_wire_names_and_rejects_unknown() {
        assert_eq!("in-progress".parse::<OrderStatus>().unwrap(), OrderStatus::InProgress);
        assert_eq!("delivered".parse::<OrderStatus>().unwrap(), OrderStatus::Delivered);

        let err = "cancelled".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, AppError::InvalidStatus(ref s) if s == "cancelled"));
        assert!("InProgress".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
