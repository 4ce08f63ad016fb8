//! Order topics and the payloads published on them.

use crate::model::{Order, UserId};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    /// A new order awaits its restaurant owner.
    PendingOrder,
    /// An order left the kitchen; broadcast to idle drivers.
    CookedOrder,
    /// Any change to an order, for the parties involved in it.
    OrderUpdate,
}

impl Topic {
    pub fn name(self) -> &'static str {
        match self {
            Topic::PendingOrder => "pending-order",
            Topic::CookedOrder => "cooked-order",
            Topic::OrderUpdate => "order-update",
        }
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ephemeral notification about an order. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OrderEvent {
    #[serde(rename = "pending-order")]
    Pending { order: Order, owner_id: UserId },
    #[serde(rename = "cooked-order")]
    Cooked { order: Order },
    #[serde(rename = "order-update")]
    Updated { order: Order, owner_id: UserId },
}

impl OrderEvent {
    pub fn order(&self) -> &Order {
        match self {
            OrderEvent::Pending { order, .. }
            | OrderEvent::Cooked { order }
            | OrderEvent::Updated { order, .. } => order,
        }
    }

    /// The topic this event is published on.
    pub fn topic(&self) -> Topic {
        match self {
            OrderEvent::Pending { .. } => Topic::PendingOrder,
            OrderEvent::Cooked { .. } => Topic::CookedOrder,
            OrderEvent::Updated { .. } => Topic::OrderUpdate,
        }
    }
}
