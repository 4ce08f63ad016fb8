//! Orders and their line items.

use crate::model::{DishId, Money, OrderId, OrderItemId, RestaurantId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where an order is on its way from kitchen to door.
///
/// Variants are declared in lifecycle order, so the derived `Ord` is the lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Cooking,
    Cooked,
    PickedUp,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Cooking,
        OrderStatus::Cooked,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
    ];

    /// True when `target` lies strictly later in the lifecycle. Skipping ahead is allowed.
    pub fn can_advance_to(self, target: OrderStatus) -> bool {
        target > self
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Cooking => "Cooking",
            OrderStatus::Cooked => "Cooked",
            OrderStatus::PickedUp => "PickedUp",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(name)
    }
}

/// A placed order.
///
/// `restaurant_id` never changes. `driver_id` is empty until a driver claims the order and
/// is never cleared afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: Option<UserId>,
    pub driver_id: Option<UserId>,
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderItem>,
    pub total: Option<Money>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new order. New orders always start `Pending`.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: Option<UserId>,
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderItem>,
    pub total: Option<Money>,
}

impl Order {
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            customer_id: params.customer_id,
            driver_id: None,
            restaurant_id: params.restaurant_id,
            items: params.items,
            total: params.total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// The parties entitled to updates about this order, given its restaurant's owner.
    pub fn participants(&self, owner_id: UserId) -> [Option<UserId>; 3] {
        [self.driver_id, self.customer_id, Some(owner_id)]
    }
}

/// One dish as ordered, with the options the customer picked. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub dish_id: DishId,
    pub options: Vec<OrderItemOption>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemOption {
    pub name: String,
    pub choice: Option<String>,
}

impl OrderItemOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choice: None,
        }
    }

    pub fn with_choice(name: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choice: Some(choice.into()),
        }
    }
}

/// Payload for storing a new order item.
#[derive(Debug, Clone)]
pub struct OrderItemCreate {
    pub dish_id: DishId,
    pub options: Vec<OrderItemOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_order_is_declaration_order() {
        let mut sorted = OrderStatus::ALL;
        sorted.sort();
        assert_eq!(sorted, OrderStatus::ALL);
    }

    #[test]
    fn can_advance_only_forward() {
        assert!(OrderStatus::Pending.can_advance_to(OrderStatus::Cooked));
        assert!(!OrderStatus::Cooked.can_advance_to(OrderStatus::Cooking));
        assert!(!OrderStatus::Cooking.can_advance_to(OrderStatus::Cooking));
        for target in OrderStatus::ALL {
            assert!(!OrderStatus::Delivered.can_advance_to(target));
        }
    }
}
