//! Who may see an order, and which statuses each role may set.

use crate::model::{AuthUser, Order, OrderStatus, Restaurant, Role};

/// Client sees its own orders, Delivery the orders it drives, Owner its restaurants' orders.
///
/// An owner check needs the order's restaurant; without it the owner is denied.
pub fn can_see(user: &AuthUser, order: &Order, restaurant: Option<&Restaurant>) -> bool {
    match user.role {
        Role::Client => order.customer_id == Some(user.id),
        Role::Delivery => order.driver_id == Some(user.id),
        Role::Owner => restaurant.is_some_and(|r| r.id == order.restaurant_id && r.owner_id == user.id),
    }
}

/// Owners move orders through the kitchen, drivers through delivery. Nobody sets `Pending`.
pub fn can_set(role: Role, status: OrderStatus) -> bool {
    match role {
        Role::Owner => matches!(status, OrderStatus::Cooking | OrderStatus::Cooked),
        Role::Delivery => matches!(status, OrderStatus::PickedUp | OrderStatus::Delivered),
        Role::Client => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderCreate, OrderId, RestaurantId, UserId};

    fn order() -> Order {
        let mut order = Order::new(
            OrderId(1),
            OrderCreate {
                customer_id: Some(UserId(1)),
                restaurant_id: RestaurantId(4),
                items: Vec::new(),
                total: None,
            },
        );
        order.driver_id = Some(UserId(2));
        order
    }

    fn restaurant(owner: u32) -> Restaurant {
        Restaurant {
            id: RestaurantId(4),
            name: "Noodle Bar".to_string(),
            owner_id: UserId(owner),
        }
    }

    #[test]
    fn visibility_follows_relationship() {
        let order = order();
        let owned = restaurant(3);

        assert!(can_see(&AuthUser::client(1), &order, None));
        assert!(!can_see(&AuthUser::client(2), &order, None));
        assert!(can_see(&AuthUser::delivery(2), &order, None));
        assert!(!can_see(&AuthUser::delivery(1), &order, None));
        assert!(can_see(&AuthUser::owner(3), &order, Some(&owned)));
        assert!(!can_see(&AuthUser::owner(4), &order, Some(&owned)));
        assert!(!can_see(&AuthUser::owner(3), &order, None));
    }

    #[test]
    fn status_policy_per_role() {
        for status in OrderStatus::ALL {
            assert_eq!(
                can_set(Role::Owner, status),
                matches!(status, OrderStatus::Cooking | OrderStatus::Cooked)
            );
            assert_eq!(
                can_set(Role::Delivery, status),
                matches!(status, OrderStatus::PickedUp | OrderStatus::Delivered)
            );
            assert!(!can_set(Role::Client, status));
        }
    }
}
