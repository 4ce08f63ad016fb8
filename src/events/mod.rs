//! # Order Events
//!
//! Real-time propagation of order changes.
//!
//! - [`bus`] - generic topic broker with per-subscriber buffers and filters
//! - [`topics`] - the three order topics and their [`OrderEvent`] payloads
//! - [`filter`] - [`OrderFilter`], who gets to see which event
//!
//! ## Usage
//!
//! ```rust,ignore
//! let bus = OrderBus::new();
//! let mut owner = bus.subscribe_filtered(
//!     Topic::PendingOrder,
//!     OrderFilter::PendingFor { owner: UserId(9) },
//! );
//! bus.publish(Topic::PendingOrder, OrderEvent::Pending { order, owner_id: UserId(9) });
//! let event = owner.recv().await;
//! ```

pub mod bus;
pub mod filter;
pub mod topics;

pub use bus::{EventBus, EventFilter, Subscription};
pub use filter::OrderFilter;
pub use topics::{OrderEvent, Topic};

/// The broker carrying order events.
pub type OrderBus = EventBus<Topic, OrderEvent>;

/// A subscriber's handle on one order topic.
pub type OrderSubscription = Subscription<Topic, OrderEvent>;

/// Publishes `event` on its own topic. Returns how many subscribers it reached.
pub fn publish_order_event(bus: &OrderBus, event: OrderEvent) -> usize {
    bus.publish(event.topic(), event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderCreate, OrderId, RestaurantId, UserId};

    fn order(id: u32) -> Order {
        Order::new(
            OrderId(id),
            OrderCreate {
                customer_id: Some(UserId(1)),
                restaurant_id: RestaurantId(1),
                items: Vec::new(),
                total: None,
            },
        )
    }

    #[tokio::test]
    async fn test_pending_event_reaches_only_its_owner() {
        let bus = OrderBus::new();
        let mut mine = bus.subscribe_filtered(
            Topic::PendingOrder,
            OrderFilter::PendingFor { owner: UserId(9) },
        );
        let mut theirs = bus.subscribe_filtered(
            Topic::PendingOrder,
            OrderFilter::PendingFor { owner: UserId(8) },
        );

        let delivered = publish_order_event(
            &bus,
            OrderEvent::Pending {
                order: order(1),
                owner_id: UserId(9),
            },
        );
        assert_eq!(delivered, 1);
        assert_eq!(mine.recv().await.unwrap().order().id, OrderId(1));
        assert!(theirs.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_update_subscriber_ignores_other_orders() {
        let bus = OrderBus::new();
        let mut watcher = bus.subscribe_filtered(
            Topic::OrderUpdate,
            OrderFilter::UpdatesFor {
                subscriber: UserId(1),
                order_id: OrderId(42),
            },
        );

        let delivered = publish_order_event(
            &bus,
            OrderEvent::Updated {
                order: order(43),
                owner_id: UserId(9),
            },
        );
        assert_eq!(delivered, 0);
        assert!(watcher.try_recv().is_none());

        publish_order_event(
            &bus,
            OrderEvent::Updated {
                order: order(42),
                owner_id: UserId(9),
            },
        );
        assert_eq!(watcher.recv().await.unwrap().order().id, OrderId(42));
    }

    #[tokio::test]
    async fn test_cooked_broadcast_reaches_every_driver() {
        let bus = OrderBus::new();
        let mut first = bus.subscribe(Topic::CookedOrder);
        let mut second = bus.subscribe(Topic::CookedOrder);

        let delivered = publish_order_event(&bus, OrderEvent::Cooked { order: order(7) });
        assert_eq!(delivered, 2);
        assert!(matches!(first.recv().await, Some(OrderEvent::Cooked { .. })));
        assert!(matches!(second.recv().await, Some(OrderEvent::Cooked { .. })));
    }
}
