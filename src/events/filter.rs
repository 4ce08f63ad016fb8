//! Per-subscriber delivery predicates for order topics.

use crate::events::bus::EventFilter;
use crate::events::topics::OrderEvent;
use crate::model::{OrderId, UserId};

/// Decides, per event and per subscriber identity, whether an order event is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFilter {
    /// Pending orders of restaurants owned by `owner`.
    PendingFor { owner: UserId },
    /// Updates to `order_id`, provided `subscriber` is its driver, customer or owner.
    UpdatesFor { subscriber: UserId, order_id: OrderId },
}

impl EventFilter<OrderEvent> for OrderFilter {
    fn accepts(&self, event: &OrderEvent) -> bool {
        match (self, event) {
            (OrderFilter::PendingFor { owner }, OrderEvent::Pending { owner_id, .. }) => {
                owner_id == owner
            }
            (
                OrderFilter::UpdatesFor {
                    subscriber,
                    order_id,
                },
                OrderEvent::Updated { order, owner_id },
            ) => {
                order.id == *order_id
                    && order.participants(*owner_id).contains(&Some(*subscriber))
            }
            _ => false,
        }
    }
}
