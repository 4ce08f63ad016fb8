//! [`ActorEntity`] implementations for [`Order`] and [`OrderItem`].

use super::actions::OrderAction;
use super::error::OrderError;
use crate::framework::{ActorEntity, NoAction};
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderItemCreate, OrderItemId};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(id, params))
    }

    /// Applies a conditional update and returns the order as stored afterwards.
    async fn handle_action(&mut self, action: OrderAction) -> Result<Order, OrderError> {
        match action {
            OrderAction::SetStatus(status) => {
                if !self.status.can_advance_to(status) {
                    return Err(OrderError::StatusNotForward {
                        from: self.status,
                        to: status,
                    });
                }
                self.status = status;
            }
            OrderAction::AssignDriver(driver_id) => {
                if self.driver_id.is_some() {
                    return Err(OrderError::AlreadyTaken(self.id));
                }
                self.driver_id = Some(driver_id);
            }
        }
        self.updated_at = Utc::now();
        Ok(self.clone())
    }
}

#[async_trait]
impl ActorEntity for OrderItem {
    type Id = OrderItemId;
    type Create = OrderItemCreate;
    type Action = NoAction;
    type ActionResult = ();
    type Error = OrderError;

    fn from_create_params(id: OrderItemId, params: OrderItemCreate) -> Result<Self, OrderError> {
        Ok(OrderItem {
            id,
            dish_id: params.dish_id,
            options: params.options,
            created_at: Utc::now(),
        })
    }

    async fn handle_action(&mut self, action: NoAction) -> Result<(), OrderError> {
        match action {}
    }
}
