//! # Order Lifecycle Engine
//!
//! Places orders, answers order queries, and moves orders through
//! `Pending → Cooking → Cooked → PickedUp → Delivered`, publishing an event for every
//! committed change.
//!
//! Business failures come back as [`EngineError`]. Store failures are logged here and
//! reduced to a generic `Could not <op>.` message.
//!
//! ## Structure
//!
//! - [`policy`] - visibility and per-role status rules
//! - [`dtos`] - operation inputs and the `{ok, error?, ...data}` envelope
//! - [`error`] - [`EngineError`] and the caller-facing messages

pub mod dtos;
pub mod error;
pub mod policy;

pub use dtos::*;
pub use error::{EngineError, ErrorKind};

use crate::clients::{
    ActorClient, DishClient, Expand, OrderClient, OrderCriteria, OrderItemClient, OrderRecord,
    RestaurantClient, RestaurantCriteria,
};
use crate::events::{publish_order_event, OrderBus, OrderEvent};
use crate::model::{AuthUser, OrderCreate, OrderId, OrderItemCreate, OrderStatus, Role, UserId};
use crate::order_actor::OrderError;
use crate::pricing::{order_total, price_item};
use error::*;
use std::fmt::Display;
use tracing::{error, info, instrument};

/// Logs a collaborator failure and replaces it with the generic message for the operation.
fn internal(message: &'static str, cause: &dyn Display) -> EngineError {
    error!(error = %cause, "{message}");
    EngineError::Internal(message)
}

/// The order state machine, wired to its stores and the event bus.
#[derive(Clone)]
pub struct OrderEngine {
    orders: OrderClient,
    items: OrderItemClient,
    restaurants: RestaurantClient,
    dishes: DishClient,
    bus: OrderBus,
}

impl OrderEngine {
    pub fn new(
        orders: OrderClient,
        items: OrderItemClient,
        restaurants: RestaurantClient,
        dishes: DishClient,
        bus: OrderBus,
    ) -> Self {
        Self {
            orders,
            items,
            restaurants,
            dishes,
            bus,
        }
    }

    /// Prices and stores a new `Pending` order, then notifies the restaurant owner.
    #[instrument(skip(self, customer, input), fields(customer = %customer.id, restaurant = %input.restaurant_id))]
    pub async fn create(
        &self,
        customer: &AuthUser,
        input: CreateOrderInput,
    ) -> Result<CreateOrderOutput, EngineError> {
        let restaurant = self
            .restaurants
            .find_by_id(input.restaurant_id)
            .await
            .map_err(|e| internal(COULD_NOT_CREATE, &e))?
            .ok_or(EngineError::NotFound(RESTAURANT_NOT_FOUND))?;

        let mut items = Vec::with_capacity(input.items.len());
        let mut prices = Vec::with_capacity(input.items.len());
        for item in input.items {
            let dish = self
                .dishes
                .find_by_id(item.dish_id)
                .await
                .map_err(|e| internal(COULD_NOT_CREATE, &e))?
                .ok_or(EngineError::NotFound(DISH_NOT_FOUND))?;
            prices.push(price_item(&dish, &item.options).map_err(|e| internal(COULD_NOT_CREATE, &e))?);

            let stored = self
                .items
                .save(OrderItemCreate {
                    dish_id: dish.id,
                    options: item.options,
                })
                .await
                .map_err(|e| internal(COULD_NOT_CREATE, &e))?;
            items.push(stored);
        }

        let total = order_total(prices).map_err(|e| internal(COULD_NOT_CREATE, &e))?;
        let order = self
            .orders
            .save(OrderCreate {
                customer_id: Some(customer.id),
                restaurant_id: restaurant.id,
                items,
                total: Some(total),
            })
            .await
            .map_err(|e| internal(COULD_NOT_CREATE, &e))?;
        info!(order_id = %order.id, total = ?order.total, "Order placed");

        let order_id = order.id;
        publish_order_event(
            &self.bus,
            OrderEvent::Pending {
                order,
                owner_id: restaurant.owner_id,
            },
        );
        Ok(CreateOrderOutput { order_id })
    }

    /// Orders related to `user` by role, optionally narrowed to one status.
    #[instrument(skip(self, user), fields(user = %user.id, role = %user.role))]
    pub async fn get_many(
        &self,
        user: &AuthUser,
        input: GetOrdersInput,
    ) -> Result<OrdersOutput, EngineError> {
        let criteria = match user.role {
            Role::Client => OrderCriteria::customer(user.id),
            Role::Delivery => OrderCriteria::driver(user.id),
            Role::Owner => {
                let owned = self
                    .restaurants
                    .find(RestaurantCriteria::owned_by(user.id))
                    .await
                    .map_err(|e| internal(COULD_NOT_GET_ORDERS, &e))?;
                OrderCriteria::restaurants(owned.into_iter().map(|r| r.id).collect())
            }
        };

        let orders = self
            .orders
            .find(criteria.with_status(input.status))
            .await
            .map_err(|e| internal(COULD_NOT_GET_ORDERS, &e))?;
        Ok(OrdersOutput { orders })
    }

    #[instrument(skip(self, user), fields(user = %user.id, role = %user.role))]
    pub async fn get_one(&self, user: &AuthUser, input: OrderIdInput) -> Result<OrderOutput, EngineError> {
        let record = self.load(input.id, COULD_NOT_GET_ORDER).await?;
        if !policy::can_see(user, &record.order, record.restaurant.as_ref()) {
            return Err(EngineError::Forbidden(CANNOT_SEE_ORDER));
        }
        Ok(OrderOutput {
            order: record.order,
        })
    }

    /// Moves an order to `input.status` if the caller's role and relationship allow it.
    ///
    /// The target need not be the immediate successor; it only has to lie later in the
    /// lifecycle, which the order store checks atomically.
    #[instrument(skip(self, user), fields(user = %user.id, role = %user.role))]
    pub async fn edit(&self, user: &AuthUser, input: EditOrderInput) -> Result<Ack, EngineError> {
        let record = self.load(input.id, COULD_NOT_EDIT).await?;
        if !policy::can_see(user, &record.order, record.restaurant.as_ref()) {
            return Err(EngineError::Forbidden(CANNOT_SEE_ORDER));
        }
        if !policy::can_set(user.role, input.status) {
            return Err(EngineError::Forbidden(CANNOT_EDIT_ORDER));
        }
        let owner_id = owner_of(&record, COULD_NOT_EDIT)?;

        let order = self
            .orders
            .set_status(input.id, input.status)
            .await
            .map_err(|e| match e {
                OrderError::StatusNotForward { .. } => EngineError::Forbidden(CANNOT_EDIT_ORDER),
                OrderError::NotFound(_) => EngineError::NotFound(ORDER_NOT_FOUND),
                other => internal(COULD_NOT_EDIT, &other),
            })?;
        info!(order_id = %order.id, status = %order.status, "Order status changed");

        if order.status == OrderStatus::Cooked {
            publish_order_event(&self.bus, OrderEvent::Cooked { order: order.clone() });
        }
        publish_order_event(&self.bus, OrderEvent::Updated { order, owner_id });
        Ok(Ack {})
    }

    /// Assigns `driver` to the order unless another driver got there first.
    #[instrument(skip(self, driver), fields(driver = %driver.id))]
    pub async fn claim(&self, driver: &AuthUser, input: OrderIdInput) -> Result<Ack, EngineError> {
        let record = self.load(input.id, COULD_NOT_TAKE).await?;
        let owner_id = owner_of(&record, COULD_NOT_TAKE)?;

        let order = self
            .orders
            .assign_driver(input.id, driver.id)
            .await
            .map_err(|e| match e {
                OrderError::AlreadyTaken(_) => EngineError::Conflict(ORDER_ALREADY_TAKEN),
                OrderError::NotFound(_) => EngineError::NotFound(ORDER_NOT_FOUND),
                other => internal(COULD_NOT_TAKE, &other),
            })?;
        info!(order_id = %order.id, "Order taken");

        publish_order_event(&self.bus, OrderEvent::Updated { order, owner_id });
        Ok(Ack {})
    }

    async fn load(&self, id: OrderId, failure: &'static str) -> Result<OrderRecord, EngineError> {
        self.orders
            .find_one(id, Expand::RESTAURANT)
            .await
            .map_err(|e| internal(failure, &e))?
            .ok_or(EngineError::NotFound(ORDER_NOT_FOUND))
    }
}

fn owner_of(record: &OrderRecord, failure: &'static str) -> Result<UserId, EngineError> {
    match &record.restaurant {
        Some(restaurant) => Ok(restaurant.owner_id),
        None => {
            let cause = format!(
                "{} references missing {}",
                record.order.id, record.order.restaurant_id
            );
            Err(internal(failure, &cause))
        }
    }
}
