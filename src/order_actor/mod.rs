//! # Order Stores
//!
//! Store actors for [`Order`] and [`OrderItem`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementations
//! - [`actions`] - [`OrderAction`], the conditional updates an order accepts
//! - [`error`] - [`OrderError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (items_actor, items) = order_actor::new_items(32);
//! let (orders_actor, orders) = order_actor::new(32);
//! tokio::spawn(items_actor.run());
//! tokio::spawn(orders_actor.run());
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Order, OrderItem};

/// Creates a new Order store actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}

/// Creates a new OrderItem store actor and its client.
pub fn new_items(buffer_size: usize) -> (ResourceActor<OrderItem>, ResourceClient<OrderItem>) {
    ResourceActor::new(buffer_size)
}
