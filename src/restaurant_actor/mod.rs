//! # Restaurant Stores
//!
//! Store actors for [`Restaurant`] and [`Dish`] records. Menu management itself lives
//! elsewhere; the order flow only creates (when seeding) and reads these records.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Dish, Restaurant};

/// Creates a new Restaurant store actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, ResourceClient<Restaurant>) {
    ResourceActor::new(buffer_size)
}

/// Creates a new Dish store actor and its client.
pub fn new_dishes(buffer_size: usize) -> (ResourceActor<Dish>, ResourceClient<Dish>) {
    ResourceActor::new(buffer_size)
}
