//! # ActorEntity Trait
//!
//! The contract every stored record (Order, OrderItem, Restaurant, Dish) implements so a
//! generic [`ResourceActor`](crate::framework::ResourceActor) can own it.
//!
//! A record is created once from a `Create` payload and afterwards only changes through
//! [`ActorEntity::handle_action`]. Because the owning actor handles one request at a time,
//! an action is a conditional single-row update: whatever it checks on `self` still holds
//! when it writes.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by `ResourceActor`.
///
/// # Associated Types
/// `Create` is the payload for a new record, `Action` the set of in-place mutations the
/// record accepts. Records that never change after creation use [`NoAction`].
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 for automatic ID generation and ordered so that
    /// `find` results come back in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Record-specific mutations (e.g. `SetStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// Errors cross the actor boundary boxed inside
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError);
    /// typed clients downcast them back.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the ID and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an action to the record.
    async fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

/// Action type for records that are immutable after creation.
///
/// Uninhabited, so `handle_action` for such records is a plain `match action {}`.
#[derive(Debug, Clone, Copy)]
pub enum NoAction {}
