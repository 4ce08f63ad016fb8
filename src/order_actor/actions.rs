//! Conditional updates accepted by a stored [`Order`](crate::model::Order).
//!
//! Both actions check and write inside the order store's task, so the check cannot go
//! stale between reading and writing.

use crate::model::{OrderStatus, UserId};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to a later status.
    ///
    /// # Errors
    /// Fails with `StatusNotForward` when the target is not strictly after the current
    /// status (this also rejects any move out of `Delivered`).
    SetStatus(OrderStatus),
    /// Makes the given user the order's driver.
    ///
    /// # Errors
    /// Fails with `AlreadyTaken` when a driver is already set.
    AssignDriver(UserId),
}
