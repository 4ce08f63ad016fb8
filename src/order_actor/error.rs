//! Error types for the Order store.

use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Another driver claimed the order first.
    #[error("Order {0} already has a driver")]
    AlreadyTaken(OrderId),

    /// The requested status does not lie after the current one.
    #[error("Order cannot move from {from} to {to}")]
    StatusNotForward { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the store.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
