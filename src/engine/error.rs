//! Failures reported by the order engine.

use serde::Serialize;
use thiserror::Error;

pub const RESTAURANT_NOT_FOUND: &str = "Could not found restaurant.";
pub const DISH_NOT_FOUND: &str = "Could not found dish.";
pub const ORDER_NOT_FOUND: &str = "Could not found order.";
pub const CANNOT_SEE_ORDER: &str = "You can not see order";
pub const CANNOT_EDIT_ORDER: &str = "You can not edit order.";
pub const ORDER_ALREADY_TAKEN: &str = "This order already taken.";

pub const COULD_NOT_CREATE: &str = "Could not create order.";
pub const COULD_NOT_GET_ORDERS: &str = "Could not get orders.";
pub const COULD_NOT_GET_ORDER: &str = "Could not get order.";
pub const COULD_NOT_EDIT: &str = "Could not edit order.";
pub const COULD_NOT_TAKE: &str = "Could not take order.";

/// Coarse classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    Conflict,
    Internal,
}

/// A business failure, or a collaborator failure already reduced to a generic message.
///
/// The display text is the caller-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    /// Details are logged where the failure happened; only the generic message travels.
    #[error("{0}")]
    Internal(&'static str),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::NotFound(_) => ErrorKind::NotFound,
            EngineError::Forbidden(_) => ErrorKind::Forbidden,
            EngineError::Conflict(_) => ErrorKind::Conflict,
            EngineError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EngineError::NotFound(m)
            | EngineError::Forbidden(m)
            | EngineError::Conflict(m)
            | EngineError::Internal(m) => m,
        }
    }
}
