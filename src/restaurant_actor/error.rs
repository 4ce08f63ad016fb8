//! Error types for the Restaurant and Dish stores.

use thiserror::Error;

/// Errors that can occur during restaurant or menu store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The restaurant or dish data provided is invalid.
    #[error("Restaurant validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the store.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RestaurantError {
    fn from(msg: String) -> Self {
        RestaurantError::ActorCommunicationError(msg)
    }
}
