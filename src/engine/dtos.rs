//! Inputs and result shapes of the order operations.
//!
//! Every result serializes as `{ "ok": bool, "error"?: string, ...data }`.

use crate::engine::error::{EngineError, ErrorKind};
use crate::model::{DishId, Order, OrderId, OrderItemOption, OrderStatus, RestaurantId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemInput {
    pub dish_id: DishId,
    #[serde(default)]
    pub options: Vec<OrderItemOption>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub restaurant_id: RestaurantId,
    pub items: Vec<CreateOrderItemInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetOrdersInput {
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrderIdInput {
    pub id: OrderId,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EditOrderInput {
    pub id: OrderId,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderOutput {
    pub order_id: OrderId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersOutput {
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderOutput {
    pub order: Order,
}

/// Success without a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ack {}

/// The caller-facing envelope around an operation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub kind: Option<ErrorKind>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> Output<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            error: None,
            kind: None,
            data: Some(data),
        }
    }

    pub fn failure(error: &EngineError) -> Self {
        Self {
            ok: false,
            error: Some(error.message().to_string()),
            kind: Some(error.kind()),
            data: None,
        }
    }
}

impl<T> From<Result<T, EngineError>> for Output<T> {
    fn from(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(data) => Output::success(data),
            Err(error) => Output::failure(&error),
        }
    }
}
