//! # Order Clients
//!
//! The repository facade for orders and order items. Reads take an explicit [`Expand`]
//! naming which relations to load; nothing is joined by default.
use crate::clients::actor_client::ActorClient;
use crate::clients::restaurant_client::RestaurantClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    Order, OrderCreate, OrderId, OrderItem, OrderItemCreate, OrderStatus, Restaurant,
    RestaurantId, UserId,
};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Relations to load alongside an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expand {
    pub restaurant: bool,
}

impl Expand {
    pub const NONE: Expand = Expand { restaurant: false };
    pub const RESTAURANT: Expand = Expand { restaurant: true };
}

/// An order together with whichever relations were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order: Order,
    pub restaurant: Option<Restaurant>,
}

/// Criteria for [`OrderClient::find`]. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct OrderCriteria {
    pub customer: Option<UserId>,
    pub driver: Option<UserId>,
    pub restaurants: Option<Vec<RestaurantId>>,
    pub status: Option<OrderStatus>,
}

impl OrderCriteria {
    pub fn customer(customer: UserId) -> Self {
        Self {
            customer: Some(customer),
            ..Self::default()
        }
    }

    pub fn driver(driver: UserId) -> Self {
        Self {
            driver: Some(driver),
            ..Self::default()
        }
    }

    pub fn restaurants(restaurants: Vec<RestaurantId>) -> Self {
        Self {
            restaurants: Some(restaurants),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: Option<OrderStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.customer.map_or(true, |c| order.customer_id == Some(c))
            && self.driver.map_or(true, |d| order.driver_id == Some(d))
            && self
                .restaurants
                .as_ref()
                .map_or(true, |ids| ids.contains(&order.restaurant_id))
            && self.status.map_or(true, |s| order.status == s)
    }
}

fn map_order_error(e: FrameworkError) -> OrderError {
    match e.downcast_entity::<OrderError>() {
        Ok(typed) => typed,
        Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
        Err(other) => OrderError::ActorCommunicationError(other.to_string()),
    }
}

/// Client for the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    restaurants: RestaurantClient,
}

impl OrderClient {
    /// `restaurants` is used to satisfy [`Expand::RESTAURANT`].
    pub fn new(inner: ResourceClient<Order>, restaurants: RestaurantClient) -> Self {
        Self { inner, restaurants }
    }

    /// Persists a new order and returns it as stored.
    #[instrument(skip(self, params), fields(restaurant_id = %params.restaurant_id))]
    pub async fn save(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "save called");
        self.inner.create(params).await.map_err(map_order_error)
    }

    /// Loads one order and the requested relations.
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: OrderId, expand: Expand) -> Result<Option<OrderRecord>, OrderError> {
        let Some(order) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let restaurant = if expand.restaurant {
            self.restaurants
                .find_by_id(order.restaurant_id)
                .await
                .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
        } else {
            None
        };
        Ok(Some(OrderRecord { order, restaurant }))
    }

    #[instrument(skip(self))]
    pub async fn find(&self, criteria: OrderCriteria) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .find(move |order| criteria.matches(order))
            .await
            .map_err(map_order_error)
    }

    /// Conditionally moves the order to a later status.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(map_order_error)
    }

    /// Conditionally assigns the driver; fails with `AlreadyTaken` if one is set.
    #[instrument(skip(self))]
    pub async fn assign_driver(&self, id: OrderId, driver: UserId) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::AssignDriver(driver))
            .await
            .map_err(map_order_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_order_error(e)
    }
}

/// Client for the OrderItem store. Items are only ever saved.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: ResourceClient<OrderItem>,
}

impl OrderItemClient {
    pub fn new(inner: ResourceClient<OrderItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn save(&self, params: OrderItemCreate) -> Result<OrderItem, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(map_order_error)
    }
}
