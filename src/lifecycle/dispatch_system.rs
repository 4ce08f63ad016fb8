use crate::api::OrderApi;
use crate::clients::{DishClient, OrderClient, OrderItemClient, RestaurantClient};
use crate::config::DispatchConfig;
use crate::engine::OrderEngine;
use crate::events::OrderBus;
use crate::model::{Dish, DishCreate, DishOption, Money, Restaurant, RestaurantCreate, RestaurantId, UserId};
use crate::restaurant_actor::RestaurantError;
use crate::{order_actor, restaurant_actor};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Store task failed: {0}")]
    TaskFailed(#[from] JoinError),
}

/// Owns the running dispatch core: the four record stores, the event bus, and the
/// engine and API wired on top of them.
///
/// # Example
///
/// ```ignore
/// let system = DispatchSystem::new(&DispatchConfig::from_env()?);
/// let restaurant = system.add_restaurant("Pho Place", UserId(10)).await?;
///
/// let mut pending = system.api.pending_orders(Some(&AuthUser::owner(10)))?;
/// system.api.create_order(Some(&AuthUser::client(1)), input).await?;
///
/// system.shutdown().await?;
/// ```
pub struct DispatchSystem {
    pub api: OrderApi,
    pub engine: OrderEngine,
    pub orders: OrderClient,
    pub restaurants: RestaurantClient,
    pub dishes: DishClient,
    bus: OrderBus,
    handles: Vec<JoinHandle<()>>,
}

impl DispatchSystem {
    /// Spawns every store and wires clients, bus, engine and API together.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &DispatchConfig) -> Self {
        let capacity = config.mailbox_capacity;
        let (restaurant_actor, restaurant_inner) = restaurant_actor::new(capacity);
        let (dish_actor, dish_inner) = restaurant_actor::new_dishes(capacity);
        let (order_actor, order_inner) = order_actor::new(capacity);
        let (item_actor, item_inner) = order_actor::new_items(capacity);

        let handles = vec![
            tokio::spawn(restaurant_actor.run()),
            tokio::spawn(dish_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(item_actor.run()),
        ];

        let restaurants = RestaurantClient::new(restaurant_inner);
        let dishes = DishClient::new(dish_inner);
        let orders = OrderClient::new(order_inner, restaurants.clone());
        let items = OrderItemClient::new(item_inner);

        let bus = OrderBus::new();
        let engine = OrderEngine::new(
            orders.clone(),
            items,
            restaurants.clone(),
            dishes.clone(),
            bus.clone(),
        );
        let api = OrderApi::new(engine.clone(), bus.clone());
        info!(mailbox_capacity = capacity, "Dispatch system started");

        Self {
            api,
            engine,
            orders,
            restaurants,
            dishes,
            bus,
            handles,
        }
    }

    pub async fn add_restaurant(
        &self,
        name: &str,
        owner_id: UserId,
    ) -> Result<Restaurant, RestaurantError> {
        self.restaurants
            .create_restaurant(RestaurantCreate {
                name: name.to_string(),
                owner_id,
            })
            .await
    }

    pub async fn add_dish(
        &self,
        restaurant_id: RestaurantId,
        name: &str,
        price: Money,
        options: Vec<DishOption>,
    ) -> Result<Dish, RestaurantError> {
        self.dishes
            .create_dish(DishCreate {
                name: name.to_string(),
                price,
                restaurant_id,
                options,
            })
            .await
    }

    /// Closes the bus, drops every client so the stores see their mailboxes close, then
    /// waits for the store tasks.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down dispatch system...");
        let Self {
            api,
            engine,
            orders,
            restaurants,
            dishes,
            bus,
            handles,
        } = self;

        bus.close();
        drop(api);
        drop(engine);
        drop(orders);
        drop(restaurants);
        drop(dishes);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e.into());
            }
        }

        info!("Dispatch system shutdown complete.");
        Ok(())
    }
}
