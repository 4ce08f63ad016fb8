#![allow(dead_code)]

use order_dispatch::config::DispatchConfig;
use order_dispatch::engine::{CreateOrderInput, CreateOrderItemInput, OrderIdInput};
use order_dispatch::lifecycle::DispatchSystem;
use order_dispatch::model::{AuthUser, Dish, Money, OrderId, Restaurant, UserId};

pub const CUSTOMER: u32 = 1;
pub const OTHER_CUSTOMER: u32 = 2;
pub const OWNER: u32 = 10;
pub const OTHER_OWNER: u32 = 11;
pub const DRIVER: u32 = 20;
pub const OTHER_DRIVER: u32 = 21;

pub struct Menu {
    pub restaurant: Restaurant,
    pub dish: Dish,
}

pub fn start() -> DispatchSystem {
    DispatchSystem::new(&DispatchConfig::default())
}

/// One restaurant owned by `OWNER` with a single 10.00 dish.
pub async fn seed(system: &DispatchSystem) -> Menu {
    let restaurant = system
        .add_restaurant("Pho Place", UserId(OWNER))
        .await
        .expect("Failed to create restaurant");
    let dish = system
        .add_dish(restaurant.id, "Beef Pho", Money::from_cents(1000), Vec::new())
        .await
        .expect("Failed to create dish");
    Menu { restaurant, dish }
}

pub async fn place_order(system: &DispatchSystem, menu: &Menu, customer: u32) -> OrderId {
    let input = CreateOrderInput {
        restaurant_id: menu.restaurant.id,
        items: vec![CreateOrderItemInput {
            dish_id: menu.dish.id,
            options: Vec::new(),
        }],
    };
    let output = system
        .api
        .create_order(Some(&AuthUser::client(customer)), input)
        .await
        .expect("Client may create orders");
    assert!(output.ok, "create failed: {:?}", output.error);
    output.data.expect("Created order id").order_id
}

pub async fn claim(system: &DispatchSystem, order: OrderId, driver: u32) {
    let output = system
        .api
        .take_order(Some(&AuthUser::delivery(driver)), OrderIdInput { id: order })
        .await
        .expect("Driver may take orders");
    assert!(output.ok, "claim failed: {:?}", output.error);
}
