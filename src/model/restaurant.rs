//! Restaurants and their menus.
//!
//! Both records are owned by the restaurant-side stores (see
//! [`restaurant_actor`](crate::restaurant_actor)); orders only ever read them.

use crate::model::{DishId, Money, RestaurantId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub owner_id: UserId,
}

/// Payload for creating a new restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub owner_id: UserId,
}

/// A menu entry with its base price and the add-ons a customer may pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: Money,
    pub restaurant_id: RestaurantId,
    pub options: Vec<DishOption>,
}

/// A named add-on. `extra` is charged whenever the option is picked; a picked choice adds
/// its own `extra` on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishOption {
    pub name: String,
    pub extra: Option<Money>,
    pub choices: Vec<OptionChoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    pub name: String,
    pub extra: Option<Money>,
}

/// Payload for creating a new dish.
#[derive(Debug, Clone)]
pub struct DishCreate {
    pub name: String,
    pub price: Money,
    pub restaurant_id: RestaurantId,
    pub options: Vec<DishOption>,
}

impl DishOption {
    pub fn new(name: impl Into<String>, extra: Option<Money>) -> Self {
        Self {
            name: name.into(),
            extra,
            choices: Vec::new(),
        }
    }

    pub fn with_choice(mut self, name: impl Into<String>, extra: Option<Money>) -> Self {
        self.choices.push(OptionChoice {
            name: name.into(),
            extra,
        });
        self
    }
}
