//! [`ActorEntity`] implementations for [`Restaurant`] and [`Dish`].
//!
//! Both are read-only from the order side, so neither accepts actions.

use super::error::RestaurantError;
use crate::framework::{ActorEntity, NoAction};
use crate::model::{Dish, DishCreate, DishId, Money, Restaurant, RestaurantCreate, RestaurantId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Action = NoAction;
    type ActionResult = ();
    type Error = RestaurantError;

    fn from_create_params(
        id: RestaurantId,
        params: RestaurantCreate,
    ) -> Result<Self, RestaurantError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(RestaurantError::ValidationError(
                "restaurant name is empty".to_string(),
            ));
        }
        Ok(Restaurant {
            id,
            name: name.to_string(),
            owner_id: params.owner_id,
        })
    }

    async fn handle_action(&mut self, action: NoAction) -> Result<(), RestaurantError> {
        match action {}
    }
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Action = NoAction;
    type ActionResult = ();
    type Error = RestaurantError;

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, RestaurantError> {
        if params.price < Money::ZERO {
            return Err(RestaurantError::ValidationError(format!(
                "dish price {} is negative",
                params.price
            )));
        }
        Ok(Dish {
            id,
            name: params.name,
            price: params.price,
            restaurant_id: params.restaurant_id,
            options: params.options,
        })
    }

    async fn handle_action(&mut self, action: NoAction) -> Result<(), RestaurantError> {
        match action {}
    }
}
