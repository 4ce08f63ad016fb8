//! # Restaurant and Dish Clients
//!
//! Read access to restaurants and menus for the order flow, plus creation for seeding.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Dish, DishCreate, Restaurant, RestaurantCreate, UserId};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Criteria for [`RestaurantClient::find`]. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct RestaurantCriteria {
    pub owner: Option<UserId>,
}

impl RestaurantCriteria {
    pub fn owned_by(owner: UserId) -> Self {
        Self { owner: Some(owner) }
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.owner.map_or(true, |owner| restaurant.owner_id == owner)
    }
}

fn map_restaurant_error(e: FrameworkError) -> RestaurantError {
    match e.downcast_entity::<RestaurantError>() {
        Ok(typed) => typed,
        Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
    }
}

/// Client for the Restaurant store.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(map_restaurant_error)
    }

    #[instrument(skip(self))]
    pub async fn find(&self, criteria: RestaurantCriteria) -> Result<Vec<Restaurant>, RestaurantError> {
        debug!("Sending request");
        self.inner
            .find(move |restaurant| criteria.matches(restaurant))
            .await
            .map_err(map_restaurant_error)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_restaurant_error(e)
    }
}

/// Client for the Dish store.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_dish(&self, params: DishCreate) -> Result<Dish, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(map_restaurant_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_restaurant_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant_actor;

    #[tokio::test]
    async fn test_find_restaurants_by_owner() {
        let (actor, inner) = restaurant_actor::new(8);
        tokio::spawn(actor.run());
        let client = RestaurantClient::new(inner);

        for (name, owner) in [("A", 1), ("B", 2), ("C", 1)] {
            client
                .create_restaurant(RestaurantCreate {
                    name: name.to_string(),
                    owner_id: UserId(owner),
                })
                .await
                .unwrap();
        }

        let mine = client.find(RestaurantCriteria::owned_by(UserId(1))).await.unwrap();
        let names: Vec<_> = mine.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);

        let all = client.find(RestaurantCriteria::default()).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_validation_error_survives_the_actor_boundary() {
        let (actor, inner) = restaurant_actor::new(8);
        tokio::spawn(actor.run());
        let client = RestaurantClient::new(inner);

        let err = client
            .create_restaurant(RestaurantCreate {
                name: String::new(),
                owner_id: UserId(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RestaurantError::ValidationError(_)));
    }
}
