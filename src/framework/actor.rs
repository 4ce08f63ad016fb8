//! # Generic Store Actor
//!
//! `ResourceActor<T>` owns every record of one type and serves requests from its mailbox
//! one at a time. Exclusive ownership inside a single task is what makes record actions
//! atomic without a table-wide lock.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// # Usage Pattern
///
/// 1. Call `ResourceActor::new()` to get the actor (server) and client (interface).
/// 2. Spawn `actor.run()` in a background task.
/// 3. Clone the client wherever the store is needed. The actor stops once every
///    client has been dropped.
///
/// IDs are assigned from an internal counter starting at 1.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; callers wait for space when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "order_dispatch::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.next_id += 1;
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter(*item))
                        .cloned()
                        .collect();
                    debug!(entity_type, matched = items.len(), "Find");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: u32,
        locked: bool,
    }

    #[derive(Debug)]
    struct CounterCreate {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Increment,
        Lock,
    }

    #[derive(Debug, thiserror::Error)]
    enum CounterError {
        #[error("counter is locked")]
        Locked,
        #[error("value must be positive")]
        Zero,
    }

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Action = CounterAction;
        type ActionResult = u32;
        type Error = CounterError;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, CounterError> {
            if params.value == 0 {
                return Err(CounterError::Zero);
            }
            Ok(Self {
                id,
                value: params.value,
                locked: false,
            })
        }

        async fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
            match action {
                CounterAction::Increment if self.locked => Err(CounterError::Locked),
                CounterAction::Increment => {
                    self.value += 1;
                    Ok(self.value)
                }
                CounterAction::Lock => {
                    self.locked = true;
                    Ok(self.value)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_create_get_find_and_action() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        let handle = tokio::spawn(actor.run());

        let first = client.create(CounterCreate { value: 1 }).await.unwrap();
        let second = client.create(CounterCreate { value: 10 }).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        // Rejected creates do not consume an id
        assert!(client.create(CounterCreate { value: 0 }).await.is_err());
        let third = client.create(CounterCreate { value: 5 }).await.unwrap();
        assert_eq!(third.id, 3);

        let big = client.find(|c: &Counter| c.value >= 5).await.unwrap();
        assert_eq!(big.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 3]);

        assert_eq!(client.perform_action(1, CounterAction::Increment).await.unwrap(), 2);
        client.perform_action(1, CounterAction::Lock).await.unwrap();
        let locked = client.perform_action(1, CounterAction::Increment).await;
        assert!(matches!(
            locked.unwrap_err().downcast_entity::<CounterError>(),
            Ok(CounterError::Locked)
        ));

        assert_eq!(client.get(1).await.unwrap().unwrap().value, 2);
        assert!(client.get(99).await.unwrap().is_none());
        assert!(matches!(
            client.perform_action(99, CounterAction::Increment).await,
            Err(FrameworkError::NotFound(_))
        ));

        drop(client);
        handle.await.unwrap();
    }
}
