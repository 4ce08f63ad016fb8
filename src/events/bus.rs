//! # Topic Broker
//!
//! `EventBus<K, E>` fans each published payload out to every subscriber attached to the
//! topic at that moment. There is no queue for absent subscribers and no replay.
//!
//! Every subscriber owns an unbounded buffer, so `publish` never waits on a slow consumer.
//! A [`Subscription`] detaches itself when dropped; a subscriber whose receiver is gone is
//! also pruned on the next publish to its topic.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Per-subscriber delivery predicate.
///
/// Evaluated once per published payload; `false` suppresses the payload for this
/// subscriber only.
pub trait EventFilter<E>: Send + Sync {
    fn accepts(&self, event: &E) -> bool;
}

struct Subscriber<E> {
    id: u64,
    filter: Option<Box<dyn EventFilter<E>>>,
    sender: mpsc::UnboundedSender<E>,
}

struct Registry<K, E> {
    next_id: u64,
    topics: HashMap<K, Vec<Subscriber<E>>>,
}

type SharedRegistry<K, E> = Arc<Mutex<Registry<K, E>>>;

fn lock<K, E>(registry: &Mutex<Registry<K, E>>) -> MutexGuard<'_, Registry<K, E>> {
    // Nothing in the registry can be left half-updated by a panicking holder.
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process named-topic broker. Cloning yields another handle to the same broker.
pub struct EventBus<K, E> {
    registry: SharedRegistry<K, E>,
}

impl<K, E> Clone for EventBus<K, E> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<K, E> Default for EventBus<K, E>
where
    K: Eq + Hash + Copy + Debug,
    E: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> EventBus<K, E>
where
    K: Eq + Hash + Copy + Debug,
    E: Clone,
{
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 1,
                topics: HashMap::new(),
            })),
        }
    }

    /// Attaches a subscriber that receives every payload on `topic`.
    pub fn subscribe(&self, topic: K) -> Subscription<K, E> {
        self.attach(topic, None)
    }

    /// Attaches a subscriber that receives only the payloads `filter` accepts.
    pub fn subscribe_filtered(
        &self,
        topic: K,
        filter: impl EventFilter<E> + 'static,
    ) -> Subscription<K, E> {
        self.attach(topic, Some(Box::new(filter)))
    }

    fn attach(&self, topic: K, filter: Option<Box<dyn EventFilter<E>>>) -> Subscription<K, E> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        let subscribers = registry.topics.entry(topic).or_default();
        subscribers.push(Subscriber { id, filter, sender });
        debug!(?topic, subscriber = id, attached = subscribers.len(), "Subscribed");

        Subscription {
            topic,
            id,
            receiver,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Hands `payload` to every subscriber on `topic` whose filter accepts it.
    ///
    /// Returns the number of subscribers the payload was handed to.
    pub fn publish(&self, topic: K, payload: E) -> usize {
        let mut registry = lock(&self.registry);
        let Some(subscribers) = registry.topics.get_mut(&topic) else {
            debug!(?topic, delivered = 0, "Published");
            return 0;
        };

        let mut delivered = 0;
        subscribers.retain(|subscriber| {
            if subscriber.sender.is_closed() {
                return false;
            }
            let accepted = subscriber
                .filter
                .as_ref()
                .map_or(true, |filter| filter.accepts(&payload));
            if !accepted {
                return true;
            }
            match subscriber.sender.send(payload.clone()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => false,
            }
        });
        debug!(?topic, delivered, attached = subscribers.len(), "Published");
        delivered
    }

    /// Number of subscribers currently attached to `topic`.
    pub fn subscriber_count(&self, topic: K) -> usize {
        lock(&self.registry)
            .topics
            .get(&topic)
            .map_or(0, |subscribers| {
                subscribers.iter().filter(|s| !s.sender.is_closed()).count()
            })
    }

    /// Detaches every subscriber. Their pending payloads stay readable, after which
    /// `recv` returns `None`.
    pub fn close(&self) {
        let mut registry = lock(&self.registry);
        let detached: usize = registry.topics.values().map(Vec::len).sum();
        registry.topics.clear();
        info!(detached, "Event bus closed");
    }
}

/// A live attachment to one topic.
///
/// Dropping it detaches the subscriber and frees its buffer.
pub struct Subscription<K, E>
where
    K: Eq + Hash,
{
    topic: K,
    id: u64,
    receiver: mpsc::UnboundedReceiver<E>,
    registry: Weak<Mutex<Registry<K, E>>>,
}

impl<K, E> Subscription<K, E>
where
    K: Eq + Hash + Copy,
{
    pub fn topic(&self) -> K {
        self.topic
    }

    /// Waits for the next payload. `None` once the bus is closed or gone.
    pub async fn recv(&mut self) -> Option<E> {
        self.receiver.recv().await
    }

    /// Returns a buffered payload without waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        self.receiver.try_recv().ok()
    }
}

impl<K, E> Drop for Subscription<K, E>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        self.receiver.close();
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = lock(&registry);
            if let Some(subscribers) = registry.topics.get_mut(&self.topic) {
                subscribers.retain(|subscriber| subscriber.id != self.id);
            }
        }
    }
}
