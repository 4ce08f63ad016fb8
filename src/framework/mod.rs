//! Generic record-store framework.
//!
//! Each record type lives in its own [`ResourceActor`], a Tokio task that owns the records
//! and serves requests sequentially. The rest of the crate talks to it through a cloneable
//! [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be stored by an actor
//! - [`ResourceActor`] - Generic actor that owns the records
//! - [`ResourceClient`] - Typed sending half used by the repository clients
//! - [`FrameworkError`] - Errors from the store plumbing
//!
//! # Testing
//!
//! See `mock` (test builds only) for a client whose responses are scripted.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
#[cfg(test)]
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::{ActorEntity, NoAction};
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
