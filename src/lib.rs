//! # Order Dispatch
//!
//! The core of a food-delivery backend: places orders, moves them from the kitchen to the
//! customer's door under per-role rules, and pushes every change in real time to exactly
//! the people entitled to see it.
//!
//! ## Module Tour
//!
//! ### 1. Stores ([`framework`], [`restaurant_actor`], [`order_actor`])
//! Each record type is owned by a [`ResourceActor`](framework::ResourceActor) running in its
//! own Tokio task. Requests are served one at a time, so the conditional updates an order
//! accepts (advance status, assign driver) are atomic.
//!
//! ### 2. Repository facade ([`clients`])
//! Typed clients over the stores. Order reads take an explicit
//! [`Expand`](clients::Expand); nothing is joined by default.
//!
//! ### 3. Domain ([`model`], [`pricing`], [`engine`])
//! [`OrderEngine`](engine::OrderEngine) is the state machine. It prices new orders,
//! applies the visibility and status policies, and publishes events for every change.
//!
//! ### 4. Real time ([`events`])
//! A named-topic broker with per-subscriber buffers and
//! [`OrderFilter`](events::OrderFilter) predicates.
//!
//! ### 5. Entry points ([`guard`], [`api`])
//! Every operation declares who may call it; [`OrderApi`](api::OrderApi) checks that
//! before anything else runs.
//!
//! ### 6. Runtime ([`lifecycle`], [`config`])
//! [`DispatchSystem`](lifecycle::DispatchSystem) starts, wires and stops everything.
//!
//! ## Running
//!
//! ```bash
//! DISPATCH_LOG=info cargo run
//! cargo test
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod engine;
pub mod events;
pub mod framework;
pub mod guard;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod restaurant_actor;
