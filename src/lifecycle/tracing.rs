//! # Logging Setup
//!
//! Compact `tracing` output without module targets; store logs carry an `entity_type`
//! field instead.
//!
//! `RUST_LOG` wins when set, otherwise the configured filter applies:
//!
//! ```bash
//! DISPATCH_LOG=debug cargo run
//! RUST_LOG=order_dispatch::engine=debug,info cargo run
//! ```
//!
//! With `info`, a placed order shows up as:
//!
//! ```text
//! INFO Created entity_type="Restaurant" id=restaurant_1 size=1
//! INFO create: Created entity_type="OrderItem" id=order_item_1 size=1
//! INFO create: Created entity_type="Order" id=order_1 size=1
//! INFO create: Order placed order_id=order_1 total=Some(Money(1000))
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
