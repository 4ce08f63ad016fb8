//! Runtime orchestration: starting, wiring and stopping the dispatch core, plus logging
//! setup for the binary.

pub mod dispatch_system;
pub mod tracing;

pub use self::dispatch_system::*;
pub use self::tracing::*;
