//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for container calls.
//!
//! The core never records telemetry on its own; callers (the CLI, benches)
//! time the stages they own and fold container layouts into counters.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
