//! Engine passes run after behavior each tick, in this order:
//! reproduction, food spawn, cleanup, statistics.

pub mod cleanup;
pub mod reproduction;
pub mod spawn;
pub mod stats;
