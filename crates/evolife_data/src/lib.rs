//! Core data structures for the EvoLife simulation.

pub mod data;

pub use data::creature::*;
pub use data::food::*;
pub use data::stats::*;
pub use data::vector::*;
