//! Plain data shared by the engine and its observers.

pub mod creature;
pub mod food;
pub mod stats;
pub mod vector;
