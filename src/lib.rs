//! EvoLife: a predator/prey evolutionary simulation.
//!
//! [`model::simulation::Simulation`] owns the world and advances it one
//! frame at a time; [`app`] drives it headlessly from a fixed frame clock.

pub mod app;
pub mod model;

pub use model::simulation::{Simulation, SimulationSnapshot};
