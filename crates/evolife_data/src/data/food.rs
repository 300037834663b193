use super::vector::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A food pellet grazed by prey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: Uuid,
    pub position: Vec3,
    pub energy: f64,
    pub consumed: bool,
}

impl Food {
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.consumed
    }
}
