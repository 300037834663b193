//! Tunable behavior constants.
//!
//! Every distance, probability factor and multiplier the behavior FSM uses is
//! read from [`BehaviorParams`]. The control surface pushes string-keyed
//! overrides through [`BehaviorParams::merge`].

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BehaviorParams {
    /// Radius within which predators notice prey.
    pub hunt_range: f64,
    /// Scales aggressiveness into a per-tick chance of hunting while fed.
    pub aggression_multiplier: f64,
    /// Fraction of a victim's energy a predator absorbs.
    pub energy_gain_from_prey: f64,
    /// Radius within which prey notice predators.
    pub flee_range: f64,
    pub flee_speed_multiplier: f64,
    /// Scales fear level into a per-tick chance of fleeing.
    pub fear_sensitivity: f64,
    pub predator_mating_range: f64,
    pub prey_mating_range: f64,
    pub wander_turn_chance: f64,
    pub wander_speed_factor: f64,
    /// Velocity retained after each tick.
    pub friction: f64,
    /// Distance kept from the world edge.
    pub boundary_margin: f64,
    /// Extra reach added to prey size when grazing.
    pub eat_reach: f64,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        Self {
            hunt_range: 15.0,
            aggression_multiplier: 0.1,
            energy_gain_from_prey: 0.7,
            flee_range: 10.0,
            flee_speed_multiplier: 1.2,
            fear_sensitivity: 1.0,
            predator_mating_range: 5.0,
            prey_mating_range: 3.0,
            wander_turn_chance: 0.05,
            wander_speed_factor: 0.6,
            friction: 0.95,
            boundary_margin: 2.0,
            eat_reach: 0.5,
        }
    }
}

/// `(camelCase key, snake_case key, min, max)`
const PARAM_RANGES: &[(&str, &str, f64, f64)] = &[
    ("huntRange", "hunt_range", 5.0, 30.0),
    ("aggressionMultiplier", "aggression_multiplier", 0.01, 0.5),
    ("energyGainFromPrey", "energy_gain_from_prey", 0.3, 1.0),
    ("fleeRange", "flee_range", 3.0, 20.0),
    ("fleeSpeedMultiplier", "flee_speed_multiplier", 1.0, 2.0),
    ("fearSensitivity", "fear_sensitivity", 0.1, 2.0),
    ("predatorMatingRange", "predator_mating_range", 0.5, 20.0),
    ("preyMatingRange", "prey_mating_range", 0.5, 20.0),
    ("wanderTurnChance", "wander_turn_chance", 0.0, 1.0),
    ("wanderSpeedFactor", "wander_speed_factor", 0.0, 2.0),
    ("friction", "friction", 0.0, 1.0),
    ("boundaryMargin", "boundary_margin", 0.0, 10.0),
    ("eatReach", "eat_reach", 0.0, 5.0),
];

fn lookup(key: &str) -> Option<(&'static str, f64, f64)> {
    PARAM_RANGES
        .iter()
        .find(|(camel, snake, ..)| *camel == key || *snake == key)
        .map(|&(_, snake, min, max)| (snake, min, max))
}

impl BehaviorParams {
    fn field_mut(&mut self, snake: &str) -> Option<&mut f64> {
        let field = match snake {
            "hunt_range" => &mut self.hunt_range,
            "aggression_multiplier" => &mut self.aggression_multiplier,
            "energy_gain_from_prey" => &mut self.energy_gain_from_prey,
            "flee_range" => &mut self.flee_range,
            "flee_speed_multiplier" => &mut self.flee_speed_multiplier,
            "fear_sensitivity" => &mut self.fear_sensitivity,
            "predator_mating_range" => &mut self.predator_mating_range,
            "prey_mating_range" => &mut self.prey_mating_range,
            "wander_turn_chance" => &mut self.wander_turn_chance,
            "wander_speed_factor" => &mut self.wander_speed_factor,
            "friction" => &mut self.friction,
            "boundary_margin" => &mut self.boundary_margin,
            "eat_reach" => &mut self.eat_reach,
            _ => return None,
        };
        Some(field)
    }

    /// Merges string-keyed overrides.
    ///
    /// Keys may be camelCase or snake_case. Values are clamped into range.
    /// Unknown keys and non-finite values reject the whole batch, leaving
    /// `self` untouched.
    pub fn merge(&mut self, overrides: &HashMap<String, f64>) -> Result<()> {
        let mut merged = *self;
        for (key, &value) in overrides {
            let (snake, min, max) =
                lookup(key).ok_or_else(|| SimError::unknown_parameter(key.as_str()))?;
            if !value.is_finite() {
                return Err(SimError::invalid_value(key.as_str(), value));
            }
            let clamped = value.clamp(min, max);
            if clamped != value {
                tracing::warn!(key = %key, value, clamped, "AI parameter clamped");
            }
            if let Some(field) = merged.field_mut(snake) {
                *field = clamped;
            }
        }
        *self = merged;
        Ok(())
    }

    /// Returns a copy with every field forced into its documented range.
    /// Non-finite fields fall back to the default.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut out = *self;
        for &(_, snake, min, max) in PARAM_RANGES {
            let fallback = defaults.get(snake).unwrap_or(min);
            if let Some(field) = out.field_mut(snake) {
                let value = if field.is_finite() { *field } else { fallback };
                let clamped = value.clamp(min, max);
                if clamped != *field {
                    tracing::warn!(
                        key = snake,
                        value = *field,
                        clamped,
                        "Behavior parameter clamped"
                    );
                }
                *field = clamped;
            }
        }
        out
    }

    /// Reads a parameter by camelCase or snake_case key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        let (snake, ..) = lookup(key)?;
        let mut copy = *self;
        copy.field_mut(snake).map(|v| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_merge_camel_and_snake_keys() {
        let mut params = BehaviorParams::default();
        params
            .merge(&overrides(&[("huntRange", 20.0), ("flee_range", 12.0)]))
            .unwrap();
        assert_eq!(params.hunt_range, 20.0);
        assert_eq!(params.flee_range, 12.0);
        assert_eq!(params.energy_gain_from_prey, 0.7);
    }

    #[test]
    fn test_merge_clamps_out_of_range() {
        let mut params = BehaviorParams::default();
        params
            .merge(&overrides(&[("huntRange", 100.0), ("energyGainFromPrey", 0.0)]))
            .unwrap();
        assert_eq!(params.hunt_range, 30.0);
        assert_eq!(params.energy_gain_from_prey, 0.3);
    }

    #[test]
    fn test_merge_unknown_key_is_atomic() {
        let mut params = BehaviorParams::default();
        let result = params.merge(&overrides(&[("huntRange", 20.0), ("warpDrive", 1.0)]));
        assert!(matches!(result, Err(SimError::UnknownParameter(_))));
        assert_eq!(params, BehaviorParams::default());
    }

    #[test]
    fn test_merge_rejects_nan() {
        let mut params = BehaviorParams::default();
        let result = params.merge(&overrides(&[("fleeRange", f64::NAN)]));
        assert!(matches!(result, Err(SimError::InvalidValue { .. })));
    }

    #[test]
    fn test_sanitized_restores_defaults_for_non_finite() {
        let params = BehaviorParams {
            friction: f64::INFINITY,
            hunt_range: 1.0,
            ..Default::default()
        };
        let clean = params.sanitized();
        assert_eq!(clean.friction, 0.95);
        assert_eq!(clean.hunt_range, 5.0);
    }

    #[test]
    fn test_get_by_either_key() {
        let params = BehaviorParams::default();
        assert_eq!(params.get("preyMatingRange"), Some(3.0));
        assert_eq!(params.get("prey_mating_range"), Some(3.0));
        assert_eq!(params.get("nope"), None);
    }
}
