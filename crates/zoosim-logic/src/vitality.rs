//! Vitality model: feeding, medication and damage as pure functions.
//!
//! Every mutation of `Vitals::vitality` in the workspace goes through
//! [`clamp_vitality`], so the value can never leave `0..=100`.

use serde::{Deserialize, Serialize};

use crate::constants::vitality::{FEED_GAIN, MAX, MEDICATE_GAIN};
use crate::health::HealthStatus;

/// Per-animal vital state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub vitality: u8,
    pub health: HealthStatus,
    pub days_without_food: u32,
    /// Species constant: days an animal tolerates without food before damage.
    pub hunger_threshold: u32,
    /// Monotonic. Once set, nothing in this crate mutates the struct again.
    pub dead: bool,
}

impl Vitals {
    /// Fresh, healthy, fed animal. `base_vitality` may exceed the cap and is clamped.
    pub fn new(base_vitality: u32, hunger_threshold: u32) -> Self {
        Self {
            vitality: clamp_vitality(i64::from(base_vitality)),
            health: HealthStatus::Healthy,
            days_without_food: 0,
            hunger_threshold,
            dead: false,
        }
    }

    pub fn is_sick(&self) -> bool {
        self.health == HealthStatus::Sick
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }
}

/// Clamp any intermediate vitality value into `0..=100`.
pub fn clamp_vitality(value: i64) -> u8 {
    value.clamp(0, i64::from(MAX)) as u8
}

/// Raise vitality by `amount`, returning the gain actually applied.
///
/// A value forced above the cap is clamped first and reports no gain.
fn restore(vitals: &mut Vitals, amount: u8) -> u8 {
    let before = clamp_vitality(i64::from(vitals.vitality));
    vitals.vitality = clamp_vitality(i64::from(before) + i64::from(amount));
    vitals.vitality.saturating_sub(before)
}

/// Feed the animal: hunger counter back to zero, +20 vitality (capped).
///
/// Returns the actual gain, which is smaller than 20 near the cap.
/// The health flag is left alone. Dead animals are not touched.
pub fn feed(vitals: &mut Vitals) -> u8 {
    if vitals.dead {
        return 0;
    }
    vitals.days_without_food = 0;
    restore(vitals, FEED_GAIN)
}

/// Medicate the animal: cures sickness, +30 vitality (capped).
///
/// Does not check whether the animal is sick; callers gate on that.
pub fn medicate(vitals: &mut Vitals) -> u8 {
    if vitals.dead {
        return 0;
    }
    vitals.health = HealthStatus::Healthy;
    restore(vitals, MEDICATE_GAIN)
}

/// Subtract `amount` from vitality, flooring at zero. Returns the new vitality.
pub fn apply_damage(vitals: &mut Vitals, amount: u32) -> u8 {
    if vitals.dead {
        return vitals.vitality;
    }
    vitals.vitality = clamp_vitality(i64::from(vitals.vitality) - i64::from(amount));
    vitals.vitality
}
