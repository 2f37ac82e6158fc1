//! Pure health, hunger and death logic.
//!
//! The daily health step runs once per animal per day, in a fixed order:
//! hunger damage, illness damage, death check, hunger progression, illness
//! onset. Damage and onset formulas are business rules and must stay exact.

use serde::{Deserialize, Serialize};

use crate::constants::chances::ILLNESS_ONSET_PER_EXCESS_DAY;
use crate::constants::damage::{HUNGER_PER_EXCESS_DAY, ILLNESS_BASE};
use crate::vitality::{apply_damage, Vitals};

/// Health flag of a living animal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    #[default]
    Healthy,
    Sick,
}

/// Something that happened during one animal's health step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthEvent {
    /// Hunger threshold reached; the species distress call is emitted.
    DistressCall,
    HungerDamage { amount: u32, vitality: u8 },
    IllnessDamage { amount: u32, vitality: u8 },
    Died,
    BecameSick { days_without_food: u32 },
}

/// Hunger damage for the given counter, or `None` below the threshold.
///
/// `(days - threshold + 1) * 5`: the threshold day itself already hurts.
pub fn hunger_damage(days_without_food: u32, hunger_threshold: u32) -> Option<u32> {
    if days_without_food < hunger_threshold {
        return None;
    }
    let excess_days = days_without_food - hunger_threshold + 1;
    Some(excess_days.saturating_mul(HUNGER_PER_EXCESS_DAY))
}

/// Illness damage grows with starvation: `10 + days_without_food`.
pub fn illness_damage(days_without_food: u32) -> u32 {
    ILLNESS_BASE.saturating_add(days_without_food)
}

/// Chance of falling sick after the hunger counter has been advanced.
pub fn illness_onset_probability(days_without_food: u32, hunger_threshold: u32) -> f64 {
    if days_without_food <= hunger_threshold {
        return 0.0;
    }
    let excess = f64::from(days_without_food - hunger_threshold);
    (excess * ILLNESS_ONSET_PER_EXCESS_DAY).min(1.0)
}

/// Hungry means the counter has reached the species threshold.
pub fn is_hungry(vitals: &Vitals) -> bool {
    vitals.days_without_food >= vitals.hunger_threshold
}

/// Check if an animal with this vitality should be considered dead.
pub fn is_dead(vitality: u8) -> bool {
    vitality == 0
}

/// Run one day of the health state machine.
///
/// `roll` yields a uniform draw in `[0, 1)` and is only called when the
/// animal is past its hunger threshold after the counter advances.
/// A dead animal produces no events and is left untouched.
pub fn daily_step(vitals: &mut Vitals, roll: impl FnOnce() -> f64) -> Vec<HealthEvent> {
    let mut events = Vec::new();
    if vitals.dead {
        return events;
    }

    if let Some(amount) = hunger_damage(vitals.days_without_food, vitals.hunger_threshold) {
        events.push(HealthEvent::DistressCall);
        let vitality = apply_damage(vitals, amount);
        events.push(HealthEvent::HungerDamage { amount, vitality });
    }

    if vitals.is_sick() {
        let amount = illness_damage(vitals.days_without_food);
        let vitality = apply_damage(vitals, amount);
        events.push(HealthEvent::IllnessDamage { amount, vitality });
    }

    if is_dead(vitals.vitality) {
        vitals.dead = true;
        events.push(HealthEvent::Died);
        return events;
    }

    vitals.days_without_food = vitals.days_without_food.saturating_add(1);

    let p = illness_onset_probability(vitals.days_without_food, vitals.hunger_threshold);
    if p > 0.0 && roll() < p {
        vitals.health = HealthStatus::Sick;
        events.push(HealthEvent::BecameSick {
            days_without_food: vitals.days_without_food,
        });
    }

    events
}
