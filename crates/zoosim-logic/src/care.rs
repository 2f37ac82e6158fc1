//! Caretaker policy: escalating chance to feed or medicate neglected animals.
//!
//! Each managed animal carries its own success probability. It rises by 0.1
//! every day the caretaker reports on the animal and drops back to the 0.1
//! baseline the moment a feeding or medication succeeds.

use serde::{Deserialize, Serialize};

use crate::constants::care::{BASELINE, CEILING, DAILY_INCREMENT};
use crate::health::is_hungry;
use crate::vitality::{feed, medicate, Vitals};

/// Caretaker bookkeeping for one animal. Absent on unmanaged animals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CareState {
    success_probability: f64,
}

impl Default for CareState {
    fn default() -> Self {
        Self::new()
    }
}

impl CareState {
    pub fn new() -> Self {
        Self {
            success_probability: BASELINE,
        }
    }

    /// Start at an arbitrary probability, clamped into `[0, 1]`.
    pub fn with_probability(p: f64) -> Self {
        Self {
            success_probability: p.clamp(0.0, CEILING),
        }
    }

    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    /// One more day of neglect.
    pub fn escalate(&mut self) {
        self.success_probability = (self.success_probability + DAILY_INCREMENT).min(CEILING);
    }

    pub fn reset(&mut self) {
        self.success_probability = BASELINE;
    }

    /// Whether a draw in `[0, 1)` passes the current gate.
    pub fn succeeds(&self, draw: f64) -> bool {
        draw < self.success_probability
    }
}

/// What the caretaker observed during the daily round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareReport {
    pub hungry: bool,
    pub sick: bool,
}

/// Result of a feed or medicate attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareOutcome {
    /// Precondition not met (not hungry / not sick, or dead). No draw taken.
    NotNeeded,
    /// Action performed; `gain` is the vitality actually restored.
    Succeeded { gain: u8 },
    /// Probability roll failed; nothing changed.
    Skipped,
}

/// Daily caretaker round: observe the animal, then escalate attention.
///
/// Runs once per day for every managed animal regardless of whether any
/// feeding or medication is attempted afterwards.
pub fn report(vitals: &Vitals, care: &mut CareState) -> CareReport {
    let report = CareReport {
        hungry: is_hungry(vitals),
        sick: vitals.is_sick(),
    };
    care.escalate();
    report
}

/// Try to feed a hungry animal.
pub fn attempt_feed(
    vitals: &mut Vitals,
    care: &mut CareState,
    roll: impl FnOnce() -> f64,
) -> CareOutcome {
    if vitals.dead || !is_hungry(vitals) {
        return CareOutcome::NotNeeded;
    }
    if !care.succeeds(roll()) {
        return CareOutcome::Skipped;
    }
    let gain = feed(vitals);
    care.reset();
    CareOutcome::Succeeded { gain }
}

/// Try to medicate a sick animal.
pub fn attempt_medicate(
    vitals: &mut Vitals,
    care: &mut CareState,
    roll: impl FnOnce() -> f64,
) -> CareOutcome {
    if vitals.dead || !vitals.is_sick() {
        return CareOutcome::NotNeeded;
    }
    if !care.succeeds(roll()) {
        return CareOutcome::Skipped;
    }
    let gain = medicate(vitals);
    care.reset();
    CareOutcome::Succeeded { gain }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthStatus;

    fn hungry_vitals() -> Vitals {
        let mut v = Vitals::new(50, 3);
        v.days_without_food = 3;
        v
    }

    #[test]
    fn test_escalation_caps_at_one() {
        let mut care = CareState::new();
        for _ in 0..25 {
            care.escalate();
            assert!(care.success_probability() <= 1.0);
        }
        assert_eq!(care.success_probability(), 1.0);
    }

    #[test]
    fn test_with_probability_clamps() {
        assert_eq!(CareState::with_probability(3.0).success_probability(), 1.0);
        assert_eq!(CareState::with_probability(-1.0).success_probability(), 0.0);
    }

    #[test]
    fn test_report_escalates_unconditionally() {
        let v = Vitals::new(100, 3);
        let mut care = CareState::new();
        let r = report(&v, &mut care);
        assert_eq!(
            r,
            CareReport {
                hungry: false,
                sick: false
            }
        );
        assert!((care.success_probability() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_report_flags() {
        let mut v = hungry_vitals();
        v.health = HealthStatus::Sick;
        let r = report(&v, &mut CareState::new());
        assert!(r.hungry);
        assert!(r.sick);
    }

    #[test]
    fn test_feed_success_resets_probability() {
        let mut v = hungry_vitals();
        let mut care = CareState::with_probability(0.7);
        let outcome = attempt_feed(&mut v, &mut care, || 0.5);
        assert_eq!(outcome, CareOutcome::Succeeded { gain: 20 });
        assert_eq!(care.success_probability(), 0.1);
        assert_eq!(v.days_without_food, 0);
        assert_eq!(v.vitality, 70);
    }

    #[test]
    fn test_feed_failure_changes_nothing() {
        let mut v = hungry_vitals();
        let mut care = CareState::with_probability(0.3);
        let before = v;
        let outcome = attempt_feed(&mut v, &mut care, || 0.3);
        assert_eq!(outcome, CareOutcome::Skipped);
        assert_eq!(v, before);
        assert_eq!(care.success_probability(), 0.3);
    }

    #[test]
    fn test_feed_not_needed_takes_no_draw() {
        let mut v = Vitals::new(100, 3);
        let mut care = CareState::new();
        let outcome = attempt_feed(&mut v, &mut care, || panic!("should not roll"));
        assert_eq!(outcome, CareOutcome::NotNeeded);
    }

    #[test]
    fn test_medicate_success() {
        let mut v = Vitals::new(20, 3);
        v.health = HealthStatus::Sick;
        let mut care = CareState::with_probability(1.0);
        let outcome = attempt_medicate(&mut v, &mut care, || 0.99);
        assert_eq!(outcome, CareOutcome::Succeeded { gain: 30 });
        assert!(!v.is_sick());
        assert_eq!(care.success_probability(), 0.1);
    }

    #[test]
    fn test_medicate_only_when_sick() {
        let mut v = Vitals::new(20, 3);
        let mut care = CareState::with_probability(1.0);
        assert_eq!(
            attempt_medicate(&mut v, &mut care, || 0.0),
            CareOutcome::NotNeeded
        );
        assert_eq!(v.vitality, 20);
    }

    #[test]
    fn test_dead_animal_not_cared_for() {
        let mut v = hungry_vitals();
        v.dead = true;
        v.health = HealthStatus::Sick;
        let mut care = CareState::with_probability(1.0);
        let before = v;
        assert_eq!(attempt_feed(&mut v, &mut care, || 0.0), CareOutcome::NotNeeded);
        assert_eq!(
            attempt_medicate(&mut v, &mut care, || 0.0),
            CareOutcome::NotNeeded
        );
        assert_eq!(v, before);
    }
}
