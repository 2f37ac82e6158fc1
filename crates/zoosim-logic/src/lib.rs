//! Pure animal-welfare rules for ZooSim.
//!
//! This crate contains the per-animal rules that are independent of the ECS
//! engine and of any random source. Functions take plain data (and, where a
//! random draw is needed, a closure yielding a uniform value in `[0, 1)`),
//! which keeps them unit-testable with fixed draws.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`care`] | Caretaker reports, escalating feed/medicate success probability |
//! | [`constants`] | Gains, damage factors, probabilities, pacing |
//! | [`health`] | Daily health state machine: hunger, illness, death |
//! | [`species`] | Species catalog, categories, movement, special actions |
//! | [`vitality`] | `Vitals` and the clamped feed/medicate/damage operations |

pub mod care;
pub mod constants;
pub mod health;
pub mod species;
pub mod vitality;
