//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems and in `zoosim-logic`.

mod animal;

pub use animal::*;
