//! ZooSim Core - Day-stepped Zoo Simulation Engine
//!
//! An ECS-based simulation of a small zoo. Every animal has vitality, hunger
//! and health state that evolves once per simulated day; a caretaker tries to
//! feed and medicate neglected animals with a chance that grows the longer
//! they are left alone.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: Animals
//! - **Components**: Pure data attached to entities (Vitals, Species, Movement, CareState, ...)
//! - **Systems**: Per-animal health, special-action and care steps
//! - **Engine**: `ZooEngine` walks the roster once per day and prunes the dead
//!
//! The rules themselves live in `zoosim-logic`; this crate wires them to
//! entities, the random source and the day clock.
//!
//! # Example
//!
//! ```rust,no_run
//! use zoosim_core::prelude::*;
//!
//! let mut engine = ZooEngine::new();
//!
//! for report in engine.advance(100) {
//!     for line in report.log_lines() {
//!         println!("{}", line);
//!     }
//!     if report.extinction_occurred {
//!         engine.reset();
//!     }
//! }
//! ```

pub mod components;
pub mod engine;
pub mod generation;
pub mod pacing;
pub mod report;
pub mod snapshot;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::ZooEngine;
    pub use crate::generation::AnimalSpec;
    pub use crate::pacing::{DayPacer, Immediate};
    pub use crate::report::{AnimalEvent, DayReport, EventKind};
    pub use crate::snapshot::AnimalSnapshot;
}
