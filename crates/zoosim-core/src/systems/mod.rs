//! Systems - logic that operates on components
//!
//! Each system handles one animal per call so the scheduler can walk the
//! roster in its own order and prune dead animals in place.

mod care;
mod health;
mod special_actions;

pub use care::*;
pub use health::*;
pub use special_actions::*;
