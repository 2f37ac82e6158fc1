//! Generation - building animals from the species catalog

mod roster;

pub use roster::*;
