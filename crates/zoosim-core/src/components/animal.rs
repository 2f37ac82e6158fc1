//! Animal components: identity, age, vitals, species tag, capabilities.
//!
//! The rule-bearing data types (`Vitals`, `CareState`, `Species`, `Movement`)
//! come from `zoosim-logic` and are attached to entities as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use zoosim_logic::care::CareState;
pub use zoosim_logic::health::HealthStatus;
pub use zoosim_logic::species::{BloodTemperature, Category, Movement, Species};
pub use zoosim_logic::vitality::Vitals;

/// Marker component identifying an entity as an animal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Animal;

/// Stable identifier, unique among animals spawned since the last reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(pub u32);

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display name, e.g. "Simba the Lion"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Age in years. Informational only; no rule reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_display() {
        let name = Name::new("Paco the Parrot");
        assert_eq!(name.as_str(), "Paco the Parrot");
        assert_eq!(name.to_string(), "Paco the Parrot");
    }

    #[test]
    fn test_animal_id_ordering() {
        assert!(AnimalId(1) < AnimalId(2));
        assert_eq!(AnimalId(7).to_string(), "#7");
    }
}
