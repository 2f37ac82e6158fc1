//! Roster generation - the canonical zoo and single-animal spawning

use hecs::{Entity, EntityBuilder, World};
use zoosim_logic::species::Species;

use crate::components::*;

/// Everything needed to spawn one animal. A species is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalSpec {
    pub name: String,
    pub age: u32,
    pub species: Species,
    /// Whether the caretaker looks after this animal
    pub managed: bool,
}

impl AnimalSpec {
    /// A caretaker-managed animal
    pub fn new(name: impl Into<String>, age: u32, species: Species) -> Self {
        Self {
            name: name.into(),
            age,
            species,
            managed: true,
        }
    }

    pub fn unmanaged(mut self) -> Self {
        self.managed = false;
        self
    }
}

/// The starting zoo: one animal per species, all caretaker-managed
pub fn canonical_roster() -> Vec<AnimalSpec> {
    vec![
        AnimalSpec::new("Simba the Lion", 5, Species::Lion),
        AnimalSpec::new("Zoe the Zebra", 4, Species::Zebra),
        AnimalSpec::new("Ellie the Elephant", 10, Species::Elephant),
        AnimalSpec::new("Royal Eagle", 3, Species::Eagle),
        AnimalSpec::new("Night Owl", 2, Species::Owl),
        AnimalSpec::new("Great White Shark", 8, Species::Shark),
        AnimalSpec::new("Beach Dolphin", 6, Species::Dolphin),
        AnimalSpec::new("Jumpy Frog", 1, Species::Frog),
        AnimalSpec::new("Fire Salamander", 2, Species::Salamander),
        AnimalSpec::new("Paco the Parrot", 3, Species::Parrot),
    ]
}

/// Spawn one animal with the catalog preset for its species
pub fn spawn_animal(world: &mut World, id: AnimalId, spec: &AnimalSpec) -> Entity {
    let preset = spec.species.preset();
    let mut builder = EntityBuilder::new();
    builder.add_bundle((
        Animal,
        id,
        Name::new(spec.name.clone()),
        Age(spec.age),
        spec.species,
        preset.movement,
        Vitals::new(preset.base_vitality, preset.hunger_threshold),
    ));
    if spec.managed {
        builder.add(CareState::new());
    }
    world.spawn(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_roster_covers_catalog() {
        let roster = canonical_roster();
        assert_eq!(roster.len(), 10);
        for species in Species::ALL {
            assert_eq!(roster.iter().filter(|s| s.species == species).count(), 1);
        }
        assert!(roster.iter().all(|s| s.managed));
    }

    #[test]
    fn test_spawn_applies_preset() {
        let mut world = World::new();
        let spec = AnimalSpec::new("Simba the Lion", 5, Species::Lion);
        let lion = spawn_animal(&mut world, AnimalId(0), &spec);

        let vitals = *world.get::<&Vitals>(lion).unwrap();
        assert_eq!(vitals.vitality, 100);
        assert_eq!(vitals.hunger_threshold, 4);
        assert_eq!(vitals.health, HealthStatus::Healthy);
        assert_eq!(*world.get::<&Movement>(lion).unwrap(), Movement::TERRESTRIAL);
        assert_eq!(world.get::<&Age>(lion).unwrap().0, 5);
        assert!(world.get::<&CareState>(lion).is_ok());
    }

    #[test]
    fn test_spawn_unmanaged() {
        let mut world = World::new();
        let spec = AnimalSpec::new("Wild Frog", 1, Species::Frog).unmanaged();
        let frog = spawn_animal(&mut world, AnimalId(3), &spec);
        assert!(world.get::<&CareState>(frog).is_err());
        assert_eq!(world.get::<&Vitals>(frog).unwrap().hunger_threshold, 2);
    }
}
