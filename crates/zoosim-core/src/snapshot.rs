//! Read-only animal snapshots for display

use serde::{Deserialize, Serialize};

use crate::components::*;

/// Copy of one animal's state at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalSnapshot {
    pub id: AnimalId,
    pub name: String,
    pub age: u32,
    pub species: Species,
    pub category: Category,
    pub blood: BloodTemperature,
    pub movement: Movement,
    pub vitality: u8,
    pub health: HealthStatus,
    pub days_without_food: u32,
    pub hunger_threshold: u32,
    pub dead: bool,
    /// `None` for animals the caretaker does not manage
    pub care_probability: Option<f64>,
}

impl AnimalSnapshot {
    /// Build a snapshot from an entity, or `None` if it is not a complete animal
    pub fn capture(world: &hecs::World, entity: hecs::Entity) -> Option<Self> {
        let entity_ref = world.entity(entity).ok()?;
        let id = *entity_ref.get::<&AnimalId>()?;
        let name = entity_ref.get::<&Name>()?.as_str().to_string();
        let age = entity_ref.get::<&Age>().map(|a| a.0).unwrap_or(0);
        let species = *entity_ref.get::<&Species>()?;
        let movement = *entity_ref.get::<&Movement>()?;
        let vitals = *entity_ref.get::<&Vitals>()?;
        let care_probability = entity_ref
            .get::<&CareState>()
            .map(|c| c.success_probability());

        Some(Self {
            id,
            name,
            age,
            species,
            category: species.category(),
            blood: species.category().blood_temperature(),
            movement,
            vitality: vitals.vitality,
            health: vitals.health,
            days_without_food: vitals.days_without_food,
            hunger_threshold: vitals.hunger_threshold,
            dead: vitals.dead,
            care_probability,
        })
    }

    /// One-line status, e.g. "🦁 Simba the Lion: 95/100, healthy, 2 days without food"
    pub fn status_line(&self) -> String {
        let health = match self.health {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Sick => "sick",
        };
        format!(
            "{} {}: {}/100, {}, {} days without food",
            self.species.emoji(),
            self.name,
            self.vitality,
            health,
            self.days_without_food
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{spawn_animal, AnimalSpec};
    use hecs::World;

    #[test]
    fn test_capture_managed_animal() {
        let mut world = World::new();
        let entity = spawn_animal(
            &mut world,
            AnimalId(3),
            &AnimalSpec::new("Royal Eagle", 3, Species::Eagle),
        );
        let snap = AnimalSnapshot::capture(&world, entity).unwrap();
        assert_eq!(snap.id, AnimalId(3));
        assert_eq!(snap.age, 3);
        assert_eq!(snap.category, Category::Bird);
        assert_eq!(snap.blood, BloodTemperature::Warm);
        assert!(snap.movement.contains(Movement::AERIAL));
        assert_eq!(snap.vitality, 100);
        assert_eq!(snap.care_probability, Some(0.1));
        assert_eq!(
            snap.status_line(),
            "🦅 Royal Eagle: 100/100, healthy, 0 days without food"
        );
    }

    #[test]
    fn test_capture_unmanaged_and_incomplete() {
        let mut world = World::new();
        let frog = spawn_animal(
            &mut world,
            AnimalId(0),
            &AnimalSpec::new("Jumpy Frog", 1, Species::Frog).unmanaged(),
        );
        let snap = AnimalSnapshot::capture(&world, frog).unwrap();
        assert_eq!(snap.care_probability, None);
        assert_eq!(snap.blood, BloodTemperature::Cold);

        let stray = world.spawn((AnimalId(9),));
        assert!(AnimalSnapshot::capture(&world, stray).is_none());
    }
}
