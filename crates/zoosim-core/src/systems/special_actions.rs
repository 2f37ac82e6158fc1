//! Special actions - occasional flavor behavior, no effect on vitals

use hecs::{Entity, World};
use rand::Rng;
use zoosim_logic::species::roll_special_action;

use crate::components::{AnimalId, Movement, Name, Species};
use crate::report::{DayReport, Subject};

/// Roll the daily special action for one animal.
///
/// Actions that involve moving also emit the movement signal, but only if
/// the animal actually has the capability.
pub fn special_action_system(
    world: &mut World,
    entity: Entity,
    rng: &mut impl Rng,
    report: &mut DayReport,
) {
    let Ok((id, name, species, movement)) =
        world.query_one_mut::<(&AnimalId, &Name, &Species, &Movement)>(entity)
    else {
        return;
    };

    let Some(action) = roll_special_action(species.category(), || rng.gen::<f64>()) else {
        return;
    };

    let subject = Subject::new(*id, name.as_str(), *species);
    if let Some(line) = action
        .locomotion
        .and_then(|l| l.describe(*movement, name.as_str()))
    {
        report.push(subject.locomotion(line));
    }
    report.push(subject.special_action(action));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Animal;
    use crate::report::EventKind;
    use rand::rngs::mock::StepRng;

    fn spawn(world: &mut World, species: Species, movement: Movement) -> Entity {
        world.spawn((
            Animal,
            AnimalId(9),
            Name::new("Paco the Parrot"),
            species,
            movement,
        ))
    }

    #[test]
    fn test_no_action_on_high_roll() {
        let mut world = World::new();
        let parrot = spawn(&mut world, Species::Parrot, Movement::ALL);
        let mut report = DayReport::new(1);
        special_action_system(&mut world, parrot, &mut StepRng::new(u64::MAX, 0), &mut report);
        assert!(report.events.is_empty());
    }

    #[test]
    fn test_action_on_low_roll() {
        let mut world = World::new();
        let parrot = spawn(&mut world, Species::Parrot, Movement::ALL);
        let mut report = DayReport::new(1);
        special_action_system(&mut world, parrot, &mut StepRng::new(0, 0), &mut report);
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].kind, EventKind::SpecialAction);
        assert!(report.events[0].detail.contains("performs a trick"));
    }

    #[test]
    fn test_movement_signal_requires_capability() {
        // First draw 0.0 triggers, second draw (~0.99) picks the last hybrid action: swim.
        let mut world = World::new();
        let swimmer = spawn(&mut world, Species::Parrot, Movement::ALL);
        let grounded = spawn(&mut world, Species::Parrot, Movement::TERRESTRIAL);

        let mut report = DayReport::new(1);
        special_action_system(&mut world, swimmer, &mut StepRng::new(0, u64::MAX - 1), &mut report);
        assert_eq!(report.events.len(), 2);
        assert_eq!(report.events[0].detail, "Paco the Parrot is swimming.");

        let mut report = DayReport::new(1);
        special_action_system(&mut world, grounded, &mut StepRng::new(0, u64::MAX - 1), &mut report);
        assert_eq!(report.events.len(), 1);
    }
}
