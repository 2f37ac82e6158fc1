//! Care system - the caretaker's daily round for one managed animal

use hecs::{Entity, World};
use rand::Rng;
use zoosim_logic::care::{self, CareOutcome};

use crate::components::{AnimalId, CareState, Name, Species, Vitals};
use crate::report::{DayReport, Subject};

/// Report on the animal, escalate attention, then try to feed and medicate.
///
/// Animals without a `CareState` are not managed and are skipped, as are
/// dead animals.
pub fn care_system(world: &mut World, entity: Entity, rng: &mut impl Rng, report: &mut DayReport) {
    let Ok((id, name, species, vitals, care_state)) = world
        .query_one_mut::<(&AnimalId, &Name, &Species, &mut Vitals, &mut CareState)>(entity)
    else {
        return;
    };
    if vitals.dead {
        return;
    }

    let subject = Subject::new(*id, name.as_str(), *species);

    let observed = care::report(vitals, care_state);
    report.push(subject.care_report(observed, vitals.days_without_food));

    match care::attempt_feed(vitals, care_state, || rng.gen::<f64>()) {
        CareOutcome::Succeeded { gain } => report.push(subject.fed(gain, vitals.vitality)),
        CareOutcome::Skipped => report.push(subject.feed_skipped()),
        CareOutcome::NotNeeded => {}
    }

    match care::attempt_medicate(vitals, care_state, || rng.gen::<f64>()) {
        CareOutcome::Succeeded { gain } => report.push(subject.medicated(gain, vitals.vitality)),
        CareOutcome::Skipped => report.push(subject.medicate_skipped()),
        CareOutcome::NotNeeded => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Animal, HealthStatus};
    use crate::report::EventKind;
    use rand::rngs::mock::StepRng;

    fn hungry_sick_owl() -> Vitals {
        let mut v = Vitals::new(40, 2);
        v.days_without_food = 3;
        v.health = HealthStatus::Sick;
        v
    }

    fn spawn(world: &mut World, vitals: Vitals, managed: bool) -> Entity {
        let entity = world.spawn((
            Animal,
            AnimalId(4),
            Name::new("Night Owl"),
            Species::Owl,
            vitals,
        ));
        if managed {
            world.insert_one(entity, CareState::new()).unwrap();
        }
        entity
    }

    #[test]
    fn test_successful_round() {
        let mut world = World::new();
        let owl = spawn(&mut world, hungry_sick_owl(), true);
        let mut report = DayReport::new(1);

        care_system(&mut world, owl, &mut StepRng::new(0, 0), &mut report);

        let kinds: Vec<_> = report.events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::CareReport {
                    hungry: true,
                    sick: true
                },
                EventKind::Fed { gain: 20 },
                EventKind::Medicated { gain: 30 },
            ]
        );
        let v = *world.get::<&Vitals>(owl).unwrap();
        assert_eq!(v.vitality, 90);
        assert_eq!(v.days_without_food, 0);
        assert!(!v.is_sick());
        let care_state = *world.get::<&CareState>(owl).unwrap();
        assert_eq!(care_state.success_probability(), 0.1);
    }

    #[test]
    fn test_failed_round() {
        let mut world = World::new();
        let owl = spawn(&mut world, hungry_sick_owl(), true);
        let mut report = DayReport::new(1);

        care_system(&mut world, owl, &mut StepRng::new(u64::MAX, 0), &mut report);

        assert_eq!(report.count(|k| *k == EventKind::FeedSkipped), 1);
        assert_eq!(report.count(|k| *k == EventKind::MedicateSkipped), 1);
        let care_state = *world.get::<&CareState>(owl).unwrap();
        assert!((care_state.success_probability() - 0.2).abs() < 1e-9);
        assert_eq!(world.get::<&Vitals>(owl).unwrap().vitality, 40);
    }

    #[test]
    fn test_unmanaged_animal_skipped() {
        let mut world = World::new();
        let owl = spawn(&mut world, hungry_sick_owl(), false);
        let mut report = DayReport::new(1);
        care_system(&mut world, owl, &mut StepRng::new(0, 0), &mut report);
        assert!(report.events.is_empty());
        assert_eq!(world.get::<&Vitals>(owl).unwrap().days_without_food, 3);
    }
}
