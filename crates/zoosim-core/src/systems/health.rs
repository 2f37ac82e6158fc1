//! Health system - runs the daily health state machine for one animal

use hecs::{Entity, World};
use rand::Rng;
use zoosim_logic::health::{self, HealthEvent};

use crate::components::{AnimalId, Name, Species, Vitals};
use crate::report::{DayReport, Subject};

/// Advance one animal's hunger, illness and death state by a day.
///
/// Returns `true` if the animal is dead afterwards. Entities without
/// `Vitals` are reported as dead so the scheduler drops them.
pub fn health_system(
    world: &mut World,
    entity: Entity,
    rng: &mut impl Rng,
    report: &mut DayReport,
) -> bool {
    let Ok((id, name, species, vitals)) =
        world.query_one_mut::<(&AnimalId, &Name, &Species, &mut Vitals)>(entity)
    else {
        return true;
    };

    let events = health::daily_step(vitals, || rng.gen::<f64>());

    let subject = Subject::new(*id, name.as_str(), *species);
    for event in &events {
        if *event == HealthEvent::Died {
            log::info!("{} ({}) has died", name, id);
        }
        report.push(subject.health(event));
    }

    vitals.dead
}
