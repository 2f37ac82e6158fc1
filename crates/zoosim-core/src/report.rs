//! Day reports - what happened to each animal on a simulated day
//!
//! Every event carries the animal id, a typed kind that callers can filter
//! on, and the human-readable log line (`detail`) that a log sink displays.

use serde::{Deserialize, Serialize};
use zoosim_logic::care::CareReport;
use zoosim_logic::health::HealthEvent;
use zoosim_logic::species::{SpecialAction, Species};

use crate::components::AnimalId;

/// Types of per-animal events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Fed { gain: u8 },
    Medicated { gain: u8 },
    DistressCall,
    HungerDamage { amount: u32 },
    IllnessDamage { amount: u32 },
    Death,
    BecameSick,
    SpecialAction,
    CareReport { hungry: bool, sick: bool },
    /// Feeding was attempted but the caretaker's roll failed
    FeedSkipped,
    /// Medication was attempted but the caretaker's roll failed
    MedicateSkipped,
}

/// One event for one animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalEvent {
    pub animal_id: AnimalId,
    pub kind: EventKind,
    /// Log line, e.g. "🍽️🦁 Simba the Lion ate and recovered 20 vitality..."
    pub detail: String,
}

/// Outcome of a single simulated day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub day: u32,
    /// Events in processing order (the roster is walked back to front)
    pub events: Vec<AnimalEvent>,
    /// The roster was empty once every animal had been processed
    pub extinction_occurred: bool,
}

impl DayReport {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            ..Default::default()
        }
    }

    pub fn push(&mut self, event: AnimalEvent) {
        log::debug!("{}", event.detail);
        self.events.push(event);
    }

    /// Ids of animals that died this day
    pub fn deaths(&self) -> Vec<AnimalId> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Death)
            .map(|e| e.animal_id)
            .collect()
    }

    /// Events for one animal
    pub fn events_for(&self, id: AnimalId) -> impl Iterator<Item = &AnimalEvent> {
        self.events.iter().filter(move |e| e.animal_id == id)
    }

    /// Count events matching a predicate on their kind
    pub fn count(&self, pred: impl Fn(&EventKind) -> bool) -> usize {
        self.events.iter().filter(|e| pred(&e.kind)).count()
    }

    pub fn header(&self) -> String {
        format!("--- Day {} ---", self.day)
    }

    /// Full human-readable log for the day, header first
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.events.len() + 2);
        lines.push(self.header());
        lines.extend(self.events.iter().map(|e| e.detail.clone()));
        if self.extinction_occurred {
            lines.push(EXTINCTION_MESSAGE.to_string());
        }
        lines
    }
}

pub const EXTINCTION_MESSAGE: &str = "☠️ All the animals have died. The simulation is over.";

/// Identity of the animal an event is about, used to render log lines
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub id: AnimalId,
    pub name: &'a str,
    pub species: Species,
}

impl<'a> Subject<'a> {
    pub fn new(id: AnimalId, name: &'a str, species: Species) -> Self {
        Self { id, name, species }
    }

    fn event(&self, kind: EventKind, detail: String) -> AnimalEvent {
        AnimalEvent {
            animal_id: self.id,
            kind,
            detail,
        }
    }

    fn emoji(&self) -> &'static str {
        self.species.emoji()
    }

    pub fn health(&self, event: &HealthEvent) -> AnimalEvent {
        let (e, n) = (self.emoji(), self.name);
        match *event {
            HealthEvent::DistressCall => {
                self.event(EventKind::DistressCall, self.species.distress_call(n))
            }
            HealthEvent::HungerDamage { amount, vitality } => self.event(
                EventKind::HungerDamage { amount },
                format!(
                    "🧡{} {} loses {} vitality to hunger. Current vitality: {}/100",
                    e, n, amount, vitality
                ),
            ),
            HealthEvent::IllnessDamage { amount, vitality } => self.event(
                EventKind::IllnessDamage { amount },
                format!(
                    "🤢{} {} loses {} vitality to illness. Current vitality: {}/100",
                    e, n, amount, vitality
                ),
            ),
            HealthEvent::Died => self.event(
                EventKind::Death,
                format!("💀{} {} has died and will be removed from the zoo.", e, n),
            ),
            HealthEvent::BecameSick { days_without_food } => self.event(
                EventKind::BecameSick,
                format!(
                    "🤒{} {} fell ill from hunger ({} days without food).",
                    e, n, days_without_food
                ),
            ),
        }
    }

    pub fn care_report(&self, report: CareReport, days_without_food: u32) -> AnimalEvent {
        let (e, n) = (self.emoji(), self.name);
        let hunger = if report.hungry {
            format!("⚠️{} {} is hungry (days without food: {}).", e, n, days_without_food)
        } else {
            format!("✅{} {} is not hungry (days without food: {}).", e, n, days_without_food)
        };
        let health = if report.sick {
            format!("❌{} {} is sick.", e, n)
        } else {
            format!("💚{} {} is healthy.", e, n)
        };
        self.event(
            EventKind::CareReport {
                hungry: report.hungry,
                sick: report.sick,
            },
            format!("{} {}", hunger, health),
        )
    }

    pub fn fed(&self, gain: u8, vitality: u8) -> AnimalEvent {
        self.event(
            EventKind::Fed { gain },
            format!(
                "🍽️{} {} ate and recovered {} vitality. Current vitality: {}/100",
                self.emoji(),
                self.name,
                gain,
                vitality
            ),
        )
    }

    pub fn medicated(&self, gain: u8, vitality: u8) -> AnimalEvent {
        self.event(
            EventKind::Medicated { gain },
            format!(
                "💉{} {} was medicated and recovered {} vitality. Current vitality: {}/100",
                self.emoji(),
                self.name,
                gain,
                vitality
            ),
        )
    }

    pub fn feed_skipped(&self) -> AnimalEvent {
        self.event(
            EventKind::FeedSkipped,
            format!("🕒{} {} was not fed today.", self.emoji(), self.name),
        )
    }

    pub fn medicate_skipped(&self) -> AnimalEvent {
        self.event(
            EventKind::MedicateSkipped,
            format!("🕒{} {} was not medicated today.", self.emoji(), self.name),
        )
    }

    pub fn special_action(&self, action: &SpecialAction) -> AnimalEvent {
        self.event(
            EventKind::SpecialAction,
            action.render(self.emoji(), self.name),
        )
    }

    /// Movement signal emitted by some special actions
    pub fn locomotion(&self, line: String) -> AnimalEvent {
        self.event(EventKind::SpecialAction, line)
    }
}
