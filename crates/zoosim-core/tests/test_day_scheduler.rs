//! Integration tests for the day scheduler.
//!
//! Exercises: ZooEngine → health / special-action / care systems → DayReport
//!
//! Random draws are pinned with `StepRng` wherever an exact outcome is checked.

use std::future::Future;
use std::time::Duration;

use rand::rngs::mock::StepRng;
use zoosim_core::prelude::*;
use zoosim_core::report::EXTINCTION_MESSAGE;

// ── Helpers ────────────────────────────────────────────────────────────

fn lucky() -> StepRng {
    StepRng::new(0, 0)
}

fn unlucky() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn kinds_for(report: &DayReport, id: AnimalId) -> Vec<EventKind> {
    report.events_for(id).map(|e| e.kind).collect()
}

/// Never finishes a pause within a test's lifetime.
struct Stalled;

impl DayPacer for Stalled {
    fn pause(&mut self, _finished: &DayReport) -> impl Future<Output = ()> {
        tokio::time::sleep(Duration::from_secs(3600))
    }
}

// ── Scheduler tests ────────────────────────────────────────────────────

#[test]
fn lone_lion_starves_on_schedule() {
    let mut engine = ZooEngine::empty(unlucky());
    let lion = engine.spawn(&AnimalSpec::new("Simba the Lion", 5, Species::Lion).unmanaged());

    let reports = engine.advance(6);
    assert_eq!(reports.len(), 6);

    for report in &reports[..4] {
        assert!(kinds_for(report, lion).is_empty(), "day {}", report.day);
    }
    assert_eq!(
        kinds_for(&reports[4], lion),
        vec![EventKind::DistressCall, EventKind::HungerDamage { amount: 5 }]
    );
    assert_eq!(
        kinds_for(&reports[5], lion),
        vec![EventKind::DistressCall, EventKind::HungerDamage { amount: 10 }]
    );

    let snapshot = &engine.roster()[0];
    assert_eq!(snapshot.vitality, 85);
    assert_eq!(snapshot.days_without_food, 6);
    assert_eq!(snapshot.health, HealthStatus::Healthy);
    assert_eq!(snapshot.care_probability, None);
}

#[test]
fn vitality_stays_in_range_over_long_seeded_runs() {
    for seed in 0..5 {
        let mut engine = ZooEngine::seeded(seed);
        for _ in 0..30 {
            engine.advance(10);
            for animal in engine.roster() {
                assert!(animal.vitality <= 100);
                assert!(!animal.dead, "dead animal left on the roster");
                if animal.health == HealthStatus::Sick {
                    assert!(animal.vitality > 0);
                }
            }
            if engine.is_extinct() {
                break;
            }
        }
    }
}

#[test]
fn dead_animals_never_reappear() {
    let mut engine = ZooEngine::seeded(42);
    let mut buried = Vec::new();
    for report in engine.advance(300) {
        for id in &buried {
            assert_eq!(report.events_for(*id).count(), 0, "{} acted after death", id);
        }
        buried.extend(report.deaths());
    }
    for id in &buried {
        assert!(engine.entity_of(*id).is_none());
    }
}

#[test]
fn extinction_ends_the_run_and_needs_reset() {
    let mut engine = ZooEngine::empty(lucky());
    let reports = engine.advance(5);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].extinction_occurred);
    assert_eq!(reports[0].log_lines().last().map(String::as_str), Some(EXTINCTION_MESSAGE));
    assert_eq!(engine.total_days_simulated(), 0);

    // Still extinct: one more report, still stopped.
    let again = engine.advance(5);
    assert_eq!(again.len(), 1);
    assert!(again[0].extinction_occurred);

    engine.reset();
    assert_eq!(engine.alive_count(), 10);
    assert_eq!(engine.advance(5).len(), 5);
}

#[test]
fn reset_restores_the_canonical_zoo() {
    let mut engine = ZooEngine::seeded(3);
    let fresh = engine.roster();
    engine.advance(50);
    engine.reset();
    assert_eq!(engine.roster(), fresh);
    assert_eq!(engine.total_days_simulated(), 0);
    assert!(engine.history().is_empty());
}

#[test]
fn certain_care_keeps_the_whole_zoo_alive() {
    let mut engine = ZooEngine::with_rng(lucky());
    let reports = engine.advance(100);
    assert_eq!(reports.len(), 100);
    assert_eq!(reports.last().map(|r| r.day), Some(100));
    assert!(reports.iter().all(|r| r.deaths().is_empty()));
    assert_eq!(engine.alive_count(), 10);
}

#[test]
fn unmanaged_animals_get_no_care_events() {
    let mut engine = ZooEngine::empty(lucky());
    let frog = engine.spawn(&AnimalSpec::new("Jumpy Frog", 1, Species::Frog).unmanaged());
    for report in engine.advance(10) {
        for kind in kinds_for(&report, frog) {
            assert!(!matches!(
                kind,
                EventKind::CareReport { .. }
                    | EventKind::Fed { .. }
                    | EventKind::Medicated { .. }
                    | EventKind::FeedSkipped
                    | EventKind::MedicateSkipped
            ));
        }
    }
}

#[tokio::test]
async fn abandoned_paced_run_commits_finished_days() {
    let mut engine = ZooEngine::with_rng(lucky());
    let outcome =
        tokio::time::timeout(Duration::from_millis(20), engine.advance_paced(10, &mut Stalled))
            .await;
    assert!(outcome.is_err());

    // Day 1 finished before the stalled pause; it is on the clock and in history.
    assert!(!engine.is_running());
    assert_eq!(engine.total_days_simulated(), 1);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.history()[0].day, 1);

    let reports = engine.advance_paced(3, &mut Immediate).await;
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].day, 2);
    assert_eq!(engine.total_days_simulated(), 4);
    assert_eq!(engine.history().len(), 4);
}
