//! Simulation engine - the day scheduler and owner of the roster

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::*;
use crate::generation::{canonical_roster, spawn_animal, AnimalSpec};
use crate::pacing::DayPacer;
use crate::report::DayReport;
use crate::snapshot::AnimalSnapshot;
use crate::systems::*;

/// Main simulation engine
///
/// Owns the ECS world, the ordered roster of live animals, the day clock and
/// the random source. Constructed once, reset explicitly.
pub struct ZooEngine<R: Rng = StdRng> {
    /// ECS world containing all animal entities
    pub world: World,
    /// Live animals in insertion order
    roster: Vec<Entity>,
    /// Days simulated since the last reset
    days_simulated: u32,
    /// Set while a run is in flight; further `advance` calls are no-ops
    running: bool,
    /// Reports of every day since the last reset
    history: Vec<DayReport>,
    next_id: u32,
    rng: R,
}

impl ZooEngine<StdRng> {
    /// Canonical zoo with an entropy-seeded random source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Canonical zoo with a reproducible random source
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ZooEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ZooEngine<R> {
    /// Canonical zoo with an injected random source
    pub fn with_rng(rng: R) -> Self {
        let mut engine = Self::empty(rng);
        engine.populate(&canonical_roster());
        engine
    }

    /// No animals at all. Use `spawn` to build a custom roster.
    pub fn empty(rng: R) -> Self {
        Self {
            world: World::new(),
            roster: Vec::new(),
            days_simulated: 0,
            running: false,
            history: Vec::new(),
            next_id: 0,
            rng,
        }
    }

    /// Add an animal at the end of the roster
    pub fn spawn(&mut self, spec: &AnimalSpec) -> AnimalId {
        let id = AnimalId(self.next_id);
        self.next_id += 1;
        let entity = spawn_animal(&mut self.world, id, spec);
        self.roster.push(entity);
        id
    }

    fn populate(&mut self, specs: &[AnimalSpec]) {
        for spec in specs {
            self.spawn(spec);
        }
    }

    /// Back to day zero with the canonical roster and an empty history.
    pub fn reset(&mut self) {
        self.world.clear();
        self.roster.clear();
        self.history.clear();
        self.days_simulated = 0;
        self.next_id = 0;
        self.running = false;
        self.populate(&canonical_roster());
        log::info!("Zoo reset: {} animals back on day 0", self.roster.len());
    }

    /// Simulate up to `days` days without pausing between them.
    ///
    /// Stops early on extinction. Returns an empty list if a run is already
    /// in flight or `days` is zero.
    pub fn advance(&mut self, days: u32) -> Vec<DayReport> {
        let Some((first, last)) = self.begin_run(days) else {
            return Vec::new();
        };
        let mut run = ActiveRun::new(self);
        let mut reports = Vec::new();
        for day in first..=last {
            let report = run.simulate(day);
            let extinct = report.extinction_occurred;
            reports.push(report);
            if extinct {
                break;
            }
        }
        reports
    }

    /// Same as [`advance`](Self::advance), awaiting `pacer` between days.
    ///
    /// If the returned future is dropped mid-run, the days already simulated
    /// stay committed to the clock and history, and the engine accepts new runs.
    pub async fn advance_paced<P: DayPacer>(&mut self, days: u32, pacer: &mut P) -> Vec<DayReport> {
        let Some((first, last)) = self.begin_run(days) else {
            return Vec::new();
        };
        let mut run = ActiveRun::new(self);
        let mut reports = Vec::new();
        for day in first..=last {
            let report = run.simulate(day);
            let extinct = report.extinction_occurred;
            if !extinct && day < last {
                pacer.pause(&report).await;
            }
            reports.push(report);
            if extinct {
                break;
            }
        }
        reports
    }

    fn begin_run(&mut self, days: u32) -> Option<(u32, u32)> {
        if self.running {
            log::debug!("advance({}) ignored: a run is already in flight", days);
            return None;
        }
        if days == 0 {
            return None;
        }
        self.running = true;
        let first = self.days_simulated + 1;
        let last = self.days_simulated.saturating_add(days);
        Some((first, last))
    }

    /// Process every animal once, back to front, pruning the dead
    fn simulate_day(&mut self, day: u32) -> DayReport {
        log::debug!("--- Day {} ---", day);
        let mut report = DayReport::new(day);

        for index in (0..self.roster.len()).rev() {
            let entity = self.roster[index];

            if health_system(&mut self.world, entity, &mut self.rng, &mut report) {
                self.roster.remove(index);
                if let Err(e) = self.world.despawn(entity) {
                    log::debug!("despawn of {:?} skipped: {}", entity, e);
                }
                continue;
            }

            special_action_system(&mut self.world, entity, &mut self.rng, &mut report);
            care_system(&mut self.world, entity, &mut self.rng, &mut report);
        }

        if self.roster.is_empty() {
            report.extinction_occurred = true;
            log::info!("☠️ All the animals have died on day {}.", day);
        }
        report
    }

    /// Snapshots of the live roster, in roster order
    pub fn roster(&self) -> Vec<AnimalSnapshot> {
        self.roster
            .iter()
            .filter_map(|&entity| AnimalSnapshot::capture(&self.world, entity))
            .collect()
    }

    /// Entity handle for an animal still on the roster
    pub fn entity_of(&self, id: AnimalId) -> Option<Entity> {
        self.roster.iter().copied().find(|&entity| {
            self.world
                .get::<&AnimalId>(entity)
                .map(|found| *found == id)
                .unwrap_or(false)
        })
    }

    pub fn total_days_simulated(&self) -> u32 {
        self.days_simulated
    }

    pub fn alive_count(&self) -> usize {
        self.roster.len()
    }

    pub fn is_extinct(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Every day reported since the last reset
    pub fn history(&self) -> &[DayReport] {
        &self.history
    }
}

/// One in-flight run. Commits finished days and clears the running flag
/// when dropped, whether the run completed or its future was abandoned.
struct ActiveRun<'a, R: Rng> {
    engine: &'a mut ZooEngine<R>,
    days_done: u32,
    extinct: bool,
}

impl<'a, R: Rng> ActiveRun<'a, R> {
    fn new(engine: &'a mut ZooEngine<R>) -> Self {
        Self {
            engine,
            days_done: 0,
            extinct: false,
        }
    }

    fn simulate(&mut self, day: u32) -> DayReport {
        let report = self.engine.simulate_day(day);
        self.engine.history.push(report.clone());
        self.days_done += 1;
        self.extinct = report.extinction_occurred;
        report
    }
}

impl<R: Rng> Drop for ActiveRun<'_, R> {
    fn drop(&mut self) {
        // An extinct run leaves the clock where it was.
        if !self.extinct {
            self.engine.days_simulated += self.days_done;
        }
        self.engine.running = false;
    }
}
