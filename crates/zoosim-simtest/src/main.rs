//! ZooSim Headless Simulation Harness
//!
//! Runs the canonical zoo day by day and prints the welfare log, or
//! validates the simulation rules with fixed random draws.
//! Runs entirely in-process: no rendering, no persistence.
//!
//! Usage:
//!   cargo run -p zoosim-simtest
//!   cargo run -p zoosim-simtest -- --days 30 --seed 7 --paced
//!   cargo run -p zoosim-simtest -- --species lion --runs 3
//!   cargo run -p zoosim-simtest -- --json
//!   cargo run -p zoosim-simtest -- --check --verbose

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::mock::StepRng;
use serde::Serialize;
use zoosim_core::prelude::*;
use zoosim_core::report::EXTINCTION_MESSAGE;
use zoosim_logic::care::{self, CareOutcome};
use zoosim_logic::constants::schedule::{DAY_PAUSE_MS, DEFAULT_BATCH_DAYS};
use zoosim_logic::health::{self, HealthEvent};
use zoosim_logic::species::{CatalogError, CATALOG};

const USAGE: &str = "\
usage: zoosim-simtest [--days N] [--seed N] [--runs N] [--species NAME]
                      [--paced] [--json] [--verbose] [--check]";

const RESTART_HINT: &str = "🔁 Start another run to restart the zoo from day 1.";

// ── Arguments ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct Args {
    days: u32,
    seed: Option<u64>,
    runs: u32,
    species: Option<Species>,
    paced: bool,
    json: bool,
    verbose: bool,
    check: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            days: DEFAULT_BATCH_DAYS,
            seed: None,
            runs: 1,
            species: None,
            paced: false,
            json: false,
            verbose: false,
            check: false,
        }
    }
}

#[derive(Debug)]
enum ArgError {
    MissingValue(String),
    InvalidNumber { flag: String, value: String },
    UnknownFlag(String),
    Species(CatalogError),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::MissingValue(flag) => write!(f, "{} expects a value", flag),
            ArgError::InvalidNumber { flag, value } => {
                write!(f, "{} expects a non-negative number, got '{}'", flag, value)
            }
            ArgError::UnknownFlag(flag) => write!(f, "unknown argument '{}'", flag),
            ArgError::Species(e) => write!(f, "--species: {}", e),
        }
    }
}

impl std::error::Error for ArgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgError::Species(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for ArgError {
    fn from(e: CatalogError) -> Self {
        ArgError::Species(e)
    }
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ArgError> {
        let mut parsed = Args::default();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--days" => parsed.days = number(&arg, iter.next())?,
                "--seed" => parsed.seed = Some(number(&arg, iter.next())?),
                "--runs" => parsed.runs = number(&arg, iter.next())?,
                "--species" => {
                    let name = iter.next().ok_or_else(|| ArgError::MissingValue(arg.clone()))?;
                    parsed.species = Some(name.parse()?);
                }
                "--paced" => parsed.paced = true,
                "--json" => parsed.json = true,
                "--verbose" => parsed.verbose = true,
                "--check" => parsed.check = true,
                other => return Err(ArgError::UnknownFlag(other.to_string())),
            }
        }
        Ok(parsed)
    }
}

fn number<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, ArgError> {
    let value = value.ok_or_else(|| ArgError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ArgError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

// ── Log sink ────────────────────────────────────────────────────────────

/// Prints day reports, optionally only the lines about one species.
struct Printer {
    species: Option<Species>,
    /// Species of every animal alive when the run started
    known: HashMap<AnimalId, Species>,
    quiet: bool,
}

impl Printer {
    fn new(args: &Args) -> Self {
        Self {
            species: args.species,
            known: HashMap::new(),
            quiet: args.json,
        }
    }

    fn learn_roster(&mut self, roster: &[AnimalSnapshot]) {
        self.known = roster.iter().map(|a| (a.id, a.species)).collect();
    }

    fn wants(&self, event: &AnimalEvent) -> bool {
        match self.species {
            Some(species) => self.known.get(&event.animal_id) == Some(&species),
            None => true,
        }
    }

    fn say(&self, line: &str) {
        if !self.quiet {
            println!("{}", line);
        }
    }

    fn print_day(&self, report: &DayReport) {
        if self.quiet {
            return;
        }
        println!("{}", report.header());
        for event in report.events.iter().filter(|e| self.wants(e)) {
            println!("{}", event.detail);
        }
        if report.extinction_occurred {
            println!("{}", EXTINCTION_MESSAGE);
            println!("{}", RESTART_HINT);
        }
    }
}

/// Prints each finished day, then sleeps before the next one.
struct SleepPacer<'a> {
    printer: &'a Printer,
    delay: Duration,
    last_printed: u32,
}

impl DayPacer for SleepPacer<'_> {
    fn pause(&mut self, finished: &DayReport) -> impl Future<Output = ()> {
        self.printer.print_day(finished);
        self.last_printed = finished.day;
        tokio::time::sleep(self.delay)
    }
}

// ── Batch runs ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RunSummary {
    run: u32,
    first_day: u32,
    last_day: u32,
    deaths: Vec<AnimalId>,
    feedings: usize,
    medications: usize,
    special_actions: usize,
    extinct: bool,
    survivors: usize,
}

#[derive(Debug, Serialize)]
struct HarnessOutput {
    seed: Option<u64>,
    days_per_run: u32,
    runs: Vec<RunSummary>,
    roster: Vec<AnimalSnapshot>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    // The validation suite runs thousands of days; keep its engine logs quiet.
    let level = match (args.check, args.verbose) {
        (true, _) => "warn",
        (false, true) => "debug",
        (false, false) => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if args.check {
        run_checks(args.verbose);
        return Ok(());
    }

    let mut engine = match args.seed {
        Some(seed) => ZooEngine::seeded(seed),
        None => ZooEngine::new(),
    };
    let mut printer = Printer::new(&args);
    let mut summaries = Vec::new();

    if !args.json {
        println!("=== ZooSim ===\n");
    }

    for run in 1..=args.runs {
        if engine.is_extinct() {
            engine.reset();
            printer.say("🔄 Simulation restarted from day 1.");
        }
        printer.learn_roster(&engine.roster());

        let first_day = engine.total_days_simulated() + 1;
        let planned_last = engine.total_days_simulated().saturating_add(args.days);
        printer.say(&format!(
            "📅 Simulating days {} to {}...",
            first_day, planned_last
        ));

        let reports = if args.paced {
            let mut pacer = SleepPacer {
                printer: &printer,
                delay: Duration::from_millis(DAY_PAUSE_MS),
                last_printed: 0,
            };
            let reports = engine.advance_paced(args.days, &mut pacer).await;
            let printed = pacer.last_printed;
            for report in reports.iter().filter(|r| r.day > printed) {
                printer.print_day(report);
            }
            reports
        } else {
            let reports = engine.advance(args.days);
            for report in &reports {
                printer.print_day(report);
            }
            reports
        };

        let summary = summarize(run, first_day, &reports, engine.alive_count());
        log::info!(
            "Run {} finished on day {} with {} survivors",
            run,
            summary.last_day,
            summary.survivors
        );
        summaries.push(summary);
        printer.say("");
    }

    let roster = engine.roster();
    if args.json {
        let output = HarnessOutput {
            seed: args.seed,
            days_per_run: args.days,
            runs: summaries,
            roster,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("--- Roster after day {} ---", engine.total_days_simulated());
    for animal in &roster {
        println!("  {}", animal.status_line());
    }
    for s in &summaries {
        println!(
            "  run {}: days {}-{}, {} deaths, {} feedings, {} medications, {} survivors{}",
            s.run,
            s.first_day,
            s.last_day,
            s.deaths.len(),
            s.feedings,
            s.medications,
            s.survivors,
            if s.extinct { " (extinct)" } else { "" }
        );
    }

    Ok(())
}

fn summarize(run: u32, first_day: u32, reports: &[DayReport], survivors: usize) -> RunSummary {
    let count = |pred: fn(&EventKind) -> bool| -> usize {
        reports.iter().map(|r| r.count(pred)).sum()
    };
    RunSummary {
        run,
        first_day,
        last_day: reports.last().map(|r| r.day).unwrap_or(first_day),
        deaths: reports.iter().flat_map(|r| r.deaths()).collect(),
        feedings: count(|k| matches!(k, EventKind::Fed { .. })),
        medications: count(|k| matches!(k, EventKind::Medicated { .. })),
        special_actions: count(|k| *k == EventKind::SpecialAction),
        extinct: reports.last().is_some_and(|r| r.extinction_occurred),
        survivors,
    }
}

// ── Validation suite ────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn run_checks(verbose: bool) {
    println!("=== ZooSim Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Species catalog
    results.extend(validate_catalog(verbose));

    // 2. Hunger and illness rules
    results.extend(validate_health_rules(verbose));

    // 3. Caretaker policy
    results.extend(validate_care_policy(verbose));

    // 4. Day scheduler
    results.extend(validate_engine(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

/// Every draw 0.0: care always succeeds, illness always strikes when possible.
fn lucky() -> StepRng {
    StepRng::new(0, 0)
}

// ── 1. Species Catalog ──────────────────────────────────────────────────

fn validate_catalog(verbose: bool) -> Vec<TestResult> {
    println!("--- Species Catalog ---");
    let mut results = Vec::new();

    let indexed = Species::ALL.iter().all(|s| s.preset().species == *s);
    results.push(TestResult {
        name: "catalog_indexed_by_species".into(),
        passed: CATALOG.len() == Species::ALL.len() && indexed,
        detail: format!("{} presets", CATALOG.len()),
    });

    let bad_threshold: Vec<_> = CATALOG.iter().filter(|p| p.hunger_threshold == 0).collect();
    results.push(TestResult {
        name: "catalog_positive_thresholds".into(),
        passed: bad_threshold.is_empty(),
        detail: format!("{} presets with zero threshold", bad_threshold.len()),
    });

    let start_ok = CATALOG.iter().all(|p| {
        let v = Vitals::new(p.base_vitality, p.hunger_threshold);
        v.vitality > 0 && v.vitality <= 100
    });
    results.push(TestResult {
        name: "catalog_start_vitality_in_range".into(),
        passed: start_ok,
        detail: "base vitality clamped into 1..=100".into(),
    });

    let hybrid_actions = Category::Hybrid.special_actions().len();
    let all_have_actions = CATALOG
        .iter()
        .all(|p| !p.category.special_actions().is_empty());
    results.push(TestResult {
        name: "catalog_action_tables".into(),
        passed: all_have_actions && hybrid_actions == 8,
        detail: format!("hybrid repertoire has {} actions", hybrid_actions),
    });

    let round_trip = CATALOG
        .iter()
        .all(|p| p.name.parse::<Species>().ok() == Some(p.species));
    let rejects_unknown = "unicorn".parse::<Species>().is_err();
    results.push(TestResult {
        name: "catalog_name_lookup".into(),
        passed: round_trip && rejects_unknown,
        detail: "every preset name resolves, unknown names rejected".into(),
    });

    if verbose {
        for p in CATALOG.iter() {
            println!(
                "    {} {:10} vitality={:3} threshold={} moves={:?}",
                p.emoji,
                p.name,
                p.base_vitality,
                p.hunger_threshold,
                p.movement.names()
            );
        }
    }

    results
}

// ── 2. Health Rules ─────────────────────────────────────────────────────

fn validate_health_rules(_verbose: bool) -> Vec<TestResult> {
    println!("--- Health Rules ---");
    let mut results = Vec::new();

    // Lion, threshold 4, never fed and never sick
    let lion = Species::Lion.preset();
    let mut vitals = Vitals::new(lion.base_vitality, lion.hunger_threshold);
    let mut damage_by_day = Vec::new();
    for _ in 0..6 {
        let day_damage: u32 = health::daily_step(&mut vitals, || 0.999)
            .iter()
            .map(|e| match e {
                HealthEvent::HungerDamage { amount, .. } => *amount,
                _ => 0,
            })
            .sum();
        damage_by_day.push(day_damage);
    }
    results.push(TestResult {
        name: "health_lion_hunger_schedule".into(),
        passed: damage_by_day == [0, 0, 0, 0, 5, 10],
        detail: format!("daily hunger damage {:?}", damage_by_day),
    });

    let mut frail = Vitals::new(5, 3);
    frail.health = HealthStatus::Sick;
    let events = health::daily_step(&mut frail, || 0.999);
    results.push(TestResult {
        name: "health_sick_animal_dies".into(),
        passed: frail.dead && frail.vitality == 0 && events.last() == Some(&HealthEvent::Died),
        detail: format!("{} events, vitality {}", events.len(), frail.vitality),
    });

    let at = health::illness_onset_probability(4, 4);
    let past = health::illness_onset_probability(6, 4);
    results.push(TestResult {
        name: "health_illness_onset_curve".into(),
        passed: at == 0.0 && (past - 0.3).abs() < 1e-9,
        detail: format!("p(threshold)={:.2} p(threshold+2)={:.2}", at, past),
    });

    results
}

// ── 3. Care Policy ──────────────────────────────────────────────────────

fn validate_care_policy(_verbose: bool) -> Vec<TestResult> {
    println!("--- Care Policy ---");
    let mut results = Vec::new();

    let mut state = CareState::new();
    let mut max_seen: f64 = 0.0;
    for _ in 0..25 {
        state.escalate();
        max_seen = max_seen.max(state.success_probability());
    }
    results.push(TestResult {
        name: "care_probability_ceiling".into(),
        passed: max_seen <= 1.0 && state.success_probability() == 1.0,
        detail: format!("max probability {:.2}", max_seen),
    });

    let mut vitals = Vitals::new(95, 3);
    vitals.days_without_food = 5;
    let mut state = CareState::with_probability(0.7);
    let outcome = care::attempt_feed(&mut vitals, &mut state, || 0.5);
    results.push(TestResult {
        name: "care_feed_clamps_and_resets".into(),
        passed: outcome == CareOutcome::Succeeded { gain: 5 }
            && vitals.vitality == 100
            && vitals.days_without_food == 0
            && state.success_probability() == 0.1,
        detail: format!("{:?}, vitality {}", outcome, vitals.vitality),
    });

    let mut vitals = Vitals::new(50, 3);
    vitals.days_without_food = 5;
    let before = vitals;
    let mut state = CareState::with_probability(0.2);
    let outcome = care::attempt_feed(&mut vitals, &mut state, || 0.9);
    results.push(TestResult {
        name: "care_failed_roll_changes_nothing".into(),
        passed: outcome == CareOutcome::Skipped && vitals == before,
        detail: format!("{:?}", outcome),
    });

    results
}

// ── 4. Day Scheduler ────────────────────────────────────────────────────

fn validate_engine(verbose: bool) -> Vec<TestResult> {
    println!("--- Day Scheduler ---");
    let mut results = Vec::new();

    let mut engine = ZooEngine::with_rng(lucky());
    let reports = engine.advance(100);
    let deaths: usize = reports.iter().map(|r| r.deaths().len()).sum();
    results.push(TestResult {
        name: "engine_certain_care_no_deaths".into(),
        passed: reports.len() == 100 && deaths == 0 && engine.alive_count() == 10,
        detail: format!("{} days, {} deaths", reports.len(), deaths),
    });

    let mut empty = ZooEngine::empty(lucky());
    let reports = empty.advance(10);
    results.push(TestResult {
        name: "engine_extinction_stops_early".into(),
        passed: reports.len() == 1
            && reports[0].extinction_occurred
            && empty.total_days_simulated() == 0,
        detail: format!("{} report(s) for a 10-day request", reports.len()),
    });

    let mut engine = ZooEngine::seeded(1);
    engine.advance(60);
    engine.reset();
    let first = engine.roster();
    engine.reset();
    results.push(TestResult {
        name: "engine_reset_idempotent".into(),
        passed: first == engine.roster() && engine.total_days_simulated() == 0,
        detail: format!("{} animals after reset", first.len()),
    });

    let mut a = ZooEngine::seeded(11);
    let mut b = ZooEngine::seeded(11);
    results.push(TestResult {
        name: "engine_seeded_reproducible".into(),
        passed: a.advance(200) == b.advance(200),
        detail: "same seed, same 200 days".into(),
    });

    let mut in_range = true;
    let mut resurrected = 0;
    let mut total_deaths = 0;
    for seed in 0..10 {
        let mut engine = ZooEngine::seeded(seed);
        let mut buried = Vec::new();
        for report in engine.advance(365) {
            resurrected += buried
                .iter()
                .filter(|id| report.events_for(**id).next().is_some())
                .count();
            buried.extend(report.deaths());
        }
        in_range &= engine.roster().iter().all(|a| a.vitality <= 100 && !a.dead);
        total_deaths += buried.len();
        if verbose {
            println!(
                "    seed {:2}: {} deaths, {} alive after day {}",
                seed,
                buried.len(),
                engine.alive_count(),
                engine.history().last().map(|r| r.day).unwrap_or(0)
            );
        }
    }
    results.push(TestResult {
        name: "engine_seeded_invariants".into(),
        passed: in_range && resurrected == 0,
        detail: format!(
            "10 seeds x 365 days, {} deaths, {} events after death",
            total_deaths, resurrected
        ),
    });

    results
}
