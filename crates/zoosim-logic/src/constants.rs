//! Simulation constants: gains, damage factors, probabilities, pacing.
//!
//! These are the fixed business rules of the zoo. There is no runtime
//! configuration layer; both the engine and the simtest harness read them
//! from here.

pub mod vitality {
    /// Upper bound for vitality. Lower bound is zero.
    pub const MAX: u8 = 100;
    /// Vitality restored by a successful feeding.
    pub const FEED_GAIN: u8 = 20;
    /// Vitality restored by a successful medication.
    pub const MEDICATE_GAIN: u8 = 30;
}

pub mod damage {
    /// Hunger damage per day past the threshold (inclusive of the threshold day).
    pub const HUNGER_PER_EXCESS_DAY: u32 = 5;
    /// Flat illness damage, before adding days without food.
    pub const ILLNESS_BASE: u32 = 10;
}

pub mod chances {
    /// Illness onset probability added per day past the hunger threshold.
    pub const ILLNESS_ONSET_PER_EXCESS_DAY: f64 = 0.15;
    /// Daily chance that an animal performs a special action.
    pub const SPECIAL_ACTION: f64 = 0.02;
}

pub mod care {
    /// Care success probability right after spawn and after every success.
    pub const BASELINE: f64 = 0.1;
    /// Daily increase of the care success probability.
    pub const DAILY_INCREMENT: f64 = 0.1;
    pub const CEILING: f64 = 1.0;
}

pub mod schedule {
    /// Days simulated per batch by the harness (one "button press").
    pub const DEFAULT_BATCH_DAYS: u32 = 100;
    /// Pause between days when pacing is enabled, in milliseconds.
    pub const DAY_PAUSE_MS: u64 = 50;
}
