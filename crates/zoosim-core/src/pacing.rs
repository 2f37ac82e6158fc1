//! Pacing - the await point between simulated days
//!
//! A host that wants to repaint or throttle between days supplies its own
//! `DayPacer`. Tests and batch runs use [`Immediate`].

use std::future::{self, Future};

use crate::report::DayReport;

/// Called after every day that is followed by another day in the same run.
pub trait DayPacer {
    fn pause(&mut self, finished: &DayReport) -> impl Future<Output = ()>;
}

/// Resolves instantly; no real delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl DayPacer for Immediate {
    fn pause(&mut self, _finished: &DayReport) -> impl Future<Output = ()> {
        future::ready(())
    }
}

/// Counts pauses without delaying. Handy for checking where the await points are.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingPacer {
    pub pauses: u32,
    pub last_day: u32,
}

impl DayPacer for CountingPacer {
    fn pause(&mut self, finished: &DayReport) -> impl Future<Output = ()> {
        self.pauses += 1;
        self.last_day = finished.day;
        future::ready(())
    }
}
