//! Pacing policies for the emission stream

use crate::traits::Pacer;
use std::thread;
use std::time::Duration;

/// Sleep the current thread for a fixed interval after each emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPacer {
    interval: Duration,
}

impl SleepPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

/// Never pause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPace;

impl Pacer for NoPace {
    #[inline]
    fn pause(&mut self) {}
}
