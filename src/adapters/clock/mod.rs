//! Clock adapters. Implement ClockPort.

use crate::ports::ClockPort;
use chrono::{Local, NaiveDateTime};

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. For tests and reproducible demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}
