// src/application/clock.rs
use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// Source of "now" for note timestamps
pub trait Clock: Debug {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
