//! Clock and randomness seams for the countdown engine

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wall-clock source, injected so tests can drive tiers without real waits
pub trait Clock: Send + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Decides whether the waitlist gains a person on a given tick
pub trait WaitlistNudge: Send + 'static {
    fn nudge(&mut self) -> bool;
}

/// rand-backed nudge firing with a fixed per-tick probability
pub struct RandomNudge {
    probability: f64,
    rng: StdRng,
}

impl RandomNudge {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            rng: StdRng::from_entropy(),
        }
    }
}

impl WaitlistNudge for RandomNudge {
    fn nudge(&mut self) -> bool {
        self.rng.gen_bool(self.probability)
    }
}
