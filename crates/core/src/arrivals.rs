//! Simulated case arrivals and saved-life events.
//!
//! The dashboard's ambient timers become an explicit simulator over an
//! injected random source. Embedders drive it with a real entropy source;
//! tests seed it and get the same event sequence every run.

use rand::Rng;

use crate::{TriageError, TriageResult};

/// Outcome of one simulator tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Index into the caller's draft pool for a newly arriving case, if any.
    pub admission: Option<usize>,
    /// Whether this tick records a saved life.
    pub life_saved: bool,
}

/// Bernoulli event source for the demo feed.
#[derive(Debug)]
pub struct ArrivalSimulator<R: Rng> {
    rng: R,
    arrival_chance: f64,
    life_saved_chance: f64,
}

impl<R: Rng> ArrivalSimulator<R> {
    /// Creates a simulator over the given random source.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if either probability lies
    /// outside 0.0..=1.0.
    pub fn new(rng: R, arrival_chance: f64, life_saved_chance: f64) -> TriageResult<Self> {
        for (name, chance) in [
            ("arrival_chance", arrival_chance),
            ("life_saved_chance", life_saved_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(TriageError::InvalidInput(format!(
                    "{name} must be within 0.0..=1.0, got {chance}"
                )));
            }
        }

        Ok(Self {
            rng,
            arrival_chance,
            life_saved_chance,
        })
    }

    /// Samples one tick.
    ///
    /// `pool_len` is the size of the caller's draft pool; an empty pool
    /// yields no admissions regardless of the arrival chance.
    pub fn tick(&mut self, pool_len: usize) -> TickOutcome {
        let admission = if pool_len > 0 && self.rng.gen_bool(self.arrival_chance) {
            Some(self.rng.gen_range(0..pool_len))
        } else {
            None
        };

        TickOutcome {
            admission,
            life_saved: self.rng.gen_bool(self.life_saved_chance),
        }
    }
}
