//! Unique phone number generation by rejection sampling
//!
//! Candidates are drawn uniformly from the valid number space and kept only
//! if they have not been seen before. The valid space holds 5.76M numbers, so
//! for realistic table sizes almost every draw is accepted. A draw budget
//! turns the pathological case (asking for close to or more than the whole
//! space) into an error instead of an endless loop.

use crate::error::{Error, Result};
use crate::phone::{PhoneNumber, PHONE_SPACE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

/// Draws allowed per requested number, on top of [`BASE_ATTEMPTS`]
pub const ATTEMPTS_PER_NUMBER: u64 = 64;
/// Flat draw allowance for small requests
pub const BASE_ATTEMPTS: u64 = 1024;

/// Generates batches of pairwise-distinct phone numbers
#[derive(Debug)]
pub struct PhoneGenerator<R = StdRng> {
    rng: R,
    max_attempts: Option<u64>,
}

impl PhoneGenerator<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic generator, same seed gives the same batches
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PhoneGenerator<R> {
    /// Wrap an existing random source
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: None,
        }
    }

    /// Override the draw budget for every batch
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Draw budget used for a batch of `count` numbers
    pub fn attempt_budget(&self, count: usize) -> u64 {
        self.max_attempts.unwrap_or_else(|| {
            (count as u64)
                .saturating_mul(ATTEMPTS_PER_NUMBER)
                .saturating_add(BASE_ATTEMPTS)
        })
    }

    /// Produce exactly `count` distinct phone numbers.
    ///
    /// Numbers come back in the order they were first drawn.
    pub fn generate(&mut self, count: usize) -> Result<Vec<PhoneNumber>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        if count > PHONE_SPACE {
            return Err(Error::GenerationExhausted {
                requested: count,
                produced: 0,
                attempts: 0,
            });
        }

        let budget = self.attempt_budget(count);
        let mut seen = HashSet::with_capacity(count);
        let mut numbers = Vec::with_capacity(count);
        let mut attempts = 0u64;

        while numbers.len() < count {
            if attempts >= budget {
                return Err(Error::GenerationExhausted {
                    requested: count,
                    produced: numbers.len(),
                    attempts,
                });
            }
            attempts += 1;

            let candidate = PhoneNumber::random(&mut self.rng);
            if seen.insert(candidate) {
                numbers.push(candidate);
            }
        }

        debug!(
            count,
            attempts,
            collisions = attempts - count as u64,
            "generated unique phone numbers"
        );

        Ok(numbers)
    }
}

/// Generate `count` unique phone numbers as strings using an OS-seeded RNG
pub fn generate_unique_phone_numbers(count: usize) -> Result<Vec<String>> {
    let numbers = PhoneGenerator::from_entropy().generate(count)?;
    Ok(numbers.iter().map(PhoneNumber::to_string).collect())
}
