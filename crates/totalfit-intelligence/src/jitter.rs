// ABOUTME: Injectable randomness for the injury-risk perturbation
// ABOUTME: Thread-local RNG in production, seeded ChaCha for reproducible runs, fixed values in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::{Mutex, PoisonError};

/// Source of the uniform perturbation added to the injury risk score
pub trait JitterSource: Send + Sync {
    /// Draw a value from the closed interval `[low, high]`
    fn uniform(&self, low: f64, high: f64) -> f64;
}

/// Draws from the calling thread's RNG; no shared state
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Deterministic sequence from a fixed seed
///
/// Requests share one generator, so the sequence is only reproducible when
/// requests are replayed in the same order.
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededJitter {
    /// Create a generator from `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(low..=high)
    }
}

/// Always returns the same value, clamped into the requested interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        self.0.clamp(low, high)
    }
}
