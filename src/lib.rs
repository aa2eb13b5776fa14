//! Evolves a population of random strings toward a target string with a
//! genetic algorithm: positional-match fitness, roulette or tournament
//! selection, crossover and per-character mutation.

pub mod config;
pub mod engines;
pub mod error;

pub use error::{GeorgeError, Result};
