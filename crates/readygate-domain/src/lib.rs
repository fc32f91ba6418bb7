//! Pure readiness evaluation (no IO).
//!
//! Input: backend metadata materialized elsewhere.
//! Output: findings + readiness score + severity summary.

#![forbid(unsafe_code)]

pub mod score;

mod checks;
mod engine;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, Evaluation};
