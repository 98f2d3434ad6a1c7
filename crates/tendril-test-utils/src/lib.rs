//! Shared test fixtures and utilities for the Tendril crates.
//!
//! Provides deterministic RNG setup and reproducible rod states so tests
//! across crates exercise the same deformation fields.

pub mod rng;
pub mod rod;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use rng::seeded_rng;
pub use rod::{downward_rod, perturbed_rod};
