//! # Physics Scenarios
//!
//! Each scenario is a self-contained calculation: an input struct with
//! validation, a result struct, and a pure `calculate` function. Inputs and
//! results are fully serde-serializable so the crate can sit behind any JSON
//! transport without adaptation.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON) -> validate() -> calculate() -> Result (JSON)
//! ```
//!
//! Time-evolving scenarios sample their closed-form state functions on a
//! uniform grid (see [`crate::sampling`]) and report parallel arrays plus a
//! `states` matrix with one row per sample. Scenarios whose motion ends at a
//! physical boundary (ground impact, end of an incline) truncate the series
//! at the analytically exact crossing time.
//!
//! ## Modules
//!
//! - [`free_fall`] - Drop from rest, truncated at ground impact
//! - [`projectile`] - 2D launch, truncated at landing
//! - [`linear_motion`] - Uniform and uniformly accelerated motion
//! - [`circular_motion`] - Uniform circular motion
//! - [`harmonic_motion`] - Spring-mass simple harmonic motion
//! - [`pendulum`] - Small-angle pendulum
//! - [`newton_laws`] - Net force, acceleration, friction
//! - [`inclined_plane`] - Sliding down an incline with kinetic friction
//! - [`pulley_system`] - Incline-and-hanging-mass Atwood variant
//! - [`collisions`] - Elastic/inelastic collisions in 1D, 2D, and 3D
//! - [`energy`] - Work-energy, gravitational and elastic energy
//! - [`circuits`] - Ohm's law, equivalent resistance, Kirchhoff, storage
//! - [`magnetism`] - Fields, Lorentz force, flux, induction
//! - [`waves`] - Wave relation, Doppler, refraction, sound intensity

pub mod circuits;
pub mod circular_motion;
pub mod collisions;
pub mod energy;
pub mod free_fall;
pub mod harmonic_motion;
pub mod inclined_plane;
pub mod linear_motion;
pub mod magnetism;
pub mod newton_laws;
pub mod pendulum;
pub mod projectile;
pub mod pulley_system;
pub mod waves;

/// Default sample count for time-evolving scenarios.
pub(crate) fn default_points() -> usize {
    100
}
