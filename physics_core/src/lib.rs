//! # physics_core - Closed-Form Physics Calculation Engine
//!
//! `physics_core` computes classical mechanics, electricity, and wave
//! scenarios from closed-form equations with a clean, JSON-first API. All
//! inputs and outputs are serde-serializable, making it straightforward to
//! put behind an HTTP handler, a CLI, or an AI assistant protocol.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Closed-Form**: Analytic equations everywhere, no numeric stepping
//! - **Rich Errors**: Structured error types, not just strings
//!
//! Time-evolving scenarios share one computational shape: evaluate the
//! closed-form state function on a uniform grid, then truncate the series
//! at the exact analytic boundary crossing (see [`sampling`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use physics_core::scenarios::free_fall::{calculate, FreeFallInput};
//! use physics_core::constants::PhysicsConstants;
//!
//! let input = FreeFallInput {
//!     initial_height_m: 100.0,
//!     total_time_s: None,
//!     points: 100,
//!     constants: PhysicsConstants::default(),
//! };
//! let result = calculate(&input).unwrap();
//! println!("impact after {:.3} s", result.impact_time_s);
//!
//! // Or go through JSON end to end:
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`scenarios`] - All scenario calculation types (free fall, circuits, ...)
//! - [`equations`] - The underlying closed-form equations and the registry
//! - [`sampling`] - Uniform time grid and analytic boundary truncation
//! - [`constants`] - Injectable physical constants
//! - [`errors`] - Structured error types

pub mod constants;
pub mod equations;
pub mod errors;
pub mod sampling;
pub mod scenarios;

// Re-export commonly used types at crate root for convenience
pub use constants::PhysicsConstants;
pub use errors::{PhysicsError, PhysicsResult};
pub use sampling::TimedSample;
