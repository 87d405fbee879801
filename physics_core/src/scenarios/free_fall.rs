//! # Free Fall Scenario
//!
//! Drop from rest at height `h0`, sampled until ground impact.
//!
//! ## Assumptions
//!
//! - Released from rest (v0 = 0), no air resistance
//! - Vertical axis positive upward; velocity is negative while falling
//! - The series is truncated at the analytic impact time, and its final
//!   sample sits exactly on the ground
//!
//! ## Example
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
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.impact_time_s - 4.5160).abs() < 1e-3);
//! assert_eq!(result.heights_m.last(), Some(&0.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::kinematics;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};
use crate::sampling::{sample_series, truncate_at_crossing};

/// Input parameters for a free-fall drop.
///
/// ## JSON Example
///
/// ```json
/// {
///   "initial_height_m": 100.0,
///   "points": 100
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeFallInput {
    /// Release height above the ground (m). A non-positive height means the
    /// body is already on the ground and the result carries an empty series.
    pub initial_height_m: f64,

    /// Sampling window (s). Defaults to the impact time, so by default the
    /// series covers the whole fall and nothing after it.
    #[serde(default)]
    pub total_time_s: Option<f64>,

    /// Number of grid samples
    #[serde(default = "crate::scenarios::default_points")]
    pub points: usize,

    /// Physical constants (defaults to standard Earth values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

impl FreeFallInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        self.constants.validate()?;
        if let Some(t) = self.total_time_s {
            if t < 0.0 {
                return Err(PhysicsError::invalid_input(
                    "total_time_s",
                    t.to_string(),
                    "Sampling window must be non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Results of a free-fall calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeFallResult {
    /// Analytic time of ground impact (s)
    pub impact_time_s: f64,

    /// Speed at impact (m/s, magnitude)
    pub impact_speed_ms: f64,

    /// Sample times (s)
    pub times_s: Vec<f64>,

    /// Height above the ground at each sample (m)
    pub heights_m: Vec<f64>,

    /// Signed velocity at each sample (m/s, negative while falling)
    pub velocities_ms: Vec<f64>,

    /// State matrix, one `[height, velocity]` row per sample
    pub states: Vec<[f64; 2]>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a free-fall trajectory.
pub fn calculate(input: &FreeFallInput) -> PhysicsResult<FreeFallResult> {
    input.validate()?;

    let g = input.constants.gravity;
    let h0 = input.initial_height_m;

    // Already on (or below) the ground: nothing falls, nothing is sampled.
    if h0 <= 0.0 {
        return Ok(FreeFallResult {
            impact_time_s: 0.0,
            impact_speed_ms: 0.0,
            times_s: Vec::new(),
            heights_m: Vec::new(),
            velocities_ms: Vec::new(),
            states: Vec::new(),
            formulas: formulas(&[
                Equation::FreeFallHeight,
                Equation::FreeFallVelocity,
                Equation::FreeFallImpactTime,
            ]),
        });
    }

    let impact_time = kinematics::free_fall_time(h0, g)?;
    let impact_speed = kinematics::free_fall_impact_speed(h0, g)?;

    let window = input.total_time_s.unwrap_or(impact_time);
    let grid = sample_series(window, input.points, |t| {
        [kinematics::free_fall_height(h0, g, t), -g * t]
    })?;
    // The crossing state pins height to exactly zero so the final sample
    // satisfies the ground constraint regardless of rounding.
    let series = truncate_at_crossing(&grid, |s| s[0], impact_time, |_| [0.0, -impact_speed]);

    Ok(FreeFallResult {
        impact_time_s: impact_time,
        impact_speed_ms: impact_speed,
        times_s: series.iter().map(|s| s.time).collect(),
        heights_m: series.iter().map(|s| s.state[0]).collect(),
        velocities_ms: series.iter().map(|s| s.state[1]).collect(),
        states: series.iter().map(|s| s.state).collect(),
        formulas: formulas(&[
            Equation::FreeFallHeight,
            Equation::FreeFallVelocity,
            Equation::FreeFallImpactTime,
        ]),
    })
}
