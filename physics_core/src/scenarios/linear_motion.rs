//! # Linear Motion Scenarios
//!
//! Uniform motion (constant velocity) and uniformly accelerated motion,
//! sampled over a caller-supplied window. Neither has a physical boundary,
//! so the series is never truncated.

use serde::{Deserialize, Serialize};

use crate::equations::kinematics;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};
use crate::sampling::sample_series;

// ============================================================================
// Uniform Motion (constant velocity)
// ============================================================================

/// Input parameters for uniform motion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformMotionInput {
    /// Initial position (m)
    #[serde(default)]
    pub initial_position_m: f64,

    /// Constant velocity (m/s)
    pub velocity_ms: f64,

    /// Sampling window (s), non-negative
    pub total_time_s: f64,

    /// Number of grid samples
    #[serde(default = "crate::scenarios::default_points")]
    pub points: usize,
}

impl UniformMotionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        if self.total_time_s < 0.0 {
            return Err(PhysicsError::invalid_input(
                "total_time_s",
                self.total_time_s.to_string(),
                "Sampling window must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Results of a uniform-motion calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformMotionResult {
    /// Position at the end of the window (m)
    pub final_position_m: f64,

    /// Displacement over the window (m)
    pub displacement_m: f64,

    /// Sample times (s)
    pub times_s: Vec<f64>,

    /// Positions (m)
    pub positions_m: Vec<f64>,

    /// State matrix, one `[position, velocity]` row per sample
    pub states: Vec<[f64; 2]>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a uniform-motion series.
pub fn calculate_uniform(input: &UniformMotionInput) -> PhysicsResult<UniformMotionResult> {
    input.validate()?;

    let x0 = input.initial_position_m;
    let v = input.velocity_ms;
    let series = sample_series(input.total_time_s, input.points, |t| {
        [kinematics::position_after(x0, v, 0.0, t), v]
    })?;

    let final_position = kinematics::position_after(x0, v, 0.0, input.total_time_s);
    Ok(UniformMotionResult {
        final_position_m: final_position,
        displacement_m: final_position - x0,
        times_s: series.iter().map(|s| s.time).collect(),
        positions_m: series.iter().map(|s| s.state[0]).collect(),
        states: series.iter().map(|s| s.state).collect(),
        formulas: formulas(&[Equation::UniformPosition]),
    })
}

// ============================================================================
// Uniformly Accelerated Motion
// ============================================================================

/// Input parameters for uniformly accelerated motion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "initial_velocity_ms": 5.0,
///   "acceleration_ms2": 2.0,
///   "total_time_s": 4.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceleratedMotionInput {
    /// Initial position (m)
    #[serde(default)]
    pub initial_position_m: f64,

    /// Initial velocity (m/s)
    pub initial_velocity_ms: f64,

    /// Constant acceleration (m/s²)
    pub acceleration_ms2: f64,

    /// Sampling window (s), non-negative
    pub total_time_s: f64,

    /// Number of grid samples
    #[serde(default = "crate::scenarios::default_points")]
    pub points: usize,
}

impl AcceleratedMotionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        if self.total_time_s < 0.0 {
            return Err(PhysicsError::invalid_input(
                "total_time_s",
                self.total_time_s.to_string(),
                "Sampling window must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Results of a uniformly-accelerated-motion calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceleratedMotionResult {
    /// Position at the end of the window (m)
    pub final_position_m: f64,

    /// Velocity at the end of the window (m/s)
    pub final_velocity_ms: f64,

    /// Sample times (s)
    pub times_s: Vec<f64>,

    /// Positions (m)
    pub positions_m: Vec<f64>,

    /// Velocities (m/s)
    pub velocities_ms: Vec<f64>,

    /// State matrix, one `[position, velocity]` row per sample
    pub states: Vec<[f64; 2]>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a uniformly-accelerated-motion series.
pub fn calculate_accelerated(
    input: &AcceleratedMotionInput,
) -> PhysicsResult<AcceleratedMotionResult> {
    input.validate()?;

    let x0 = input.initial_position_m;
    let v0 = input.initial_velocity_ms;
    let a = input.acceleration_ms2;
    let series = sample_series(input.total_time_s, input.points, |t| {
        [
            kinematics::position_after(x0, v0, a, t),
            kinematics::velocity_after(v0, a, t),
        ]
    })?;

    Ok(AcceleratedMotionResult {
        final_position_m: kinematics::position_after(x0, v0, a, input.total_time_s),
        final_velocity_ms: kinematics::velocity_after(v0, a, input.total_time_s),
        times_s: series.iter().map(|s| s.time).collect(),
        positions_m: series.iter().map(|s| s.state[0]).collect(),
        velocities_ms: series.iter().map(|s| s.state[1]).collect(),
        states: series.iter().map(|s| s.state).collect(),
        formulas: formulas(&[
            Equation::AcceleratedPosition,
            Equation::AcceleratedVelocity,
        ]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_motion() {
        let input = UniformMotionInput {
            initial_position_m: 2.0,
            velocity_ms: 3.0,
            total_time_s: 4.0,
            points: 50,
        };
        let result = calculate_uniform(&input).unwrap();
        assert_eq!(result.final_position_m, 14.0);
        assert_eq!(result.displacement_m, 12.0);
        assert_eq!(result.times_s.len(), 50);
        assert_eq!(*result.positions_m.last().unwrap(), 14.0);
    }

    #[test]
    fn test_accelerated_motion() {
        let input = AcceleratedMotionInput {
            initial_position_m: 0.0,
            initial_velocity_ms: 5.0,
            acceleration_ms2: 2.0,
            total_time_s: 4.0,
            points: 100,
        };
        let result = calculate_accelerated(&input).unwrap();
        // x = 5*4 + 0.5*2*16 = 36, v = 5 + 2*4 = 13
        assert_eq!(result.final_position_m, 36.0);
        assert_eq!(result.final_velocity_ms, 13.0);
        assert_eq!(result.times_s[0], 0.0);
        assert_eq!(*result.times_s.last().unwrap(), 4.0);
    }

    #[test]
    fn test_deceleration_turns_around() {
        let input = AcceleratedMotionInput {
            initial_position_m: 0.0,
            initial_velocity_ms: 10.0,
            acceleration_ms2: -2.0,
            total_time_s: 10.0,
            points: 101,
        };
        let result = calculate_accelerated(&input).unwrap();
        // Turnaround at t = 5 s, x = 25 m; back at the origin at t = 10 s.
        assert!((result.final_position_m - 0.0).abs() < 1e-9);
        let max = result
            .positions_m
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((max - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_window_rejected() {
        let input = UniformMotionInput {
            initial_position_m: 0.0,
            velocity_ms: 1.0,
            total_time_s: -1.0,
            points: 10,
        };
        assert!(calculate_uniform(&input).is_err());
    }
}
