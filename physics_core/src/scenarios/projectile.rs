//! # Projectile Scenario
//!
//! 2D launch from height `h0` at speed `v0` and elevation angle `θ`, sampled
//! until landing.
//!
//! ## Assumptions
//!
//! - No air resistance, flat ground at y = 0
//! - Launch height non-negative, launch speed strictly positive
//! - The series is truncated at the analytic landing time with the final
//!   sample pinned to y = 0

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::kinematics;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};
use crate::sampling::{sample_series, truncate_at_crossing};

/// Input parameters for a projectile launch.
///
/// ## JSON Example
///
/// ```json
/// {
///   "speed_ms": 20.0,
///   "angle_deg": 45.0,
///   "initial_height_m": 0.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileInput {
    /// Launch speed (m/s), strictly positive
    pub speed_ms: f64,

    /// Elevation angle above the horizontal (degrees)
    pub angle_deg: f64,

    /// Launch height above the ground (m), non-negative
    #[serde(default)]
    pub initial_height_m: f64,

    /// Sampling window (s). Defaults to the flight time.
    #[serde(default)]
    pub total_time_s: Option<f64>,

    /// Number of grid samples
    #[serde(default = "crate::scenarios::default_points")]
    pub points: usize,

    /// Physical constants (defaults to standard Earth values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

impl ProjectileInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        self.constants.validate()?;
        if self.speed_ms <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "speed_ms",
                self.speed_ms.to_string(),
                "Launch speed must be positive",
            ));
        }
        if self.initial_height_m < 0.0 {
            return Err(PhysicsError::invalid_input(
                "initial_height_m",
                self.initial_height_m.to_string(),
                "Launch height must be non-negative",
            ));
        }
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

/// Results of a projectile calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileResult {
    /// Horizontal launch component (m/s)
    pub v0x_ms: f64,

    /// Vertical launch component (m/s)
    pub v0y_ms: f64,

    /// Time of flight until landing (s)
    pub flight_time_s: f64,

    /// Horizontal range at landing (m)
    pub range_m: f64,

    /// Peak height above the ground (m)
    pub max_height_m: f64,

    /// Sample times (s)
    pub times_s: Vec<f64>,

    /// Horizontal positions (m)
    pub xs_m: Vec<f64>,

    /// Heights above the ground (m)
    pub ys_m: Vec<f64>,

    /// State matrix, one `[x, y, vx, vy]` row per sample
    pub states: Vec<[f64; 4]>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a projectile trajectory.
pub fn calculate(input: &ProjectileInput) -> PhysicsResult<ProjectileResult> {
    input.validate()?;

    let g = input.constants.gravity;
    let h0 = input.initial_height_m;
    let (v0x, v0y) = kinematics::launch_components(input.speed_ms, input.angle_deg);

    let flight = kinematics::flight_time(v0y, h0, g)?;
    let range = v0x * flight;
    let peak = kinematics::max_height(v0y, h0, g);

    let state_at = |t: f64| {
        [
            v0x * t,
            kinematics::position_after(h0, v0y, -g, t),
            v0x,
            kinematics::velocity_after(v0y, -g, t),
        ]
    };
    let landing_state = |t: f64| {
        // Landing sample keeps x and velocity analytic but pins y to zero.
        let s = state_at(t);
        [s[0], 0.0, s[2], s[3]]
    };

    let window = input.total_time_s.unwrap_or(flight);
    let grid = sample_series(window, input.points, state_at)?;
    let series = truncate_at_crossing(&grid, |s| s[1], flight, landing_state);

    Ok(ProjectileResult {
        v0x_ms: v0x,
        v0y_ms: v0y,
        flight_time_s: flight,
        range_m: range,
        max_height_m: peak,
        times_s: series.iter().map(|s| s.time).collect(),
        xs_m: series.iter().map(|s| s.state[0]).collect(),
        ys_m: series.iter().map(|s| s.state[1]).collect(),
        states: series.iter().map(|s| s.state).collect(),
        formulas: formulas(&[
            Equation::ProjectilePosition,
            Equation::ProjectileFlightTime,
            Equation::ProjectileRange,
            Equation::ProjectileMaxHeight,
        ]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(speed: f64, angle: f64, h0: f64) -> ProjectileInput {
        ProjectileInput {
            speed_ms: speed,
            angle_deg: angle,
            initial_height_m: h0,
            total_time_s: None,
            points: 100,
            constants: PhysicsConstants::default(),
        }
    }

    #[test]
    fn test_reference_launch_45_degrees() {
        let result = calculate(&input(20.0, 45.0, 0.0)).unwrap();
        assert!((result.flight_time_s - 2.8833).abs() < 1e-3);
        assert!((result.range_m - 40.775).abs() < 1e-2);
    }

    #[test]
    fn test_lands_exactly_on_the_ground() {
        let result = calculate(&input(15.0, 30.0, 10.0)).unwrap();
        let last = result.states.last().unwrap();
        assert_eq!(last[1], 0.0);
        assert!((result.times_s.last().unwrap() - result.flight_time_s).abs() < 1e-12);
        assert!((last[0] - result.range_m).abs() < 1e-9);
    }

    #[test]
    fn test_peak_height() {
        let result = calculate(&input(20.0, 90.0, 0.0)).unwrap();
        // Straight up: h_max = v0^2 / (2g)
        let expected = 20.0 * 20.0 / (2.0 * 9.81);
        assert!((result.max_height_m - expected).abs() < 1e-9);
        let sampled_max = result
            .ys_m
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(sampled_max <= result.max_height_m + 1e-9);
    }

    #[test]
    fn test_flat_launch_from_height() {
        let result = calculate(&input(10.0, 0.0, 20.0)).unwrap();
        assert_eq!(result.max_height_m, 20.0);
        assert!((result.flight_time_s - (2.0 * 20.0 / 9.81_f64).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_speed_rejected() {
        let err = calculate(&input(0.0, 45.0, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_height_rejected() {
        let err = calculate(&input(10.0, 45.0, -1.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_downward_launch_from_ground_is_empty_after_start() {
        // Launched straight down from the ground: flight time clamps to 0,
        // the single sample is the launch point itself.
        let result = calculate(&input(10.0, -90.0, 0.0)).unwrap();
        assert_eq!(result.flight_time_s, 0.0);
        assert_eq!(result.times_s.len(), 1);
    }
}
