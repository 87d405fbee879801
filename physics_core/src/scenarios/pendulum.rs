//! # Simple Pendulum Scenario
//!
//! Small-angle pendulum: `θ(t) = θ0·cos(ωt)` with `ω = sqrt(g/L)`. The
//! small-angle approximation degrades quickly past ~15°, so the input is
//! bounded at |θ0| < 90° and larger releases are rejected outright.

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::oscillation;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};
use crate::sampling::sample_series;

/// Input parameters for a simple pendulum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendulumInput {
    /// Pendulum length L (m), strictly positive
    pub length_m: f64,

    /// Release angle from the vertical (degrees), |θ0| < 90
    pub initial_angle_deg: f64,

    /// Sampling window (s). Defaults to one period.
    #[serde(default)]
    pub total_time_s: Option<f64>,

    /// Number of grid samples
    #[serde(default = "crate::scenarios::default_points")]
    pub points: usize,

    /// Physical constants (defaults to standard Earth values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

impl PendulumInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        self.constants.validate()?;
        if self.length_m <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Pendulum length must be positive",
            ));
        }
        if self.initial_angle_deg.abs() >= 90.0 {
            return Err(PhysicsError::invalid_input(
                "initial_angle_deg",
                self.initial_angle_deg.to_string(),
                "Release angle must satisfy |angle| < 90 degrees",
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

/// Results of a pendulum calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendulumResult {
    /// Angular frequency ω = sqrt(g/L) (rad/s)
    pub angular_frequency_rads: f64,

    /// Period T = 2π·sqrt(L/g) (s)
    pub period_s: f64,

    /// Frequency f = 1/T (Hz)
    pub frequency_hz: f64,

    /// Sample times (s)
    pub times_s: Vec<f64>,

    /// Angles from the vertical (rad)
    pub angles_rad: Vec<f64>,

    /// Angular velocities (rad/s)
    pub angular_velocities_rads: Vec<f64>,

    /// State matrix, one `[θ, dθ/dt]` row per sample
    pub states: Vec<[f64; 2]>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a small-angle pendulum series.
pub fn calculate(input: &PendulumInput) -> PhysicsResult<PendulumResult> {
    input.validate()?;

    let g = input.constants.gravity;
    let theta0 = input.initial_angle_deg.to_radians();

    let omega = oscillation::pendulum_angular_frequency(input.length_m, g)?;
    let period = oscillation::pendulum_period(input.length_m, g)?;

    let window = input.total_time_s.unwrap_or(period);
    let series = sample_series(window, input.points, |t| {
        [
            oscillation::pendulum_angle(theta0, omega, t),
            oscillation::pendulum_angular_velocity(theta0, omega, t),
        ]
    })?;

    Ok(PendulumResult {
        angular_frequency_rads: omega,
        period_s: period,
        frequency_hz: 1.0 / period,
        times_s: series.iter().map(|s| s.time).collect(),
        angles_rad: series.iter().map(|s| s.state[0]).collect(),
        angular_velocities_rads: series.iter().map(|s| s.state[1]).collect(),
        states: series.iter().map(|s| s.state).collect(),
        formulas: formulas(&[Equation::PendulumAngle, Equation::PendulumPeriod]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn input(length: f64, angle: f64) -> PendulumInput {
        PendulumInput {
            length_m: length,
            initial_angle_deg: angle,
            total_time_s: None,
            points: 100,
            constants: PhysicsConstants::default(),
        }
    }

    #[test]
    fn test_one_meter_pendulum_period() {
        let result = calculate(&input(1.0, 10.0)).unwrap();
        // T = 2π·sqrt(1/9.81) ≈ 2.006 s
        assert!((result.period_s - 2.0 * PI * (1.0_f64 / 9.81).sqrt()).abs() < 1e-12);
        assert!((result.period_s - 2.006).abs() < 1e-3);
    }

    #[test]
    fn test_release_angle_is_the_peak() {
        let result = calculate(&input(1.5, 12.0)).unwrap();
        let theta0 = 12.0_f64.to_radians();
        assert!((result.angles_rad[0] - theta0).abs() < 1e-12);
        for theta in &result.angles_rad {
            assert!(theta.abs() <= theta0 + 1e-9);
        }
    }

    #[test]
    fn test_returns_to_release_after_one_period() {
        let result = calculate(&input(2.0, 8.0)).unwrap();
        let first = result.angles_rad[0];
        let last = result.angles_rad.last().unwrap();
        assert!((first - last).abs() < 1e-9);
    }

    #[test]
    fn test_wide_release_rejected() {
        let err = calculate(&input(1.0, 90.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(calculate(&input(0.0, 10.0)).is_err());
    }
}
