//! # Uniform Circular Motion Scenario
//!
//! A point moving on a circle of fixed radius at constant angular speed.
//! The spin rate is a tagged enum: callers state explicitly whether they
//! supply the angular speed ω or the tangential speed v, instead of two
//! optional parameters fighting over one meaning.

use serde::{Deserialize, Serialize};

use crate::equations::oscillation;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};
use crate::sampling::sample_series;

/// How the spin rate is specified.
///
/// Serializes with an explicit tag:
/// `{"Angular": 2.0}` or `{"Tangential": 5.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpinRate {
    /// Angular speed ω (rad/s)
    Angular(f64),
    /// Tangential speed v (m/s); ω is derived as v/r
    Tangential(f64),
}

/// Input parameters for uniform circular motion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "radius_m": 2.0,
///   "spin_rate": { "Angular": 3.14159 },
///   "points": 100
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularMotionInput {
    /// Circle radius (m), strictly positive
    pub radius_m: f64,

    /// Spin rate, angular or tangential
    pub spin_rate: SpinRate,

    /// Initial angle (degrees)
    #[serde(default)]
    pub initial_angle_deg: f64,

    /// Sampling window (s). Defaults to one revolution.
    #[serde(default)]
    pub total_time_s: Option<f64>,

    /// Number of grid samples
    #[serde(default = "crate::scenarios::default_points")]
    pub points: usize,
}

impl CircularMotionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        if self.radius_m <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "radius_m",
                self.radius_m.to_string(),
                "Radius must be positive",
            ));
        }
        let rate = match self.spin_rate {
            SpinRate::Angular(omega) => omega,
            SpinRate::Tangential(v) => v,
        };
        if rate == 0.0 {
            return Err(PhysicsError::invalid_input(
                "spin_rate",
                "0",
                "Spin rate must be non-zero",
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

    /// Angular speed ω (rad/s), derived when the rate was tangential.
    pub fn angular_speed(&self) -> f64 {
        match self.spin_rate {
            SpinRate::Angular(omega) => omega,
            SpinRate::Tangential(v) => v / self.radius_m,
        }
    }
}

/// Results of a circular-motion calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularMotionResult {
    /// Angular speed ω (rad/s)
    pub angular_speed_rads: f64,

    /// Tangential speed v = rω (m/s)
    pub tangential_speed_ms: f64,

    /// Period of one revolution (s)
    pub period_s: f64,

    /// Revolution frequency (Hz)
    pub frequency_hz: f64,

    /// Centripetal acceleration ω²r (m/s²)
    pub centripetal_ms2: f64,

    /// Sample times (s)
    pub times_s: Vec<f64>,

    /// Angular positions (rad)
    pub angles_rad: Vec<f64>,

    /// State matrix, one `[θ, x, y]` row per sample
    pub states: Vec<[f64; 3]>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a uniform-circular-motion series.
pub fn calculate(input: &CircularMotionInput) -> PhysicsResult<CircularMotionResult> {
    input.validate()?;

    let r = input.radius_m;
    let omega = input.angular_speed();
    let theta0 = input.initial_angle_deg.to_radians();

    let period = oscillation::period(omega)?;
    let freq = oscillation::frequency(omega)?;
    let centripetal = oscillation::centripetal_from_angular(omega, r)?;

    let window = input.total_time_s.unwrap_or(period);
    let series = sample_series(window, input.points, |t| {
        let theta = oscillation::angular_position(theta0, omega, t);
        let (x, y) = oscillation::circular_position(r, theta);
        [theta, x, y]
    })?;

    Ok(CircularMotionResult {
        angular_speed_rads: omega,
        tangential_speed_ms: oscillation::tangential_speed(r, omega),
        period_s: period,
        frequency_hz: freq,
        centripetal_ms2: centripetal,
        times_s: series.iter().map(|s| s.time).collect(),
        angles_rad: series.iter().map(|s| s.state[0]).collect(),
        states: series.iter().map(|s| s.state).collect(),
        formulas: formulas(&[
            Equation::CircularAngle,
            Equation::TangentialSpeed,
            Equation::CentripetalAcceleration,
            Equation::OscillationPeriod,
        ]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn input(rate: SpinRate) -> CircularMotionInput {
        CircularMotionInput {
            radius_m: 2.0,
            spin_rate: rate,
            initial_angle_deg: 0.0,
            total_time_s: None,
            points: 100,
        }
    }

    #[test]
    fn test_angular_rate() {
        let result = calculate(&input(SpinRate::Angular(PI))).unwrap();
        assert!((result.period_s - 2.0).abs() < 1e-12);
        assert!((result.frequency_hz - 0.5).abs() < 1e-12);
        assert!((result.tangential_speed_ms - 2.0 * PI).abs() < 1e-12);
        assert!((result.centripetal_ms2 - PI * PI * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_tangential_rate_derives_omega() {
        let result = calculate(&input(SpinRate::Tangential(4.0))).unwrap();
        assert!((result.angular_speed_rads - 2.0).abs() < 1e-12);
        // a_c = v^2/r = 16/2
        assert!((result.centripetal_ms2 - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_window_is_one_revolution() {
        let result = calculate(&input(SpinRate::Angular(2.0 * PI))).unwrap();
        assert!((result.times_s.last().unwrap() - 1.0).abs() < 1e-12);
        // Full circle: the final angle is the initial angle plus 2π.
        let last = result.angles_rad.last().unwrap();
        assert!((last - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_samples_stay_on_the_circle() {
        let result = calculate(&input(SpinRate::Angular(1.5))).unwrap();
        for s in &result.states {
            let r = (s[1] * s[1] + s[2] * s[2]).sqrt();
            assert!((r - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_rate_rejected() {
        let err = calculate(&input(SpinRate::Angular(0.0))).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_spin_rate_json_tag() {
        let json = r#"{"radius_m": 1.0, "spin_rate": {"Tangential": 5.0}}"#;
        let input: CircularMotionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.spin_rate, SpinRate::Tangential(5.0));
    }
}
