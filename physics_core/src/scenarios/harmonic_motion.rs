//! # Simple Harmonic Motion Scenario
//!
//! Spring-mass oscillator `x(t) = A·cos(ωt + φ)` with velocity and
//! acceleration series. When a mass is supplied, the result also reports
//! the total mechanical energy, which is the same at every sample.

use serde::{Deserialize, Serialize};

use crate::equations::oscillation;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};
use crate::sampling::sample_series;

/// Input parameters for simple harmonic motion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "amplitude_m": 0.5,
///   "angular_frequency_rads": 4.0,
///   "mass_kg": 2.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonicMotionInput {
    /// Oscillation amplitude A (m), strictly positive
    pub amplitude_m: f64,

    /// Angular frequency ω (rad/s), non-zero
    pub angular_frequency_rads: f64,

    /// Initial phase φ (degrees)
    #[serde(default)]
    pub phase_deg: f64,

    /// Oscillating mass (kg). When present, mechanical energy is reported.
    #[serde(default)]
    pub mass_kg: Option<f64>,

    /// Sampling window (s). Defaults to one period.
    #[serde(default)]
    pub total_time_s: Option<f64>,

    /// Number of grid samples
    #[serde(default = "crate::scenarios::default_points")]
    pub points: usize,
}

impl HarmonicMotionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        if self.amplitude_m <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "amplitude_m",
                self.amplitude_m.to_string(),
                "Amplitude must be positive",
            ));
        }
        if self.angular_frequency_rads == 0.0 {
            return Err(PhysicsError::invalid_input(
                "angular_frequency_rads",
                "0",
                "Angular frequency must be non-zero",
            ));
        }
        if let Some(m) = self.mass_kg {
            if m <= 0.0 {
                return Err(PhysicsError::invalid_input(
                    "mass_kg",
                    m.to_string(),
                    "Mass must be positive",
                ));
            }
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

/// Results of a simple-harmonic-motion calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonicMotionResult {
    /// Oscillation period T = 2π/ω (s)
    pub period_s: f64,

    /// Frequency f = 1/T (Hz)
    pub frequency_hz: f64,

    /// Total mechanical energy ½·m·ω²·A² (J), when a mass was supplied
    pub mechanical_energy_j: Option<f64>,

    /// Sample times (s)
    pub times_s: Vec<f64>,

    /// Displacements (m)
    pub positions_m: Vec<f64>,

    /// Velocities (m/s)
    pub velocities_ms: Vec<f64>,

    /// Accelerations (m/s²)
    pub accelerations_ms2: Vec<f64>,

    /// State matrix, one `[x, v, a]` row per sample
    pub states: Vec<[f64; 3]>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a simple-harmonic-motion series.
pub fn calculate(input: &HarmonicMotionInput) -> PhysicsResult<HarmonicMotionResult> {
    input.validate()?;

    let a = input.amplitude_m;
    let omega = input.angular_frequency_rads;
    let phase = input.phase_deg.to_radians();

    let period = oscillation::period(omega)?;
    let freq = oscillation::frequency(omega)?;

    let window = input.total_time_s.unwrap_or(period);
    let series = sample_series(window, input.points, |t| {
        [
            oscillation::shm_position(a, omega, phase, t),
            oscillation::shm_velocity(a, omega, phase, t),
            oscillation::shm_acceleration(a, omega, phase, t),
        ]
    })?;

    let energy = input.mass_kg.map(|m| 0.5 * m * omega * omega * a * a);

    Ok(HarmonicMotionResult {
        period_s: period,
        frequency_hz: freq,
        mechanical_energy_j: energy,
        times_s: series.iter().map(|s| s.time).collect(),
        positions_m: series.iter().map(|s| s.state[0]).collect(),
        velocities_ms: series.iter().map(|s| s.state[1]).collect(),
        accelerations_ms2: series.iter().map(|s| s.state[2]).collect(),
        states: series.iter().map(|s| s.state).collect(),
        formulas: formulas(&[
            Equation::ShmPosition,
            Equation::ShmVelocity,
            Equation::ShmAcceleration,
            Equation::OscillationPeriod,
        ]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn input() -> HarmonicMotionInput {
        HarmonicMotionInput {
            amplitude_m: 0.5,
            angular_frequency_rads: 4.0,
            phase_deg: 0.0,
            mass_kg: Some(2.0),
            total_time_s: None,
            points: 200,
        }
    }

    #[test]
    fn test_period_and_frequency() {
        let result = calculate(&input()).unwrap();
        assert!((result.period_s - PI / 2.0).abs() < 1e-12);
        assert!((result.frequency_hz - 2.0 / PI).abs() < 1e-12);
    }

    #[test]
    fn test_starts_at_amplitude() {
        let result = calculate(&input()).unwrap();
        assert!((result.positions_m[0] - 0.5).abs() < 1e-12);
        assert!(result.velocities_ms[0].abs() < 1e-12);
    }

    #[test]
    fn test_mechanical_energy_conserved_across_samples() {
        let result = calculate(&input()).unwrap();
        let m = 2.0;
        let omega = 4.0;
        let total = result.mechanical_energy_j.unwrap();
        for s in &result.states {
            let kinetic = 0.5 * m * s[1] * s[1];
            let potential = 0.5 * m * omega * omega * s[0] * s[0];
            assert!((kinetic + potential - total).abs() < 1e-9);
        }
    }

    #[test]
    fn test_acceleration_opposes_displacement() {
        let result = calculate(&input()).unwrap();
        for s in &result.states {
            assert!((s[2] + 4.0 * 4.0 * s[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_mass_no_energy() {
        let mut input = input();
        input.mass_kg = None;
        let result = calculate(&input).unwrap();
        assert!(result.mechanical_energy_j.is_none());
    }

    #[test]
    fn test_zero_amplitude_rejected() {
        let mut input = input();
        input.amplitude_m = 0.0;
        assert!(calculate(&input).is_err());
    }
}
