//! # Inclined Plane Scenario
//!
//! A block on a ramp of finite length, measured along the surface with the
//! positive axis pointing downhill. Static friction may hold the block in
//! place; otherwise it slides with constant acceleration
//! `a = g·(sinθ − μk·cosθ)` and the series is truncated analytically where
//! the block leaves the end of the ramp.
//!
//! Friction opposes relative motion. A block released from rest holds when
//! `tanθ ≤ μs`; a block already sliding downhill feels kinetic friction
//! uphill, and if that friction beats gravity the block decelerates and
//! stops partway down. Past the stop time the state is pinned at the stop
//! point, since a stopped block on a ramp that held it would not slide
//! back up.

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::dynamics;
use crate::equations::kinematics;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};
use crate::sampling::{sample_series, truncate_at_crossing};

/// Input parameters for the inclined-plane slide.
///
/// ## JSON Example
///
/// ```json
/// {
///   "angle_deg": 30.0,
///   "plane_length_m": 10.0,
///   "static_friction": 0.2,
///   "kinetic_friction": 0.15
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InclinedPlaneInput {
    /// Ramp angle above the horizontal (degrees), in (0, 90)
    pub angle_deg: f64,

    /// Ramp length along the surface (m), strictly positive
    pub plane_length_m: f64,

    /// Static friction coefficient μs, non-negative
    #[serde(default)]
    pub static_friction: f64,

    /// Kinetic friction coefficient μk, non-negative
    #[serde(default)]
    pub kinetic_friction: f64,

    /// Initial speed down the ramp (m/s), non-negative
    #[serde(default)]
    pub initial_speed_ms: f64,

    /// Sampling window (s). Defaults to the time the block leaves the ramp
    /// (or stops on it).
    #[serde(default)]
    pub total_time_s: Option<f64>,

    /// Number of grid samples
    #[serde(default = "crate::scenarios::default_points")]
    pub points: usize,

    /// Physical constants (defaults to standard Earth values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

impl InclinedPlaneInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        self.constants.validate()?;
        if self.angle_deg <= 0.0 || self.angle_deg >= 90.0 {
            return Err(PhysicsError::invalid_input(
                "angle_deg",
                self.angle_deg.to_string(),
                "Ramp angle must lie strictly between 0 and 90 degrees",
            ));
        }
        if self.plane_length_m <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "plane_length_m",
                self.plane_length_m.to_string(),
                "Ramp length must be positive",
            ));
        }
        if self.static_friction < 0.0 || self.kinetic_friction < 0.0 {
            return Err(PhysicsError::invalid_input(
                "friction",
                format!("{}, {}", self.static_friction, self.kinetic_friction),
                "Friction coefficients must be non-negative",
            ));
        }
        if self.initial_speed_ms < 0.0 {
            return Err(PhysicsError::invalid_input(
                "initial_speed_ms",
                self.initial_speed_ms.to_string(),
                "Initial speed must be non-negative; the axis points downhill",
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

/// Results of the inclined-plane calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InclinedPlaneResult {
    /// Whether the block moves at all
    pub slides: bool,

    /// Acceleration along the ramp (m/s², positive downhill)
    pub acceleration_ms2: f64,

    /// Time the block reaches the end of the ramp (s), when it does
    pub exit_time_s: Option<f64>,

    /// Speed at the end of the ramp (m/s), when it gets there
    pub exit_speed_ms: Option<f64>,

    /// Time the block stops on the ramp (s), when friction wins first
    pub stop_time_s: Option<f64>,

    /// Sample times (s)
    pub times_s: Vec<f64>,

    /// Distances down the ramp (m)
    pub positions_m: Vec<f64>,

    /// Speeds down the ramp (m/s)
    pub velocities_ms: Vec<f64>,

    /// State matrix, one `[position, velocity]` row per sample
    pub states: Vec<[f64; 2]>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate an inclined-plane slide trajectory.
pub fn calculate(input: &InclinedPlaneInput) -> PhysicsResult<InclinedPlaneResult> {
    input.validate()?;

    let g = input.constants.gravity;
    let angle = input.angle_deg.to_radians();
    let length = input.plane_length_m;
    let v0 = input.initial_speed_ms;
    let (g_par, g_perp) = dynamics::incline_gravity_components(g, angle);

    let used_formulas = formulas(&[
        Equation::InclineAcceleration,
        Equation::StaticFrictionMax,
        Equation::AcceleratedPosition,
    ]);

    // Released from rest: static friction decides whether anything happens.
    let holds_from_rest = v0 == 0.0 && g_par <= input.static_friction * g_perp;
    let accel = g_par - input.kinetic_friction * g_perp;
    // From rest, kinetic friction at or above the driving component also
    // means no motion, whatever static friction said.
    if holds_from_rest || (v0 == 0.0 && accel <= 0.0) {
        return Ok(InclinedPlaneResult {
            slides: false,
            acceleration_ms2: 0.0,
            exit_time_s: None,
            exit_speed_ms: None,
            stop_time_s: None,
            times_s: vec![0.0],
            positions_m: vec![0.0],
            velocities_ms: vec![0.0],
            states: vec![[0.0, 0.0]],
            formulas: used_formulas,
        });
    }

    let exit_time = kinematics::times_at_position(0.0, v0, accel, length).earliest();
    let stop_time = if accel < 0.0 { Some(v0 / -accel) } else { None };

    // A stop before the ramp end wins over a formal quadratic root there.
    let (exit_time, stop_time) = match (exit_time, stop_time) {
        (Some(exit), Some(stop)) if stop < exit => (None, Some(stop)),
        (exit, stop) => (exit, if exit.is_some() { None } else { stop }),
    };
    let exit_speed = exit_time.map(|t| kinematics::velocity_after(v0, accel, t));

    let state_at = |t: f64| {
        // Past a stop, the block sits where it stopped.
        if let Some(stop) = stop_time {
            if t >= stop {
                return [kinematics::position_after(0.0, v0, accel, stop), 0.0];
            }
        }
        [
            kinematics::position_after(0.0, v0, accel, t),
            kinematics::velocity_after(v0, accel, t),
        ]
    };
    let exit_state = |t: f64| [length, kinematics::velocity_after(v0, accel, t)];

    let natural_end = exit_time.or(stop_time).unwrap_or(0.0);
    let window = input.total_time_s.unwrap_or(natural_end);
    let grid = sample_series(window, input.points, state_at)?;
    let series = match exit_time {
        Some(exit) => truncate_at_crossing(&grid, |s| length - s[0], exit, exit_state),
        None => grid,
    };

    Ok(InclinedPlaneResult {
        slides: true,
        acceleration_ms2: accel,
        exit_time_s: exit_time,
        exit_speed_ms: exit_speed,
        stop_time_s: stop_time,
        times_s: series.iter().map(|s| s.time).collect(),
        positions_m: series.iter().map(|s| s.state[0]).collect(),
        velocities_ms: series.iter().map(|s| s.state[1]).collect(),
        states: series.iter().map(|s| s.state).collect(),
        formulas: used_formulas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(angle: f64, mu_s: f64, mu_k: f64) -> InclinedPlaneInput {
        InclinedPlaneInput {
            angle_deg: angle,
            plane_length_m: 10.0,
            static_friction: mu_s,
            kinetic_friction: mu_k,
            initial_speed_ms: 0.0,
            total_time_s: None,
            points: 100,
            constants: PhysicsConstants::default(),
        }
    }

    #[test]
    fn test_frictionless_slide() {
        let result = calculate(&input(30.0, 0.0, 0.0)).unwrap();
        assert!(result.slides);
        // a = g·sin(30°) = 4.905
        assert!((result.acceleration_ms2 - 4.905).abs() < 1e-9);
        // L = ½at² => t = sqrt(2L/a)
        let expected = (2.0 * 10.0 / 4.905_f64).sqrt();
        assert!((result.exit_time_s.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_series_ends_exactly_at_the_ramp_end() {
        let result = calculate(&input(30.0, 0.1, 0.1)).unwrap();
        let last = result.states.last().unwrap();
        assert_eq!(last[0], 10.0);
        assert!((result.times_s.last().unwrap() - result.exit_time_s.unwrap()).abs() < 1e-12);
        assert!((last[1] - result.exit_speed_ms.unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_static_friction_holds() {
        // tan(20°) ≈ 0.364 < 0.5 so the block never moves.
        let result = calculate(&input(20.0, 0.5, 0.4)).unwrap();
        assert!(!result.slides);
        assert_eq!(result.acceleration_ms2, 0.0);
        assert_eq!(result.states, vec![[0.0, 0.0]]);
    }

    #[test]
    fn test_shove_stops_partway_down() {
        // Shallow ramp, heavy kinetic friction: a < 0 and the shove dies out.
        let mut input = input(10.0, 0.0, 0.5);
        input.initial_speed_ms = 2.0;
        let result = calculate(&input).unwrap();
        assert!(result.slides);
        assert!(result.acceleration_ms2 < 0.0);
        let stop = result.stop_time_s.unwrap();
        assert!(result.exit_time_s.is_none());
        assert!((result.times_s.last().unwrap() - stop).abs() < 1e-12);
        assert!((result.velocities_ms.last().unwrap()).abs() < 1e-9);
        assert!(*result.positions_m.last().unwrap() < 10.0);
    }

    #[test]
    fn test_positions_monotone_down_the_ramp() {
        let result = calculate(&input(45.0, 0.0, 0.2)).unwrap();
        for pair in result.positions_m.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(*result.positions_m.last().unwrap() <= 10.0 + 1e-12);
    }

    #[test]
    fn test_flat_or_vertical_angle_rejected() {
        assert!(calculate(&input(0.0, 0.1, 0.1)).is_err());
        assert!(calculate(&input(90.0, 0.1, 0.1)).is_err());
    }
}
