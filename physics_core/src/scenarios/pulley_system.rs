//! # Pulley System Scenario
//!
//! A block on an inclined plane tied over an ideal pulley to a hanging
//! mass. Decides which way the system tends to move, checks whether static
//! friction pins it, and reports acceleration and rope tension.
//!
//! ## Assumptions
//!
//! - Massless, inextensible rope over a frictionless, massless pulley
//! - Friction acts only between the block and the ramp
//! - The system starts at rest, so the direction decision starts from the
//!   static tendency, and friction opposes that tendency

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::dynamics;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};

/// Which way the block on the ramp moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RampDirection {
    /// Hanging mass wins: the block is dragged up the ramp
    UpTheRamp,
    /// Gravity along the ramp wins: the block slides down
    DownTheRamp,
    /// Friction pins the system
    Stationary,
}

/// Input parameters for the incline-and-pulley system.
///
/// ## JSON Example
///
/// ```json
/// {
///   "ramp_mass_kg": 4.0,
///   "hanging_mass_kg": 3.0,
///   "angle_deg": 30.0,
///   "static_friction": 0.2,
///   "kinetic_friction": 0.15
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulleySystemInput {
    /// Mass of the block on the ramp (kg), strictly positive
    pub ramp_mass_kg: f64,

    /// Hanging mass (kg), strictly positive
    pub hanging_mass_kg: f64,

    /// Ramp angle above the horizontal (degrees), in (0, 90)
    pub angle_deg: f64,

    /// Static friction coefficient μs, non-negative
    #[serde(default)]
    pub static_friction: f64,

    /// Kinetic friction coefficient μk, non-negative
    #[serde(default)]
    pub kinetic_friction: f64,

    /// Physical constants (defaults to standard Earth values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

impl PulleySystemInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        self.constants.validate()?;
        if self.ramp_mass_kg <= 0.0 || self.hanging_mass_kg <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "mass",
                format!("{}, {}", self.ramp_mass_kg, self.hanging_mass_kg),
                "Masses must be positive",
            ));
        }
        if self.angle_deg <= 0.0 || self.angle_deg >= 90.0 {
            return Err(PhysicsError::invalid_input(
                "angle_deg",
                self.angle_deg.to_string(),
                "Ramp angle must lie strictly between 0 and 90 degrees",
            ));
        }
        if self.static_friction < 0.0 || self.kinetic_friction < 0.0 {
            return Err(PhysicsError::invalid_input(
                "friction",
                format!("{}, {}", self.static_friction, self.kinetic_friction),
                "Friction coefficients must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Results of the pulley-system analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulleySystemResult {
    /// Which way the block on the ramp moves
    pub direction: RampDirection,

    /// System acceleration magnitude (m/s²)
    pub acceleration_ms2: f64,

    /// Rope tension (N)
    pub tension_n: f64,

    /// Unbalanced driving force before friction (N, positive when the
    /// hanging mass wins)
    pub driving_force_n: f64,

    /// Maximum static friction on the ramp (N)
    pub max_static_friction_n: f64,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Analyze the incline-and-pulley system.
pub fn calculate(input: &PulleySystemInput) -> PhysicsResult<PulleySystemResult> {
    input.validate()?;

    let g = input.constants.gravity;
    let m1 = input.ramp_mass_kg;
    let m2 = input.hanging_mass_kg;
    let angle = input.angle_deg.to_radians();
    let (g_par, g_perp) = dynamics::incline_gravity_components(g, angle);

    // Positive drive: the hanging mass outweighs the along-ramp component.
    let drive = m2 * g - m1 * g_par;
    let static_max = dynamics::static_friction_max(input.static_friction, m1 * g_perp);
    let kinetic = dynamics::kinetic_friction(input.kinetic_friction, m1 * g_perp);

    let used_formulas = formulas(&[
        Equation::PulleyAcceleration,
        Equation::PulleyTension,
        Equation::StaticFrictionMax,
    ]);

    let net = drive.abs() - kinetic;
    if drive.abs() <= static_max || net <= 0.0 {
        // Pinned: the rope just carries the hanging weight.
        return Ok(PulleySystemResult {
            direction: RampDirection::Stationary,
            acceleration_ms2: 0.0,
            tension_n: m2 * g,
            driving_force_n: drive,
            max_static_friction_n: static_max,
            formulas: used_formulas,
        });
    }

    let acceleration = net / (m1 + m2);
    let (direction, tension) = if drive > 0.0 {
        // Hanging mass descends: m2·g − T = m2·a.
        (RampDirection::UpTheRamp, m2 * (g - acceleration))
    } else {
        // Hanging mass ascends: T − m2·g = m2·a.
        (RampDirection::DownTheRamp, m2 * (g + acceleration))
    };

    Ok(PulleySystemResult {
        direction,
        acceleration_ms2: acceleration,
        tension_n: tension,
        driving_force_n: drive,
        max_static_friction_n: static_max,
        formulas: used_formulas,
    })
}
