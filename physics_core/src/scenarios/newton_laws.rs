//! # Newton's Laws Scenario
//!
//! A block on a flat plane with a force applied at an angle above the
//! horizontal. Resolves the normal force, decides between the static-hold
//! and kinetic-slide branches, and reports net force and acceleration.
//!
//! Friction always opposes the motion the applied force would cause: at
//! rest it cancels the horizontal pull up to its static maximum, and while
//! sliding it acts against the slide direction.

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::dynamics;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};

/// Input parameters for the flat-plane force analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass_kg": 10.0,
///   "applied_force_n": 50.0,
///   "force_angle_deg": 30.0,
///   "static_friction": 0.4,
///   "kinetic_friction": 0.3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewtonLawsInput {
    /// Block mass (kg), strictly positive
    pub mass_kg: f64,

    /// Magnitude of the applied force (N), non-negative
    pub applied_force_n: f64,

    /// Angle of the applied force above the horizontal (degrees)
    #[serde(default)]
    pub force_angle_deg: f64,

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

impl NewtonLawsInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        self.constants.validate()?;
        if self.mass_kg <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "mass_kg",
                self.mass_kg.to_string(),
                "Mass must be positive",
            ));
        }
        if self.applied_force_n < 0.0 {
            return Err(PhysicsError::invalid_input(
                "applied_force_n",
                self.applied_force_n.to_string(),
                "Force magnitude must be non-negative; use the angle for direction",
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

/// Results of the flat-plane force analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewtonLawsResult {
    /// Horizontal component of the applied force (N)
    pub horizontal_force_n: f64,

    /// Vertical component of the applied force (N, positive upward)
    pub vertical_force_n: f64,

    /// Normal force from the plane (N)
    pub normal_force_n: f64,

    /// Maximum static friction μs·N (N)
    pub max_static_friction_n: f64,

    /// Actual friction force (N, signed, opposing motion)
    pub friction_force_n: f64,

    /// Net horizontal force (N, signed)
    pub net_force_n: f64,

    /// Resulting acceleration (m/s², signed)
    pub acceleration_ms2: f64,

    /// Whether the block overcomes static friction and slides
    pub slides: bool,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Analyze a block under an angled applied force on a flat plane.
pub fn calculate(input: &NewtonLawsInput) -> PhysicsResult<NewtonLawsResult> {
    input.validate()?;

    let g = input.constants.gravity;
    let angle = input.force_angle_deg.to_radians();
    let fx = input.applied_force_n * angle.cos();
    let fy = input.applied_force_n * angle.sin();

    let normal = input.mass_kg * g - fy;
    if normal < 0.0 {
        return Err(PhysicsError::invalid_input(
            "applied_force_n",
            input.applied_force_n.to_string(),
            "Vertical force component lifts the block off the plane",
        ));
    }

    let static_max = dynamics::static_friction_max(input.static_friction, normal);
    let slides = fx.abs() > static_max;

    let (friction, net) = if slides {
        let kinetic = dynamics::kinetic_friction(input.kinetic_friction, normal);
        let friction = -fx.signum() * kinetic;
        (friction, fx + friction)
    } else {
        // Static friction cancels the pull exactly; the block holds.
        (-fx, 0.0)
    };
    let acceleration = dynamics::acceleration(net, input.mass_kg)?;

    Ok(NewtonLawsResult {
        horizontal_force_n: fx,
        vertical_force_n: fy,
        normal_force_n: normal,
        max_static_friction_n: static_max,
        friction_force_n: friction,
        net_force_n: net,
        acceleration_ms2: acceleration,
        slides,
        formulas: formulas(&[
            Equation::NewtonSecondLaw,
            Equation::StaticFrictionMax,
            Equation::KineticFriction,
        ]),
    })
}
