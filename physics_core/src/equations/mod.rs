//! # Physics Equations
//!
//! This module contains all closed-form physics equations used by the scenarios.
//! Having equations in one place enables:
//! - Easy verification against textbook references
//! - Documentation of assumptions and sign conventions
//! - Consistent implementation across scenario types
//!
//! ## Modules
//!
//! - [`kinematics`] - Uniform/accelerated motion, free fall, projectiles
//! - [`oscillation`] - Simple harmonic motion, pendulum, circular motion
//! - [`dynamics`] - Newton's laws, friction, inclined planes
//! - [`collisions`] - Elastic/inelastic collisions in 1D, 2D, and 3D
//! - [`energy`] - Kinetic, potential, and elastic energy; power
//! - [`electricity`] - Circuits, fields, capacitors, inductors
//! - [`waves`] - Wave relation, Doppler effect, refraction, sound
//! - [`registry`] - Equation metadata surfaced in scenario results
//!
//! ## Sign Conventions
//!
//! - **Vertical axis**: Positive upward; free-fall velocities are negative
//!   while falling
//! - **Angles**: Radians inside this module; scenario inputs accept degrees
//!   and convert at the boundary
//! - **Doppler speeds**: Non-negative magnitudes, direction carried by the
//!   [`waves::Motion`] enum
//! - **Charge**: Signed; field magnitudes use `|q|`, potentials keep the sign

pub mod collisions;
pub mod dynamics;
pub mod electricity;
pub mod energy;
pub mod kinematics;
pub mod oscillation;
pub mod registry;
pub mod waves;

// Re-export commonly used items
pub use kinematics::{
    position_after,
    velocity_after,
    times_at_position,
    free_fall_time,
    free_fall_impact_speed,
    launch_components,
    flight_time,
    max_height,
    QuadraticRoots,
};
pub use registry::{formulas, Equation, EquationCategory, EquationMetadata, Variable};
pub use waves::Motion;
