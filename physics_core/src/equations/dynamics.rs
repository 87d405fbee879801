//! # Newtonian Dynamics Formulas
//!
//! Force, acceleration, and friction. Friction always opposes relative
//! motion; the sign conventions here are derived from that principle, not
//! copied from any particular solved example.

use crate::errors::{PhysicsError, PhysicsResult};

/// Net force: F = m·a
#[inline]
pub fn net_force(mass: f64, acceleration: f64) -> f64 {
    mass * acceleration
}

/// Acceleration from force: a = F/m
pub fn acceleration(force: f64, mass: f64) -> PhysicsResult<f64> {
    if mass == 0.0 {
        return Err(PhysicsError::invalid_input(
            "mass",
            "0",
            "Mass must be non-zero",
        ));
    }
    Ok(force / mass)
}

/// Maximum static friction: Fs_max = μs·N
#[inline]
pub fn static_friction_max(mu_s: f64, normal: f64) -> f64 {
    mu_s * normal
}

/// Kinetic friction magnitude: Fk = μk·N
#[inline]
pub fn kinetic_friction(mu_k: f64, normal: f64) -> f64 {
    mu_k * normal
}

/// Gravity components on an incline of angle θ: (g·sinθ, g·cosθ),
/// parallel and perpendicular to the surface.
#[inline]
pub fn incline_gravity_components(g: f64, angle_rad: f64) -> (f64, f64) {
    (g * angle_rad.sin(), g * angle_rad.cos())
}
