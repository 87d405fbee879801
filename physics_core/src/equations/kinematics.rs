//! # Kinematic Equations
//!
//! The constant-acceleration equation set (MRU/MRUV), free fall, and
//! projectile launch formulas. All functions are pure; time is in seconds,
//! distance in meters, speed in m/s.
//!
//! ## Notation
//!
//! - `x0`, `x` = initial / final position
//! - `v0`, `v` = initial / final velocity
//! - `a` = constant acceleration
//! - `t` = elapsed time
//! - `g` = gravitational acceleration (positive magnitude)
//!
//! ## Sign Conventions
//!
//! - Free fall: height is positive upward, so velocity during a fall is
//!   negative (`v(t) = -g·t`).
//! - Projectile: `y` positive upward, `x` positive along the launch
//!   direction; gravity acts as `-g` on the `y` axis.

use crate::errors::{PhysicsError, PhysicsResult};

/// Non-negative time roots of a quadratic equation of motion, ascending.
///
/// The scenario owns the convention for which root applies: a projectile
/// takes the largest root (descending ground crossing), an inclined-plane
/// slide takes the smallest (first arrival at the end of the ramp).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// No real, non-negative root
    None,
    /// Exactly one valid root
    One(f64),
    /// Two valid roots, ascending
    Two(f64, f64),
}

impl QuadraticRoots {
    /// Smallest valid root, if any
    pub fn earliest(self) -> Option<f64> {
        match self {
            QuadraticRoots::None => None,
            QuadraticRoots::One(t) => Some(t),
            QuadraticRoots::Two(t, _) => Some(t),
        }
    }

    /// Largest valid root, if any
    pub fn latest(self) -> Option<f64> {
        match self {
            QuadraticRoots::None => None,
            QuadraticRoots::One(t) => Some(t),
            QuadraticRoots::Two(_, t) => Some(t),
        }
    }
}

/// Position after time t: x = x0 + v0·t + ½·a·t²
#[inline]
pub fn position_after(x0: f64, v0: f64, a: f64, t: f64) -> f64 {
    x0 + v0 * t + 0.5 * a * t * t
}

/// Velocity after time t: v = v0 + a·t
#[inline]
pub fn velocity_after(v0: f64, a: f64, t: f64) -> f64 {
    v0 + a * t
}

/// Velocity magnitude from displacement: v² = v0² + 2·a·Δx
///
/// Returns `None` when the discriminant is negative (the object never
/// reaches that displacement). The sign of the returned root is the
/// caller's convention.
#[inline]
pub fn velocity_from_displacement(v0: f64, a: f64, dx: f64) -> Option<f64> {
    let disc = v0 * v0 + 2.0 * a * dx;
    if disc < 0.0 {
        None
    } else {
        Some(disc.sqrt())
    }
}

/// Displacement from average velocity: Δx = ½·(v0 + v)·t
#[inline]
pub fn displacement_from_velocities(v0: f64, v: f64, t: f64) -> f64 {
    0.5 * (v0 + v) * t
}

/// Time from positions and velocities: t = 2·(x − x0)/(v0 + v)
pub fn time_from_velocities(x0: f64, x: f64, v0: f64, v: f64) -> PhysicsResult<f64> {
    if v0 + v == 0.0 {
        return Err(PhysicsError::invalid_input(
            "velocities",
            format!("v0={v0}, v={v}"),
            "Initial and final velocity sum to zero",
        ));
    }
    Ok(2.0 * (x - x0) / (v0 + v))
}

/// Acceleration from velocity change: a = (v − v0)/t
pub fn acceleration_from_velocities(v0: f64, v: f64, t: f64) -> PhysicsResult<f64> {
    if t == 0.0 {
        return Err(PhysicsError::invalid_input(
            "t",
            "0",
            "Elapsed time must be non-zero",
        ));
    }
    Ok((v - v0) / t)
}

/// Acceleration from positions: a = 2·(x − x0 − v0·t)/t²
pub fn acceleration_from_position(x0: f64, x: f64, v0: f64, t: f64) -> PhysicsResult<f64> {
    if t == 0.0 {
        return Err(PhysicsError::invalid_input(
            "t",
            "0",
            "Elapsed time must be non-zero",
        ));
    }
    Ok(2.0 * (x - x0 - v0 * t) / (t * t))
}

/// Final position without time: x = x0 + (v² − v0²)/(2·a)
pub fn position_from_velocities(x0: f64, v0: f64, v: f64, a: f64) -> PhysicsResult<f64> {
    if a == 0.0 {
        return Err(PhysicsError::invalid_input(
            "a",
            "0",
            "Acceleration must be non-zero for this form",
        ));
    }
    Ok(x0 + (v * v - v0 * v0) / (2.0 * a))
}

/// Solve `x0 + v0·t + ½·a·t² = x_target` for non-negative times.
///
/// Degenerates to a linear solve when `a == 0`, and rejects the equation
/// entirely when both `a` and `v0` are zero but the target differs from the
/// start.
pub fn times_at_position(x0: f64, v0: f64, a: f64, x_target: f64) -> QuadraticRoots {
    let qa = 0.5 * a;
    let qb = v0;
    let qc = x0 - x_target;

    if qa == 0.0 {
        if qb == 0.0 {
            return if qc == 0.0 {
                QuadraticRoots::One(0.0)
            } else {
                QuadraticRoots::None
            };
        }
        let t = -qc / qb;
        return if t >= 0.0 {
            QuadraticRoots::One(t)
        } else {
            QuadraticRoots::None
        };
    }

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return QuadraticRoots::None;
    }
    if disc == 0.0 {
        let t = -qb / (2.0 * qa);
        return if t >= 0.0 {
            QuadraticRoots::One(t)
        } else {
            QuadraticRoots::None
        };
    }

    let sqrt_disc = disc.sqrt();
    let t1 = (-qb + sqrt_disc) / (2.0 * qa);
    let t2 = (-qb - sqrt_disc) / (2.0 * qa);
    let (lo, hi) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

    match (lo >= 0.0, hi >= 0.0) {
        (true, true) => QuadraticRoots::Two(lo, hi),
        (false, true) => QuadraticRoots::One(hi),
        (true, false) => QuadraticRoots::One(lo),
        (false, false) => QuadraticRoots::None,
    }
}

// ============================================================================
// Free Fall
// ============================================================================

/// Time to reach the ground from rest: t* = sqrt(2·h0/g)
pub fn free_fall_time(h0: f64, g: f64) -> PhysicsResult<f64> {
    if h0 < 0.0 {
        return Err(PhysicsError::invalid_input(
            "initial_height",
            h0.to_string(),
            "Initial height must be non-negative",
        ));
    }
    Ok((2.0 * h0 / g).sqrt())
}

/// Impact speed from rest: |v| = sqrt(2·g·h0)
pub fn free_fall_impact_speed(h0: f64, g: f64) -> PhysicsResult<f64> {
    if h0 < 0.0 {
        return Err(PhysicsError::invalid_input(
            "initial_height",
            h0.to_string(),
            "Initial height must be non-negative",
        ));
    }
    Ok((2.0 * g * h0).sqrt())
}

/// Height during a fall from rest: h(t) = h0 − ½·g·t²
#[inline]
pub fn free_fall_height(h0: f64, g: f64, t: f64) -> f64 {
    h0 - 0.5 * g * t * t
}

// ============================================================================
// Projectile Launch
// ============================================================================

/// Horizontal and vertical launch components: (v0·cosθ, v0·sinθ)
#[inline]
pub fn launch_components(speed: f64, angle_deg: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (speed * angle.cos(), speed * angle.sin())
}

/// Flight time until y returns to zero, launched from height h0:
/// t = (v0y + sqrt(v0y² + 2·g·h0))/g, the larger root of the quadratic.
pub fn flight_time(v0y: f64, h0: f64, g: f64) -> PhysicsResult<f64> {
    let disc = v0y * v0y + 2.0 * g * h0;
    if disc < 0.0 {
        return Err(PhysicsError::no_real_solution(
            "projectile never reaches the ground",
        ));
    }
    let t = (v0y + disc.sqrt()) / g;
    Ok(t.max(0.0))
}

/// Peak height above the ground: h_max = h0 + v0y²/(2·g)
#[inline]
pub fn max_height(v0y: f64, h0: f64, g: f64) -> f64 {
    if v0y <= 0.0 {
        // Launched flat or downward: the start is the peak.
        return h0;
    }
    h0 + v0y * v0y / (2.0 * g)
}
