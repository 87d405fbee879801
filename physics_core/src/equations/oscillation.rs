//! # Oscillation and Rotation Formulas
//!
//! Simple harmonic motion, the small-angle pendulum, and uniform circular
//! motion. Angular quantities are in radians unless a name says degrees.

use crate::errors::{PhysicsError, PhysicsResult};

// ============================================================================
// Simple Harmonic Motion
// ============================================================================

/// SHM position: x(t) = A·cos(ω·t + φ)
#[inline]
pub fn shm_position(amplitude: f64, omega: f64, phase: f64, t: f64) -> f64 {
    amplitude * (omega * t + phase).cos()
}

/// SHM velocity: v(t) = −A·ω·sin(ω·t + φ)
#[inline]
pub fn shm_velocity(amplitude: f64, omega: f64, phase: f64, t: f64) -> f64 {
    -amplitude * omega * (omega * t + phase).sin()
}

/// SHM acceleration: a(t) = −A·ω²·cos(ω·t + φ) = −ω²·x(t)
#[inline]
pub fn shm_acceleration(amplitude: f64, omega: f64, phase: f64, t: f64) -> f64 {
    -amplitude * omega * omega * (omega * t + phase).cos()
}

/// Oscillation period: T = 2π/ω
pub fn period(omega: f64) -> PhysicsResult<f64> {
    if omega == 0.0 {
        return Err(PhysicsError::invalid_input(
            "angular_frequency",
            "0",
            "Angular frequency must be non-zero",
        ));
    }
    Ok(2.0 * std::f64::consts::PI / omega.abs())
}

/// Oscillation frequency: f = ω/(2π)
pub fn frequency(omega: f64) -> PhysicsResult<f64> {
    Ok(1.0 / period(omega)?)
}

// ============================================================================
// Small-Angle Pendulum
// ============================================================================

/// Pendulum angular frequency: ω = sqrt(g/L)
pub fn pendulum_angular_frequency(length: f64, g: f64) -> PhysicsResult<f64> {
    if length <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "length",
            length.to_string(),
            "Pendulum length must be positive",
        ));
    }
    Ok((g / length).sqrt())
}

/// Pendulum period: T = 2π·sqrt(L/g)
pub fn pendulum_period(length: f64, g: f64) -> PhysicsResult<f64> {
    period(pendulum_angular_frequency(length, g)?)
}

/// Small-angle pendulum position: θ(t) = θ₀·cos(ω·t)
#[inline]
pub fn pendulum_angle(theta0: f64, omega: f64, t: f64) -> f64 {
    theta0 * (omega * t).cos()
}

/// Small-angle pendulum angular velocity: θ'(t) = −θ₀·ω·sin(ω·t)
#[inline]
pub fn pendulum_angular_velocity(theta0: f64, omega: f64, t: f64) -> f64 {
    -theta0 * omega * (omega * t).sin()
}

// ============================================================================
// Uniform Circular Motion
// ============================================================================

/// Tangential speed: v = r·ω
#[inline]
pub fn tangential_speed(radius: f64, omega: f64) -> f64 {
    radius * omega
}

/// Centripetal acceleration from angular speed: a_c = ω²·r
pub fn centripetal_from_angular(omega: f64, radius: f64) -> PhysicsResult<f64> {
    if radius <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "radius",
            radius.to_string(),
            "Radius must be positive",
        ));
    }
    Ok(omega * omega * radius)
}

/// Centripetal acceleration from tangential speed: a_c = v²/r
pub fn centripetal_from_tangential(v: f64, radius: f64) -> PhysicsResult<f64> {
    if radius <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "radius",
            radius.to_string(),
            "Radius must be positive",
        ));
    }
    Ok(v * v / radius)
}

/// Angular position: θ(t) = θ₀ + ω·t
#[inline]
pub fn angular_position(theta0: f64, omega: f64, t: f64) -> f64 {
    theta0 + omega * t
}

/// Cartesian position on the circle: (r·cosθ, r·sinθ)
#[inline]
pub fn circular_position(radius: f64, theta: f64) -> (f64, f64) {
    (radius * theta.cos(), radius * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shm_phase_relationships() {
        let (a, w, phi) = (2.0, 3.0, 0.5);
        for t in [0.0, 0.3, 1.7] {
            let x = shm_position(a, w, phi, t);
            let acc = shm_acceleration(a, w, phi, t);
            // a(t) = -ω²·x(t)
            assert!((acc + w * w * x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_period_frequency_inverse() {
        let t = period(4.0).unwrap();
        let f = frequency(4.0).unwrap();
        assert!((t * f - 1.0).abs() < 1e-12);
        assert!(period(0.0).is_err());
    }

    #[test]
    fn test_pendulum_period_one_meter() {
        // Classic: a 1 m pendulum swings with T ≈ 2.006 s under g = 9.81.
        let t = pendulum_period(1.0, 9.81).unwrap();
        assert!((t - 2.006).abs() < 1e-3);
        assert!(pendulum_period(0.0, 9.81).is_err());
    }

    #[test]
    fn test_centripetal_forms_agree() {
        // ω²·r == v²/r when v = r·ω.
        let (r, w) = (2.5, 3.0);
        let v = tangential_speed(r, w);
        let a1 = centripetal_from_angular(w, r).unwrap();
        let a2 = centripetal_from_tangential(v, r).unwrap();
        assert!((a1 - a2).abs() < 1e-12);
    }

    #[test]
    fn test_circular_position_on_radius() {
        let (x, y) = circular_position(3.0, 1.2);
        assert!((x * x + y * y - 9.0).abs() < 1e-12);
    }
}
