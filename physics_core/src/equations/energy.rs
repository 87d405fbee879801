//! # Energy and Work Formulas

use crate::errors::{PhysicsError, PhysicsResult};

/// Kinetic energy: K = ½·m·v²
pub fn kinetic(mass: f64, velocity: f64) -> PhysicsResult<f64> {
    if mass <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "mass",
            mass.to_string(),
            "Mass must be positive",
        ));
    }
    Ok(0.5 * mass * velocity * velocity)
}

/// Gravitational potential energy: U = m·g·h
pub fn gravitational_potential(mass: f64, height: f64, g: f64) -> PhysicsResult<f64> {
    if mass <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "mass",
            mass.to_string(),
            "Mass must be positive",
        ));
    }
    if height < 0.0 {
        return Err(PhysicsError::invalid_input(
            "height",
            height.to_string(),
            "Height must be non-negative",
        ));
    }
    Ok(mass * g * height)
}

/// Elastic potential energy: U = ½·k·x²
pub fn elastic_potential(spring_constant: f64, displacement: f64) -> PhysicsResult<f64> {
    if spring_constant <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "spring_constant",
            spring_constant.to_string(),
            "Spring constant must be positive",
        ));
    }
    Ok(0.5 * spring_constant * displacement * displacement)
}

/// Power from work over time: P = W/t
pub fn power(work: f64, time: f64) -> PhysicsResult<f64> {
    if time <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "time",
            time.to_string(),
            "Time must be positive",
        ));
    }
    Ok(work / time)
}

/// Power at constant velocity: P = F·v
#[inline]
pub fn power_from_force(force: f64, velocity: f64) -> f64 {
    force * velocity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinetic_energy() {
        assert_eq!(kinetic(2.0, 3.0).unwrap(), 9.0);
        assert!(kinetic(-1.0, 3.0).is_err());
    }

    #[test]
    fn test_gravitational_potential() {
        let u = gravitational_potential(2.0, 10.0, 9.81).unwrap();
        assert!((u - 196.2).abs() < 1e-9);
        assert!(gravitational_potential(2.0, -1.0, 9.81).is_err());
    }

    #[test]
    fn test_elastic_potential_sign_independent() {
        let compressed = elastic_potential(100.0, -0.2).unwrap();
        let stretched = elastic_potential(100.0, 0.2).unwrap();
        assert_eq!(compressed, stretched);
        assert!((compressed - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_power_forms() {
        assert_eq!(power(100.0, 4.0).unwrap(), 25.0);
        assert!(power(100.0, 0.0).is_err());
        assert_eq!(power_from_force(10.0, 2.5), 25.0);
    }
}
