//! # Collision Scenarios
//!
//! Two-body collisions, purely algebraic: elastic in 1D/2D/3D and
//! perfectly inelastic in 1D/2D. Elastic results conserve both momentum
//! and kinetic energy; inelastic results conserve momentum and report the
//! kinetic energy dissipated in the merge.

use serde::{Deserialize, Serialize};

use crate::equations::collisions;
use crate::equations::registry::{formulas, Equation};
use crate::errors::PhysicsResult;

// ============================================================================
// Elastic 1D
// ============================================================================

/// Input parameters for an elastic head-on collision.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass1_kg": 2.0,
///   "velocity1_ms": 3.0,
///   "mass2_kg": 1.0,
///   "velocity2_ms": -1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elastic1dInput {
    /// Mass of body 1 (kg), strictly positive
    pub mass1_kg: f64,
    /// Velocity of body 1 before impact (m/s)
    pub velocity1_ms: f64,
    /// Mass of body 2 (kg), strictly positive
    pub mass2_kg: f64,
    /// Velocity of body 2 before impact (m/s)
    pub velocity2_ms: f64,
}

/// Results of an elastic 1D collision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elastic1dResult {
    /// Velocity of body 1 after impact (m/s)
    pub final_velocity1_ms: f64,
    /// Velocity of body 2 after impact (m/s)
    pub final_velocity2_ms: f64,
    /// Total momentum, unchanged by the impact (kg·m/s)
    pub total_momentum_kgms: f64,
    /// Total kinetic energy, unchanged by the impact (J)
    pub total_kinetic_energy_j: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate an elastic head-on collision.
pub fn calculate_elastic_1d(input: &Elastic1dInput) -> PhysicsResult<Elastic1dResult> {
    let (v1f, v2f) = collisions::elastic_1d(
        input.mass1_kg,
        input.velocity1_ms,
        input.mass2_kg,
        input.velocity2_ms,
    )?;
    Ok(Elastic1dResult {
        final_velocity1_ms: v1f,
        final_velocity2_ms: v2f,
        total_momentum_kgms: input.mass1_kg * input.velocity1_ms
            + input.mass2_kg * input.velocity2_ms,
        total_kinetic_energy_j: 0.5 * input.mass1_kg * input.velocity1_ms.powi(2)
            + 0.5 * input.mass2_kg * input.velocity2_ms.powi(2),
        formulas: formulas(&[Equation::Elastic1dVelocities, Equation::Momentum]),
    })
}

// ============================================================================
// Elastic 2D / 3D
// ============================================================================

/// Input parameters for an elastic 2D collision along a contact normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elastic2dInput {
    /// Mass of body 1 (kg), strictly positive
    pub mass1_kg: f64,
    /// Velocity vector of body 1 before impact (m/s)
    pub velocity1_ms: [f64; 2],
    /// Mass of body 2 (kg), strictly positive
    pub mass2_kg: f64,
    /// Velocity vector of body 2 before impact (m/s)
    pub velocity2_ms: [f64; 2],
    /// Contact normal, body 1 toward body 2 (normalized internally)
    pub contact_normal: [f64; 2],
}

/// Results of an elastic 2D collision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elastic2dResult {
    /// Velocity vector of body 1 after impact (m/s)
    pub final_velocity1_ms: [f64; 2],
    /// Velocity vector of body 2 after impact (m/s)
    pub final_velocity2_ms: [f64; 2],
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate an elastic 2D collision.
pub fn calculate_elastic_2d(input: &Elastic2dInput) -> PhysicsResult<Elastic2dResult> {
    let (v1f, v2f) = collisions::elastic_2d(
        input.mass1_kg,
        input.velocity1_ms,
        input.mass2_kg,
        input.velocity2_ms,
        input.contact_normal,
    )?;
    Ok(Elastic2dResult {
        final_velocity1_ms: v1f,
        final_velocity2_ms: v2f,
        formulas: formulas(&[Equation::Elastic1dVelocities, Equation::Momentum]),
    })
}

/// Input parameters for an elastic 3D collision along a contact normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elastic3dInput {
    /// Mass of body 1 (kg), strictly positive
    pub mass1_kg: f64,
    /// Velocity vector of body 1 before impact (m/s)
    pub velocity1_ms: [f64; 3],
    /// Mass of body 2 (kg), strictly positive
    pub mass2_kg: f64,
    /// Velocity vector of body 2 before impact (m/s)
    pub velocity2_ms: [f64; 3],
    /// Contact normal, body 1 toward body 2 (normalized internally)
    pub contact_normal: [f64; 3],
}

/// Results of an elastic 3D collision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elastic3dResult {
    /// Velocity vector of body 1 after impact (m/s)
    pub final_velocity1_ms: [f64; 3],
    /// Velocity vector of body 2 after impact (m/s)
    pub final_velocity2_ms: [f64; 3],
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate an elastic 3D collision.
pub fn calculate_elastic_3d(input: &Elastic3dInput) -> PhysicsResult<Elastic3dResult> {
    let (v1f, v2f) = collisions::elastic_3d(
        input.mass1_kg,
        input.velocity1_ms,
        input.mass2_kg,
        input.velocity2_ms,
        input.contact_normal,
    )?;
    Ok(Elastic3dResult {
        final_velocity1_ms: v1f,
        final_velocity2_ms: v2f,
        formulas: formulas(&[Equation::Elastic1dVelocities, Equation::Momentum]),
    })
}

// ============================================================================
// Perfectly Inelastic 1D / 2D
// ============================================================================

/// Input parameters for a perfectly inelastic head-on collision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inelastic1dInput {
    /// Mass of body 1 (kg), strictly positive
    pub mass1_kg: f64,
    /// Velocity of body 1 before impact (m/s)
    pub velocity1_ms: f64,
    /// Mass of body 2 (kg), strictly positive
    pub mass2_kg: f64,
    /// Velocity of body 2 before impact (m/s)
    pub velocity2_ms: f64,
}

/// Results of a perfectly inelastic 1D collision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inelastic1dResult {
    /// Common velocity of the merged bodies (m/s)
    pub final_velocity_ms: f64,
    /// Total momentum, unchanged by the impact (kg·m/s)
    pub total_momentum_kgms: f64,
    /// Kinetic energy lost in the merge (J, non-negative)
    pub dissipated_energy_j: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a perfectly inelastic head-on collision.
pub fn calculate_inelastic_1d(input: &Inelastic1dInput) -> PhysicsResult<Inelastic1dResult> {
    let vf = collisions::inelastic_1d(
        input.mass1_kg,
        input.velocity1_ms,
        input.mass2_kg,
        input.velocity2_ms,
    )?;
    let before = 0.5 * input.mass1_kg * input.velocity1_ms.powi(2)
        + 0.5 * input.mass2_kg * input.velocity2_ms.powi(2);
    let after = 0.5 * (input.mass1_kg + input.mass2_kg) * vf * vf;
    Ok(Inelastic1dResult {
        final_velocity_ms: vf,
        total_momentum_kgms: input.mass1_kg * input.velocity1_ms
            + input.mass2_kg * input.velocity2_ms,
        dissipated_energy_j: before - after,
        formulas: formulas(&[Equation::InelasticFinalVelocity, Equation::Momentum]),
    })
}

/// Input parameters for a perfectly inelastic 2D collision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inelastic2dInput {
    /// Mass of body 1 (kg), strictly positive
    pub mass1_kg: f64,
    /// Velocity vector of body 1 before impact (m/s)
    pub velocity1_ms: [f64; 2],
    /// Mass of body 2 (kg), strictly positive
    pub mass2_kg: f64,
    /// Velocity vector of body 2 before impact (m/s)
    pub velocity2_ms: [f64; 2],
}

/// Results of a perfectly inelastic 2D collision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inelastic2dResult {
    /// Common velocity vector of the merged bodies (m/s)
    pub final_velocity_ms: [f64; 2],
    /// Kinetic energy lost in the merge (J, non-negative)
    pub dissipated_energy_j: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate a perfectly inelastic 2D collision.
pub fn calculate_inelastic_2d(input: &Inelastic2dInput) -> PhysicsResult<Inelastic2dResult> {
    let vf = collisions::inelastic_2d(
        input.mass1_kg,
        input.velocity1_ms,
        input.mass2_kg,
        input.velocity2_ms,
    )?;
    let speed2 = |v: [f64; 2]| v[0] * v[0] + v[1] * v[1];
    let before = 0.5 * input.mass1_kg * speed2(input.velocity1_ms)
        + 0.5 * input.mass2_kg * speed2(input.velocity2_ms);
    let after = 0.5 * (input.mass1_kg + input.mass2_kg) * speed2(vf);
    Ok(Inelastic2dResult {
        final_velocity_ms: vf,
        dissipated_energy_j: before - after,
        formulas: formulas(&[Equation::InelasticFinalVelocity, Equation::Momentum]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elastic_1d_reference_values() {
        let input = Elastic1dInput {
            mass1_kg: 2.0,
            velocity1_ms: 3.0,
            mass2_kg: 1.0,
            velocity2_ms: -1.0,
        };
        let result = calculate_elastic_1d(&input).unwrap();
        assert!((result.final_velocity1_ms - 1.0 / 3.0).abs() < 1e-9);
        assert!((result.final_velocity2_ms - 13.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_1d_conserves_momentum_and_energy() {
        let input = Elastic1dInput {
            mass1_kg: 3.0,
            velocity1_ms: 2.5,
            mass2_kg: 1.5,
            velocity2_ms: -4.0,
        };
        let result = calculate_elastic_1d(&input).unwrap();
        let p_after =
            3.0 * result.final_velocity1_ms + 1.5 * result.final_velocity2_ms;
        let k_after = 0.5 * 3.0 * result.final_velocity1_ms.powi(2)
            + 0.5 * 1.5 * result.final_velocity2_ms.powi(2);
        assert!((p_after - result.total_momentum_kgms).abs() < 1e-9);
        assert!((k_after - result.total_kinetic_energy_j).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_2d_head_on_reduces_to_1d() {
        let input = Elastic2dInput {
            mass1_kg: 2.0,
            velocity1_ms: [3.0, 0.0],
            mass2_kg: 1.0,
            velocity2_ms: [-1.0, 0.0],
            contact_normal: [1.0, 0.0],
        };
        let result = calculate_elastic_2d(&input).unwrap();
        assert!((result.final_velocity1_ms[0] - 1.0 / 3.0).abs() < 1e-9);
        assert!((result.final_velocity2_ms[0] - 13.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.final_velocity1_ms[1], 0.0);
    }

    #[test]
    fn test_elastic_2d_tangential_component_carries_through() {
        let input = Elastic2dInput {
            mass1_kg: 1.0,
            velocity1_ms: [2.0, 5.0],
            mass2_kg: 1.0,
            velocity2_ms: [0.0, 0.0],
            contact_normal: [1.0, 0.0],
        };
        let result = calculate_elastic_2d(&input).unwrap();
        // Equal masses swap the normal component; the tangent stays.
        assert!((result.final_velocity1_ms[0] - 0.0).abs() < 1e-9);
        assert!((result.final_velocity1_ms[1] - 5.0).abs() < 1e-9);
        assert!((result.final_velocity2_ms[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_3d_conserves_momentum() {
        let input = Elastic3dInput {
            mass1_kg: 2.0,
            velocity1_ms: [1.0, 2.0, 3.0],
            mass2_kg: 3.0,
            velocity2_ms: [-1.0, 0.0, 1.0],
            contact_normal: [1.0, 1.0, 0.0],
        };
        let result = calculate_elastic_3d(&input).unwrap();
        for i in 0..3 {
            let before = 2.0 * input.velocity1_ms[i] + 3.0 * input.velocity2_ms[i];
            let after =
                2.0 * result.final_velocity1_ms[i] + 3.0 * result.final_velocity2_ms[i];
            assert!((before - after).abs() < 1e-9);
        }
    }

    #[test]
    fn test_inelastic_1d_dissipates_energy() {
        let input = Inelastic1dInput {
            mass1_kg: 2.0,
            velocity1_ms: 3.0,
            mass2_kg: 1.0,
            velocity2_ms: -1.0,
        };
        let result = calculate_inelastic_1d(&input).unwrap();
        // v' = (6 − 1)/3 = 5/3
        assert!((result.final_velocity_ms - 5.0 / 3.0).abs() < 1e-9);
        assert!(result.dissipated_energy_j > 0.0);
    }

    #[test]
    fn test_inelastic_2d_momentum_conserved() {
        let input = Inelastic2dInput {
            mass1_kg: 2.0,
            velocity1_ms: [3.0, 1.0],
            mass2_kg: 4.0,
            velocity2_ms: [-1.0, 2.0],
        };
        let result = calculate_inelastic_2d(&input).unwrap();
        let expected = [(6.0 - 4.0) / 6.0, (2.0 + 8.0) / 6.0];
        assert!((result.final_velocity_ms[0] - expected[0]).abs() < 1e-9);
        assert!((result.final_velocity_ms[1] - expected[1]).abs() < 1e-9);
        assert!(result.dissipated_energy_j >= 0.0);
    }

    #[test]
    fn test_zero_mass_rejected() {
        let input = Elastic1dInput {
            mass1_kg: 0.0,
            velocity1_ms: 1.0,
            mass2_kg: 1.0,
            velocity2_ms: 0.0,
        };
        assert!(calculate_elastic_1d(&input).is_err());
    }

    #[test]
    fn test_zero_normal_rejected() {
        let input = Elastic2dInput {
            mass1_kg: 1.0,
            velocity1_ms: [1.0, 0.0],
            mass2_kg: 1.0,
            velocity2_ms: [0.0, 0.0],
            contact_normal: [0.0, 0.0],
        };
        assert!(calculate_elastic_2d(&input).is_err());
    }
}
