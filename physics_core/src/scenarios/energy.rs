//! # Energy Scenarios
//!
//! Work-energy bookkeeping: kinetic and potential energies, the
//! work-energy theorem, and average power.

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::energy;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};

/// Input parameters for the work-energy calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass_kg": 2.0,
///   "initial_speed_ms": 3.0,
///   "final_speed_ms": 7.0,
///   "duration_s": 2.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEnergyInput {
    /// Mass (kg), strictly positive
    pub mass_kg: f64,

    /// Speed before the work is done (m/s)
    pub initial_speed_ms: f64,

    /// Speed after the work is done (m/s)
    pub final_speed_ms: f64,

    /// Time over which the work is done (s). When present and positive,
    /// average power is reported.
    #[serde(default)]
    pub duration_s: Option<f64>,
}

impl WorkEnergyInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        if self.mass_kg <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "mass_kg",
                self.mass_kg.to_string(),
                "Mass must be positive",
            ));
        }
        if let Some(t) = self.duration_s {
            if t <= 0.0 {
                return Err(PhysicsError::invalid_input(
                    "duration_s",
                    t.to_string(),
                    "Duration must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Results of the work-energy calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEnergyResult {
    /// Kinetic energy before (J)
    pub initial_kinetic_j: f64,

    /// Kinetic energy after (J)
    pub final_kinetic_j: f64,

    /// Net work done, ΔK (J, signed)
    pub work_j: f64,

    /// Average power W/t (W), when a duration was supplied
    pub average_power_w: Option<f64>,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Apply the work-energy theorem.
pub fn calculate_work_energy(input: &WorkEnergyInput) -> PhysicsResult<WorkEnergyResult> {
    input.validate()?;

    let initial = energy::kinetic(input.mass_kg, input.initial_speed_ms)?;
    let final_k = energy::kinetic(input.mass_kg, input.final_speed_ms)?;
    let work = final_k - initial;
    let avg_power = match input.duration_s {
        Some(t) => Some(energy::power(work, t)?),
        None => None,
    };

    Ok(WorkEnergyResult {
        initial_kinetic_j: initial,
        final_kinetic_j: final_k,
        work_j: work,
        average_power_w: avg_power,
        formulas: formulas(&[Equation::WorkEnergyTheorem, Equation::KineticEnergy]),
    })
}

/// Input parameters for a gravitational potential energy calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravitationalEnergyInput {
    /// Mass (kg), strictly positive
    pub mass_kg: f64,

    /// Height above the reference level (m), non-negative
    pub height_m: f64,

    /// Physical constants (defaults to standard Earth values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

/// Results of a gravitational potential energy calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravitationalEnergyResult {
    /// Potential energy m·g·h (J)
    pub potential_energy_j: f64,

    /// Speed if all of it converts to kinetic energy (m/s)
    pub equivalent_speed_ms: f64,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate gravitational potential energy.
pub fn calculate_gravitational(
    input: &GravitationalEnergyInput,
) -> PhysicsResult<GravitationalEnergyResult> {
    input.constants.validate()?;
    let g = input.constants.gravity;
    let potential = energy::gravitational_potential(input.mass_kg, input.height_m, g)?;
    Ok(GravitationalEnergyResult {
        potential_energy_j: potential,
        equivalent_speed_ms: (2.0 * g * input.height_m).sqrt(),
        formulas: formulas(&[Equation::GravitationalPotential, Equation::KineticEnergy]),
    })
}

/// Input parameters for an elastic (spring) potential energy calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticEnergyInput {
    /// Spring constant k (N/m), strictly positive
    pub spring_constant_nm: f64,

    /// Displacement from equilibrium (m)
    pub displacement_m: f64,
}

/// Results of an elastic potential energy calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticEnergyResult {
    /// Stored energy ½·k·x² (J)
    pub potential_energy_j: f64,

    /// Restoring force −k·x at that displacement (N)
    pub restoring_force_n: f64,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate elastic potential energy.
pub fn calculate_elastic(input: &ElasticEnergyInput) -> PhysicsResult<ElasticEnergyResult> {
    let potential = energy::elastic_potential(input.spring_constant_nm, input.displacement_m)?;
    Ok(ElasticEnergyResult {
        potential_energy_j: potential,
        restoring_force_n: -input.spring_constant_nm * input.displacement_m,
        formulas: formulas(&[Equation::ElasticPotential]),
    })
}
