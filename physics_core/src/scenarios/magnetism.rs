//! # Magnetism Scenarios
//!
//! Magnetic fields of simple geometries, the Lorentz force on a moving
//! charge, flux through a surface, and Faraday induction.

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::electricity;
use crate::equations::registry::{formulas, Equation};
use crate::errors::PhysicsResult;

/// Input parameters for the field of a long straight wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFieldInput {
    /// Current in the wire (A)
    pub current_a: f64,
    /// Perpendicular distance from the wire (m), strictly positive
    pub distance_m: f64,
    /// Physical constants (defaults to standard values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

/// Results of a straight-wire field calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFieldResult {
    /// Field magnitude B = μ0·I/(2π·d) (T)
    pub field_t: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the magnetic field of a long straight wire.
pub fn calculate_wire_field(input: &WireFieldInput) -> PhysicsResult<WireFieldResult> {
    input.constants.validate()?;
    let field = electricity::wire_field(
        input.current_a,
        input.distance_m,
        input.constants.vacuum_permeability,
    )?;
    Ok(WireFieldResult {
        field_t: field,
        formulas: formulas(&[Equation::WireField]),
    })
}

/// Input parameters for the interior field of a solenoid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolenoidFieldInput {
    /// Number of turns, at least one
    pub turns: u32,
    /// Current (A)
    pub current_a: f64,
    /// Solenoid length (m), strictly positive
    pub length_m: f64,
    /// Physical constants (defaults to standard values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

/// Results of a solenoid field calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolenoidFieldResult {
    /// Field magnitude B = μ0·N·I/L (T)
    pub field_t: f64,
    /// Turn density N/L (1/m)
    pub turn_density_per_m: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the interior field of a solenoid.
pub fn calculate_solenoid_field(input: &SolenoidFieldInput) -> PhysicsResult<SolenoidFieldResult> {
    input.constants.validate()?;
    let field = electricity::solenoid_field(
        input.turns,
        input.current_a,
        input.length_m,
        input.constants.vacuum_permeability,
    )?;
    Ok(SolenoidFieldResult {
        field_t: field,
        turn_density_per_m: input.turns as f64 / input.length_m,
        formulas: formulas(&[Equation::SolenoidField]),
    })
}

/// Input parameters for the Lorentz force on a moving charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LorentzForceInput {
    /// Charge (C), signed
    pub charge_c: f64,
    /// Speed (m/s)
    pub speed_ms: f64,
    /// Field magnitude (T)
    pub field_t: f64,
    /// Angle between velocity and field (degrees)
    #[serde(default = "default_right_angle")]
    pub angle_deg: f64,
}

fn default_right_angle() -> f64 {
    90.0
}

/// Results of a Lorentz force calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LorentzForceResult {
    /// Force magnitude |q|·v·B·sinθ (N)
    pub force_n: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the Lorentz force on a moving charge.
pub fn calculate_lorentz_force(input: &LorentzForceInput) -> PhysicsResult<LorentzForceResult> {
    Ok(LorentzForceResult {
        force_n: electricity::lorentz_force(
            input.charge_c,
            input.speed_ms,
            input.field_t,
            input.angle_deg,
        ),
        formulas: formulas(&[Equation::LorentzForce]),
    })
}

/// Input parameters for magnetic flux through a flat surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagneticFluxInput {
    /// Field magnitude (T)
    pub field_t: f64,
    /// Surface area (m²)
    pub area_m2: f64,
    /// Angle between the field and the surface normal (degrees)
    #[serde(default)]
    pub angle_deg: f64,
}

/// Results of a magnetic flux calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagneticFluxResult {
    /// Flux Φ = B·A·cosθ (Wb)
    pub flux_wb: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate magnetic flux through a flat surface.
pub fn calculate_magnetic_flux(input: &MagneticFluxInput) -> PhysicsResult<MagneticFluxResult> {
    Ok(MagneticFluxResult {
        flux_wb: electricity::magnetic_flux(input.field_t, input.area_m2, input.angle_deg),
        formulas: formulas(&[Equation::MagneticFlux]),
    })
}

/// Input parameters for Faraday induction in a coil.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaradayInput {
    /// Number of turns, at least one
    pub turns: u32,
    /// Change in flux through one turn (Wb)
    pub flux_change_wb: f64,
    /// Time over which the flux changes (s), non-zero
    pub time_change_s: f64,
}

/// Results of a Faraday induction calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaradayResult {
    /// Induced EMF ε = −N·ΔΦ/Δt (V, signed per Lenz)
    pub emf_v: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the EMF induced in a coil.
pub fn calculate_faraday_emf(input: &FaradayInput) -> PhysicsResult<FaradayResult> {
    Ok(FaradayResult {
        emf_v: electricity::faraday_emf(input.turns, input.flux_change_wb, input.time_change_s)?,
        formulas: formulas(&[Equation::FaradayLaw]),
    })
}
