//! # Circuit Scenarios
//!
//! DC circuit calculations: Ohm's law in every solved form, equivalent
//! resistance of series/parallel networks, Kirchhoff loop and node sums,
//! and energy storage in capacitors and inductors.

use serde::{Deserialize, Serialize};

use crate::equations::electricity;
use crate::equations::registry::{formulas, Equation};
use crate::errors::{PhysicsError, PhysicsResult};

// ============================================================================
// Ohm's Law
// ============================================================================

/// Ohm's-law input: name the unknown, give the other two.
///
/// Serializes with an explicit tag, e.g.
/// `{"Current": {"voltage_v": 12.0, "resistance_ohm": 4.0}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OhmsLawInput {
    /// Solve I = V/R
    Current { voltage_v: f64, resistance_ohm: f64 },
    /// Solve V = I·R
    Voltage { current_a: f64, resistance_ohm: f64 },
    /// Solve R = V/I
    Resistance { voltage_v: f64, current_a: f64 },
}

/// Results of an Ohm's-law calculation: all three quantities plus power.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhmsLawResult {
    /// Voltage (V)
    pub voltage_v: f64,
    /// Current (A)
    pub current_a: f64,
    /// Resistance (Ω)
    pub resistance_ohm: f64,
    /// Dissipated power V·I (W)
    pub power_w: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Solve Ohm's law for the named unknown.
pub fn calculate_ohms_law(input: &OhmsLawInput) -> PhysicsResult<OhmsLawResult> {
    let (v, i, r) = match *input {
        OhmsLawInput::Current {
            voltage_v,
            resistance_ohm,
        } => {
            let i = electricity::current(voltage_v, resistance_ohm)?;
            (voltage_v, i, resistance_ohm)
        }
        OhmsLawInput::Voltage {
            current_a,
            resistance_ohm,
        } => (
            electricity::voltage(current_a, resistance_ohm),
            current_a,
            resistance_ohm,
        ),
        OhmsLawInput::Resistance {
            voltage_v,
            current_a,
        } => {
            let r = electricity::resistance(voltage_v, current_a)?;
            (voltage_v, current_a, r)
        }
    };

    Ok(OhmsLawResult {
        voltage_v: v,
        current_a: i,
        resistance_ohm: r,
        power_w: electricity::electric_power(v, i),
        formulas: formulas(&[Equation::OhmsLaw, Equation::ElectricPower]),
    })
}

// ============================================================================
// Equivalent Resistance
// ============================================================================

/// How the resistors are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arrangement {
    Series,
    Parallel,
}

/// Input parameters for an equivalent-resistance calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquivalentResistanceInput {
    /// Branch resistances (Ω), at least one
    pub resistances_ohm: Vec<f64>,
    /// Series or parallel wiring
    pub arrangement: Arrangement,
}

/// Results of an equivalent-resistance calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquivalentResistanceResult {
    /// Equivalent resistance (Ω)
    pub equivalent_ohm: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Reduce a series or parallel resistor network.
pub fn calculate_equivalent_resistance(
    input: &EquivalentResistanceInput,
) -> PhysicsResult<EquivalentResistanceResult> {
    if input.resistances_ohm.is_empty() {
        return Err(PhysicsError::missing_input("resistances_ohm"));
    }
    let (equivalent, equation) = match input.arrangement {
        Arrangement::Series => (
            electricity::series_resistance(&input.resistances_ohm),
            Equation::SeriesResistance,
        ),
        Arrangement::Parallel => (
            electricity::parallel_resistance(&input.resistances_ohm)?,
            Equation::ParallelResistance,
        ),
    };
    Ok(EquivalentResistanceResult {
        equivalent_ohm: equivalent,
        formulas: formulas(&[equation]),
    })
}

// ============================================================================
// Kirchhoff Sums
// ============================================================================

/// Input parameters for a Kirchhoff voltage-loop check.
///
/// Signed voltages around a closed loop: sources positive in the traversal
/// direction, drops negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KirchhoffLoopInput {
    /// Signed loop voltages (V)
    pub voltages_v: Vec<f64>,
}

/// Input parameters for a Kirchhoff current-node check.
///
/// Signed currents at a node: inflows positive, outflows negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KirchhoffNodeInput {
    /// Signed node currents (A)
    pub currents_a: Vec<f64>,
}

/// Results of a Kirchhoff sum check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KirchhoffResult {
    /// Signed residual of the sum (V or A)
    pub residual: f64,
    /// Whether the sum closes to zero within 1e-9
    pub balanced: bool,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Sum the voltages around a closed loop.
pub fn calculate_voltage_loop(input: &KirchhoffLoopInput) -> PhysicsResult<KirchhoffResult> {
    if input.voltages_v.is_empty() {
        return Err(PhysicsError::missing_input("voltages_v"));
    }
    let residual = electricity::kirchhoff_voltage_sum(&input.voltages_v);
    Ok(KirchhoffResult {
        residual,
        balanced: residual.abs() < 1e-9,
        formulas: formulas(&[Equation::KirchhoffVoltageLaw]),
    })
}

/// Sum the currents at a node.
pub fn calculate_current_node(input: &KirchhoffNodeInput) -> PhysicsResult<KirchhoffResult> {
    if input.currents_a.is_empty() {
        return Err(PhysicsError::missing_input("currents_a"));
    }
    let residual = electricity::kirchhoff_current_sum(&input.currents_a);
    Ok(KirchhoffResult {
        residual,
        balanced: residual.abs() < 1e-9,
        formulas: formulas(&[Equation::KirchhoffCurrentLaw]),
    })
}

// ============================================================================
// Capacitor / Inductor Storage
// ============================================================================

/// Input parameters for a charged capacitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitorInput {
    /// Capacitance (F), strictly positive
    pub capacitance_f: f64,
    /// Voltage across the plates (V)
    pub voltage_v: f64,
}

/// Results of a capacitor calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitorResult {
    /// Stored charge Q = C·V (C)
    pub charge_c: f64,
    /// Stored energy ½·C·V² (J)
    pub energy_j: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the charge and energy of a capacitor.
pub fn calculate_capacitor(input: &CapacitorInput) -> PhysicsResult<CapacitorResult> {
    if input.capacitance_f <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "capacitance_f",
            input.capacitance_f.to_string(),
            "Capacitance must be positive",
        ));
    }
    Ok(CapacitorResult {
        charge_c: electricity::capacitor_charge(input.capacitance_f, input.voltage_v),
        energy_j: electricity::capacitor_energy(input.capacitance_f, input.voltage_v),
        formulas: formulas(&[Equation::CapacitorCharge, Equation::CapacitorEnergy]),
    })
}

/// Input parameters for a current-carrying inductor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InductorInput {
    /// Number of turns, at least one
    pub turns: u32,
    /// Magnetic flux through one turn (Wb)
    pub flux_wb: f64,
    /// Current (A), non-zero
    pub current_a: f64,
}

/// Results of an inductor calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InductorResult {
    /// Inductance L = N·Φ/I (H)
    pub inductance_h: f64,
    /// Stored energy ½·L·I² (J)
    pub energy_j: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the inductance and stored energy of an inductor.
pub fn calculate_inductor(input: &InductorInput) -> PhysicsResult<InductorResult> {
    let inductance = electricity::inductance(input.turns, input.flux_wb, input.current_a)?;
    Ok(InductorResult {
        inductance_h: inductance,
        energy_j: electricity::inductor_energy(inductance, input.current_a),
        formulas: formulas(&[Equation::Inductance, Equation::InductorEnergy]),
    })
}
