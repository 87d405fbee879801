//! # Electricity and Magnetism Formulas
//!
//! Ohm's law, equivalent resistance, Kirchhoff sums, capacitors, inductors,
//! point charges, and magnetostatics. All quantities are SI.

use crate::errors::{PhysicsError, PhysicsResult};

// ============================================================================
// Ohm's Law and Resistor Networks
// ============================================================================

/// Current through a resistance: I = V/R
pub fn current(voltage: f64, resistance: f64) -> PhysicsResult<f64> {
    if resistance == 0.0 {
        return Err(PhysicsError::invalid_input(
            "resistance",
            "0",
            "Resistance must be non-zero",
        ));
    }
    Ok(voltage / resistance)
}

/// Voltage across a resistance: V = I·R
#[inline]
pub fn voltage(current: f64, resistance: f64) -> f64 {
    current * resistance
}

/// Resistance from voltage and current: R = V/I
pub fn resistance(voltage: f64, current: f64) -> PhysicsResult<f64> {
    if current == 0.0 {
        return Err(PhysicsError::invalid_input(
            "current",
            "0",
            "Current must be non-zero",
        ));
    }
    Ok(voltage / current)
}

/// Equivalent resistance of resistors in series: R = ΣRᵢ
#[inline]
pub fn series_resistance(resistances: &[f64]) -> f64 {
    resistances.iter().sum()
}

/// Equivalent resistance of resistors in parallel: 1/R = Σ(1/Rᵢ)
pub fn parallel_resistance(resistances: &[f64]) -> PhysicsResult<f64> {
    if resistances.is_empty() {
        return Err(PhysicsError::missing_input("resistances"));
    }
    if resistances.iter().any(|&r| r == 0.0) {
        return Err(PhysicsError::invalid_input(
            "resistances",
            "0",
            "No branch resistance may be zero",
        ));
    }
    Ok(1.0 / resistances.iter().map(|r| 1.0 / r).sum::<f64>())
}

/// Kirchhoff voltage law: the signed sum around a closed loop
#[inline]
pub fn kirchhoff_voltage_sum(voltages: &[f64]) -> f64 {
    voltages.iter().sum()
}

/// Kirchhoff current law: the signed sum of currents at a node
#[inline]
pub fn kirchhoff_current_sum(currents: &[f64]) -> f64 {
    currents.iter().sum()
}

/// Electric power: P = V·I
#[inline]
pub fn electric_power(voltage: f64, current: f64) -> f64 {
    voltage * current
}

/// Power dissipated by a resistor: P = I²·R
#[inline]
pub fn dissipated_power(current: f64, resistance: f64) -> f64 {
    current * current * resistance
}

// ============================================================================
// Capacitors and Inductors
// ============================================================================

/// Capacitance: C = Q/V
pub fn capacitance(charge: f64, voltage: f64) -> PhysicsResult<f64> {
    if voltage == 0.0 {
        return Err(PhysicsError::invalid_input(
            "voltage",
            "0",
            "Voltage must be non-zero",
        ));
    }
    Ok(charge / voltage)
}

/// Capacitor charge: Q = C·V
#[inline]
pub fn capacitor_charge(capacitance: f64, voltage: f64) -> f64 {
    capacitance * voltage
}

/// Capacitor energy: U = ½·C·V²
#[inline]
pub fn capacitor_energy(capacitance: f64, voltage: f64) -> f64 {
    0.5 * capacitance * voltage * voltage
}

/// Inductance of a coil: L = N·Φ/I
pub fn inductance(turns: u32, flux: f64, current: f64) -> PhysicsResult<f64> {
    if current == 0.0 {
        return Err(PhysicsError::invalid_input(
            "current",
            "0",
            "Current must be non-zero",
        ));
    }
    Ok(turns as f64 * flux / current)
}

/// Inductor energy: U = ½·L·I²
#[inline]
pub fn inductor_energy(inductance: f64, current: f64) -> f64 {
    0.5 * inductance * current * current
}

// ============================================================================
// Point Charges
// ============================================================================

/// Electric field of a point charge: E = k·|q|/r²
pub fn point_charge_field(charge: f64, distance: f64, k: f64) -> PhysicsResult<f64> {
    if distance == 0.0 {
        return Err(PhysicsError::invalid_input(
            "distance",
            "0",
            "Distance must be non-zero",
        ));
    }
    Ok(k * charge.abs() / (distance * distance))
}

/// Electric potential of a point charge: V = k·q/r
pub fn point_charge_potential(charge: f64, distance: f64, k: f64) -> PhysicsResult<f64> {
    if distance == 0.0 {
        return Err(PhysicsError::invalid_input(
            "distance",
            "0",
            "Distance must be non-zero",
        ));
    }
    Ok(k * charge / distance)
}

/// Force on a test charge in a field: F = q·E
#[inline]
pub fn force_on_charge(test_charge: f64, field: f64) -> f64 {
    test_charge * field
}

// ============================================================================
// Magnetostatics
// ============================================================================

/// Field of a long straight wire: B = μ₀·I/(2π·d)
pub fn wire_field(current: f64, distance: f64, mu0: f64) -> PhysicsResult<f64> {
    if distance == 0.0 {
        return Err(PhysicsError::invalid_input(
            "distance",
            "0",
            "Distance must be non-zero",
        ));
    }
    Ok(mu0 * current / (2.0 * std::f64::consts::PI * distance))
}

/// Field inside a solenoid: B = μ₀·N·I/L
pub fn solenoid_field(turns: u32, current: f64, length: f64, mu0: f64) -> PhysicsResult<f64> {
    if length <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "length",
            length.to_string(),
            "Solenoid length must be positive",
        ));
    }
    Ok(mu0 * turns as f64 * current / length)
}

/// Lorentz force magnitude: F = |q|·v·B·sinθ
///
/// The charge sign only affects the force direction, which a scalar result
/// cannot carry, so electrons and protons report the same magnitude.
#[inline]
pub fn lorentz_force(charge: f64, speed: f64, field: f64, angle_deg: f64) -> f64 {
    charge.abs() * speed * field * angle_deg.to_radians().sin()
}

/// Magnetic flux through a surface: Φ = B·A·cosθ
#[inline]
pub fn magnetic_flux(field: f64, area: f64, angle_deg: f64) -> f64 {
    field * area * angle_deg.to_radians().cos()
}

/// Faraday EMF: ε = −N·ΔΦ/Δt
pub fn faraday_emf(turns: u32, flux_change: f64, time_change: f64) -> PhysicsResult<f64> {
    if time_change == 0.0 {
        return Err(PhysicsError::invalid_input(
            "time_change",
            "0",
            "Time interval must be non-zero",
        ));
    }
    Ok(-(turns as f64) * flux_change / time_change)
}

/// Force between parallel conductors: F = μ₀·I1·I2·L/(2π·d)
pub fn conductor_force(
    current1: f64,
    current2: f64,
    length: f64,
    distance: f64,
    mu0: f64,
) -> PhysicsResult<f64> {
    if distance == 0.0 {
        return Err(PhysicsError::invalid_input(
            "distance",
            "0",
            "Conductor spacing must be non-zero",
        ));
    }
    Ok(mu0 * current1 * current2 * length / (2.0 * std::f64::consts::PI * distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MU0: f64 = 4.0 * std::f64::consts::PI * 1e-7;

    #[test]
    fn test_ohms_law_reference() {
        // V = 12, R = 4 => I = 3 A; R = 0 rejected.
        assert_eq!(current(12.0, 4.0).unwrap(), 3.0);
        assert!(current(12.0, 0.0).is_err());
        assert_eq!(voltage(3.0, 4.0), 12.0);
        assert_eq!(resistance(12.0, 3.0).unwrap(), 4.0);
    }

    #[test]
    fn test_resistor_networks() {
        assert_eq!(series_resistance(&[1.0, 2.0, 3.0]), 6.0);
        // Two 10 Ω in parallel: 5 Ω.
        let r = parallel_resistance(&[10.0, 10.0]).unwrap();
        assert!((r - 5.0).abs() < 1e-12);
        assert!(parallel_resistance(&[10.0, 0.0]).is_err());
        assert!(parallel_resistance(&[]).is_err());
    }

    #[test]
    fn test_kirchhoff_sums() {
        assert_eq!(kirchhoff_voltage_sum(&[12.0, -5.0, -7.0]), 0.0);
        assert_eq!(kirchhoff_current_sum(&[2.0, 3.0, -1.0]), 4.0);
    }

    #[test]
    fn test_capacitor() {
        assert_eq!(capacitance(1e-3, 10.0).unwrap(), 1e-4);
        assert!(capacitance(1e-3, 0.0).is_err());
        assert!((capacitor_charge(1e-6, 5.0) - 5e-6).abs() < 1e-18);
        assert!((capacitor_energy(1e-6, 10.0) - 5e-5).abs() < 1e-18);
    }

    #[test]
    fn test_inductor() {
        let l = inductance(100, 2e-3, 0.5).unwrap();
        assert!((l - 0.4).abs() < 1e-12);
        assert!(inductance(100, 2e-3, 0.0).is_err());
        assert!((inductor_energy(0.4, 0.5) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_point_charge_field_uses_magnitude() {
        let k = 8.9875e9;
        let e_pos = point_charge_field(1e-6, 0.1, k).unwrap();
        let e_neg = point_charge_field(-1e-6, 0.1, k).unwrap();
        assert_eq!(e_pos, e_neg);
        // Potential keeps the sign.
        assert!(point_charge_potential(-1e-6, 0.1, k).unwrap() < 0.0);
    }

    #[test]
    fn test_wire_field() {
        // 1 A at 1 m: B = μ₀/(2π) = 2e-7 T.
        let b = wire_field(1.0, 1.0, MU0).unwrap();
        assert!((b - 2e-7).abs() < 1e-15);
        assert!(wire_field(1.0, 0.0, MU0).is_err());
    }

    #[test]
    fn test_lorentz_and_flux_angles() {
        // Perpendicular: full force; parallel: none.
        let f_perp = lorentz_force(1.6e-19, 1e6, 0.5, 90.0);
        assert!((f_perp - 8e-14).abs() < 1e-20);
        assert!(lorentz_force(1.6e-19, 1e6, 0.5, 0.0).abs() < 1e-25);

        // A negative charge (electron) gives the same non-negative magnitude.
        let f_electron = lorentz_force(-1.6e-19, 1e6, 0.5, 90.0);
        assert!((f_electron - f_perp).abs() < 1e-25);
        assert!(f_electron > 0.0);

        assert!((magnetic_flux(0.5, 2.0, 0.0) - 1.0).abs() < 1e-12);
        assert!(magnetic_flux(0.5, 2.0, 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_faraday_sign() {
        // Increasing flux induces a negative (opposing) EMF.
        let emf = faraday_emf(10, 0.02, 0.5).unwrap();
        assert!((emf + 0.4).abs() < 1e-12);
        assert!(faraday_emf(10, 0.02, 0.0).is_err());
    }
}
