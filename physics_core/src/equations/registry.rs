//! # Equation Registry
//!
//! Central registry of the textbook equations the scenarios evaluate. Each
//! entry carries a human-readable formula string and variable definitions,
//! so scenario results can report exactly which equations produced them.
//!
//! ## Usage
//!
//! ```rust
//! use physics_core::equations::registry::{formulas, Equation};
//!
//! let strings = formulas(&[Equation::FreeFallHeight, Equation::FreeFallImpactTime]);
//! assert_eq!(strings[0], "h(t) = h0 - 1/2*g*t^2");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Categories
// ============================================================================

/// Physics domain a registered equation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    Kinematics,
    Oscillation,
    Dynamics,
    Collisions,
    Energy,
    Electricity,
    Magnetism,
    Waves,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Kinematics => "Kinematics",
            EquationCategory::Oscillation => "Oscillation",
            EquationCategory::Dynamics => "Dynamics",
            EquationCategory::Collisions => "Collisions",
            EquationCategory::Energy => "Energy",
            EquationCategory::Electricity => "Electricity",
            EquationCategory::Magnetism => "Magnetism",
            EquationCategory::Waves => "Waves",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g. "h0", "ω", "μk")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// SI units (e.g. "m", "m/s²", "Ω")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self {
            symbol,
            description,
            units,
        }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Metadata for one registered equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Short name (e.g. "Free fall height")
    pub name: &'static str,
    /// Human-readable formula string, as surfaced in scenario results
    pub formula: &'static str,
    /// Category for grouping
    pub category: EquationCategory,
    /// Variables appearing in the formula
    pub variables: Vec<Variable>,
}

/// Identifier for every equation the scenarios surface to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    // Kinematics
    UniformPosition,
    AcceleratedPosition,
    AcceleratedVelocity,
    FreeFallHeight,
    FreeFallVelocity,
    FreeFallImpactTime,
    ProjectilePosition,
    ProjectileFlightTime,
    ProjectileRange,
    ProjectileMaxHeight,
    // Oscillation
    ShmPosition,
    ShmVelocity,
    ShmAcceleration,
    OscillationPeriod,
    PendulumPeriod,
    PendulumAngle,
    CircularAngle,
    CentripetalAcceleration,
    TangentialSpeed,
    // Dynamics
    NewtonSecondLaw,
    StaticFrictionMax,
    KineticFriction,
    InclineAcceleration,
    PulleyAcceleration,
    PulleyTension,
    // Collisions
    Elastic1dVelocities,
    InelasticFinalVelocity,
    Momentum,
    // Energy
    KineticEnergy,
    GravitationalPotential,
    ElasticPotential,
    WorkEnergyTheorem,
    // Electricity
    OhmsLaw,
    SeriesResistance,
    ParallelResistance,
    KirchhoffVoltageLaw,
    KirchhoffCurrentLaw,
    ElectricPower,
    CapacitorCharge,
    CapacitorEnergy,
    Inductance,
    InductorEnergy,
    // Magnetism
    WireField,
    SolenoidField,
    LorentzForce,
    MagneticFlux,
    FaradayLaw,
    // Waves
    WaveRelation,
    DopplerShift,
    SnellsLaw,
    SoundIntensity,
    IntensityLevel,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        use EquationCategory::*;
        match self {
            Equation::UniformPosition => EquationMetadata {
                name: "Uniform motion position",
                formula: "x(t) = x0 + v*t",
                category: Kinematics,
                variables: vec![
                    Variable::new("x0", "Initial position", "m"),
                    Variable::new("v", "Constant velocity", "m/s"),
                    Variable::new("t", "Elapsed time", "s"),
                ],
            },
            Equation::AcceleratedPosition => EquationMetadata {
                name: "Accelerated motion position",
                formula: "x(t) = x0 + v0*t + 1/2*a*t^2",
                category: Kinematics,
                variables: vec![
                    Variable::new("x0", "Initial position", "m"),
                    Variable::new("v0", "Initial velocity", "m/s"),
                    Variable::new("a", "Constant acceleration", "m/s²"),
                ],
            },
            Equation::AcceleratedVelocity => EquationMetadata {
                name: "Accelerated motion velocity",
                formula: "v(t) = v0 + a*t",
                category: Kinematics,
                variables: vec![
                    Variable::new("v0", "Initial velocity", "m/s"),
                    Variable::new("a", "Constant acceleration", "m/s²"),
                ],
            },
            Equation::FreeFallHeight => EquationMetadata {
                name: "Free fall height",
                formula: "h(t) = h0 - 1/2*g*t^2",
                category: Kinematics,
                variables: vec![
                    Variable::new("h0", "Initial height", "m"),
                    Variable::new("g", "Gravitational acceleration", "m/s²"),
                ],
            },
            Equation::FreeFallVelocity => EquationMetadata {
                name: "Free fall velocity",
                formula: "v(t) = -g*t",
                category: Kinematics,
                variables: vec![Variable::new("g", "Gravitational acceleration", "m/s²")],
            },
            Equation::FreeFallImpactTime => EquationMetadata {
                name: "Free fall impact time",
                formula: "t* = sqrt(2*h0/g)",
                category: Kinematics,
                variables: vec![
                    Variable::new("h0", "Initial height", "m"),
                    Variable::new("g", "Gravitational acceleration", "m/s²"),
                ],
            },
            Equation::ProjectilePosition => EquationMetadata {
                name: "Projectile position",
                formula: "x(t) = v0x*t ; y(t) = h0 + v0y*t - 1/2*g*t^2",
                category: Kinematics,
                variables: vec![
                    Variable::new("v0x", "Horizontal launch speed", "m/s"),
                    Variable::new("v0y", "Vertical launch speed", "m/s"),
                    Variable::new("h0", "Launch height", "m"),
                ],
            },
            Equation::ProjectileFlightTime => EquationMetadata {
                name: "Projectile flight time",
                formula: "t = (v0y + sqrt(v0y^2 + 2*g*h0)) / g",
                category: Kinematics,
                variables: vec![
                    Variable::new("v0y", "Vertical launch speed", "m/s"),
                    Variable::new("h0", "Launch height", "m"),
                ],
            },
            Equation::ProjectileRange => EquationMetadata {
                name: "Projectile range",
                formula: "R = v0x * t_flight",
                category: Kinematics,
                variables: vec![
                    Variable::new("v0x", "Horizontal launch speed", "m/s"),
                    Variable::new("t_flight", "Time of flight", "s"),
                ],
            },
            Equation::ProjectileMaxHeight => EquationMetadata {
                name: "Projectile peak height",
                formula: "h_max = h0 + v0y^2 / (2*g)",
                category: Kinematics,
                variables: vec![
                    Variable::new("v0y", "Vertical launch speed", "m/s"),
                    Variable::new("h0", "Launch height", "m"),
                ],
            },
            Equation::ShmPosition => EquationMetadata {
                name: "SHM position",
                formula: "x(t) = A*cos(ω*t + φ)",
                category: Oscillation,
                variables: vec![
                    Variable::new("A", "Amplitude", "m"),
                    Variable::new("ω", "Angular frequency", "rad/s"),
                    Variable::new("φ", "Initial phase", "rad"),
                ],
            },
            Equation::ShmVelocity => EquationMetadata {
                name: "SHM velocity",
                formula: "v(t) = -A*ω*sin(ω*t + φ)",
                category: Oscillation,
                variables: vec![
                    Variable::new("A", "Amplitude", "m"),
                    Variable::new("ω", "Angular frequency", "rad/s"),
                ],
            },
            Equation::ShmAcceleration => EquationMetadata {
                name: "SHM acceleration",
                formula: "a(t) = -A*ω^2*cos(ω*t + φ)",
                category: Oscillation,
                variables: vec![
                    Variable::new("A", "Amplitude", "m"),
                    Variable::new("ω", "Angular frequency", "rad/s"),
                ],
            },
            Equation::OscillationPeriod => EquationMetadata {
                name: "Oscillation period",
                formula: "T = 2π/ω ; f = 1/T",
                category: Oscillation,
                variables: vec![Variable::new("ω", "Angular frequency", "rad/s")],
            },
            Equation::PendulumPeriod => EquationMetadata {
                name: "Pendulum period",
                formula: "T = 2π*sqrt(L/g)",
                category: Oscillation,
                variables: vec![
                    Variable::new("L", "Pendulum length", "m"),
                    Variable::new("g", "Gravitational acceleration", "m/s²"),
                ],
            },
            Equation::PendulumAngle => EquationMetadata {
                name: "Small-angle pendulum position",
                formula: "θ(t) = θ0*cos(ω*t), ω = sqrt(g/L)",
                category: Oscillation,
                variables: vec![
                    Variable::new("θ0", "Initial angle", "rad"),
                    Variable::new("L", "Pendulum length", "m"),
                ],
            },
            Equation::CircularAngle => EquationMetadata {
                name: "Uniform circular angle",
                formula: "θ(t) = θ0 + ω*t ; x = r*cosθ, y = r*sinθ",
                category: Oscillation,
                variables: vec![
                    Variable::new("r", "Radius", "m"),
                    Variable::new("ω", "Angular speed", "rad/s"),
                ],
            },
            Equation::CentripetalAcceleration => EquationMetadata {
                name: "Centripetal acceleration",
                formula: "a_c = v^2/r = ω^2*r",
                category: Oscillation,
                variables: vec![
                    Variable::new("v", "Tangential speed", "m/s"),
                    Variable::new("r", "Radius", "m"),
                ],
            },
            Equation::TangentialSpeed => EquationMetadata {
                name: "Tangential speed",
                formula: "v = r*ω",
                category: Oscillation,
                variables: vec![
                    Variable::new("r", "Radius", "m"),
                    Variable::new("ω", "Angular speed", "rad/s"),
                ],
            },
            Equation::NewtonSecondLaw => EquationMetadata {
                name: "Newton's second law",
                formula: "F = m*a",
                category: Dynamics,
                variables: vec![
                    Variable::new("m", "Mass", "kg"),
                    Variable::new("a", "Acceleration", "m/s²"),
                ],
            },
            Equation::StaticFrictionMax => EquationMetadata {
                name: "Maximum static friction",
                formula: "Fs_max = μs*N",
                category: Dynamics,
                variables: vec![
                    Variable::new("μs", "Static friction coefficient", "-"),
                    Variable::new("N", "Normal force", "N"),
                ],
            },
            Equation::KineticFriction => EquationMetadata {
                name: "Kinetic friction",
                formula: "Fk = μk*N",
                category: Dynamics,
                variables: vec![
                    Variable::new("μk", "Kinetic friction coefficient", "-"),
                    Variable::new("N", "Normal force", "N"),
                ],
            },
            Equation::InclineAcceleration => EquationMetadata {
                name: "Incline sliding acceleration",
                formula: "a = g*sinθ - μk*g*cosθ",
                category: Dynamics,
                variables: vec![
                    Variable::new("θ", "Incline angle", "rad"),
                    Variable::new("μk", "Kinetic friction coefficient", "-"),
                ],
            },
            Equation::PulleyAcceleration => EquationMetadata {
                name: "Incline-pulley acceleration",
                formula: "a = |m2*g - m1*g*sinθ - μk*m1*g*cosθ| / (m1 + m2)",
                category: Dynamics,
                variables: vec![
                    Variable::new("m1", "Mass on the incline", "kg"),
                    Variable::new("m2", "Hanging mass", "kg"),
                    Variable::new("θ", "Incline angle", "rad"),
                ],
            },
            Equation::PulleyTension => EquationMetadata {
                name: "Incline-pulley tension",
                formula: "T = m2*(g ∓ a)",
                category: Dynamics,
                variables: vec![
                    Variable::new("m2", "Hanging mass", "kg"),
                    Variable::new("a", "System acceleration", "m/s²"),
                ],
            },
            Equation::Elastic1dVelocities => EquationMetadata {
                name: "Elastic 1D final velocities",
                formula: "v1' = ((m1-m2)*v1 + 2*m2*v2)/(m1+m2) ; v2' = ((m2-m1)*v2 + 2*m1*v1)/(m1+m2)",
                category: Collisions,
                variables: vec![
                    Variable::new("m1", "Mass of body 1", "kg"),
                    Variable::new("m2", "Mass of body 2", "kg"),
                ],
            },
            Equation::InelasticFinalVelocity => EquationMetadata {
                name: "Perfectly inelastic final velocity",
                formula: "v' = (m1*v1 + m2*v2)/(m1+m2)",
                category: Collisions,
                variables: vec![
                    Variable::new("m1", "Mass of body 1", "kg"),
                    Variable::new("m2", "Mass of body 2", "kg"),
                ],
            },
            Equation::Momentum => EquationMetadata {
                name: "Linear momentum",
                formula: "p = m*v",
                category: Collisions,
                variables: vec![
                    Variable::new("m", "Mass", "kg"),
                    Variable::new("v", "Velocity", "m/s"),
                ],
            },
            Equation::KineticEnergy => EquationMetadata {
                name: "Kinetic energy",
                formula: "K = 1/2*m*v^2",
                category: Energy,
                variables: vec![
                    Variable::new("m", "Mass", "kg"),
                    Variable::new("v", "Speed", "m/s"),
                ],
            },
            Equation::GravitationalPotential => EquationMetadata {
                name: "Gravitational potential energy",
                formula: "U = m*g*h",
                category: Energy,
                variables: vec![
                    Variable::new("m", "Mass", "kg"),
                    Variable::new("h", "Height", "m"),
                ],
            },
            Equation::ElasticPotential => EquationMetadata {
                name: "Elastic potential energy",
                formula: "U = 1/2*k*x^2",
                category: Energy,
                variables: vec![
                    Variable::new("k", "Spring constant", "N/m"),
                    Variable::new("x", "Displacement", "m"),
                ],
            },
            Equation::WorkEnergyTheorem => EquationMetadata {
                name: "Work-energy theorem",
                formula: "W = ΔK = 1/2*m*(v^2 - v0^2)",
                category: Energy,
                variables: vec![
                    Variable::new("m", "Mass", "kg"),
                    Variable::new("v0", "Initial speed", "m/s"),
                    Variable::new("v", "Final speed", "m/s"),
                ],
            },
            Equation::OhmsLaw => EquationMetadata {
                name: "Ohm's law",
                formula: "I = V/R",
                category: Electricity,
                variables: vec![
                    Variable::new("V", "Voltage", "V"),
                    Variable::new("R", "Resistance", "Ω"),
                ],
            },
            Equation::SeriesResistance => EquationMetadata {
                name: "Series resistance",
                formula: "R_eq = R1 + R2 + ...",
                category: Electricity,
                variables: vec![Variable::new("Ri", "Branch resistances", "Ω")],
            },
            Equation::ParallelResistance => EquationMetadata {
                name: "Parallel resistance",
                formula: "1/R_eq = 1/R1 + 1/R2 + ...",
                category: Electricity,
                variables: vec![Variable::new("Ri", "Branch resistances", "Ω")],
            },
            Equation::KirchhoffVoltageLaw => EquationMetadata {
                name: "Kirchhoff voltage law",
                formula: "ΣV = 0 around a closed loop",
                category: Electricity,
                variables: vec![Variable::new("Vi", "Loop voltages", "V")],
            },
            Equation::KirchhoffCurrentLaw => EquationMetadata {
                name: "Kirchhoff current law",
                formula: "ΣI = 0 at a node",
                category: Electricity,
                variables: vec![Variable::new("Ii", "Node currents", "A")],
            },
            Equation::ElectricPower => EquationMetadata {
                name: "Electric power",
                formula: "P = V*I = I^2*R",
                category: Electricity,
                variables: vec![
                    Variable::new("V", "Voltage", "V"),
                    Variable::new("I", "Current", "A"),
                ],
            },
            Equation::CapacitorCharge => EquationMetadata {
                name: "Capacitor charge",
                formula: "Q = C*V",
                category: Electricity,
                variables: vec![
                    Variable::new("C", "Capacitance", "F"),
                    Variable::new("V", "Voltage", "V"),
                ],
            },
            Equation::CapacitorEnergy => EquationMetadata {
                name: "Capacitor energy",
                formula: "U = 1/2*C*V^2",
                category: Electricity,
                variables: vec![
                    Variable::new("C", "Capacitance", "F"),
                    Variable::new("V", "Voltage", "V"),
                ],
            },
            Equation::Inductance => EquationMetadata {
                name: "Inductance",
                formula: "L = N*Φ/I",
                category: Electricity,
                variables: vec![
                    Variable::new("N", "Number of turns", "-"),
                    Variable::new("Φ", "Magnetic flux", "Wb"),
                    Variable::new("I", "Current", "A"),
                ],
            },
            Equation::InductorEnergy => EquationMetadata {
                name: "Inductor energy",
                formula: "U = 1/2*L*I^2",
                category: Electricity,
                variables: vec![
                    Variable::new("L", "Inductance", "H"),
                    Variable::new("I", "Current", "A"),
                ],
            },
            Equation::WireField => EquationMetadata {
                name: "Straight-wire magnetic field",
                formula: "B = μ0*I/(2π*d)",
                category: Magnetism,
                variables: vec![
                    Variable::new("I", "Current", "A"),
                    Variable::new("d", "Distance from the wire", "m"),
                ],
            },
            Equation::SolenoidField => EquationMetadata {
                name: "Solenoid magnetic field",
                formula: "B = μ0*N*I/L",
                category: Magnetism,
                variables: vec![
                    Variable::new("N", "Number of turns", "-"),
                    Variable::new("L", "Solenoid length", "m"),
                ],
            },
            Equation::LorentzForce => EquationMetadata {
                name: "Lorentz force",
                formula: "F = q*v*B*sinθ",
                category: Magnetism,
                variables: vec![
                    Variable::new("q", "Charge", "C"),
                    Variable::new("B", "Magnetic field", "T"),
                ],
            },
            Equation::MagneticFlux => EquationMetadata {
                name: "Magnetic flux",
                formula: "Φ = B*A*cosθ",
                category: Magnetism,
                variables: vec![
                    Variable::new("B", "Magnetic field", "T"),
                    Variable::new("A", "Surface area", "m²"),
                ],
            },
            Equation::FaradayLaw => EquationMetadata {
                name: "Faraday's law",
                formula: "ε = -N*ΔΦ/Δt",
                category: Magnetism,
                variables: vec![
                    Variable::new("N", "Number of turns", "-"),
                    Variable::new("ΔΦ", "Flux change", "Wb"),
                    Variable::new("Δt", "Time interval", "s"),
                ],
            },
            Equation::WaveRelation => EquationMetadata {
                name: "Wave relation",
                formula: "v = λ*f",
                category: Waves,
                variables: vec![
                    Variable::new("λ", "Wavelength", "m"),
                    Variable::new("f", "Frequency", "Hz"),
                ],
            },
            Equation::DopplerShift => EquationMetadata {
                name: "Doppler shift",
                formula: "f' = f*(v ± v_o)/(v ∓ v_s)",
                category: Waves,
                variables: vec![
                    Variable::new("v", "Wave speed", "m/s"),
                    Variable::new("v_o", "Observer speed", "m/s"),
                    Variable::new("v_s", "Source speed", "m/s"),
                ],
            },
            Equation::SnellsLaw => EquationMetadata {
                name: "Snell's law",
                formula: "n1*sinθ1 = n2*sinθ2",
                category: Waves,
                variables: vec![
                    Variable::new("n1", "Incident medium index", "-"),
                    Variable::new("n2", "Refracting medium index", "-"),
                ],
            },
            Equation::SoundIntensity => EquationMetadata {
                name: "Point-source sound intensity",
                formula: "I = P/(4π*r^2)",
                category: Waves,
                variables: vec![
                    Variable::new("P", "Source power", "W"),
                    Variable::new("r", "Distance", "m"),
                ],
            },
            Equation::IntensityLevel => EquationMetadata {
                name: "Sound intensity level",
                formula: "β = 10*log10(I/I0)",
                category: Waves,
                variables: vec![
                    Variable::new("I", "Intensity", "W/m²"),
                    Variable::new("I0", "Reference intensity", "W/m²"),
                ],
            },
        }
    }
}

/// Every registered equation, in registry order.
pub const ALL_EQUATIONS: &[Equation] = &[
    Equation::UniformPosition,
    Equation::AcceleratedPosition,
    Equation::AcceleratedVelocity,
    Equation::FreeFallHeight,
    Equation::FreeFallVelocity,
    Equation::FreeFallImpactTime,
    Equation::ProjectilePosition,
    Equation::ProjectileFlightTime,
    Equation::ProjectileRange,
    Equation::ProjectileMaxHeight,
    Equation::ShmPosition,
    Equation::ShmVelocity,
    Equation::ShmAcceleration,
    Equation::OscillationPeriod,
    Equation::PendulumPeriod,
    Equation::PendulumAngle,
    Equation::CircularAngle,
    Equation::CentripetalAcceleration,
    Equation::TangentialSpeed,
    Equation::NewtonSecondLaw,
    Equation::StaticFrictionMax,
    Equation::KineticFriction,
    Equation::InclineAcceleration,
    Equation::PulleyAcceleration,
    Equation::PulleyTension,
    Equation::Elastic1dVelocities,
    Equation::InelasticFinalVelocity,
    Equation::Momentum,
    Equation::KineticEnergy,
    Equation::GravitationalPotential,
    Equation::ElasticPotential,
    Equation::WorkEnergyTheorem,
    Equation::OhmsLaw,
    Equation::SeriesResistance,
    Equation::ParallelResistance,
    Equation::KirchhoffVoltageLaw,
    Equation::KirchhoffCurrentLaw,
    Equation::ElectricPower,
    Equation::CapacitorCharge,
    Equation::CapacitorEnergy,
    Equation::Inductance,
    Equation::InductorEnergy,
    Equation::WireField,
    Equation::SolenoidField,
    Equation::LorentzForce,
    Equation::MagneticFlux,
    Equation::FaradayLaw,
    Equation::WaveRelation,
    Equation::DopplerShift,
    Equation::SnellsLaw,
    Equation::SoundIntensity,
    Equation::IntensityLevel,
];

/// Registry grouped by category, in category order of first appearance.
pub static EQUATIONS_BY_CATEGORY: Lazy<Vec<(EquationCategory, Vec<Equation>)>> = Lazy::new(|| {
    let mut groups: Vec<(EquationCategory, Vec<Equation>)> = Vec::new();
    for &eq in ALL_EQUATIONS {
        let category = eq.metadata().category;
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, list)) => list.push(eq),
            None => groups.push((category, vec![eq])),
        }
    }
    groups
});

/// Render the formula strings for a set of equations, in the given order.
///
/// This is the `formulas` array scenario results hand to API consumers.
pub fn formulas(equations: &[Equation]) -> Vec<String> {
    equations
        .iter()
        .map(|eq| eq.metadata().formula.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty());
            assert!(!meta.formula.is_empty());
            assert!(!meta.variables.is_empty());
        }
    }

    #[test]
    fn test_category_grouping_covers_everything() {
        let total: usize = EQUATIONS_BY_CATEGORY
            .iter()
            .map(|(_, list)| list.len())
            .sum();
        assert_eq!(total, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_formula_strings() {
        let strings = formulas(&[Equation::OhmsLaw, Equation::WaveRelation]);
        assert_eq!(strings, vec!["I = V/R", "v = λ*f"]);
    }
}
