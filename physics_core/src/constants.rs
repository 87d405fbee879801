//! # Physical Constants
//!
//! One shared, injectable set of physical constants. The standard values
//! live in [`PhysicsConstants::default`]; scenarios accept the struct as an
//! input field (with `#[serde(default)]`) so a caller can run the same
//! formula under lunar gravity without touching any global.

use serde::{Deserialize, Serialize};

use crate::errors::{PhysicsError, PhysicsResult};

/// Physical constants used across the formula library.
///
/// All values are SI. Construct with `PhysicsConstants::default()` for
/// standard Earth conditions, or build the struct directly to override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConstants {
    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,

    /// Coulomb constant k (N·m²/C²)
    pub coulomb: f64,

    /// Permeability of free space μ₀ (T·m/A)
    pub vacuum_permeability: f64,

    /// Speed of light in vacuum c (m/s)
    pub light_speed: f64,

    /// Reference sound intensity I₀, the hearing threshold (W/m²)
    pub hearing_threshold: f64,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        PhysicsConstants {
            gravity: 9.81,
            coulomb: 8.9875e9,
            vacuum_permeability: 4.0 * std::f64::consts::PI * 1e-7,
            light_speed: 299_792_458.0,
            hearing_threshold: 1e-12,
        }
    }
}

impl PhysicsConstants {
    /// Check every constant is positive and finite. Scenarios that accept
    /// an overridden constant set call this before computing, so a payload
    /// like `{"constants": {"gravity": 0.0}}` is rejected instead of
    /// producing infinite or NaN results.
    pub fn validate(&self) -> PhysicsResult<()> {
        let fields = [
            ("gravity", self.gravity),
            ("coulomb", self.coulomb),
            ("vacuum_permeability", self.vacuum_permeability),
            ("light_speed", self.light_speed),
            ("hearing_threshold", self.hearing_threshold),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(PhysicsError::invalid_input(
                    field,
                    value.to_string(),
                    "Physical constant must be positive and finite",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_gravity() {
        let c = PhysicsConstants::default();
        assert_eq!(c.gravity, 9.81);
    }

    #[test]
    fn test_validate_rejects_nonpositive_and_nonfinite() {
        assert!(PhysicsConstants::default().validate().is_ok());

        let zero_g = PhysicsConstants {
            gravity: 0.0,
            ..PhysicsConstants::default()
        };
        assert_eq!(zero_g.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let negative_g = PhysicsConstants {
            gravity: -9.81,
            ..PhysicsConstants::default()
        };
        assert!(negative_g.validate().is_err());

        let nan_c = PhysicsConstants {
            light_speed: f64::NAN,
            ..PhysicsConstants::default()
        };
        assert!(nan_c.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_override() {
        // A payload that only overrides gravity keeps the other defaults.
        let c: PhysicsConstants = serde_json::from_str(r#"{"gravity": 1.62}"#).unwrap();
        assert_eq!(c.gravity, 1.62);
        assert_eq!(c.coulomb, 8.9875e9);
    }
}
