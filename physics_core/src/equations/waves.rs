//! # Wave Formulas
//!
//! The wave relation v = λ·f in its three solved forms, the Doppler effect,
//! Snell refraction, and sound intensity.

use serde::{Deserialize, Serialize};

use crate::errors::{PhysicsError, PhysicsResult};

/// Relative motion of a Doppler source or observer along the line between
/// them. Replaces the original free-form string argument with a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Moving toward the other party
    Approaching,
    /// Moving away from the other party
    Receding,
}

/// Wavelength: λ = v/f
pub fn wavelength(speed: f64, frequency: f64) -> PhysicsResult<f64> {
    if frequency == 0.0 {
        return Err(PhysicsError::invalid_input(
            "frequency",
            "0",
            "Frequency must be non-zero",
        ));
    }
    Ok(speed / frequency)
}

/// Frequency: f = v/λ
pub fn frequency(speed: f64, wavelength: f64) -> PhysicsResult<f64> {
    if wavelength == 0.0 {
        return Err(PhysicsError::invalid_input(
            "wavelength",
            "0",
            "Wavelength must be non-zero",
        ));
    }
    Ok(speed / wavelength)
}

/// Wave speed: v = λ·f
#[inline]
pub fn wave_speed(wavelength: f64, frequency: f64) -> f64 {
    wavelength * frequency
}

/// Doppler-shifted observed frequency:
/// f' = f·(v ± v_o)/(v ∓ v_s), signs chosen so approach raises pitch.
pub fn doppler_frequency(
    source_frequency: f64,
    wave_speed: f64,
    observer_speed: f64,
    source_speed: f64,
    observer_motion: Motion,
    source_motion: Motion,
) -> PhysicsResult<f64> {
    if wave_speed == 0.0 {
        return Err(PhysicsError::invalid_input(
            "wave_speed",
            "0",
            "Wave speed must be non-zero",
        ));
    }

    let v_o = match observer_motion {
        Motion::Approaching => observer_speed,
        Motion::Receding => -observer_speed,
    };
    let v_s = match source_motion {
        Motion::Approaching => -source_speed,
        Motion::Receding => source_speed,
    };

    let denom = wave_speed + v_s;
    if denom == 0.0 {
        return Err(PhysicsError::invalid_input(
            "source_speed",
            source_speed.to_string(),
            "Source moving at exactly the wave speed",
        ));
    }
    Ok(source_frequency * (wave_speed + v_o) / denom)
}

/// Refraction angle from Snell's law: n1·sinθ1 = n2·sinθ2
///
/// # Errors
///
/// `NoRealSolution` on total internal reflection (|sinθ2| > 1).
pub fn refraction_angle(
    incidence_angle_deg: f64,
    n1: f64,
    n2: f64,
) -> PhysicsResult<f64> {
    if n2 == 0.0 {
        return Err(PhysicsError::invalid_input(
            "n2",
            "0",
            "Refractive index must be non-zero",
        ));
    }
    let sin_refraction = n1 * incidence_angle_deg.to_radians().sin() / n2;
    if sin_refraction.abs() > 1.0 {
        return Err(PhysicsError::no_real_solution(
            "total internal reflection, no refracted ray",
        ));
    }
    Ok(sin_refraction.asin().to_degrees())
}

/// Wave speed in a medium: v = c/n
pub fn medium_speed(vacuum_speed: f64, refractive_index: f64) -> PhysicsResult<f64> {
    if refractive_index == 0.0 {
        return Err(PhysicsError::invalid_input(
            "refractive_index",
            "0",
            "Refractive index must be non-zero",
        ));
    }
    Ok(vacuum_speed / refractive_index)
}

/// Sound intensity of a point source: I = P/(4π·r²)
pub fn sound_intensity(power: f64, distance: f64) -> PhysicsResult<f64> {
    if distance == 0.0 {
        return Err(PhysicsError::invalid_input(
            "distance",
            "0",
            "Distance must be non-zero",
        ));
    }
    Ok(power / (4.0 * std::f64::consts::PI * distance * distance))
}

/// Sound intensity level: β = 10·log₁₀(I/I₀) dB
pub fn intensity_level_db(intensity: f64, reference: f64) -> PhysicsResult<f64> {
    if intensity <= 0.0 || reference <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "intensity",
            format!("I={intensity}, I0={reference}"),
            "Intensities must be positive",
        ));
    }
    Ok(10.0 * (intensity / reference).log10())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_relation_forms() {
        // 340 m/s at 170 Hz: λ = 2 m, and the forms agree with each other.
        let l = wavelength(340.0, 170.0).unwrap();
        assert_eq!(l, 2.0);
        assert_eq!(frequency(340.0, l).unwrap(), 170.0);
        assert_eq!(wave_speed(l, 170.0), 340.0);
        assert!(wavelength(340.0, 0.0).is_err());
    }

    #[test]
    fn test_doppler_approach_raises_pitch() {
        let f = doppler_frequency(
            440.0,
            343.0,
            0.0,
            20.0,
            Motion::Approaching,
            Motion::Approaching,
        )
        .unwrap();
        assert!(f > 440.0);

        let f = doppler_frequency(
            440.0,
            343.0,
            0.0,
            20.0,
            Motion::Approaching,
            Motion::Receding,
        )
        .unwrap();
        assert!(f < 440.0);
    }

    #[test]
    fn test_doppler_stationary_identity() {
        let f = doppler_frequency(
            440.0,
            343.0,
            0.0,
            0.0,
            Motion::Approaching,
            Motion::Approaching,
        )
        .unwrap();
        assert_eq!(f, 440.0);
    }

    #[test]
    fn test_refraction_air_to_water() {
        // n1 = 1, n2 = 1.33, 45° in: about 32.1° out.
        let angle = refraction_angle(45.0, 1.0, 1.33).unwrap();
        assert!((angle - 32.12).abs() < 0.05);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Water to air beyond the critical angle (~48.6°).
        let result = refraction_angle(60.0, 1.33, 1.0);
        assert_eq!(result.unwrap_err().error_code(), "NO_REAL_SOLUTION");
    }

    #[test]
    fn test_sound_intensity_and_level() {
        // 1 W at 1 m: I = 1/(4π) ≈ 0.0796 W/m² ≈ 109 dB over 1e-12.
        let i = sound_intensity(1.0, 1.0).unwrap();
        assert!((i - 0.0796).abs() < 1e-4);
        let db = intensity_level_db(i, 1e-12).unwrap();
        assert!((db - 109.0).abs() < 0.1);
        assert!(intensity_level_db(0.0, 1e-12).is_err());
    }
}
