//! # Wave Scenarios
//!
//! The wave relation in every solved form, the Doppler effect with tagged
//! approach/recede directions, Snell refraction, and point-source sound
//! intensity with its decibel level.

use serde::{Deserialize, Serialize};

use crate::constants::PhysicsConstants;
use crate::equations::registry::{formulas, Equation};
use crate::equations::waves;
use crate::equations::waves::Motion;
use crate::errors::{PhysicsError, PhysicsResult};

// ============================================================================
// Wave Relation
// ============================================================================

/// Wave-relation input: name the unknown, give the other two.
///
/// Serializes with an explicit tag, e.g.
/// `{"Wavelength": {"speed_ms": 343.0, "frequency_hz": 440.0}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WaveRelationInput {
    /// Solve v = λ·f
    Speed { wavelength_m: f64, frequency_hz: f64 },
    /// Solve λ = v/f
    Wavelength { speed_ms: f64, frequency_hz: f64 },
    /// Solve f = v/λ
    Frequency { speed_ms: f64, wavelength_m: f64 },
}

/// Results of a wave-relation calculation: all three quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveRelationResult {
    /// Propagation speed (m/s)
    pub speed_ms: f64,
    /// Wavelength (m)
    pub wavelength_m: f64,
    /// Frequency (Hz)
    pub frequency_hz: f64,
    /// Wave period 1/f (s)
    pub period_s: f64,
    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Solve the wave relation for the named unknown.
pub fn calculate_wave_relation(input: &WaveRelationInput) -> PhysicsResult<WaveRelationResult> {
    let (v, lambda, f) = match *input {
        WaveRelationInput::Speed {
            wavelength_m,
            frequency_hz,
        } => (
            waves::wave_speed(wavelength_m, frequency_hz),
            wavelength_m,
            frequency_hz,
        ),
        WaveRelationInput::Wavelength {
            speed_ms,
            frequency_hz,
        } => (
            speed_ms,
            waves::wavelength(speed_ms, frequency_hz)?,
            frequency_hz,
        ),
        WaveRelationInput::Frequency {
            speed_ms,
            wavelength_m,
        } => (
            speed_ms,
            wavelength_m,
            waves::frequency(speed_ms, wavelength_m)?,
        ),
    };

    if f == 0.0 {
        return Err(PhysicsError::invalid_input(
            "frequency_hz",
            "0",
            "Frequency must be non-zero",
        ));
    }
    Ok(WaveRelationResult {
        speed_ms: v,
        wavelength_m: lambda,
        frequency_hz: f,
        period_s: 1.0 / f,
        formulas: formulas(&[Equation::WaveRelation]),
    })
}

// ============================================================================
// Doppler Effect
// ============================================================================

/// Input parameters for the Doppler effect.
///
/// Speeds are non-negative magnitudes; each participant carries its own
/// tagged direction relative to the other.
///
/// ## JSON Example
///
/// ```json
/// {
///   "source_frequency_hz": 440.0,
///   "wave_speed_ms": 343.0,
///   "observer_speed_ms": 10.0,
///   "observer_motion": "Approaching",
///   "source_speed_ms": 0.0,
///   "source_motion": "Receding"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DopplerInput {
    /// Emitted frequency (Hz), strictly positive
    pub source_frequency_hz: f64,

    /// Wave propagation speed in the medium (m/s), strictly positive
    pub wave_speed_ms: f64,

    /// Observer speed magnitude (m/s), non-negative
    #[serde(default)]
    pub observer_speed_ms: f64,

    /// Observer direction relative to the source
    #[serde(default = "default_motion")]
    pub observer_motion: Motion,

    /// Source speed magnitude (m/s), non-negative
    #[serde(default)]
    pub source_speed_ms: f64,

    /// Source direction relative to the observer
    #[serde(default = "default_motion")]
    pub source_motion: Motion,
}

fn default_motion() -> Motion {
    Motion::Approaching
}

impl DopplerInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        if self.source_frequency_hz <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "source_frequency_hz",
                self.source_frequency_hz.to_string(),
                "Emitted frequency must be positive",
            ));
        }
        if self.wave_speed_ms <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "wave_speed_ms",
                self.wave_speed_ms.to_string(),
                "Wave speed must be positive",
            ));
        }
        if self.observer_speed_ms < 0.0 || self.source_speed_ms < 0.0 {
            return Err(PhysicsError::invalid_input(
                "speed",
                format!("{}, {}", self.observer_speed_ms, self.source_speed_ms),
                "Speeds are magnitudes; use the motion tags for direction",
            ));
        }
        Ok(())
    }
}

/// Results of a Doppler calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DopplerResult {
    /// Frequency heard by the observer (Hz)
    pub observed_frequency_hz: f64,

    /// Observed minus emitted frequency (Hz, positive on approach)
    pub shift_hz: f64,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the Doppler-shifted frequency.
pub fn calculate_doppler(input: &DopplerInput) -> PhysicsResult<DopplerResult> {
    input.validate()?;
    let observed = waves::doppler_frequency(
        input.source_frequency_hz,
        input.wave_speed_ms,
        input.observer_speed_ms,
        input.source_speed_ms,
        input.observer_motion,
        input.source_motion,
    )?;
    Ok(DopplerResult {
        observed_frequency_hz: observed,
        shift_hz: observed - input.source_frequency_hz,
        formulas: formulas(&[Equation::DopplerShift]),
    })
}

// ============================================================================
// Refraction
// ============================================================================

/// Input parameters for Snell refraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefractionInput {
    /// Angle of incidence from the normal (degrees)
    pub incidence_angle_deg: f64,

    /// Refractive index of the incident medium, strictly positive
    pub n1: f64,

    /// Refractive index of the refracting medium, strictly positive
    pub n2: f64,

    /// Physical constants (defaults to standard values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

impl RefractionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PhysicsResult<()> {
        self.constants.validate()?;
        if self.n1 <= 0.0 || self.n2 <= 0.0 {
            return Err(PhysicsError::invalid_input(
                "refractive_index",
                format!("{}, {}", self.n1, self.n2),
                "Refractive indices must be positive",
            ));
        }
        Ok(())
    }
}

/// Results of a refraction calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefractionResult {
    /// Refraction angle from the normal (degrees)
    pub refraction_angle_deg: f64,

    /// Light speed in the incident medium c/n1 (m/s)
    pub speed_in_first_ms: f64,

    /// Light speed in the refracting medium c/n2 (m/s)
    pub speed_in_second_ms: f64,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the refracted ray angle.
///
/// # Errors
///
/// `NoRealSolution` on total internal reflection.
pub fn calculate_refraction(input: &RefractionInput) -> PhysicsResult<RefractionResult> {
    input.validate()?;
    let angle = waves::refraction_angle(input.incidence_angle_deg, input.n1, input.n2)?;
    let c = input.constants.light_speed;
    Ok(RefractionResult {
        refraction_angle_deg: angle,
        speed_in_first_ms: waves::medium_speed(c, input.n1)?,
        speed_in_second_ms: waves::medium_speed(c, input.n2)?,
        formulas: formulas(&[Equation::SnellsLaw]),
    })
}

// ============================================================================
// Sound Intensity
// ============================================================================

/// Input parameters for point-source sound intensity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundIntensityInput {
    /// Acoustic power of the source (W), strictly positive
    pub power_w: f64,

    /// Distance from the source (m), strictly positive
    pub distance_m: f64,

    /// Physical constants (defaults to standard values)
    #[serde(default)]
    pub constants: PhysicsConstants,
}

/// Results of a sound-intensity calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundIntensityResult {
    /// Intensity I = P/(4π·r²) (W/m²)
    pub intensity_wm2: f64,

    /// Level above the hearing threshold (dB)
    pub level_db: f64,

    /// Equations used, as human-readable strings
    pub formulas: Vec<String>,
}

/// Calculate the intensity and decibel level of a point sound source.
pub fn calculate_sound_intensity(
    input: &SoundIntensityInput,
) -> PhysicsResult<SoundIntensityResult> {
    input.constants.validate()?;
    if input.power_w <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "power_w",
            input.power_w.to_string(),
            "Source power must be positive",
        ));
    }
    let intensity = waves::sound_intensity(input.power_w, input.distance_m)?;
    let level = waves::intensity_level_db(intensity, input.constants.hearing_threshold)?;
    Ok(SoundIntensityResult {
        intensity_wm2: intensity,
        level_db: level,
        formulas: formulas(&[Equation::SoundIntensity, Equation::IntensityLevel]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_relation_all_forms() {
        let speed = calculate_wave_relation(&WaveRelationInput::Speed {
            wavelength_m: 0.78,
            frequency_hz: 440.0,
        })
        .unwrap();
        assert!((speed.speed_ms - 343.2).abs() < 1e-9);

        let lambda = calculate_wave_relation(&WaveRelationInput::Wavelength {
            speed_ms: 343.0,
            frequency_hz: 440.0,
        })
        .unwrap();
        assert!((lambda.wavelength_m - 343.0 / 440.0).abs() < 1e-12);

        let freq = calculate_wave_relation(&WaveRelationInput::Frequency {
            speed_ms: 343.0,
            wavelength_m: 0.5,
        })
        .unwrap();
        assert!((freq.frequency_hz - 686.0).abs() < 1e-9);
        assert!((freq.period_s - 1.0 / 686.0).abs() < 1e-15);
    }

    #[test]
    fn test_wave_relation_zero_wavelength_rejected() {
        let err = calculate_wave_relation(&WaveRelationInput::Frequency {
            speed_ms: 343.0,
            wavelength_m: 0.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    fn doppler(observer: Motion, source: Motion) -> DopplerInput {
        DopplerInput {
            source_frequency_hz: 440.0,
            wave_speed_ms: 343.0,
            observer_speed_ms: 10.0,
            observer_motion: observer,
            source_speed_ms: 20.0,
            source_motion: source,
        }
    }

    #[test]
    fn test_doppler_approach_raises_pitch() {
        let result =
            calculate_doppler(&doppler(Motion::Approaching, Motion::Approaching)).unwrap();
        assert!(result.observed_frequency_hz > 440.0);
        assert!(result.shift_hz > 0.0);
        // f' = 440·(343+10)/(343−20)
        let expected = 440.0 * 353.0 / 323.0;
        assert!((result.observed_frequency_hz - expected).abs() < 1e-9);
    }

    #[test]
    fn test_doppler_recession_lowers_pitch() {
        let result = calculate_doppler(&doppler(Motion::Receding, Motion::Receding)).unwrap();
        assert!(result.observed_frequency_hz < 440.0);
        let expected = 440.0 * (343.0 - 10.0) / (343.0 + 20.0);
        assert!((result.observed_frequency_hz - expected).abs() < 1e-9);
    }

    #[test]
    fn test_doppler_negative_speed_rejected() {
        let mut input = doppler(Motion::Approaching, Motion::Approaching);
        input.observer_speed_ms = -5.0;
        assert!(calculate_doppler(&input).is_err());
    }

    #[test]
    fn test_refraction_into_denser_medium_bends_toward_normal() {
        let input = RefractionInput {
            incidence_angle_deg: 30.0,
            n1: 1.0,
            n2: 1.5,
            constants: PhysicsConstants::default(),
        };
        let result = calculate_refraction(&input).unwrap();
        assert!(result.refraction_angle_deg < 30.0);
        // sinθ2 = sin30°/1.5 => θ2 ≈ 19.47°
        assert!((result.refraction_angle_deg - 19.471).abs() < 1e-3);
        assert!(result.speed_in_second_ms < result.speed_in_first_ms);
    }

    #[test]
    fn test_total_internal_reflection() {
        let input = RefractionInput {
            incidence_angle_deg: 60.0,
            n1: 1.5,
            n2: 1.0,
            constants: PhysicsConstants::default(),
        };
        let err = calculate_refraction(&input).unwrap_err();
        assert_eq!(err.error_code(), "NO_REAL_SOLUTION");
    }

    #[test]
    fn test_sound_intensity_and_level() {
        let input = SoundIntensityInput {
            power_w: 0.1,
            distance_m: 5.0,
            constants: PhysicsConstants::default(),
        };
        let result = calculate_sound_intensity(&input).unwrap();
        let expected = 0.1 / (4.0 * std::f64::consts::PI * 25.0);
        assert!((result.intensity_wm2 - expected).abs() < 1e-12);
        assert!((result.level_db - 10.0 * (expected / 1e-12).log10()).abs() < 1e-9);
    }

    #[test]
    fn test_sound_intensity_zero_distance_rejected() {
        let input = SoundIntensityInput {
            power_w: 0.1,
            distance_m: 0.0,
            constants: PhysicsConstants::default(),
        };
        assert!(calculate_sound_intensity(&input).is_err());
    }
}
