//! # Collision Formulas
//!
//! Elastic collisions (1D, and 2D/3D via decomposition along the contact
//! normal) and perfectly inelastic collisions. Elastic collisions conserve
//! momentum and kinetic energy; perfectly inelastic collisions conserve
//! momentum only, with both bodies sharing one final velocity.

use crate::errors::{PhysicsError, PhysicsResult};

fn require_positive_masses(m1: f64, m2: f64) -> PhysicsResult<()> {
    if m1 <= 0.0 || m2 <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "mass",
            format!("m1={m1}, m2={m2}"),
            "Masses must be positive",
        ));
    }
    Ok(())
}

/// Final velocities of an elastic 1D collision:
///
/// ```text
/// v1' = ((m1−m2)/(m1+m2))·v1 + (2·m2/(m1+m2))·v2
/// v2' = (2·m1/(m1+m2))·v1 + ((m2−m1)/(m1+m2))·v2
/// ```
pub fn elastic_1d(m1: f64, v1: f64, m2: f64, v2: f64) -> PhysicsResult<(f64, f64)> {
    require_positive_masses(m1, m2)?;
    Ok(elastic_normal_components(m1, v1, m2, v2))
}

/// The 1D elastic exchange applied to the velocity components along the
/// contact normal. Tangential components are untouched by a frictionless
/// elastic collision, which is what reduces 2D/3D to this.
#[inline]
fn elastic_normal_components(m1: f64, v1n: f64, m2: f64, v2n: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1n_f = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / total;
    let v2n_f = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / total;
    (v1n_f, v2n_f)
}

fn normalize_2d(n: [f64; 2]) -> PhysicsResult<[f64; 2]> {
    let norm = (n[0] * n[0] + n[1] * n[1]).sqrt();
    if norm == 0.0 {
        return Err(PhysicsError::invalid_input(
            "normal",
            "(0, 0)",
            "Contact normal must be non-zero",
        ));
    }
    Ok([n[0] / norm, n[1] / norm])
}

fn normalize_3d(n: [f64; 3]) -> PhysicsResult<[f64; 3]> {
    let norm = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if norm == 0.0 {
        return Err(PhysicsError::invalid_input(
            "normal",
            "(0, 0, 0)",
            "Contact normal must be non-zero",
        ));
    }
    Ok([n[0] / norm, n[1] / norm, n[2] / norm])
}

/// Elastic 2D collision along a contact normal.
///
/// The normal is normalized if needed. Velocities are decomposed into
/// normal and tangential parts; the normal parts exchange per the 1D
/// formulas, the tangential parts carry through.
pub fn elastic_2d(
    m1: f64,
    v1: [f64; 2],
    m2: f64,
    v2: [f64; 2],
    normal: [f64; 2],
) -> PhysicsResult<([f64; 2], [f64; 2])> {
    require_positive_masses(m1, m2)?;
    let n = normalize_2d(normal)?;
    let t = [-n[1], n[0]];

    let v1n = v1[0] * n[0] + v1[1] * n[1];
    let v2n = v2[0] * n[0] + v2[1] * n[1];
    let v1t = v1[0] * t[0] + v1[1] * t[1];
    let v2t = v2[0] * t[0] + v2[1] * t[1];

    let (v1n_f, v2n_f) = elastic_normal_components(m1, v1n, m2, v2n);

    Ok((
        [v1n_f * n[0] + v1t * t[0], v1n_f * n[1] + v1t * t[1]],
        [v2n_f * n[0] + v2t * t[0], v2n_f * n[1] + v2t * t[1]],
    ))
}

/// Elastic 3D collision along a contact normal.
///
/// Same decomposition as 2D, except the tangential part is kept as the
/// vector remainder `v − (v·n)n` rather than a single tangent direction.
pub fn elastic_3d(
    m1: f64,
    v1: [f64; 3],
    m2: f64,
    v2: [f64; 3],
    normal: [f64; 3],
) -> PhysicsResult<([f64; 3], [f64; 3])> {
    require_positive_masses(m1, m2)?;
    let n = normalize_3d(normal)?;

    let v1n = v1[0] * n[0] + v1[1] * n[1] + v1[2] * n[2];
    let v2n = v2[0] * n[0] + v2[1] * n[1] + v2[2] * n[2];

    let (v1n_f, v2n_f) = elastic_normal_components(m1, v1n, m2, v2n);

    let mut v1_f = [0.0; 3];
    let mut v2_f = [0.0; 3];
    for i in 0..3 {
        let v1t = v1[i] - v1n * n[i];
        let v2t = v2[i] - v2n * n[i];
        v1_f[i] = v1n_f * n[i] + v1t;
        v2_f[i] = v2n_f * n[i] + v2t;
    }
    Ok((v1_f, v2_f))
}

/// Common final velocity of a perfectly inelastic 1D collision:
/// v' = (m1·v1 + m2·v2)/(m1 + m2)
pub fn inelastic_1d(m1: f64, v1: f64, m2: f64, v2: f64) -> PhysicsResult<f64> {
    require_positive_masses(m1, m2)?;
    Ok((m1 * v1 + m2 * v2) / (m1 + m2))
}

/// Common final velocity of a perfectly inelastic 2D collision,
/// component-wise momentum conservation.
pub fn inelastic_2d(
    m1: f64,
    v1: [f64; 2],
    m2: f64,
    v2: [f64; 2],
) -> PhysicsResult<[f64; 2]> {
    require_positive_masses(m1, m2)?;
    let total = m1 + m2;
    Ok([
        (m1 * v1[0] + m2 * v2[0]) / total,
        (m1 * v1[1] + m2 * v2[1]) / total,
    ])
}

/// Linear momentum: p = m·v
pub fn momentum(mass: f64, velocity: f64) -> PhysicsResult<f64> {
    if mass <= 0.0 {
        return Err(PhysicsError::invalid_input(
            "mass",
            mass.to_string(),
            "Mass must be positive",
        ));
    }
    Ok(mass * velocity)
}

/// Impulse of a constant force: J = F·t
pub fn impulse(force: f64, time: f64) -> PhysicsResult<f64> {
    if time < 0.0 {
        return Err(PhysicsError::invalid_input(
            "time",
            time.to_string(),
            "Time must be non-negative",
        ));
    }
    Ok(force * time)
}

/// Coefficient of restitution: e = −(v1' − v2')/(v1 − v2)
pub fn restitution_coefficient(
    v1: f64,
    v2: f64,
    v1_final: f64,
    v2_final: f64,
) -> PhysicsResult<f64> {
    let denom = v1 - v2;
    if denom == 0.0 {
        return Err(PhysicsError::invalid_input(
            "velocities",
            format!("v1={v1}, v2={v2}"),
            "Initial velocities must differ",
        ));
    }
    Ok(-(v1_final - v2_final) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinetic(m: f64, v: f64) -> f64 {
        0.5 * m * v * v
    }

    #[test]
    fn test_elastic_1d_reference_values() {
        // m1=2, v1=3, m2=1, v2=-1 => v1' = 1/3, v2' = 13/3.
        let (v1f, v2f) = elastic_1d(2.0, 3.0, 1.0, -1.0).unwrap();
        assert!((v1f - 0.3333).abs() < 1e-4);
        assert!((v2f - 4.3333).abs() < 1e-4);
    }

    #[test]
    fn test_elastic_1d_conserves_energy_and_momentum() {
        let (m1, v1, m2, v2) = (3.0, 2.0, 5.0, -4.0);
        let (v1f, v2f) = elastic_1d(m1, v1, m2, v2).unwrap();
        let p_before = m1 * v1 + m2 * v2;
        let p_after = m1 * v1f + m2 * v2f;
        assert!((p_before - p_after).abs() < 1e-12);
        let k_before = kinetic(m1, v1) + kinetic(m2, v2);
        let k_after = kinetic(m1, v1f) + kinetic(m2, v2f);
        assert!((k_before - k_after).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_equal_masses_swap() {
        let (v1f, v2f) = elastic_1d(1.0, 5.0, 1.0, -2.0).unwrap();
        assert!((v1f + 2.0).abs() < 1e-12);
        assert!((v2f - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_elastic_2d_head_on_matches_1d() {
        // Normal along x with no y motion reduces to the 1D case.
        let (v1f, v2f) =
            elastic_2d(2.0, [3.0, 0.0], 1.0, [-1.0, 0.0], [1.0, 0.0]).unwrap();
        assert!((v1f[0] - 0.3333).abs() < 1e-4);
        assert!((v2f[0] - 4.3333).abs() < 1e-4);
        assert_eq!(v1f[1], 0.0);
        assert_eq!(v2f[1], 0.0);
    }

    #[test]
    fn test_elastic_2d_tangential_component_unchanged() {
        let (v1f, _) = elastic_2d(1.0, [2.0, 3.0], 4.0, [0.0, 0.0], [1.0, 0.0]).unwrap();
        // y is tangential to the (1,0) normal, so it carries through.
        assert!((v1f[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_elastic_2d_normal_is_normalized() {
        let a = elastic_2d(2.0, [3.0, 1.0], 1.0, [-1.0, 0.5], [1.0, 0.0]).unwrap();
        let b = elastic_2d(2.0, [3.0, 1.0], 1.0, [-1.0, 0.5], [5.0, 0.0]).unwrap();
        assert!((a.0[0] - b.0[0]).abs() < 1e-12);
        assert!((a.1[1] - b.1[1]).abs() < 1e-12);
    }

    #[test]
    fn test_elastic_3d_momentum_conserved() {
        let (m1, m2) = (2.0, 3.0);
        let v1 = [1.0, -2.0, 0.5];
        let v2 = [-1.0, 0.0, 2.0];
        let n = [1.0, 1.0, 1.0];
        let (v1f, v2f) = elastic_3d(m1, v1, m2, v2, n).unwrap();
        for i in 0..3 {
            let before = m1 * v1[i] + m2 * v2[i];
            let after = m1 * v1f[i] + m2 * v2f[i];
            assert!((before - after).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_normal_rejected() {
        assert!(elastic_2d(1.0, [1.0, 0.0], 1.0, [0.0, 0.0], [0.0, 0.0]).is_err());
        assert!(elastic_3d(1.0, [1.0; 3], 1.0, [0.0; 3], [0.0; 3]).is_err());
    }

    #[test]
    fn test_inelastic_1d_momentum_conserved() {
        let vf = inelastic_1d(2.0, 3.0, 1.0, -1.0).unwrap();
        // p = 2·3 + 1·(-1) = 5, shared over 3 kg.
        assert!((vf - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_inelastic_2d() {
        let vf = inelastic_2d(1.0, [4.0, 0.0], 3.0, [0.0, 4.0]).unwrap();
        assert!((vf[0] - 1.0).abs() < 1e-12);
        assert!((vf[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        assert!(elastic_1d(0.0, 1.0, 1.0, 1.0).is_err());
        assert!(inelastic_1d(1.0, 1.0, -2.0, 1.0).is_err());
        assert!(momentum(0.0, 3.0).is_err());
    }

    #[test]
    fn test_restitution() {
        // An elastic collision has e = 1.
        let (v1f, v2f) = elastic_1d(2.0, 3.0, 1.0, -1.0).unwrap();
        let e = restitution_coefficient(3.0, -1.0, v1f, v2f).unwrap();
        assert!((e - 1.0).abs() < 1e-12);
        assert!(restitution_coefficient(2.0, 2.0, 1.0, 1.0).is_err());
    }
}
