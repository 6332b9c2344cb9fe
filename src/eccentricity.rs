//! # Secular eccentricity of a planet perturbed by a binary
//!
//! First-order secular perturbation theory gives the **forced eccentricity** a planetary
//! orbit oscillates around. From it follow the maximum eccentricity reached and the
//! orbit-averaged squared eccentricity `<e²>`, in two flavours:
//!
//! * planet starting on the forced orbit: `e_max = e_f`, `<e²> = e_f²`,
//! * planet starting on a circular orbit (`_e0` variants): `e_max = 2 e_f`, `<e²> = 2 e_f²`.
//!
//! Two families exist because the geometry differs:
//!
//! * **S-type** (circumstellar): `e_f = 5/2 · (ap/ab) · eb / (1 − eb²)`,
//! * **P-type** (circumbinary): `e_f = 5/2 · (ab/ap) · (1 − 2μ) · (4eb + 3eb³) / (4 + 6eb²)`,
//!   with `μ = mB / (mA + mB)`.
//!
//! ## Validity
//!
//! The expressions assume a hierarchical configuration: `ap ≪ ab` for S-type and
//! `ab ≪ ap` for P-type. They stay mathematically defined outside that regime but lose
//! their physical meaning; see [`check_hierarchy`](crate::regime::check_hierarchy) for the
//! soft diagnostic. No input validation is performed here.
//!
//! The module also hosts [`insolation_equivalent_radius`], the circular orbit receiving the
//! same time-averaged insolation as an eccentric one, shared by every HZ formula.
use crate::{
    constants::{Au, SolarMass, FORCED_ECC_PREFACTOR},
    system::mass_ratio,
};

/// Insolation-equivalent radius `a (1 − e²)^¼` of an orbit with semi-major axis `a` and
/// eccentricity `e`.
pub fn insolation_equivalent_radius(a: Au, e: f64) -> Au {
    a * (1.0 - e * e).powf(0.25)
}

// -------------------------------------------------------------------------------------------------
// S-type
// -------------------------------------------------------------------------------------------------

/// Forced eccentricity of a circumstellar planet.
///
/// Arguments
/// -----------------
/// * `ab`: binary semi-major axis (au)
/// * `eb`: binary eccentricity
/// * `ap`: planet semi-major axis (au)
pub fn forced_eccentricity_s(ab: Au, eb: f64, ap: Au) -> f64 {
    FORCED_ECC_PREFACTOR * ap / ab * (eb / (1.0 - eb * eb))
}

/// Maximum eccentricity of a circumstellar planet starting on its forced orbit.
pub fn max_eccentricity_s(ab: Au, eb: f64, ap: Au) -> f64 {
    forced_eccentricity_s(ab, eb, ap)
}

/// Maximum eccentricity of an initially circular circumstellar planet.
pub fn max_eccentricity_s_e0(ab: Au, eb: f64, ap: Au) -> f64 {
    2.0 * forced_eccentricity_s(ab, eb, ap)
}

/// Orbit-averaged `<e²>` of a circumstellar planet starting on its forced orbit.
pub fn avg_sq_eccentricity_s(ab: Au, eb: f64, ap: Au) -> f64 {
    forced_eccentricity_s(ab, eb, ap).powi(2)
}

/// Orbit-averaged `<e²>` of an initially circular circumstellar planet.
pub fn avg_sq_eccentricity_s_e0(ab: Au, eb: f64, ap: Au) -> f64 {
    2.0 * forced_eccentricity_s(ab, eb, ap).powi(2)
}

// -------------------------------------------------------------------------------------------------
// P-type
// -------------------------------------------------------------------------------------------------

/// Forced eccentricity of a circumbinary planet.
///
/// Arguments
/// -----------------
/// * `ab`: binary semi-major axis (au)
/// * `eb`: binary eccentricity
/// * `ap`: planet semi-major axis, measured from the binary barycenter (au)
/// * `m_a`, `m_b`: primary and secondary masses (M☉)
///
/// Note
/// ----------
/// * The sign follows `1 − 2μ`: an equal-mass binary (`μ = ½`) forces no eccentricity.
pub fn forced_eccentricity_p(ab: Au, eb: f64, ap: Au, m_a: SolarMass, m_b: SolarMass) -> f64 {
    let mu = mass_ratio(m_a, m_b);
    let eb2 = eb * eb;
    FORCED_ECC_PREFACTOR * ab / ap * (1.0 - 2.0 * mu) * (4.0 * eb + 3.0 * eb2 * eb)
        / (4.0 + 6.0 * eb2)
}

/// Maximum eccentricity of a circumbinary planet starting on its forced orbit.
pub fn max_eccentricity_p(ab: Au, eb: f64, ap: Au, m_a: SolarMass, m_b: SolarMass) -> f64 {
    forced_eccentricity_p(ab, eb, ap, m_a, m_b)
}

/// Maximum eccentricity of an initially circular circumbinary planet.
pub fn max_eccentricity_p_e0(ab: Au, eb: f64, ap: Au, m_a: SolarMass, m_b: SolarMass) -> f64 {
    2.0 * forced_eccentricity_p(ab, eb, ap, m_a, m_b)
}

/// Orbit-averaged `<e²>` of a circumbinary planet starting on its forced orbit.
pub fn avg_sq_eccentricity_p(ab: Au, eb: f64, ap: Au, m_a: SolarMass, m_b: SolarMass) -> f64 {
    forced_eccentricity_p(ab, eb, ap, m_a, m_b).powi(2)
}

/// Orbit-averaged `<e²>` of an initially circular circumbinary planet.
pub fn avg_sq_eccentricity_p_e0(
    ab: Au,
    eb: f64,
    ap: Au,
    m_a: SolarMass,
    m_b: SolarMass,
) -> f64 {
    2.0 * forced_eccentricity_p(ab, eb, ap, m_a, m_b).powi(2)
}
