//! # Orbital stability limits (Holman & Wiegert 1999)
//!
//! Empirical critical semi-major axes separating stable from unstable planetary orbits
//! in binary systems, fitted on numerical integrations of planets on initially circular
//! orbits:
//!
//! * [`hw99_s`] – **circumstellar**: planets orbiting the primary are stable *inside*
//!   this radius (measured from the primary).
//! * [`hw99_p`] – **circumbinary**: planets orbiting both stars are stable *outside*
//!   this radius (measured from the barycenter).
//!
//! Both fits are polynomials in the mass parameter `μ = mB / (mA + mB)` and the binary
//! eccentricity `eb`, scaled by the binary semi-major axis `ab`. The coefficient sets live in
//! [`constants`](crate::constants) and are evaluated as `nalgebra` dot products.
//!
//! [`stability_limit`] validates the orbit and dispatches on [`BinaryType`];
//! [`stability_limit_for_tag`] does the same from a free-form type tag
//! (`"S"`, `"P-type"`, `"circumbinary"`, ...).
use nalgebra::{SVector, Vector6};

use crate::{
    constants::{Au, SolarMass, HW99_P_COEFFS, HW99_S_COEFFS},
    dihz_errors::DihzError,
    system::{mass_ratio, require_positive, BinaryOrbit, BinaryType},
};

/// Circumstellar (S-type) critical semi-major axis.
///
/// ```text
/// a_crit = ab (0.464 − 0.38μ − 0.631e + 0.586μe + 0.15e² − 0.198μe²)
/// ```
pub fn hw99_s(m_a: SolarMass, m_b: SolarMass, ab: Au, eb: f64) -> Au {
    let mu = mass_ratio(m_a, m_b);
    let eb2 = eb * eb;
    let monomials = Vector6::new(1.0, mu, eb, mu * eb, eb2, mu * eb2);
    ab * HW99_S_COEFFS.dot(&monomials)
}

/// Circumbinary (P-type) critical semi-major axis.
///
/// ```text
/// a_crit = ab (1.60 + 5.10e − 2.22e² + 4.12μ − 4.27eμ − 5.09μ² + 4.61e²μ²)
/// ```
pub fn hw99_p(m_a: SolarMass, m_b: SolarMass, ab: Au, eb: f64) -> Au {
    let mu = mass_ratio(m_a, m_b);
    let eb2 = eb * eb;
    let mu2 = mu * mu;
    let monomials =
        SVector::<f64, 7>::from([1.0, eb, eb2, mu, eb * mu, mu2, eb2 * mu2]);
    ab * HW99_P_COEFFS.dot(&monomials)
}

/// Stability limit of a binary system for the given geometry.
///
/// Arguments
/// -----------------
/// * `binary_type`: S-type (maximum stable radius around the primary) or P-type
///   (minimum stable radius around the barycenter)
/// * `m_a`, `m_b`: stellar masses (M☉)
/// * `ab`: binary semi-major axis (au)
/// * `eb`: binary eccentricity
///
/// Return
/// ----------
/// * The critical semi-major axis (au), or [`DihzError::InvalidInput`] if `ab <= 0`,
///   `eb ∉ [0, 1)` or a mass is not strictly positive.
pub fn stability_limit(
    binary_type: BinaryType,
    m_a: SolarMass,
    m_b: SolarMass,
    ab: Au,
    eb: f64,
) -> Result<Au, DihzError> {
    BinaryOrbit::new(ab, eb)?;
    require_positive("primary mass", m_a)?;
    require_positive("secondary mass", m_b)?;

    Ok(match binary_type {
        BinaryType::SType => hw99_s(m_a, m_b, ab, eb),
        BinaryType::PType => hw99_p(m_a, m_b, ab, eb),
    })
}

/// [`stability_limit`] with the geometry given as a tag (see
/// [`S_TYPE_ALIASES`](crate::system::S_TYPE_ALIASES) and
/// [`P_TYPE_ALIASES`](crate::system::P_TYPE_ALIASES)).
pub fn stability_limit_for_tag(
    tag: &str,
    m_a: SolarMass,
    m_b: SolarMass,
    ab: Au,
    eb: f64,
) -> Result<Au, DihzError> {
    stability_limit(tag.parse()?, m_a, m_b, ab, eb)
}
