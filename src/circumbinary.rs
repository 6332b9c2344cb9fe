//! # Analytic habitable zones of circumbinary (P-type) systems
//!
//! Closed-form AHZ and PHZ estimates for a planet orbiting both stars (Eggl 2018). The
//! starting point is the combined single-star edge `sqrt(L_A/seff_A + L_B/seff_B)`, measured
//! from the barycenter. Each star then contributes through its distance to the barycenter,
//! weighted by the mass parameter `μ = mB / (mA + mB)`:
//!
//! * **AHZ** places the stars on their insolation-equivalent mutual orbit `reqb(ab, eb)`,
//!   scaled by `μ` and `1 − μ`.
//! * **PHZ** uses the binary apastron `ab (1 + eb)` and the planet's periastron (inner edge)
//!   or apastron (outer edge), the planetary eccentricity coming from
//!   [`max_eccentricity_p`].
//!
//! As for S-type systems, nothing here iterates; see
//! [`semianalytic::circumbinary`](crate::semianalytic::circumbinary) for the root-solved
//! versions.
use crate::{
    constants::{Au, SolarMass},
    dihz_errors::DihzError,
    eccentricity::{avg_sq_eccentricity_p, max_eccentricity_p},
    single_star::insolation_weights,
    system::{mass_ratio, BinaryOrbit, HzBoundaries, StarParams},
};

/// Insolation-equivalent radius of a circumbinary planet, `ap (1 − <e²>)^¼`.
pub fn reqp_p(ab: Au, eb: f64, ap: Au, m_a: SolarMass, m_b: SolarMass) -> Au {
    ap * (1.0 - avg_sq_eccentricity_p(ab, eb, ap, m_a, m_b)).powf(0.25)
}

fn validate_all(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
) -> Result<(), DihzError> {
    primary.validate()?;
    secondary.validate()?;
    orbit.validate()
}

/// Averaged Habitable Zone of a P-type system.
///
/// Arguments
/// -----------------
/// * `primary`, `secondary`: both stars; the masses set the barycentric weights
/// * `orbit`: the binary orbit
///
/// Return
/// ----------
/// * `[inner, outer]` in au, measured from the barycenter.
pub fn ahz_p(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
) -> Result<HzBoundaries, DihzError> {
    validate_all(primary, secondary, orbit)?;

    let mu = mass_ratio(primary.mass, secondary.mass);
    let (a_in, a_out) = insolation_weights(primary.luminosity, primary.teff);
    let (b_in, b_out) = insolation_weights(secondary.luminosity, secondary.teff);

    let reqb = orbit.insolation_equivalent_radius();
    let offset_a = (mu * mu * reqb).powi(2);
    let offset_b = ((1.0 - mu) * (1.0 - mu) * reqb).powi(2);

    let edge = |a: f64, b: f64| {
        let ap = (a + b).sqrt();
        let ap2 = ap * ap;
        a * ap / (ap2 - offset_a) + b * ap / (ap2 + offset_b)
    };

    Ok(HzBoundaries::new(edge(a_in, b_in), edge(a_out, b_out)))
}

/// Permanently Habitable Zone of a P-type system.
///
/// The combined single-star edge is taken as the planet's periastron (inner edge) or
/// apastron (outer edge); the semi-major axis follows from the forced-orbit eccentricity
/// and is rescaled by the insolation balance at the binary's apastron.
pub fn phz_p(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
) -> Result<HzBoundaries, DihzError> {
    validate_all(primary, secondary, orbit)?;

    let (m_a, m_b) = (primary.mass, secondary.mass);
    let ab = orbit.semi_major_axis;
    let eb = orbit.eccentricity;
    let mu = mass_ratio(m_a, m_b);
    let apob = orbit.apastron();

    let (a_in, a_out) = insolation_weights(primary.luminosity, primary.teff);
    let (b_in, b_out) = insolation_weights(secondary.luminosity, secondary.teff);

    let qp_in = (a_in + b_in).sqrt();
    let qp_out = (a_out + b_out).sqrt();

    let ap_in = qp_in / (1.0 - max_eccentricity_p(ab, eb, qp_in, m_a, m_b));
    let ap_out = qp_out / (1.0 + max_eccentricity_p(ab, eb, qp_out, m_a, m_b));

    let to_a = qp_in - mu * apob;
    let to_b = qp_in + (1.0 - mu) * apob;
    let inner = (a_in / to_a.powi(2) + b_in / to_b.powi(2)) * ap_in;

    let to_a = qp_out + mu * apob;
    let to_b = qp_out - (1.0 - mu) * apob;
    let outer = (a_out / to_a.powi(2) + b_out / to_b.powi(2)) * ap_out;

    Ok(HzBoundaries::new(inner, outer))
}

#[cfg(test)]
mod circumbinary_test {
    use super::*;
    use crate::system::HzValidity;
    use approx::assert_relative_eq;

    fn sun() -> StarParams {
        StarParams::new(1.0, 5777.0, 1.0).unwrap()
    }

    fn companion() -> StarParams {
        StarParams::new(0.3, 4500.0, 0.5).unwrap()
    }

    #[test]
    fn reqp_uses_circumbinary_eccentricity() {
        assert_eq!(reqp_p(0.2, 0.0, 1.5, 1.0, 0.5), 1.5);
        assert!(reqp_p(0.2, 0.3, 1.5, 1.0, 0.5) < 1.5);
        // equal masses force no eccentricity
        assert_eq!(reqp_p(0.2, 0.3, 1.5, 0.7, 0.7), 1.5);
    }

    #[test]
    fn vanishing_separation_merges_the_stars() {
        let orbit = BinaryOrbit::new(1e-9, 0.0).unwrap();
        let (a_in, a_out) = insolation_weights(1.0, 5777.0);
        let (b_in, b_out) = insolation_weights(0.3, 4500.0);

        for hz in [
            ahz_p(&sun(), &companion(), &orbit).unwrap(),
            phz_p(&sun(), &companion(), &orbit).unwrap(),
        ] {
            assert_relative_eq!(hz.inner, (a_in + b_in).sqrt(), max_relative = 1e-8);
            assert_relative_eq!(hz.outer, (a_out + b_out).sqrt(), max_relative = 1e-8);
        }
    }

    #[test]
    fn reference_system() {
        let orbit = BinaryOrbit::new(0.1, 0.1).unwrap();
        let ahz = ahz_p(&sun(), &companion(), &orbit).unwrap();
        let phz = phz_p(&sun(), &companion(), &orbit).unwrap();

        assert_relative_eq!(ahz.inner, 1.100124057, max_relative = 1e-8);
        assert_relative_eq!(ahz.outer, 1.964739897, max_relative = 1e-8);
        assert_relative_eq!(phz.inner, 1.132718043, max_relative = 1e-8);
        assert_relative_eq!(phz.outer, 1.947195162, max_relative = 1e-8);
        assert_eq!(phz.validity(), HzValidity::Valid);
    }

    #[test]
    fn wide_eccentric_binary_has_no_permanent_zone() {
        let orbit = BinaryOrbit::new(1.0, 0.5).unwrap();
        let phz = phz_p(&sun(), &companion(), &orbit).unwrap();
        assert_eq!(phz.validity(), HzValidity::InvertedOrder);
    }

    #[test]
    fn rejects_non_positive_mass() {
        let massless = StarParams {
            luminosity: 0.3,
            teff: 4500.0,
            mass: 0.0,
        };
        let orbit = BinaryOrbit::new(0.1, 0.1).unwrap();
        assert!(matches!(
            phz_p(&sun(), &massless, &orbit),
            Err(DihzError::InvalidInput(_))
        ));
    }
}
