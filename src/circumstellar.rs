//! # Analytic habitable zones of circumstellar (S-type) systems
//!
//! Closed-form estimates of the **Averaged Habitable Zone** (AHZ) and the
//! **Permanently Habitable Zone** (PHZ) of a planet orbiting the primary star of a binary
//! (Eggl 2018). Both start from the primary's single-star edges `sqrt(L_A / seff)` and add
//! the secondary's insolation as a correction:
//!
//! * **AHZ** uses orbit-averaged geometry; the secondary sits at its insolation-equivalent
//!   distance `reqb(ab, eb)²  = ab² sqrt(1 − eb²)`.
//! * **PHZ** evaluates the worst phase: planet periastron against binary periastron for the
//!   inner edge, planet apastron against binary apastron for the outer edge, with the
//!   planetary eccentricity taken from the forced-orbit maximum.
//!
//! Neither formula iterates. The semi-analytic counterparts in
//! [`semianalytic::circumstellar`](crate::semianalytic::circumstellar) solve the underlying
//! insolation balance exactly and agree with these to first order in the perturbation.
use crate::{
    constants::Au,
    dihz_errors::DihzError,
    eccentricity::{avg_sq_eccentricity_s, max_eccentricity_s},
    single_star::insolation_weights,
    system::{BinaryOrbit, HzBoundaries, StarParams},
};

/// Insolation-equivalent radius of a circumstellar planet, `ap (1 − <e²>)^¼`.
pub fn reqp_s(ab: Au, eb: f64, ap: Au) -> Au {
    ap * (1.0 - avg_sq_eccentricity_s(ab, eb, ap)).powf(0.25)
}

/// Averaged Habitable Zone of an S-type system.
///
/// Arguments
/// -----------------
/// * `primary`: the host star of the planet
/// * `secondary`: the companion star
/// * `orbit`: the binary orbit
///
/// Return
/// ----------
/// * `[inner, outer]` in au, or [`DihzError::InvalidInput`] on non-physical parameters.
///   The pair is not checked for ordering; use [`HzBoundaries::validity`].
pub fn ahz_s(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
) -> Result<HzBoundaries, DihzError> {
    primary.validate()?;
    secondary.validate()?;
    orbit.validate()?;

    let (a_in, a_out) = insolation_weights(primary.luminosity, primary.teff);
    let (b_in, b_out) = insolation_weights(secondary.luminosity, secondary.teff);
    let reqb2 = orbit.insolation_equivalent_radius().powi(2);

    let edge = |a: f64, b: f64| a.sqrt() * (1.0 + b / (reqb2 - a));

    Ok(HzBoundaries::new(edge(a_in, b_in), edge(a_out, b_out)))
}

/// Permanently Habitable Zone of an S-type system.
///
/// The inner edge balances the primary's insolation at planet periastron with the
/// secondary's at the closest approach `qp − qb`; the outer edge does the same at apastron.
/// The planetary eccentricity is evaluated once, at the single-star edge.
pub fn phz_s(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
) -> Result<HzBoundaries, DihzError> {
    primary.validate()?;
    secondary.validate()?;
    orbit.validate()?;

    let ab = orbit.semi_major_axis;
    let eb = orbit.eccentricity;

    let (a_in, a_out) = insolation_weights(primary.luminosity, primary.teff);
    let (b_in, b_out) = insolation_weights(secondary.luminosity, secondary.teff);

    let ap_in = a_in.sqrt();
    let ap_out = a_out.sqrt();

    let qp_in = ap_in * (1.0 - max_eccentricity_s(ab, eb, ap_in));
    let apo_out = ap_out * (1.0 + max_eccentricity_s(ab, eb, ap_out));

    let inner = a_in / qp_in + b_in * qp_in / (qp_in - orbit.periastron()).powi(2);
    let outer = a_out / apo_out + b_out * apo_out / (apo_out - orbit.apastron()).powi(2);

    Ok(HzBoundaries::new(inner, outer))
}

#[cfg(test)]
mod circumstellar_test {
    use super::*;
    use crate::{single_star::single_star_hz, system::HzValidity};
    use approx::assert_relative_eq;

    fn sun() -> StarParams {
        StarParams::new(1.0, 5777.0, 1.0).unwrap()
    }

    fn k_dwarf() -> StarParams {
        StarParams::new(0.05, 4000.0, 0.6).unwrap()
    }

    #[test]
    fn reqp_reduces_to_ap_for_circular_binary() {
        assert_eq!(reqp_s(20.0, 0.0, 1.0), 1.0);
        assert!(reqp_s(20.0, 0.3, 1.0) < 1.0);
    }

    #[test]
    fn negligible_companion_recovers_single_star() {
        let faint = StarParams::new(1e-12, 3000.0, 0.1).unwrap();
        let orbit = BinaryOrbit::new(20.0, 0.0).unwrap();
        let sshz = single_star_hz(1.0, 5777.0).unwrap();

        let ahz = ahz_s(&sun(), &faint, &orbit).unwrap();
        let phz = phz_s(&sun(), &faint, &orbit).unwrap();

        assert_relative_eq!(ahz.inner, sshz.inner, max_relative = 1e-9);
        assert_relative_eq!(ahz.outer, sshz.outer, max_relative = 1e-9);
        assert_relative_eq!(phz.inner, sshz.inner, max_relative = 1e-9);
        assert_relative_eq!(phz.outer, sshz.outer, max_relative = 1e-9);
    }

    #[test]
    fn circular_binary_adds_only_direct_companion_light() {
        let orbit = BinaryOrbit::new(20.0, 0.0).unwrap();
        let (a_in, _) = insolation_weights(1.0, 5777.0);
        let (b_in, _) = insolation_weights(0.05, 4000.0);

        let ahz = ahz_s(&sun(), &k_dwarf(), &orbit).unwrap();
        let phz = phz_s(&sun(), &k_dwarf(), &orbit).unwrap();

        let sqrt_a = a_in.sqrt();
        assert_relative_eq!(
            ahz.inner,
            sqrt_a * (1.0 + b_in / (400.0 - a_in)),
            max_relative = 1e-14
        );
        assert_relative_eq!(
            phz.inner,
            sqrt_a + b_in * sqrt_a / (sqrt_a - 20.0).powi(2),
            max_relative = 1e-14
        );
    }

    #[test]
    fn reference_system() {
        let orbit = BinaryOrbit::new(20.0, 0.1).unwrap();
        let ahz = ahz_s(&sun(), &k_dwarf(), &orbit).unwrap();
        let phz = phz_s(&sun(), &k_dwarf(), &orbit).unwrap();

        assert_relative_eq!(ahz.inner, 0.950569546, max_relative = 1e-8);
        assert_relative_eq!(ahz.outer, 1.676806766, max_relative = 1e-8);
        assert_relative_eq!(phz.inner, 0.962157856, max_relative = 1e-8);
        assert_relative_eq!(phz.outer, 1.642058971, max_relative = 1e-8);
        assert_eq!(phz.validity(), HzValidity::Valid);
    }

    #[test]
    fn eccentric_binary_narrows_the_permanent_zone() {
        let calm = phz_s(&sun(), &k_dwarf(), &BinaryOrbit::new(20.0, 0.05).unwrap()).unwrap();
        let wild = phz_s(&sun(), &k_dwarf(), &BinaryOrbit::new(20.0, 0.4).unwrap()).unwrap();
        assert!(wild.width() < calm.width());
    }

    #[test]
    fn rejects_invalid_orbit() {
        let orbit = BinaryOrbit {
            semi_major_axis: 20.0,
            eccentricity: 1.2,
        };
        assert!(matches!(
            ahz_s(&sun(), &k_dwarf(), &orbit),
            Err(DihzError::InvalidInput(_))
        ));
        assert!(matches!(
            phz_s(&sun(), &k_dwarf(), &orbit),
            Err(DihzError::InvalidInput(_))
        ));
    }
}
