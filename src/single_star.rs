use crate::{
    constants::{Au, Kelvin, SolarLuminosity},
    insolation::{seff_inner, seff_outer},
    dihz_errors::DihzError,
    system::{require_positive, HzBoundaries},
};

/// Habitable zone of an isolated star (Kopparapu et al. 2014).
///
/// Arguments
/// -----------------
/// * `luminosity`: stellar luminosity (L☉)
/// * `teff`: effective temperature (K)
///
/// Return
/// ----------
/// * `[sqrt(L / seff_inner), sqrt(L / seff_outer)]` in au,
///   or [`DihzError::InvalidInput`] if either argument is not finite and positive.
///
/// This is the starting guess of every semi-analytic solve: the binary perturbation
/// is treated as a correction around it.
pub fn single_star_hz(
    luminosity: SolarLuminosity,
    teff: Kelvin,
) -> Result<HzBoundaries, DihzError> {
    require_positive("luminosity", luminosity)?;
    require_positive("effective temperature", teff)?;
    let (inner_sq, outer_sq) = insolation_weights(luminosity, teff);
    Ok(HzBoundaries::new(inner_sq.sqrt(), outer_sq.sqrt()))
}

/// Squared single-star edges `L / seff`, the insolation weights used by the binary formulas.
pub(crate) fn insolation_weights(luminosity: SolarLuminosity, teff: Kelvin) -> (Au, Au) {
    (luminosity / seff_inner(teff), luminosity / seff_outer(teff))
}
