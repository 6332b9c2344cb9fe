//! Effective insolation thresholds of Kopparapu et al. (2014).
//!
//! Both limits are quartic polynomials in `teff - 5777 K`. They are defined for the
//! main-sequence range the fits were derived on (roughly 2600–7200 K); no domain check
//! is done here.
use nalgebra::Vector5;

use crate::constants::{Kelvin, Seff, SEFF_MAXIMUM_GREENHOUSE, SEFF_RUNAWAY_GREENHOUSE, TEFF_SUN};

#[inline]
fn temperature_monomials(teff: Kelvin) -> Vector5<f64> {
    let t = teff - TEFF_SUN;
    let t2 = t * t;
    Vector5::new(1.0, t, t2, t2 * t, t2 * t2)
}

/// Runaway greenhouse insolation, inner edge of the habitable zone.
pub fn seff_inner(teff: Kelvin) -> Seff {
    SEFF_RUNAWAY_GREENHOUSE.dot(&temperature_monomials(teff))
}

/// Maximum greenhouse insolation, outer edge of the habitable zone.
pub fn seff_outer(teff: Kelvin) -> Seff {
    SEFF_MAXIMUM_GREENHOUSE.dot(&temperature_monomials(teff))
}
