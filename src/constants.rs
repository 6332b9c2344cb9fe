//! # Constants and type definitions for dihz
//!
//! This module centralizes the **reference values**, **empirical coefficient sets**, and
//! **unit type aliases** used throughout the `dihz` library.
//!
//! ## Overview
//!
//! - Solar reference temperature used by the insolation fits
//! - Kopparapu et al. (2014) runaway / maximum greenhouse coefficients
//! - Holman & Wiegert (1999) stability fit coefficients
//! - Secular perturbation prefactor shared by the forced-eccentricity models
//! - Unit aliases documenting what each `f64` carries
//!
//! Coefficient sets are stored as `nalgebra` fixed-size vectors so that each fit can be
//! evaluated as a dot product against the matching monomial vector.

use nalgebra::{SVector, Vector5, Vector6};

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in astronomical units
pub type Au = f64;
/// Luminosity in solar luminosities
pub type SolarLuminosity = f64;
/// Mass in solar masses
pub type SolarMass = f64;
/// Temperature in Kelvin
pub type Kelvin = f64;
/// Dimensionless effective insolation (Earth = 1)
pub type Seff = f64;

// -------------------------------------------------------------------------------------------------
// Reference values
// -------------------------------------------------------------------------------------------------

/// Solar effective temperature (K), zero point of the seff polynomials
pub const TEFF_SUN: Kelvin = 5777.0;

/// Prefactor of the first-order secular forced eccentricity (5/2)
pub const FORCED_ECC_PREFACTOR: f64 = 2.5;

// -------------------------------------------------------------------------------------------------
// Kopparapu et al. (2014) effective insolation fits
// -------------------------------------------------------------------------------------------------

/// Runaway greenhouse limit: `[seff0, a, b, c, d]` in powers of `teff - TEFF_SUN`.
pub const SEFF_RUNAWAY_GREENHOUSE: Vector5<f64> =
    Vector5::new(1.107, 1.332e-4, 1.58e-8, -8.308e-12, -1.931e-15);

/// Maximum greenhouse limit: `[seff0, a, b, c, d]` in powers of `teff - TEFF_SUN`.
pub const SEFF_MAXIMUM_GREENHOUSE: Vector5<f64> =
    Vector5::new(0.356, 6.171e-5, 1.698e-9, -3.198e-12, -5.575e-16);

// -------------------------------------------------------------------------------------------------
// Holman & Wiegert (1999) stability fits
// -------------------------------------------------------------------------------------------------

/// Circumstellar fit, ordered as `[1, μ, e, μe, e², μe²]`.
pub const HW99_S_COEFFS: Vector6<f64> = Vector6::new(0.464, -0.38, -0.631, 0.586, 0.15, -0.198);

/// Circumbinary fit, ordered as `[1, e, e², μ, eμ, μ², e²μ²]`.
pub const HW99_P_COEFFS: SVector<f64, 7> =
    SVector::<f64, 7>::from_array_storage(nalgebra::ArrayStorage([[
        1.6, 5.1, -2.22, 4.12, -4.27, -5.09, 4.61,
    ]]));
