//! Root-solved AHZ and PHZ of S-type systems.
//!
//! Each residual is the total insolation at the critical phase, in units of the threshold,
//! minus one. `A = L_A / seff_A` and `B = L_B / seff_B` are the squared single-star edges of
//! each star; the runaway-greenhouse threshold is used for inner edges and the
//! maximum-greenhouse threshold for outer edges.
//!
//! | edge      | residual                                   |
//! |-----------|--------------------------------------------|
//! | AHZ       | `A / reqp² + B / (reqb² − reqp²) − 1`      |
//! | PHZ inner | `A / qp² + B / (qp − qb)² − 1`              |
//! | PHZ outer | `A / Qp² + B / (Qp − Qb)² − 1`              |
//!
//! with `qp = ap (1 − e)`, `Qp = ap (1 + e)`, `e` the maximum forced eccentricity at `ap`,
//! and `qb`, `Qb` the binary periastron and apastron.
use crate::{
    circumstellar::reqp_s,
    constants::Au,
    dihz_errors::DihzError,
    eccentricity::max_eccentricity_s,
    single_star::{insolation_weights, single_star_hz},
    system::{BinaryOrbit, BinaryType, HzEdge, StarParams},
};

use super::{solve_zone, EdgeProblem, HzSolution, SolverParams};

fn ahz_residual(a: f64, b: f64, orbit: &BinaryOrbit, ap: Au) -> f64 {
    let reqp2 = reqp_s(orbit.semi_major_axis, orbit.eccentricity, ap).powi(2);
    let reqb2 = orbit.insolation_equivalent_radius().powi(2);
    a / reqp2 + b / (reqb2 - reqp2) - 1.0
}

/// Residual of the S-type AHZ inner edge at `ap`.
pub fn ahz_inner_residual_s(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let (a, _) = insolation_weights(primary.luminosity, primary.teff);
    let (b, _) = insolation_weights(secondary.luminosity, secondary.teff);
    ahz_residual(a, b, orbit, ap)
}

/// Residual of the S-type AHZ outer edge at `ap`.
pub fn ahz_outer_residual_s(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let (_, a) = insolation_weights(primary.luminosity, primary.teff);
    let (_, b) = insolation_weights(secondary.luminosity, secondary.teff);
    ahz_residual(a, b, orbit, ap)
}

/// Residual of the S-type PHZ inner edge: planet periastron against binary periastron.
pub fn phz_inner_residual_s(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let (a, _) = insolation_weights(primary.luminosity, primary.teff);
    let (b, _) = insolation_weights(secondary.luminosity, secondary.teff);
    let qp = ap * (1.0 - max_eccentricity_s(orbit.semi_major_axis, orbit.eccentricity, ap));
    a / qp.powi(2) + b / (qp - orbit.periastron()).powi(2) - 1.0
}

/// Residual of the S-type PHZ outer edge: planet apastron against binary apastron.
pub fn phz_outer_residual_s(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let (_, a) = insolation_weights(primary.luminosity, primary.teff);
    let (_, b) = insolation_weights(secondary.luminosity, secondary.teff);
    let apo = ap * (1.0 + max_eccentricity_s(orbit.semi_major_axis, orbit.eccentricity, ap));
    a / apo.powi(2) + b / (apo - orbit.apastron()).powi(2) - 1.0
}

type Residual = fn(&StarParams, &StarParams, &BinaryOrbit, Au) -> f64;

fn solve_s(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    params: &SolverParams,
    (inner_edge, inner_residual): (HzEdge, Residual),
    (outer_edge, outer_residual): (HzEdge, Residual),
) -> Result<HzSolution, DihzError> {
    primary.validate()?;
    secondary.validate()?;
    orbit.validate()?;

    // seeded with the host star's own habitable zone
    let seed = single_star_hz(primary.luminosity, primary.teff)?;

    let f_in = |ap: Au| inner_residual(primary, secondary, orbit, ap);
    let f_out = |ap: Au| outer_residual(primary, secondary, orbit, ap);

    solve_zone(
        params,
        BinaryType::SType,
        orbit.semi_major_axis,
        EdgeProblem {
            edge: inner_edge,
            residual: &f_in,
            initial_guess: seed.inner,
        },
        EdgeProblem {
            edge: outer_edge,
            residual: &f_out,
            initial_guess: seed.outer,
        },
    )
}

/// Averaged Habitable Zone of an S-type system, solved numerically.
///
/// Arguments
/// -----------------
/// * `primary`: host star of the planet
/// * `secondary`: companion star
/// * `orbit`: binary orbit
/// * `params`: root-finder configuration
///
/// Return
/// ----------
/// * An [`HzSolution`] (boundaries, validity, regime warnings), or an error if the input is
///   invalid or either edge fails to converge.
///
/// See also
/// ------------
/// * [`ahz_s`](crate::circumstellar::ahz_s) – closed-form counterpart.
pub fn ahz_s_numeric(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    params: &SolverParams,
) -> Result<HzSolution, DihzError> {
    solve_s(
        primary,
        secondary,
        orbit,
        params,
        (HzEdge::AhzInner, ahz_inner_residual_s),
        (HzEdge::AhzOuter, ahz_outer_residual_s),
    )
}

/// Permanently Habitable Zone of an S-type system, solved numerically.
///
/// A converged but inverted or negative pair is returned with
/// [`HzValidity`](crate::system::HzValidity) set accordingly: the companion leaves no
/// permanently habitable region around the host.
pub fn phz_s_numeric(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    params: &SolverParams,
) -> Result<HzSolution, DihzError> {
    solve_s(
        primary,
        secondary,
        orbit,
        params,
        (HzEdge::PhzInner, phz_inner_residual_s),
        (HzEdge::PhzOuter, phz_outer_residual_s),
    )
}
