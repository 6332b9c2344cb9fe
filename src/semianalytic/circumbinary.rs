//! Root-solved AHZ and PHZ of P-type systems.
//!
//! Distances are barycentric. The primary sits at `μ r` and the secondary at `(1 − μ) r`
//! from the barycenter, `r` being the binary separation of the phase considered. The
//! residuals are
//!
//! | edge      | residual                                                       |
//! |-----------|----------------------------------------------------------------|
//! | AHZ       | `A / (reqp² − (μ² reqb)²) + B / (reqp² + ((1 − μ)² reqb)²) − 1` |
//! | PHZ inner | `A / (qp − μ Qb)² + B / (qp + (1 − μ) Qb)² − 1`                 |
//! | PHZ outer | `A / (Qp + μ Qb)² + B / (Qp − (1 − μ) Qb)² − 1`                 |
//!
//! with `qp = ap (1 − e)`, `Qp = ap (1 + e)`, `e` the maximum circumbinary forced
//! eccentricity at `ap` (which needs both masses), and `Qb` the binary apastron.
//! The AHZ offsets reproduce the closed-form [`ahz_p`](crate::circumbinary::ahz_p).
use crate::{
    circumbinary::reqp_p,
    constants::Au,
    dihz_errors::DihzError,
    eccentricity::max_eccentricity_p,
    single_star::insolation_weights,
    system::{mass_ratio, BinaryOrbit, BinaryType, HzEdge, StarParams},
};

use super::{solve_zone, EdgeProblem, HzSolution, SolverParams};

fn ahz_residual(
    a: f64,
    b: f64,
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let mu = mass_ratio(primary.mass, secondary.mass);
    let reqb = orbit.insolation_equivalent_radius();
    let reqp2 = reqp_p(
        orbit.semi_major_axis,
        orbit.eccentricity,
        ap,
        primary.mass,
        secondary.mass,
    )
    .powi(2);
    a / (reqp2 - (mu * mu * reqb).powi(2)) + b / (reqp2 + ((1.0 - mu) * (1.0 - mu) * reqb).powi(2))
        - 1.0
}

fn max_eccentricity(primary: &StarParams, secondary: &StarParams, orbit: &BinaryOrbit, ap: Au) -> f64 {
    max_eccentricity_p(
        orbit.semi_major_axis,
        orbit.eccentricity,
        ap,
        primary.mass,
        secondary.mass,
    )
}

/// Residual of the P-type AHZ inner edge at `ap`.
pub fn ahz_inner_residual_p(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let (a, _) = insolation_weights(primary.luminosity, primary.teff);
    let (b, _) = insolation_weights(secondary.luminosity, secondary.teff);
    ahz_residual(a, b, primary, secondary, orbit, ap)
}

/// Residual of the P-type AHZ outer edge at `ap`.
pub fn ahz_outer_residual_p(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let (_, a) = insolation_weights(primary.luminosity, primary.teff);
    let (_, b) = insolation_weights(secondary.luminosity, secondary.teff);
    ahz_residual(a, b, primary, secondary, orbit, ap)
}

/// Residual of the P-type PHZ inner edge: planet periastron with the primary on the near side.
pub fn phz_inner_residual_p(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let (a, _) = insolation_weights(primary.luminosity, primary.teff);
    let (b, _) = insolation_weights(secondary.luminosity, secondary.teff);
    let mu = mass_ratio(primary.mass, secondary.mass);
    let apob = orbit.apastron();
    let qp = ap * (1.0 - max_eccentricity(primary, secondary, orbit, ap));
    a / (qp - mu * apob).powi(2) + b / (qp + (1.0 - mu) * apob).powi(2) - 1.0
}

/// Residual of the P-type PHZ outer edge: planet apastron with the secondary on the near side.
pub fn phz_outer_residual_p(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    ap: Au,
) -> f64 {
    let (_, a) = insolation_weights(primary.luminosity, primary.teff);
    let (_, b) = insolation_weights(secondary.luminosity, secondary.teff);
    let mu = mass_ratio(primary.mass, secondary.mass);
    let apob = orbit.apastron();
    let apo = ap * (1.0 + max_eccentricity(primary, secondary, orbit, ap));
    a / (apo + mu * apob).powi(2) + b / (apo - (1.0 - mu) * apob).powi(2) - 1.0
}

type Residual = fn(&StarParams, &StarParams, &BinaryOrbit, Au) -> f64;

fn solve_p(
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

    // seeded with the combined single-star edges, both stars at the barycenter
    let (a_in, a_out) = insolation_weights(primary.luminosity, primary.teff);
    let (b_in, b_out) = insolation_weights(secondary.luminosity, secondary.teff);

    let f_in = |ap: Au| inner_residual(primary, secondary, orbit, ap);
    let f_out = |ap: Au| outer_residual(primary, secondary, orbit, ap);

    solve_zone(
        params,
        BinaryType::PType,
        orbit.semi_major_axis,
        EdgeProblem {
            edge: inner_edge,
            residual: &f_in,
            initial_guess: (a_in + b_in).sqrt(),
        },
        EdgeProblem {
            edge: outer_edge,
            residual: &f_out,
            initial_guess: (a_out + b_out).sqrt(),
        },
    )
}

/// Averaged Habitable Zone of a P-type system, solved numerically.
///
/// Arguments
/// -----------------
/// * `primary`, `secondary`: both stars; the masses set the barycentric weights and the
///   forced eccentricity
/// * `orbit`: binary orbit
/// * `params`: root-finder configuration
///
/// Return
/// ----------
/// * An [`HzSolution`] measured from the barycenter, or an error on invalid input or
///   non-convergence of either edge.
pub fn ahz_p_numeric(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    params: &SolverParams,
) -> Result<HzSolution, DihzError> {
    solve_p(
        primary,
        secondary,
        orbit,
        params,
        (HzEdge::AhzInner, ahz_inner_residual_p),
        (HzEdge::AhzOuter, ahz_outer_residual_p),
    )
}

/// Permanently Habitable Zone of a P-type system, solved numerically.
pub fn phz_p_numeric(
    primary: &StarParams,
    secondary: &StarParams,
    orbit: &BinaryOrbit,
    params: &SolverParams,
) -> Result<HzSolution, DihzError> {
    solve_p(
        primary,
        secondary,
        orbit,
        params,
        (HzEdge::PhzInner, phz_inner_residual_p),
        (HzEdge::PhzOuter, phz_outer_residual_p),
    )
}
