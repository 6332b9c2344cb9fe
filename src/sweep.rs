//! Parameter sweeps over the binary eccentricity.
//!
//! Points are independent and evaluated in parallel. A failure at one eccentricity is kept
//! in its [`SweepPoint`] and never aborts the sweep.
use rayon::prelude::*;

use crate::{
    binary_system::{BinarySystem, Formulation, HzSummary},
    dihz_errors::DihzError,
    system::BinaryType,
};

/// Outcome of one sweep point.
#[derive(Debug, PartialEq)]
pub struct SweepPoint {
    pub eccentricity: f64,
    pub outcome: Result<HzSummary, DihzError>,
}

impl SweepPoint {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Evaluate `system` at each binary eccentricity.
///
/// Arguments
/// -----------------
/// * `system`: template system; only its orbital eccentricity is replaced
/// * `binary_type`: geometry of the planetary orbit
/// * `eccentricities`: values of `eb` to visit
/// * `formulation`: closed-form or root-solved edges
///
/// Return
/// ----------
/// * One [`SweepPoint`] per input value, in input order. Out-of-range eccentricities and
///   non-converged solves appear as `Err` outcomes.
pub fn sweep_binary_eccentricity(
    system: &BinarySystem,
    binary_type: BinaryType,
    eccentricities: &[f64],
    formulation: &Formulation,
) -> Vec<SweepPoint> {
    eccentricities
        .par_iter()
        .map(|&eb| SweepPoint {
            eccentricity: eb,
            outcome: system
                .with_eccentricity(eb)
                .and_then(|s| s.summary(binary_type, formulation)),
        })
        .collect()
}

#[cfg(test)]
mod sweep_test {
    use super::*;
    use crate::{
        semianalytic::SolverParams,
        system::{BinaryOrbit, HzValidity, StarParams},
    };

    fn system() -> BinarySystem {
        BinarySystem::new(
            StarParams::new(1.0, 5777.0, 1.0).unwrap(),
            StarParams::new(0.05, 4000.0, 0.6).unwrap(),
            BinaryOrbit::new(20.0, 0.1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn keeps_input_order_and_isolates_failures() {
        let eccentricities = [0.3, 0.0, 1.2, 0.1, -0.1];
        let points = sweep_binary_eccentricity(
            &system(),
            BinaryType::SType,
            &eccentricities,
            &Formulation::Analytic,
        );

        assert_eq!(points.len(), eccentricities.len());
        for (point, eb) in points.iter().zip(eccentricities) {
            assert_eq!(point.eccentricity, eb);
        }
        assert!(points[0].is_ok() && points[1].is_ok() && points[3].is_ok());
        assert!(matches!(points[2].outcome, Err(DihzError::InvalidInput(_))));
        assert!(matches!(points[4].outcome, Err(DihzError::InvalidInput(_))));
    }

    #[test]
    fn eccentric_binary_shrinks_permanent_zone_and_stability_radius() {
        let points = sweep_binary_eccentricity(
            &system(),
            BinaryType::SType,
            &[0.0, 0.1, 0.2, 0.3],
            &Formulation::SemiAnalytic(SolverParams::default()),
        );
        let summaries: Vec<HzSummary> = points
            .into_iter()
            .map(|p| p.outcome.unwrap())
            .collect();

        for pair in summaries.windows(2) {
            let (calm, wild) = (&pair[0], &pair[1]);
            assert!(wild.phz().width() < calm.phz().width());
            assert!(wild.stability_radius < calm.stability_radius);
        }
    }

    #[test]
    fn points_carry_zone_diagnostics() {
        let wide = BinarySystem::new(
            StarParams::new(1.0, 5777.0, 1.0).unwrap(),
            StarParams::new(0.3, 4500.0, 0.5).unwrap(),
            BinaryOrbit::new(1.0, 0.0).unwrap(),
        )
        .unwrap();

        let analytic =
            sweep_binary_eccentricity(&wide, BinaryType::PType, &[0.5], &Formulation::Analytic);
        let summary = analytic[0].outcome.as_ref().unwrap();
        assert_eq!(summary.phz_validity, HzValidity::InvertedOrder);

        let numeric = sweep_binary_eccentricity(
            &wide,
            BinaryType::PType,
            &[0.5],
            &Formulation::SemiAnalytic(SolverParams::default()),
        );
        let summary = numeric[0].outcome.as_ref().unwrap();
        assert_eq!(summary.phz_validity, HzValidity::Valid);
        assert!(!summary.warnings.is_empty());
        assert!(!summary.is_reliable());
    }
}
