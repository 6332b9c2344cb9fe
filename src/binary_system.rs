//! # Binary system facade
//!
//! [`BinarySystem`] bundles the two stars and their orbit and exposes every habitable-zone
//! and stability operation for a chosen [`BinaryType`]. [`BinarySystem::summary`] reduces a
//! system to what a map renderer needs ([`HzSummary`]): five radii, the validity of each zone
//! and any regime warnings. [`HzSummary::classify`] assigns a planet radius to one of the
//! [`ZoneClass`] regions.
//!
//! ```rust, no_run
//! use dihz::binary_system::{BinarySystem, Formulation, ZoneClass};
//! use dihz::system::{BinaryOrbit, BinaryType, PlanetOrbit, StarParams};
//!
//! let system = BinarySystem::new(
//!     StarParams::new(1.0, 5777.0, 1.0).unwrap(),
//!     StarParams::new(0.05, 4000.0, 0.6).unwrap(),
//!     BinaryOrbit::new(20.0, 0.1).unwrap(),
//! )
//! .unwrap();
//!
//! let summary = system.summary(BinaryType::SType, &Formulation::Analytic).unwrap();
//! let planet = PlanetOrbit::new(1.2).unwrap();
//! assert_eq!(summary.classify_orbit(BinaryType::SType, &planet), ZoneClass::PermanentHz);
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    circumbinary::{ahz_p, phz_p},
    circumstellar::{ahz_s, phz_s},
    constants::Au,
    dihz_errors::DihzError,
    eccentricity::{forced_eccentricity_p, forced_eccentricity_s},
    regime::RegimeWarning,
    semianalytic::{
        circumbinary::{ahz_p_numeric, phz_p_numeric},
        circumstellar::{ahz_s_numeric, phz_s_numeric},
        HzSolution, SolverParams,
    },
    stability::stability_limit,
    system::{BinaryOrbit, BinaryType, HzBoundaries, HzValidity, PlanetOrbit, StarParams},
};

/// Which family of habitable-zone solvers to use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Formulation {
    /// Closed-form estimates.
    #[default]
    Analytic,
    /// Root-solved insolation balance.
    SemiAnalytic(SolverParams),
}

/// Two stars on a bound orbit.
///
/// For S-type geometries the planet orbits `primary`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinarySystem {
    pub primary: StarParams,
    pub secondary: StarParams,
    pub orbit: BinaryOrbit,
}

impl BinarySystem {
    pub fn new(
        primary: StarParams,
        secondary: StarParams,
        orbit: BinaryOrbit,
    ) -> Result<Self, DihzError> {
        primary.validate()?;
        secondary.validate()?;
        orbit.validate()?;
        Ok(BinarySystem {
            primary,
            secondary,
            orbit,
        })
    }

    /// Same stars on an orbit of a different eccentricity.
    pub fn with_eccentricity(&self, eccentricity: f64) -> Result<Self, DihzError> {
        let orbit = BinaryOrbit::new(self.orbit.semi_major_axis, eccentricity)?;
        Ok(BinarySystem { orbit, ..*self })
    }

    /// Closed-form Averaged Habitable Zone.
    pub fn ahz(&self, binary_type: BinaryType) -> Result<HzBoundaries, DihzError> {
        match binary_type {
            BinaryType::SType => ahz_s(&self.primary, &self.secondary, &self.orbit),
            BinaryType::PType => ahz_p(&self.primary, &self.secondary, &self.orbit),
        }
    }

    /// Closed-form Permanently Habitable Zone.
    pub fn phz(&self, binary_type: BinaryType) -> Result<HzBoundaries, DihzError> {
        match binary_type {
            BinaryType::SType => phz_s(&self.primary, &self.secondary, &self.orbit),
            BinaryType::PType => phz_p(&self.primary, &self.secondary, &self.orbit),
        }
    }

    /// Root-solved Averaged Habitable Zone.
    pub fn ahz_numeric(
        &self,
        binary_type: BinaryType,
        params: &SolverParams,
    ) -> Result<HzSolution, DihzError> {
        match binary_type {
            BinaryType::SType => ahz_s_numeric(&self.primary, &self.secondary, &self.orbit, params),
            BinaryType::PType => ahz_p_numeric(&self.primary, &self.secondary, &self.orbit, params),
        }
    }

    /// Root-solved Permanently Habitable Zone.
    pub fn phz_numeric(
        &self,
        binary_type: BinaryType,
        params: &SolverParams,
    ) -> Result<HzSolution, DihzError> {
        match binary_type {
            BinaryType::SType => phz_s_numeric(&self.primary, &self.secondary, &self.orbit, params),
            BinaryType::PType => phz_p_numeric(&self.primary, &self.secondary, &self.orbit, params),
        }
    }

    /// Holman–Wiegert critical semi-major axis.
    pub fn stability_limit(&self, binary_type: BinaryType) -> Result<Au, DihzError> {
        stability_limit(
            binary_type,
            self.primary.mass,
            self.secondary.mass,
            self.orbit.semi_major_axis,
            self.orbit.eccentricity,
        )
    }

    /// Forced eccentricity the binary induces on `planet`.
    pub fn forced_eccentricity(&self, binary_type: BinaryType, planet: &PlanetOrbit) -> f64 {
        let (ab, eb, ap) = (
            self.orbit.semi_major_axis,
            self.orbit.eccentricity,
            planet.semi_major_axis,
        );
        match binary_type {
            BinaryType::SType => forced_eccentricity_s(ab, eb, ap),
            BinaryType::PType => {
                forced_eccentricity_p(ab, eb, ap, self.primary.mass, self.secondary.mass)
            }
        }
    }

    /// All four edges and the stability radius.
    ///
    /// Arguments
    /// -----------------
    /// * `binary_type`: geometry of the planetary orbit
    /// * `formulation`: closed-form or root-solved edges
    ///
    /// Return
    /// ----------
    /// * The [`HzSummary`], or the first error met. Zones that converged but do not exist
    ///   are kept as computed with their [`HzValidity`]; [`HzSummary::classify`] ignores them.
    ///   Regime warnings are only produced by the root-solved formulation.
    pub fn summary(
        &self,
        binary_type: BinaryType,
        formulation: &Formulation,
    ) -> Result<HzSummary, DihzError> {
        let stability_radius = self.stability_limit(binary_type)?;
        match formulation {
            Formulation::Analytic => Ok(HzSummary::new(
                self.phz(binary_type)?,
                self.ahz(binary_type)?,
                stability_radius,
            )),
            Formulation::SemiAnalytic(params) => {
                let phz = self.phz_numeric(binary_type, params)?;
                let ahz = self.ahz_numeric(binary_type, params)?;
                Ok(HzSummary {
                    phz_inner: phz.inner(),
                    phz_outer: phz.outer(),
                    ahz_inner: ahz.inner(),
                    ahz_outer: ahz.outer(),
                    stability_radius,
                    phz_validity: phz.validity,
                    ahz_validity: ahz.validity,
                    warnings: phz.warnings.into_iter().chain(ahz.warnings).collect(),
                })
            }
        }
    }
}

/// Region a circular planetary orbit of a given radius falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneClass {
    /// Beyond the Holman–Wiegert limit.
    Unstable,
    /// Habitable at every orbital phase.
    PermanentHz,
    /// Habitable on average only.
    AveragedHz,
    Neither,
}

impl fmt::Display for ZoneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ZoneClass::Unstable => "unstable",
            ZoneClass::PermanentHz => "permanently habitable",
            ZoneClass::AveragedHz => "averaged habitable",
            ZoneClass::Neither => "neither",
        };
        f.write_str(label)
    }
}

/// The five radii (au) consumed by habitable-zone maps, with the diagnostics of the solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HzSummary {
    pub phz_inner: Au,
    pub phz_outer: Au,
    pub ahz_inner: Au,
    pub ahz_outer: Au,
    pub stability_radius: Au,
    pub phz_validity: HzValidity,
    pub ahz_validity: HzValidity,
    /// Regime warnings of the PHZ edges, then of the AHZ edges.
    pub warnings: Vec<RegimeWarning>,
}

impl HzSummary {
    /// Summary without regime warnings; validities are taken from the boundaries.
    pub fn new(phz: HzBoundaries, ahz: HzBoundaries, stability_radius: Au) -> Self {
        HzSummary {
            phz_inner: phz.inner,
            phz_outer: phz.outer,
            ahz_inner: ahz.inner,
            ahz_outer: ahz.outer,
            stability_radius,
            phz_validity: phz.validity(),
            ahz_validity: ahz.validity(),
            warnings: Vec::new(),
        }
    }

    /// `true` if both zones exist and no edge left the hierarchical regime.
    pub fn is_reliable(&self) -> bool {
        self.phz_validity.is_valid() && self.ahz_validity.is_valid() && self.warnings.is_empty()
    }

    pub fn phz(&self) -> HzBoundaries {
        HzBoundaries::new(self.phz_inner, self.phz_outer)
    }

    pub fn ahz(&self) -> HzBoundaries {
        HzBoundaries::new(self.ahz_inner, self.ahz_outer)
    }

    /// `true` if a circular orbit of radius `r` is dynamically unstable.
    ///
    /// S-type orbits are stable inside the critical radius, P-type orbits outside it.
    pub fn is_unstable(&self, binary_type: BinaryType, r: Au) -> bool {
        match binary_type {
            BinaryType::SType => r > self.stability_radius,
            BinaryType::PType => r < self.stability_radius,
        }
    }

    /// Classify the radius `r`.
    ///
    /// Instability wins over habitability, and the PHZ over the AHZ. A zone whose edges are
    /// inverted, negative or non-finite contains no radius.
    pub fn classify(&self, binary_type: BinaryType, r: Au) -> ZoneClass {
        if self.is_unstable(binary_type, r) {
            ZoneClass::Unstable
        } else if self.phz().contains(r) {
            ZoneClass::PermanentHz
        } else if self.ahz().contains(r) {
            ZoneClass::AveragedHz
        } else {
            ZoneClass::Neither
        }
    }

    /// [`classify`](Self::classify) at the semi-major axis of `planet`.
    pub fn classify_orbit(&self, binary_type: BinaryType, planet: &PlanetOrbit) -> ZoneClass {
        self.classify(binary_type, planet.semi_major_axis)
    }
}
