//! # Physical parameter value types
//!
//! Immutable value types describing a binary star system and the habitable-zone
//! boundaries computed for it:
//!
//! - [`StarParams`] – luminosity, effective temperature and mass of one star,
//! - [`BinaryOrbit`] – semi-major axis and eccentricity of the stellar orbit,
//! - [`PlanetOrbit`] – semi-major axis of a test planet,
//! - [`BinaryType`] – S-type (circumstellar) or P-type (circumbinary) geometry,
//! - [`HzBoundaries`] / [`HzValidity`] – an `[inner, outer]` pair and its consistency check,
//! - [`HzEdge`] – label of one of the four boundaries (AHZ/PHZ × inner/outer).
//!
//! Constructors validate their input and return [`DihzError::InvalidInput`] on
//! non-physical values. The fields stay public, so every solver calls `validate()` again
//! on entry.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{Au, Kelvin, SolarLuminosity, SolarMass};
use crate::dihz_errors::DihzError;
use crate::eccentricity::insolation_equivalent_radius;

/// Accepted spellings for circumstellar systems, compared case-insensitively.
pub const S_TYPE_ALIASES: [&str; 3] = ["s", "s-type", "circumstellar"];

/// Accepted spellings for circumbinary systems, compared case-insensitively.
pub const P_TYPE_ALIASES: [&str; 3] = ["p", "p-type", "circumbinary"];

/// `Ok` when `value` is finite and strictly positive, otherwise an `InvalidInput` naming it.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), DihzError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DihzError::InvalidInput(format!(
            "{name} must be finite and > 0 (got {value})"
        )))
    }
}

/// Mass parameter `μ = mB / (mA + mB)` of the secondary star.
pub fn mass_ratio(m_a: SolarMass, m_b: SolarMass) -> f64 {
    m_b / (m_a + m_b)
}

/// Physical parameters of a single star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarParams {
    /// Luminosity (L☉)
    pub luminosity: SolarLuminosity,
    /// Effective temperature (K)
    pub teff: Kelvin,
    /// Mass (M☉)
    pub mass: SolarMass,
}

impl StarParams {
    pub fn new(
        luminosity: SolarLuminosity,
        teff: Kelvin,
        mass: SolarMass,
    ) -> Result<Self, DihzError> {
        let star = StarParams {
            luminosity,
            teff,
            mass,
        };
        star.validate()?;
        Ok(star)
    }

    pub fn validate(&self) -> Result<(), DihzError> {
        require_positive("luminosity", self.luminosity)?;
        require_positive("effective temperature", self.teff)?;
        require_positive("mass", self.mass)
    }
}

/// Orbit of the two stars around each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryOrbit {
    /// Semi-major axis `ab` (au)
    pub semi_major_axis: Au,
    /// Eccentricity `eb`, in `[0, 1)`
    pub eccentricity: f64,
}

impl BinaryOrbit {
    pub fn new(semi_major_axis: Au, eccentricity: f64) -> Result<Self, DihzError> {
        let orbit = BinaryOrbit {
            semi_major_axis,
            eccentricity,
        };
        orbit.validate()?;
        Ok(orbit)
    }

    pub fn validate(&self) -> Result<(), DihzError> {
        require_positive("binary semi-major axis", self.semi_major_axis)?;
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(DihzError::InvalidInput(format!(
                "binary eccentricity must lie in [0, 1) (got {})",
                self.eccentricity
            )));
        }
        Ok(())
    }

    /// Periastron distance `ab (1 - eb)`.
    pub fn periastron(&self) -> Au {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Apastron distance `ab (1 + eb)`.
    pub fn apastron(&self) -> Au {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Circular orbit with the same time-averaged insolation as this one.
    pub fn insolation_equivalent_radius(&self) -> Au {
        insolation_equivalent_radius(self.semi_major_axis, self.eccentricity)
    }
}

/// Orbit of the test planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetOrbit {
    /// Semi-major axis `ap` (au)
    pub semi_major_axis: Au,
}

impl PlanetOrbit {
    pub fn new(semi_major_axis: Au) -> Result<Self, DihzError> {
        require_positive("planet semi-major axis", semi_major_axis)?;
        Ok(PlanetOrbit { semi_major_axis })
    }
}

/// Geometry of the planetary orbit in a binary system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryType {
    /// Circumstellar: the planet orbits the primary star.
    SType,
    /// Circumbinary: the planet orbits both stars.
    PType,
}

impl FromStr for BinaryType {
    type Err = DihzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        let matches = |aliases: &[&str]| aliases.iter().any(|a| a.eq_ignore_ascii_case(tag));

        if matches(&S_TYPE_ALIASES) {
            Ok(BinaryType::SType)
        } else if matches(&P_TYPE_ALIASES) {
            Ok(BinaryType::PType)
        } else {
            Err(DihzError::InvalidInput(format!(
                "binary star type '{s}' not recognized, choose \"S\" or \"P\""
            )))
        }
    }
}

impl fmt::Display for BinaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryType::SType => write!(f, "S-type"),
            BinaryType::PType => write!(f, "P-type"),
        }
    }
}

/// One of the four habitable-zone boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HzEdge {
    AhzInner,
    AhzOuter,
    PhzInner,
    PhzOuter,
}

impl fmt::Display for HzEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HzEdge::AhzInner => "AHZ inner",
            HzEdge::AhzOuter => "AHZ outer",
            HzEdge::PhzInner => "PHZ inner",
            HzEdge::PhzOuter => "PHZ outer",
        };
        f.write_str(label)
    }
}

/// Consistency of an `[inner, outer]` boundary pair.
///
/// When several problems apply, the first in declaration order below `Valid` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HzValidity {
    Valid,
    /// One of the edges is NaN or infinite.
    NonFinite,
    /// One of the edges is negative.
    NegativeBoundary,
    /// `inner >= outer`: the zone does not exist.
    InvertedOrder,
}

impl HzValidity {
    pub fn is_valid(&self) -> bool {
        matches!(self, HzValidity::Valid)
    }
}

/// Inner and outer edge of a habitable zone (au).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HzBoundaries {
    pub inner: Au,
    pub outer: Au,
}

impl HzBoundaries {
    pub fn new(inner: Au, outer: Au) -> Self {
        HzBoundaries { inner, outer }
    }

    pub fn validity(&self) -> HzValidity {
        if !self.inner.is_finite() || !self.outer.is_finite() {
            HzValidity::NonFinite
        } else if self.inner < 0.0 || self.outer < 0.0 {
            HzValidity::NegativeBoundary
        } else if self.inner >= self.outer {
            HzValidity::InvertedOrder
        } else {
            HzValidity::Valid
        }
    }

    /// Width of the zone, `outer - inner`.
    pub fn width(&self) -> Au {
        self.outer - self.inner
    }

    /// `true` if `r` lies in `[inner, outer]` and the pair is valid.
    pub fn contains(&self, r: Au) -> bool {
        self.validity().is_valid() && r >= self.inner && r <= self.outer
    }

    pub fn as_array(&self) -> [Au; 2] {
        [self.inner, self.outer]
    }
}

impl From<[Au; 2]> for HzBoundaries {
    fn from([inner, outer]: [Au; 2]) -> Self {
        HzBoundaries { inner, outer }
    }
}

impl fmt::Display for HzBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}] au", self.inner, self.outer)
    }
}

#[cfg(test)]
mod system_test {
    use super::*;

    #[test]
    fn star_params_reject_non_positive_values() {
        assert!(StarParams::new(1.0, 5777.0, 1.0).is_ok());
        assert!(matches!(
            StarParams::new(0.0, 5777.0, 1.0),
            Err(DihzError::InvalidInput(_))
        ));
        assert!(matches!(
            StarParams::new(1.0, -10.0, 1.0),
            Err(DihzError::InvalidInput(_))
        ));
        assert!(matches!(
            StarParams::new(1.0, 5777.0, f64::NAN),
            Err(DihzError::InvalidInput(_))
        ));
    }

    #[test]
    fn binary_orbit_bounds() {
        assert!(BinaryOrbit::new(0.2, 0.0).is_ok());
        assert!(BinaryOrbit::new(0.2, 0.999).is_ok());
        assert!(BinaryOrbit::new(0.2, 1.0).is_err());
        assert!(BinaryOrbit::new(0.2, -0.1).is_err());
        assert!(BinaryOrbit::new(0.0, 0.3).is_err());
        assert!(BinaryOrbit::new(-1.0, 0.3).is_err());
    }

    #[test]
    fn binary_orbit_apsides() {
        let orbit = BinaryOrbit::new(2.0, 0.25).unwrap();
        assert_eq!(orbit.periastron(), 1.5);
        assert_eq!(orbit.apastron(), 2.5);
        assert!(orbit.insolation_equivalent_radius() < 2.0);
    }

    #[test]
    fn binary_type_aliases() {
        for tag in ["S", "s", "S-type", "S-Type", "circumstellar", " Circumstellar "] {
            assert_eq!(tag.parse::<BinaryType>().unwrap(), BinaryType::SType);
        }
        for tag in ["P", "p", "P-type", "P-TYPE", "circumbinary"] {
            assert_eq!(tag.parse::<BinaryType>().unwrap(), BinaryType::PType);
        }
        assert!(matches!(
            "X".parse::<BinaryType>(),
            Err(DihzError::InvalidInput(_))
        ));
        assert!("stype".parse::<BinaryType>().is_err());
    }

    #[test]
    fn boundary_validity_ordering() {
        assert_eq!(HzBoundaries::new(0.9, 1.7).validity(), HzValidity::Valid);
        assert_eq!(
            HzBoundaries::new(1.7, 0.9).validity(),
            HzValidity::InvertedOrder
        );
        assert_eq!(
            HzBoundaries::new(1.0, 1.0).validity(),
            HzValidity::InvertedOrder
        );
        assert_eq!(
            HzBoundaries::new(-0.6, 1.7).validity(),
            HzValidity::NegativeBoundary
        );
        assert_eq!(
            HzBoundaries::new(f64::NAN, -1.0).validity(),
            HzValidity::NonFinite
        );
        assert_eq!(HzBoundaries::new(0.0, 1.0).validity(), HzValidity::Valid);
    }

    #[test]
    fn contains_requires_valid_zone() {
        let hz = HzBoundaries::from([0.95, 1.68]);
        assert!(hz.contains(1.0));
        assert!(!hz.contains(2.0));
        assert!(!HzBoundaries::new(1.68, 0.95).contains(1.0));
    }
}
