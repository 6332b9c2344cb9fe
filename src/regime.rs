//! Soft check of the hierarchical regime assumed by the perturbation formulas.
//!
//! The forced-eccentricity model is a first-order secular result. It needs the planet well
//! inside the binary (S-type, `ap ≪ ab`) or well outside it (P-type, `ab ≪ ap`). The
//! *hierarchy ratio* is the small parameter of each case:
//!
//! * S-type: `ap / ab`
//! * P-type: `ab / ap`
//!
//! Exceeding the threshold yields a [`RegimeWarning`]; results are still computed.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::Au,
    system::{BinaryType, HzEdge},
};

/// A boundary landed where the perturbation expansion is questionable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeWarning {
    pub binary_type: BinaryType,
    pub edge: HzEdge,
    /// Planet semi-major axis at which the ratio was evaluated (au)
    pub semi_major_axis: Au,
    pub hierarchy_ratio: f64,
    pub threshold: f64,
}

impl fmt::Display for RegimeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} edge at {:.4} au: hierarchy ratio {:.3} exceeds {:.3}, perturbative estimate may be unreliable",
            self.binary_type, self.edge, self.semi_major_axis, self.hierarchy_ratio, self.threshold
        )
    }
}

/// Small parameter of the secular expansion for this geometry.
pub fn hierarchy_ratio(binary_type: BinaryType, ab: Au, ap: Au) -> f64 {
    match binary_type {
        BinaryType::SType => ap / ab,
        BinaryType::PType => ab / ap,
    }
}

/// Warn if `ap` is outside the hierarchical regime.
///
/// Non-finite or non-positive `ap` are not checked: such boundaries are already flagged by
/// [`HzValidity`](crate::system::HzValidity).
pub fn check_hierarchy(
    binary_type: BinaryType,
    edge: HzEdge,
    ab: Au,
    ap: Au,
    threshold: f64,
) -> Option<RegimeWarning> {
    if !(ap.is_finite() && ap > 0.0) {
        return None;
    }
    let ratio = hierarchy_ratio(binary_type, ab, ap);
    (ratio > threshold).then_some(RegimeWarning {
        binary_type,
        edge,
        semi_major_axis: ap,
        hierarchy_ratio: ratio,
        threshold,
    })
}
