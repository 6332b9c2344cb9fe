//! Two-dimensional classification of the orbital plane.
//!
//! A [`ZoneMap`] samples a square `[-extent, extent]²` centered on the host (S-type) or
//! the barycenter (P-type) and labels every grid node with the [`ZoneClass`] of a circular
//! orbit through it. It carries no rendering: plotting front-ends draw the labels.
use itertools::iproduct;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    binary_system::{HzSummary, ZoneClass},
    constants::Au,
    dihz_errors::DihzError,
    system::BinaryType,
};

/// Half-width of the default map (au).
pub const DEFAULT_EXTENT: Au = 4.0;

/// Nodes per axis of the default map.
pub const DEFAULT_RESOLUTION: usize = 201;

/// Labelled square grid, stored row by row (`y` outer, `x` inner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneMap {
    pub binary_type: BinaryType,
    /// Node coordinates, shared by both axes (au)
    pub axis: Vec<Au>,
    pub cells: Vec<ZoneClass>,
}

/// `n` points from `-extent` to `extent`, exactly symmetric about zero.
fn symmetric_axis(extent: Au, n: usize) -> Vec<Au> {
    let span = (n - 1) as f64;
    (0..n)
        .map(|i| extent * (2.0 * i as f64 - span) / span)
        .collect()
}

impl ZoneMap {
    /// Classify every node of a `resolution × resolution` grid.
    ///
    /// Arguments
    /// -----------------
    /// * `summary`: the five radii of the system
    /// * `binary_type`: geometry, which decides on which side of the stability radius
    ///   orbits are unstable
    /// * `extent`: half-width of the square (au), finite and > 0
    /// * `resolution`: nodes per axis, at least 2
    ///
    /// Return
    /// ----------
    /// * The labelled grid, or [`DihzError::InvalidInput`] for a degenerate grid.
    pub fn compute(
        summary: &HzSummary,
        binary_type: BinaryType,
        extent: Au,
        resolution: usize,
    ) -> Result<ZoneMap, DihzError> {
        if !(extent.is_finite() && extent > 0.0) {
            return Err(DihzError::InvalidInput(format!(
                "map extent must be finite and > 0 (got {extent})"
            )));
        }
        if resolution < 2 {
            return Err(DihzError::InvalidInput(format!(
                "map resolution must be >= 2 (got {resolution})"
            )));
        }

        let axis = symmetric_axis(extent, resolution);
        let nodes: Vec<(Au, Au)> = iproduct!(axis.iter().copied(), axis.iter().copied()).collect();

        let cells = nodes
            .par_iter()
            .map(|&(y, x)| summary.classify(binary_type, x.hypot(y)))
            .collect();

        Ok(ZoneMap {
            binary_type,
            axis,
            cells,
        })
    }

    /// [`compute`](Self::compute) over ±[`DEFAULT_EXTENT`] with [`DEFAULT_RESOLUTION`] nodes.
    pub fn with_defaults(summary: &HzSummary, binary_type: BinaryType) -> Result<ZoneMap, DihzError> {
        Self::compute(summary, binary_type, DEFAULT_EXTENT, DEFAULT_RESOLUTION)
    }

    pub fn resolution(&self) -> usize {
        self.axis.len()
    }

    /// Label of node `(ix, iy)`.
    pub fn get(&self, ix: usize, iy: usize) -> Option<ZoneClass> {
        let n = self.resolution();
        if ix < n && iy < n {
            self.cells.get(iy * n + ix).copied()
        } else {
            None
        }
    }

    pub fn count(&self, class: ZoneClass) -> usize {
        self.cells.iter().filter(|&&c| c == class).count()
    }

    /// Area covered by `class`, each node standing for one grid cell (au²).
    pub fn area(&self, class: ZoneClass) -> f64 {
        let step = match self.axis.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        };
        self.count(class) as f64 * step * step
    }
}
