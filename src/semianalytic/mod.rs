//! # Semi-analytic habitable zones
//!
//! The analytic formulas of [`circumstellar`](crate::circumstellar) and
//! [`circumbinary`](crate::circumbinary) are one-step approximations of an insolation balance.
//! This module solves that balance exactly: for each boundary it builds a residual
//!
//! ```text
//! F(ap) = (insolation received at the critical phase, in units of the threshold) − 1
//! ```
//!
//! which vanishes at the true boundary, and hands it to a [`RootSolver`] seeded with the
//! single-star habitable zone.
//!
//! ## Outcome of a solve
//!
//! * A root-finder failure on any edge is an error
//!   ([`DihzError::SolverNonconvergence`] or [`DihzError::ResidualNotReduced`]); no stale
//!   guess is ever returned.
//! * A converged pair is returned as an [`HzSolution`] carrying the raw boundaries **and**
//!   an explicit [`HzValidity`]: inverted or negative edges mean the zone does not exist for
//!   these parameters. Use [`HzSolution::into_result`] to turn that into
//!   [`DihzError::InvalidBoundaryOrdering`].
//! * Boundaries outside the hierarchical regime come with [`RegimeWarning`]s.
//!
//! ## Configuration
//!
//! [`SolverParams`] gathers the root-finder choice, tolerances, and diagnostic settings.
//!
//! ```rust, no_run
//! use dihz::semianalytic::{RootMethod, SolverParams};
//!
//! let params = SolverParams::builder()
//!     .method(RootMethod::Newton)
//!     .max_iterations(100)
//!     .residual_tolerance(1e-10)
//!     .build()
//!     .unwrap();
//! println!("{params:#}");
//! ```
use std::cmp::Ordering::Greater;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::Au,
    dihz_errors::DihzError,
    regime::{check_hierarchy, RegimeWarning},
    system::{BinaryType, HzBoundaries, HzEdge, HzValidity},
};

pub mod circumbinary;
pub mod circumstellar;
pub mod root_solver;

use root_solver::{NewtonSolver, RootFailure, RootSolver, SecantSolver, StoppingRule};

/// Root-finding algorithm used for each boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootMethod {
    /// Derivative-free secant iteration.
    Secant,
    /// Newton–Raphson with a finite-difference derivative.
    Newton,
}

impl fmt::Display for RootMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootMethod::Secant => write!(f, "secant"),
            RootMethod::Newton => write!(f, "newton"),
        }
    }
}

/// Configuration of the semi-analytic solvers.
///
/// Fields
/// -----------------
/// * `method` – root-finding algorithm.
/// * `max_iterations` – iteration cap per boundary.
/// * `residual_tolerance` – a root is accepted only if `|F(root)|` is below this.
/// * `step_tolerance` – stop once successive iterates differ by less than this (au).
/// * `secant_offset` – relative offset of the second secant seed.
/// * `derivative_step` – relative finite-difference step for Newton.
/// * `max_hierarchy_ratio` – threshold of the regime diagnostic.
/// * `verbose` – print warnings and invalid zones to stderr.
///
/// Defaults
/// -----------------
/// * `method`: secant
/// * `max_iterations`: 50
/// * `residual_tolerance`: 1e-8
/// * `step_tolerance`: 1e-12 au
/// * `secant_offset`: 1e-3
/// * `derivative_step`: 1e-6
/// * `max_hierarchy_ratio`: 0.3
/// * `verbose`: false
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    pub method: RootMethod,
    pub max_iterations: usize,
    pub residual_tolerance: f64,
    pub step_tolerance: f64,
    pub secant_offset: f64,
    pub derivative_step: f64,
    pub max_hierarchy_ratio: f64,
    pub verbose: bool,
}

impl SolverParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent, validating builder starting from the defaults.
    pub fn builder() -> SolverParamsBuilder {
        SolverParamsBuilder::new()
    }

    fn stopping_rule(&self) -> StoppingRule {
        StoppingRule {
            max_iterations: self.max_iterations,
            residual_tolerance: self.residual_tolerance,
            step_tolerance: self.step_tolerance,
        }
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            method: RootMethod::Secant,
            max_iterations: 50,
            residual_tolerance: 1e-8,
            step_tolerance: 1e-12,
            secant_offset: 1e-3,
            derivative_step: 1e-6,
            max_hierarchy_ratio: 0.3,
            verbose: false,
        }
    }
}

impl RootSolver for SolverParams {
    fn find_root(
        &self,
        residual: &dyn Fn(f64) -> f64,
        initial_guess: f64,
    ) -> Result<f64, RootFailure> {
        match self.method {
            RootMethod::Secant => SecantSolver {
                rule: self.stopping_rule(),
                offset: self.secant_offset,
            }
            .find_root(residual, initial_guess),
            RootMethod::Newton => NewtonSolver {
                rule: self.stopping_rule(),
                derivative_step: self.derivative_step,
            }
            .find_root(residual, initial_guess),
        }
    }
}

/// Builder for [`SolverParams`], with validation.
#[derive(Debug, Clone)]
pub struct SolverParamsBuilder {
    params: SolverParams,
}

impl Default for SolverParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: SolverParams::default(),
        }
    }

    pub fn method(mut self, v: RootMethod) -> Self {
        self.params.method = v;
        self
    }
    pub fn max_iterations(mut self, v: usize) -> Self {
        self.params.max_iterations = v;
        self
    }
    pub fn residual_tolerance(mut self, v: f64) -> Self {
        self.params.residual_tolerance = v;
        self
    }
    pub fn step_tolerance(mut self, v: f64) -> Self {
        self.params.step_tolerance = v;
        self
    }
    pub fn secant_offset(mut self, v: f64) -> Self {
        self.params.secant_offset = v;
        self
    }
    pub fn derivative_step(mut self, v: f64) -> Self {
        self.params.derivative_step = v;
        self
    }
    pub fn max_hierarchy_ratio(mut self, v: f64) -> Self {
        self.params.max_hierarchy_ratio = v;
        self
    }
    pub fn verbose(mut self, v: bool) -> Self {
        self.params.verbose = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `max_iterations >= 1`
    /// * `residual_tolerance`, `step_tolerance`, `secant_offset`, `derivative_step`,
    ///   `max_hierarchy_ratio` all strictly positive (NaN rejected).
    pub fn build(self) -> Result<SolverParams, DihzError> {
        let p = &self.params;

        if p.max_iterations == 0 {
            return Err(DihzError::InvalidSolverParameter(
                "max_iterations must be >= 1".into(),
            ));
        }
        for (name, value) in [
            ("residual_tolerance", p.residual_tolerance),
            ("step_tolerance", p.step_tolerance),
            ("secant_offset", p.secant_offset),
            ("derivative_step", p.derivative_step),
            ("max_hierarchy_ratio", p.max_hierarchy_ratio),
        ] {
            if !Self::gt0(value) {
                return Err(DihzError::InvalidSolverParameter(format!(
                    "{name} must be > 0"
                )));
            }
        }

        Ok(self.params)
    }
}

impl fmt::Display for SolverParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 40;
            writeln!(f, "Semi-analytic Solver Parameters")?;
            writeln!(f, "-------------------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!("method              = {}", self.method, "Root-finding algorithm")?;
            line!(
                "max_iterations      = {}",
                self.max_iterations,
                "Iteration cap per boundary"
            )?;
            line!(
                "residual_tolerance  = {:.1e}",
                self.residual_tolerance,
                "Accepted |F(ap)|"
            )?;
            line!(
                "step_tolerance      = {:.1e} au",
                self.step_tolerance,
                "Minimum step before stopping"
            )?;
            line!(
                "secant_offset       = {:.1e}",
                self.secant_offset,
                "Relative offset of second secant seed"
            )?;
            line!(
                "derivative_step     = {:.1e}",
                self.derivative_step,
                "Relative finite-difference step"
            )?;
            line!(
                "max_hierarchy_ratio = {:.3}",
                self.max_hierarchy_ratio,
                "Regime warning threshold"
            )?;
            line!("verbose             = {}", self.verbose, "Print diagnostics")?;
            Ok(())
        } else {
            write!(
                f,
                "SolverParams(method={}, max_iterations={}, residual_tolerance={:.1e}, step_tolerance={:.1e}, max_hierarchy_ratio={:.2})",
                self.method,
                self.max_iterations,
                self.residual_tolerance,
                self.step_tolerance,
                self.max_hierarchy_ratio,
            )
        }
    }
}

/// Result of a semi-analytic solve: the converged boundaries and whether they form a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HzSolution {
    pub boundaries: HzBoundaries,
    pub validity: HzValidity,
    pub warnings: Vec<RegimeWarning>,
}

impl HzSolution {
    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    pub fn inner(&self) -> Au {
        self.boundaries.inner
    }

    pub fn outer(&self) -> Au {
        self.boundaries.outer
    }

    /// The boundaries if they form a zone, [`DihzError::InvalidBoundaryOrdering`] otherwise.
    pub fn into_result(self) -> Result<HzBoundaries, DihzError> {
        if self.is_valid() {
            Ok(self.boundaries)
        } else {
            Err(DihzError::InvalidBoundaryOrdering {
                inner: self.boundaries.inner,
                outer: self.boundaries.outer,
            })
        }
    }
}

/// One boundary to solve for: its label, residual, and starting point.
pub struct EdgeProblem<'a> {
    pub edge: HzEdge,
    pub residual: &'a dyn Fn(Au) -> f64,
    pub initial_guess: Au,
}

/// Solve a single boundary with any [`RootSolver`].
pub fn solve_edge<S: RootSolver + ?Sized>(
    solver: &S,
    problem: &EdgeProblem<'_>,
) -> Result<Au, DihzError> {
    solver
        .find_root(problem.residual, problem.initial_guess)
        .map_err(|failure| failure.at_edge(problem.edge))
}

/// Solve both edges of a zone, then attach validity and regime diagnostics.
pub(crate) fn solve_zone(
    params: &SolverParams,
    binary_type: BinaryType,
    ab: Au,
    inner: EdgeProblem<'_>,
    outer: EdgeProblem<'_>,
) -> Result<HzSolution, DihzError> {
    let boundaries = HzBoundaries::new(solve_edge(params, &inner)?, solve_edge(params, &outer)?);
    let validity = boundaries.validity();

    let warnings: Vec<RegimeWarning> = [(inner.edge, boundaries.inner), (outer.edge, boundaries.outer)]
        .into_iter()
        .filter_map(|(edge, ap)| {
            check_hierarchy(binary_type, edge, ab, ap, params.max_hierarchy_ratio)
        })
        .collect();

    if params.verbose {
        for warning in &warnings {
            eprintln!("Warning: {warning}");
        }
        if !validity.is_valid() {
            eprintln!(
                "No {} habitable zone for given parameters: {boundaries} ({validity:?})",
                binary_type
            );
        }
    }

    Ok(HzSolution {
        boundaries,
        validity,
        warnings,
    })
}
