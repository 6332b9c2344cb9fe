//! Scalar root finding behind a narrow interface.
//!
//! [`RootSolver`] is the only capability the semi-analytic HZ solvers need: find `x` with
//! `F(x) ≈ 0` starting from a guess. Two implementations wrap the `roots` crate:
//!
//! * [`SecantSolver`] – derivative-free, seeded with `x0` and `x0 (1 + offset)`,
//! * [`NewtonSolver`] – Newton–Raphson on a central finite-difference derivative.
//!
//! Both stop on the first of: `|F(x)| <= residual_tolerance`, a step smaller than
//! `step_tolerance`, or `max_iterations`. A root is only returned if its residual is
//! finite and within `residual_tolerance`; anything else is a [`RootFailure`].
use roots::{find_root_newton_raphson, find_root_secant, Convergency, SearchError};

use crate::{dihz_errors::DihzError, system::HzEdge};

/// Why a root solve did not produce an acceptable root.
#[derive(Debug, PartialEq)]
pub enum RootFailure {
    /// The underlying search gave up (iteration cap, flat secant, zero derivative).
    Search(SearchError),
    /// The search stopped but `|F(root)|` is above tolerance or not finite.
    ResidualNotReduced { root: f64, residual: f64 },
}

impl RootFailure {
    /// Attach the boundary being solved for.
    pub fn at_edge(self, edge: HzEdge) -> DihzError {
        match self {
            RootFailure::Search(source) => DihzError::SolverNonconvergence { edge, source },
            RootFailure::ResidualNotReduced { root, residual } => DihzError::ResidualNotReduced {
                edge,
                root,
                residual,
            },
        }
    }
}

impl From<SearchError> for RootFailure {
    fn from(err: SearchError) -> Self {
        RootFailure::Search(err)
    }
}

/// Solve `residual(x) = 0` from `initial_guess`.
pub trait RootSolver {
    fn find_root(
        &self,
        residual: &dyn Fn(f64) -> f64,
        initial_guess: f64,
    ) -> Result<f64, RootFailure>;
}

/// Stopping rules shared by both solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingRule {
    pub max_iterations: usize,
    pub residual_tolerance: f64,
    pub step_tolerance: f64,
}

impl Convergency<f64> for StoppingRule {
    fn is_root_found(&mut self, y: f64) -> bool {
        y.abs() <= self.residual_tolerance
    }

    fn is_converged(&mut self, x1: f64, x2: f64) -> bool {
        (x1 - x2).abs() <= self.step_tolerance
    }

    fn is_iteration_limit_reached(&mut self, iter: usize) -> bool {
        iter >= self.max_iterations
    }
}

impl StoppingRule {
    fn accept(&self, residual: &dyn Fn(f64) -> f64, root: f64) -> Result<f64, RootFailure> {
        let r = residual(root);
        if root.is_finite() && r.abs() <= self.residual_tolerance {
            Ok(root)
        } else {
            Err(RootFailure::ResidualNotReduced { root, residual: r })
        }
    }
}

/// Secant method seeded with `x0` and `x0 (1 + offset)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantSolver {
    pub rule: StoppingRule,
    pub offset: f64,
}

impl RootSolver for SecantSolver {
    fn find_root(
        &self,
        residual: &dyn Fn(f64) -> f64,
        initial_guess: f64,
    ) -> Result<f64, RootFailure> {
        let mut rule = self.rule;
        let second = initial_guess * (1.0 + self.offset);
        let root = find_root_secant(initial_guess, second, |x| residual(x), &mut rule)?;
        self.rule.accept(residual, root)
    }
}

/// Newton–Raphson with a central difference of relative width `derivative_step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSolver {
    pub rule: StoppingRule,
    pub derivative_step: f64,
}

impl RootSolver for NewtonSolver {
    fn find_root(
        &self,
        residual: &dyn Fn(f64) -> f64,
        initial_guess: f64,
    ) -> Result<f64, RootFailure> {
        let mut rule = self.rule;
        let step = self.derivative_step;
        let derivative = |x: f64| {
            let h = step * x.abs().max(1.0);
            (residual(x + h) - residual(x - h)) / (2.0 * h)
        };
        let root = find_root_newton_raphson(initial_guess, |x| residual(x), derivative, &mut rule)?;
        self.rule.accept(residual, root)
    }
}
