use thiserror::Error;

use crate::system::HzEdge;

#[derive(Error, Debug)]
pub enum DihzError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid solver parameter: {0}")]
    InvalidSolverParameter(String),

    #[error("Root solver failed on the {edge} edge: {source}")]
    SolverNonconvergence {
        edge: HzEdge,
        source: roots::SearchError,
    },

    #[error(
        "Root solver stopped on the {edge} edge at ap = {root} au with residual {residual:e} above tolerance"
    )]
    ResidualNotReduced {
        edge: HzEdge,
        root: f64,
        residual: f64,
    },

    #[error("No habitable zone for these parameters: inner edge {inner} au, outer edge {outer} au")]
    InvalidBoundaryOrdering { inner: f64, outer: f64 },
}

impl DihzError {
    /// `true` for both ways a semi-analytic root solve can fail to converge.
    pub fn is_nonconvergence(&self) -> bool {
        matches!(
            self,
            DihzError::SolverNonconvergence { .. } | DihzError::ResidualNotReduced { .. }
        )
    }
}

impl PartialEq for DihzError {
    fn eq(&self, other: &Self) -> bool {
        use DihzError::*;
        match (self, other) {
            (InvalidInput(a), InvalidInput(b)) => a == b,
            (InvalidSolverParameter(a), InvalidSolverParameter(b)) => a == b,
            (
                SolverNonconvergence {
                    edge: e1,
                    source: s1,
                },
                SolverNonconvergence {
                    edge: e2,
                    source: s2,
                },
            ) => e1 == e2 && s1 == s2,

            // Residuals can be NaN: compare the edge only
            (ResidualNotReduced { edge: e1, .. }, ResidualNotReduced { edge: e2, .. }) => e1 == e2,

            (
                InvalidBoundaryOrdering {
                    inner: i1,
                    outer: o1,
                },
                InvalidBoundaryOrdering {
                    inner: i2,
                    outer: o2,
                },
            ) => i1 == i2 && o1 == o2,

            _ => false,
        }
    }
}

#[cfg(test)]
mod dihz_errors_test {
    use super::*;

    #[test]
    fn nonconvergence_groups_both_solver_failures() {
        let search = DihzError::SolverNonconvergence {
            edge: HzEdge::PhzInner,
            source: roots::SearchError::NoConvergency,
        };
        let residual = DihzError::ResidualNotReduced {
            edge: HzEdge::PhzOuter,
            root: 1.2,
            residual: f64::NAN,
        };

        assert!(search.is_nonconvergence());
        assert!(residual.is_nonconvergence());
        assert!(!DihzError::InvalidInput("ab".into()).is_nonconvergence());
    }

    #[test]
    fn equality_ignores_nan_residuals() {
        let a = DihzError::ResidualNotReduced {
            edge: HzEdge::AhzInner,
            root: f64::NAN,
            residual: f64::NAN,
        };
        let b = DihzError::ResidualNotReduced {
            edge: HzEdge::AhzInner,
            root: 0.9,
            residual: 1e-3,
        };
        assert_eq!(a, b);
        assert_ne!(a, DihzError::InvalidInput("x".into()));
    }

    #[test]
    fn messages_name_the_edge() {
        let err = DihzError::SolverNonconvergence {
            edge: HzEdge::AhzOuter,
            source: roots::SearchError::ZeroDerivative,
        };
        assert!(err.to_string().contains("AHZ outer"));
    }
}
