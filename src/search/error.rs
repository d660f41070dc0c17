use thiserror::Error;

use crate::{field::ConstraintError, model::ModelError};

use super::ExcessTemperature;

/// Errors raised by the field searches.
///
/// All are fatal for the search instance that raised them, with one
/// exception: the successive domain walk catches the two bracket failures
/// (`UnderconstrainedDomain`, `OverconstrainedDomain`) from an individual
/// domain and skips that domain instead.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Excess temperature is negative at both ends of the tested domain:
    /// the loads are too small for every field in it.
    #[error(
        "excess temperature is negative at both ends of the domain \
         ({low:?} and {high:?}); the loads are too small for every field in \
         this domain, so its lower end needs fewer or smaller boreholes"
    )]
    UnderconstrainedDomain {
        low: ExcessTemperature,
        high: ExcessTemperature,
    },

    /// Excess temperature is positive at both ends of the tested domain:
    /// the loads exceed what the largest field in it can satisfy.
    #[error(
        "excess temperature is positive at both ends of the domain \
         ({low:?} and {high:?}); the loads exceed every field in this \
         domain, so widen it toward more or larger boreholes, increase the \
         available land area, or relax the allowable EFT bounds"
    )]
    OverconstrainedDomain {
        low: ExcessTemperature,
        high: ExcessTemperature,
    },

    /// The endpoint excess temperatures form a sign combination no search
    /// branch accepts, which indicates an upstream evaluation
    /// inconsistency (e.g. cost non-monotonic in field density).
    #[error(
        "inconsistent excess temperatures at the domain ends \
         ({low:?} and {high:?}); this indicates a problem in the excess \
         temperature calculation rather than a legitimate infeasibility"
    )]
    InconsistentExcessTemperature {
        low: ExcessTemperature,
        high: ExcessTemperature,
    },

    /// An unrecognized borehole-removal heuristic name.
    #[error(
        "`{0}` is not a valid method for removing boreholes; valid methods \
         are CloseToCorner, CloseToPoint, FarFromPoint, and RowRemoval"
    )]
    InvalidRemovalMethod(String),

    /// An unrecognized flow-rate basis name.
    #[error("the flow basis should be either `borehole` or `system`, got `{0}`")]
    InvalidFlowBasis(String),

    /// The search was handed geometric bounds violating their invariants.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// A delegated model computation failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl SearchError {
    /// Whether this is one of the two bracket failures the successive
    /// domain walk treats as "skip this domain".
    #[must_use]
    pub fn is_bracket_failure(&self) -> bool {
        matches!(
            self,
            Self::UnderconstrainedDomain { .. } | Self::OverconstrainedDomain { .. }
        )
    }
}
