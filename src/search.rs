//! The field-search and sizing engine.
//!
//! A search repeatedly generates or selects a candidate borehole layout,
//! asks its [`CostModel`] for the candidate's excess temperature, and uses
//! the sign of that cost to narrow a search domain until the minimal
//! feasible field is found:
//!
//! - [`LinearDomainSearch`]: index bisection over a pre-enumerated ordered
//!   domain of layouts.
//! - [`NestedDomainSearch`]: an outer index bisection selecting among a
//!   family of domains, followed by an inner bisection (or a successive
//!   walk tracking minimal total drilling).
//! - [`RowWiseFieldSearch`]: bisection over a continuous spacing parameter
//!   for generated row-wise fields, with a borehole-pruning fallback.
//!
//! Callers pick the strategy matching their geometry routine (see
//! [`SearchStrategy::for_constraints`]), supply the model seams, and get a
//! [`SelectedDesign`] plus the full evaluation trace back.

mod bisection;
mod error;
mod evaluator;
mod excess;
mod nested;
mod row_wise;
mod trace;
mod visited;

#[cfg(test)]
mod test_support;

pub use bisection::{DomainSelection, LinearDomainSearch};
pub use error::SearchError;
pub use evaluator::{CostEvaluator, CostModel};
pub use excess::{ExcessTemperature, Sign};
pub use nested::NestedDomainSearch;
pub use row_wise::{
    CandidateRecord, GenerateField, RemovalMethod, RowWiseConfig, RowWiseFieldSearch,
    RowWiseOutcome,
};
pub use trace::EvaluationRecord;

use uom::si::f64::Length;

use crate::field::{FieldSpecifier, GeometricConstraints, Layout};

/// The search strategy matching a geometry routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Linear,
    Nested,
    NestedSuccessive,
    RowWise,
}

impl SearchStrategy {
    /// Selects the strategy used to size fields generated under the given
    /// constraints.
    #[must_use]
    pub fn for_constraints(constraints: &GeometricConstraints) -> Self {
        match constraints {
            GeometricConstraints::NearSquare { .. } | GeometricConstraints::Rectangle { .. } => {
                Self::Linear
            }
            GeometricConstraints::BiRectangle { .. }
            | GeometricConstraints::BiRectangleConstrained { .. } => Self::Nested,
            GeometricConstraints::BiZoned { .. } => Self::NestedSuccessive,
            GeometricConstraints::RowWise { .. } => Self::RowWise,
        }
    }
}

/// The final result of a field search.
///
/// Constructed once at the end of a search and immutable thereafter.
#[derive(Debug, Clone)]
pub struct SelectedDesign {
    /// The selected borehole layout.
    pub layout: Layout,

    /// Specifier of the selected layout, for reporting.
    pub specifier: FieldSpecifier,

    /// Final sizing height for the selected field.
    pub height: Length,

    /// Excess temperature of the selected field at maximum height.
    pub excess: ExcessTemperature,

    /// Every candidate evaluation performed during the search, in order.
    pub trace: Vec<EvaluationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::meter;

    use crate::field::{Point, Polygon};

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn strategy_follows_geometry_routine() {
        let near_square = GeometricConstraints::NearSquare {
            boreholes: 16,
            side: m(40.0),
        };
        assert_eq!(
            SearchStrategy::for_constraints(&near_square),
            SearchStrategy::Linear
        );

        let boundary = Polygon::new(vec![
            Point { x: m(0.0), y: m(0.0) },
            Point { x: m(100.0), y: m(0.0) },
            Point { x: m(100.0), y: m(80.0) },
        ])
        .unwrap();
        let constrained = GeometricConstraints::BiRectangleConstrained {
            b_min: m(5.0),
            b_max_x: m(25.0),
            b_max_y: m(25.0),
            property_boundary: boundary,
            no_go_zones: vec![],
        };
        assert_eq!(
            SearchStrategy::for_constraints(&constrained),
            SearchStrategy::Nested
        );

        let zoned = GeometricConstraints::BiZoned {
            width: m(40.0),
            length: m(85.0),
            b_min: m(3.0),
            b_max_x: m(10.0),
            b_max_y: m(10.0),
        };
        assert_eq!(
            SearchStrategy::for_constraints(&zoned),
            SearchStrategy::NestedSuccessive
        );
    }
}
