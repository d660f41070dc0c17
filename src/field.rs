//! Borehole field layouts, search domains, and geometric constraints.

mod constraints;
mod domain;
mod layout;
mod specifier;

pub use constraints::{
    ConstraintError, GeometricConstraints, Polygon, RotationBounds, SpacingBounds,
};
pub use domain::{DomainError, NestedDomain, SearchDomain};
pub use layout::{Layout, Point};
pub use specifier::FieldSpecifier;
