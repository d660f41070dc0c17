use thiserror::Error;
use uom::si::f64::{Angle, Length};

use super::Point;

/// An error validating a geometric constraint set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("minimum spacing {min:?} exceeds maximum spacing {max:?}")]
    SpacingBounds { min: Length, max: Length },

    #[error("spacing step must be positive, got {step:?}")]
    SpacingStep { step: Length },

    #[error("rotation start {start:?} exceeds rotation stop {stop:?}")]
    RotationBounds { start: Angle, stop: Angle },

    #[error("a field must contain at least one borehole")]
    NoBoreholes,

    #[error("field side length must be positive, got {side:?}")]
    SideLength { side: Length },

    #[error("rectangle dimensions must be positive, got {width:?} x {length:?}")]
    RectangleDimensions { width: Length, length: Length },

    #[error("polygon must have at least 3 vertices, got {vertices}")]
    DegeneratePolygon { vertices: usize },
}

/// Bounds on the uniform borehole spacing of a generated field.
///
/// `start` is the tightest spacing (most boreholes), `stop` the loosest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingBounds {
    pub start: Length,
    pub stop: Length,
    /// Width of the refinement band swept past a converged spacing.
    pub step: Length,
}

impl SpacingBounds {
    /// Checks the spacing invariants: `start <= stop` and a positive
    /// `step`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] naming the violated bound.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        if self.start > self.stop {
            return Err(ConstraintError::SpacingBounds {
                min: self.start,
                max: self.stop,
            });
        }
        if self.step <= Length::default() {
            return Err(ConstraintError::SpacingStep { step: self.step });
        }
        Ok(())
    }
}

/// Bounds on the rotation sweep applied while generating row-wise fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationBounds {
    pub start: Angle,
    pub stop: Angle,
    pub step: Angle,
}

impl RotationBounds {
    fn validate(&self) -> Result<(), ConstraintError> {
        if self.start > self.stop {
            return Err(ConstraintError::RotationBounds {
                start: self.start,
                stop: self.stop,
            });
        }
        Ok(())
    }
}

/// A closed polygon in field coordinates.
///
/// The property boundary must be simple (non-self-intersecting); that is a
/// caller obligation checked by the geometric preprocessing step, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    /// Constructs a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::DegeneratePolygon`] for fewer than three
    /// vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self, ConstraintError> {
        if vertices.len() < 3 {
            return Err(ConstraintError::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Self(vertices))
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.0
    }
}

/// Geometric constraints for a field-generation routine.
///
/// The variant determines which search strategy sizes the field; see
/// [`crate::search::SearchStrategy`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeometricConstraints {
    /// A near-square field with a fixed borehole count and side length.
    NearSquare { boreholes: usize, side: Length },

    /// Uniformly spaced fields within a rectangle.
    Rectangle {
        width: Length,
        length: Length,
        b_min: Length,
        b_max: Length,
    },

    /// Rectangle fields with independent x and y spacing limits.
    BiRectangle {
        width: Length,
        length: Length,
        b_min: Length,
        b_max_x: Length,
        b_max_y: Length,
    },

    /// Bi-rectangle fields bounded by arbitrary polygons instead of a
    /// rectangle.
    BiRectangleConstrained {
        b_min: Length,
        b_max_x: Length,
        b_max_y: Length,
        property_boundary: Polygon,
        no_go_zones: Vec<Polygon>,
    },

    /// Bi-rectangle fields with a denser perimeter zone.
    BiZoned {
        width: Length,
        length: Length,
        b_min: Length,
        b_max_x: Length,
        b_max_y: Length,
    },

    /// Row-wise fields bounded by arbitrary polygons.
    RowWise {
        spacing: SpacingBounds,
        rotation: RotationBounds,
        /// Spacing along the boundary perimeter, as a ratio of the row
        /// spacing. `None` disables the perimeter pass.
        perimeter_spacing_ratio: Option<f64>,
        property_boundary: Polygon,
        no_go_zones: Vec<Polygon>,
    },
}

impl GeometricConstraints {
    /// Checks the invariants of this constraint set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] naming the first violated bound.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        match self {
            Self::NearSquare { boreholes, side } => {
                if *boreholes == 0 {
                    return Err(ConstraintError::NoBoreholes);
                }
                if *side <= Length::default() {
                    return Err(ConstraintError::SideLength { side: *side });
                }
                Ok(())
            }
            Self::Rectangle {
                width,
                length,
                b_min,
                b_max,
            } => {
                check_rectangle(*width, *length)?;
                check_spacing(*b_min, *b_max)
            }
            Self::BiRectangle {
                width,
                length,
                b_min,
                b_max_x,
                b_max_y,
            }
            | Self::BiZoned {
                width,
                length,
                b_min,
                b_max_x,
                b_max_y,
            } => {
                check_rectangle(*width, *length)?;
                check_spacing(*b_min, *b_max_x)?;
                check_spacing(*b_min, *b_max_y)
            }
            Self::BiRectangleConstrained {
                b_min,
                b_max_x,
                b_max_y,
                ..
            } => {
                check_spacing(*b_min, *b_max_x)?;
                check_spacing(*b_min, *b_max_y)
            }
            Self::RowWise {
                spacing, rotation, ..
            } => {
                spacing.validate()?;
                rotation.validate()
            }
        }
    }
}

fn check_rectangle(width: Length, length: Length) -> Result<(), ConstraintError> {
    if width <= Length::default() || length <= Length::default() {
        return Err(ConstraintError::RectangleDimensions { width, length });
    }
    Ok(())
}

fn check_spacing(min: Length, max: Length) -> Result<(), ConstraintError> {
    if min > max {
        return Err(ConstraintError::SpacingBounds { min, max });
    }
    Ok(())
}
