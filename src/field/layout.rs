use uom::si::f64::Length;

/// A point in the horizontal plane of the borehole field, in field
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    /// The field origin, `(0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            x: Length::default(),
            y: Length::default(),
        }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Length {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An ordered sequence of borehole center coordinates.
///
/// Order is significant only for trace labeling and for the row-wise
/// borehole-removal heuristics, which prune from the end of the sequence.
/// Duplicate coordinates are a caller error and are not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout(Vec<Point>);

impl Layout {
    #[must_use]
    pub fn new(boreholes: Vec<Point>) -> Self {
        Self(boreholes)
    }

    /// A single borehole at the field origin.
    #[must_use]
    pub fn single() -> Self {
        Self(vec![Point::origin()])
    }

    /// Number of boreholes in the field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn boreholes(&self) -> &[Point] {
        &self.0
    }

    /// Iterates over the borehole centers in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// The field retaining only the last `count` boreholes of this layout.
    ///
    /// Used by the row-wise prune search, which sorts boreholes so that the
    /// ones worth keeping sit at the tail of the sequence.
    #[must_use]
    pub fn tail(&self, count: usize) -> Self {
        let skip = self.0.len().saturating_sub(count);
        Self(self.0[skip..].to_vec())
    }

    /// Reorders boreholes by distance to `reference`, farthest first when
    /// `descending` is true.
    #[must_use]
    pub fn sorted_by_distance(&self, reference: &Point, descending: bool) -> Self {
        let mut boreholes = self.0.clone();
        boreholes.sort_by(|a, b| {
            let da = a.distance_to(reference);
            let db = b.distance_to(reference);
            if descending {
                db.partial_cmp(&da).expect("borehole distances are finite")
            } else {
                da.partial_cmp(&db).expect("borehole distances are finite")
            }
        });
        Self(boreholes)
    }
}

impl FromIterator<Point> for Layout {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
