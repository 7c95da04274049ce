use serde::{Deserialize, Serialize};

use crate::config::RectangleComparison;
use crate::errors::SpatialResult;
use crate::geometry::SpatialObject;
use crate::point::Point;

/// An axis-aligned minimum bounding rectangle (MBR).
///
/// `BoundingBox` is derived from a geometry on demand, never stored on it. It
/// only spans the `x` and `y` axes; elevation and measure are ignored.
///
/// # Examples
///
/// ```rust
/// use creof_spatial::{BoundingBox, Polygon, SpatialObject};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let triangle = Polygon::new(vec![vec![[5.0, 5.0], [7.0, 7.0], [6.0, 5.0], [5.0, 5.0]]])?;
/// assert_eq!(triangle.bounding_box()?, BoundingBox::new(5.0, 5.0, 7.0, 7.0));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Default, Debug, Deserialize, Serialize)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundingBox({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl BoundingBox {
    /// Creates a new bounding box with the specified coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The degenerate rectangle covering a single point.
    pub fn from_point(point: &Point) -> BoundingBox {
        BoundingBox::new(point.x(), point.y(), point.x(), point.y())
    }

    /// Folds a sequence of points into their bounding rectangle.
    ///
    /// Returns `None` when there are no points, which is distinct from the
    /// degenerate rectangle of a single (possibly repeated) point.
    pub fn from_points<'a, I>(points: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bbox = BoundingBox::from_point(first);
        for point in points {
            bbox.expand_to_include(point);
        }
        Some(bbox)
    }

    /// Grows the rectangle so that it covers `point`.
    pub fn expand_to_include(&mut self, point: &Point) {
        self.min_x = self.min_x.min(point.x());
        self.min_y = self.min_y.min(point.y());
        self.max_x = self.max_x.max(point.x());
        self.max_y = self.max_y.max(point.y());
    }

    /// Returns a copy grown by `margin` on every side.
    pub fn expanded_by(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    /// Checks if this bounding box is a point (zero area).
    pub fn is_point(&self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }

    /// Compares all four bounds using the given comparison mode.
    pub fn equals_with(&self, other: &BoundingBox, comparison: RectangleComparison) -> bool {
        let pairs = [
            (self.min_x, other.min_x),
            (self.min_y, other.min_y),
            (self.max_x, other.max_x),
            (self.max_y, other.max_y),
        ];
        pairs
            .into_iter()
            .all(|(left, right)| comparison.bounds_equal(left, right))
    }
}

/// Exact equality of all four bounds, the basis of `MBREquals`.
pub fn rectangles_equal(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.equals_with(b, RectangleComparison::Exact)
}

/// Whether two geometries have equal minimum bounding rectangles.
///
/// # Errors
/// Returns [`SpatialError::InvalidValue`](crate::SpatialError::InvalidValue)
/// if either geometry is empty.
pub fn mbr_equals<A, B>(a: &A, b: &B) -> SpatialResult<bool>
where
    A: SpatialObject,
    B: SpatialObject,
{
    Ok(rectangles_equal(&a.bounding_box()?, &b.bounding_box()?))
}
