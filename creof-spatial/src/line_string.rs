//! LineString geometry.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

use crate::common::{normalize_index, CoordinateArray};
use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{GeometryKind, SpatialObject};
use crate::input::PointInput;
use crate::point::{Dimension, Point};

/// An ordered sequence of points.
///
/// A LineString may be empty and carries no closure requirement; when it is
/// used as a polygon ring the polygon checks closure. All points share one
/// [`Dimension`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Point>")]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Creates a LineString from built points and/or raw coordinate tuples.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`] if any point is invalid or the
    /// points do not all have the same dimension.
    pub fn new<I, P>(points: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PointInput>,
    {
        let points = points
            .into_iter()
            .map(|point| point.into().resolve())
            .collect::<SpatialResult<Vec<Point>>>()?;
        ensure_uniform_dimension(&points)?;
        Ok(Self { points })
    }

    /// Creates an empty LineString.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a LineString from an array of coordinate arrays, such as the
    /// one returned by [`LineString::to_array`].
    pub fn from_array(points: impl Into<Vec<Vec<f64>>>) -> SpatialResult<Self> {
        let points: Vec<Vec<f64>> = points.into();
        Self::new(points)
    }

    /// Returns the coordinates as an array of coordinate arrays.
    pub fn to_array(&self) -> CoordinateArray<Vec<Vec<f64>>> {
        CoordinateArray::new(self.components())
    }

    pub(crate) fn components(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(Point::components).collect()
    }

    /// Gets the point at `index`; negative indices count from the end.
    ///
    /// # Errors
    /// Returns [`SpatialError::Range`] if the index is out of bounds.
    pub fn point(&self, index: isize) -> SpatialResult<&Point> {
        let position = normalize_index(index, self.points.len())?;
        Ok(&self.points[position])
    }

    /// The points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point, which must match the dimension of the existing ones.
    pub fn add_point(&mut self, point: impl Into<PointInput>) -> SpatialResult<&mut Self> {
        let point = point.into().resolve()?;
        if let Some(dimension) = self.dimension() {
            if point.dimension() != dimension {
                return Err(dimension_mismatch(dimension, point.dimension()));
            }
        }
        self.points.push(point);
        Ok(self)
    }

    /// Checks whether the first and last points are equal.
    ///
    /// An empty LineString is not closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// The shared dimension of the points, `None` when empty.
    pub fn dimension(&self) -> Option<Dimension> {
        self.points.first().map(Point::dimension)
    }

    /// WKT text without the `LINESTRING` keyword, e.g. `0 0,1 1`.
    pub fn wkt_body(&self) -> String {
        self.to_string()
    }
}

fn ensure_uniform_dimension(points: &[Point]) -> SpatialResult<()> {
    if let Some(first) = points.first() {
        let expected = first.dimension();
        if let Some(other) = points.iter().find(|p| p.dimension() != expected) {
            return Err(dimension_mismatch(expected, other.dimension()));
        }
    }
    Ok(())
}

fn dimension_mismatch(expected: Dimension, found: Dimension) -> SpatialError {
    SpatialError::invalid(format!(
        "inconsistent coordinate dimension: expected {} components, found {}",
        expected.size(),
        found.size()
    ))
}

impl SpatialObject for LineString {
    fn kind(&self) -> GeometryKind {
        GeometryKind::LineString
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn visit_points<'a>(&'a self, visitor: &mut dyn FnMut(&'a Point)) {
        self.points.iter().for_each(visitor);
    }

    fn wkt_body(&self) -> String {
        self.to_string()
    }
}

impl TryFrom<Vec<Point>> for LineString {
    type Error = SpatialError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        LineString::new(points)
    }
}

impl Serialize for LineString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.points.serialize(serializer)
    }
}

impl Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}
