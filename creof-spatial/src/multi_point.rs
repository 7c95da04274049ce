//! MultiPoint geometry.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

use crate::common::{normalize_index, CoordinateArray};
use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{GeometryKind, SpatialObject};
use crate::input::PointInput;
use crate::point::Point;

/// An ordered collection of points.
///
/// Each point is validated on its own; unlike a [`LineString`](crate::LineString)
/// the points need not share a dimension.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Point>")]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    /// Creates a MultiPoint from built points and/or raw coordinate tuples.
    /// Points may differ in dimension.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`](crate::SpatialError::InvalidValue)
    /// if any point is invalid.
    pub fn new<I, P>(points: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PointInput>,
    {
        let points = points
            .into_iter()
            .map(|point| point.into().resolve())
            .collect::<SpatialResult<Vec<Point>>>()?;
        Ok(Self { points })
    }

    /// Creates a MultiPoint without points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a MultiPoint from an array of coordinate arrays.
    pub fn from_array(points: impl Into<Vec<Vec<f64>>>) -> SpatialResult<Self> {
        let points: Vec<Vec<f64>> = points.into();
        Self::new(points)
    }

    /// Returns the coordinates as an array of coordinate arrays.
    pub fn to_array(&self) -> CoordinateArray<Vec<Vec<f64>>> {
        CoordinateArray::new(self.points.iter().map(Point::components).collect())
    }

    /// Validates and appends a point.
    pub fn add_point(&mut self, point: impl Into<PointInput>) -> SpatialResult<&mut Self> {
        let point = point.into().resolve()?;
        self.points.push(point);
        Ok(self)
    }

    /// Gets the point at `index`; negative indices count from the end.
    pub fn point(&self, index: isize) -> SpatialResult<&Point> {
        let position = normalize_index(index, self.points.len())?;
        Ok(&self.points[position])
    }

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

    /// WKT text without the `MULTIPOINT` keyword, e.g. `0 0,1 1`.
    pub fn wkt_body(&self) -> String {
        self.to_string()
    }
}

impl SpatialObject for MultiPoint {
    fn kind(&self) -> GeometryKind {
        GeometryKind::MultiPoint
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

impl TryFrom<Vec<Point>> for MultiPoint {
    type Error = SpatialError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        MultiPoint::new(points)
    }
}

impl Serialize for MultiPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.points.serialize(serializer)
    }
}

impl Display for MultiPoint {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipoint_creation() {
        let multi = MultiPoint::new(vec![[0.0, 0.0], [1.0, 1.0], [2.5, -3.0]]).unwrap();
        assert_eq!(multi.len(), 3);
        assert_eq!(multi.to_string(), "0 0,1 1,2.5 -3");
        assert_eq!(multi.to_wkt(), "MULTIPOINT(0 0,1 1,2.5 -3)");
    }

    #[test]
    fn test_multipoint_mixed_inputs() {
        let multi = MultiPoint::new(vec![
            PointInput::from(Point::new(0.0, 0.0).unwrap()),
            PointInput::from(vec![1.0, 2.0, 3.0]),
        ])
        .unwrap();
        assert_eq!(multi.point(-1).unwrap(), &Point::new_3d(1.0, 2.0, 3.0).unwrap());
    }

    #[test]
    fn test_multipoint_invalid_element() {
        let err = MultiPoint::new(vec![vec![0.0, 0.0], vec![f64::NAN, 1.0]]).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_multipoint_add_and_get() {
        let mut multi = MultiPoint::empty();
        assert!(multi.is_empty());
        assert!(multi.point(-1).unwrap_err().is_range_error());

        multi.add_point([3.0, 4.0]).unwrap().add_point((5.0, 6.0)).unwrap();
        assert_eq!(multi.point(0).unwrap(), &Point::new(3.0, 4.0).unwrap());
        assert_eq!(multi.point(-1).unwrap(), multi.point(1).unwrap());
    }

    #[test]
    fn test_multipoint_points_snapshot() {
        let multi = MultiPoint::new(vec![[0.0, 0.0], [1.0, 1.0]]).unwrap();
        let mut snapshot = multi.points().to_vec();
        snapshot.clear();
        assert_eq!(multi.len(), 2);
    }

    #[test]
    fn test_multipoint_bounding_box() {
        let multi = MultiPoint::new(vec![[3.0, -1.0], [-2.0, 4.0]]).unwrap();
        let bbox = multi.bounding_box().unwrap();
        assert_eq!((bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y), (-2.0, -1.0, 3.0, 4.0));
    }

    #[test]
    fn test_multipoint_array_round_trip() {
        let multi = MultiPoint::new(vec![[0.5, 0.0], [1.0, 1.0]]).unwrap();
        assert_eq!(MultiPoint::from_array(multi.to_array()).unwrap(), multi);
    }
}
