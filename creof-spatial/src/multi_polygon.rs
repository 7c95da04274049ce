//! MultiPolygon geometry.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

use crate::common::{normalize_index, CoordinateArray};
use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{GeometryKind, SpatialObject};
use crate::input::PolygonInput;
use crate::point::Point;
use crate::polygon::Polygon;

/// An ordered collection of polygons.
///
/// ## Example
///
/// ```rust
/// use creof_spatial::{MultiPolygon, SpatialObject};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let multi = MultiPolygon::new(vec![
///     vec![vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]],
///     vec![vec![[5.0, 5.0], [7.0, 5.0], [7.0, 7.0], [5.0, 7.0], [5.0, 5.0]]],
/// ])?;
/// assert_eq!(
///     multi.to_string(),
///     "((0 0,10 0,10 10,0 10,0 0)),((5 5,7 5,7 7,5 7,5 5))"
/// );
/// assert_eq!(
///     multi.to_json()?,
///     r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[10,0],[10,10],[0,10],[0,0]]],[[[5,5],[7,5],[7,7],[5,7],[5,5]]]]}"#
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Polygon>")]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a MultiPolygon from built polygons and/or arrays of rings.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`] if any polygon is invalid,
    /// including an unclosed ring.
    pub fn new<I, P>(polygons: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PolygonInput>,
    {
        let polygons = polygons
            .into_iter()
            .map(|polygon| polygon.into().resolve())
            .collect::<SpatialResult<Vec<Polygon>>>()?;
        Ok(Self { polygons })
    }

    /// Creates a MultiPolygon without members.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a MultiPolygon from an array of polygons, each an array of
    /// rings, such as the one returned by [`MultiPolygon::to_array`].
    pub fn from_array(polygons: impl Into<Vec<Vec<Vec<Vec<f64>>>>>) -> SpatialResult<Self> {
        let polygons: Vec<Vec<Vec<Vec<f64>>>> = polygons.into();
        Self::new(polygons)
    }

    /// Returns the coordinates in GeoJSON nesting: polygons, rings, points.
    /// Serialized to JSON, the result is the `coordinates` member of
    /// [`SpatialObject::to_json`](crate::SpatialObject::to_json).
    pub fn to_array(&self) -> CoordinateArray<Vec<Vec<Vec<Vec<f64>>>>> {
        CoordinateArray::new(self.polygons.iter().map(Polygon::components).collect())
    }

    /// Validates and appends a polygon. Existing polygons are left unchanged.
    pub fn add_polygon(&mut self, polygon: impl Into<PolygonInput>) -> SpatialResult<&mut Self> {
        let polygon = polygon.into().resolve()?;
        self.polygons.push(polygon);
        Ok(self)
    }

    /// Gets the polygon at `index`; negative indices count from the end.
    pub fn polygon(&self, index: isize) -> SpatialResult<&Polygon> {
        let position = normalize_index(index, self.polygons.len())?;
        Ok(&self.polygons[position])
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// WKT text without the `MULTIPOLYGON` keyword, e.g. `((0 0,1 0,1 1,0 0))`.
    pub fn wkt_body(&self) -> String {
        self.to_string()
    }
}

impl SpatialObject for MultiPolygon {
    fn kind(&self) -> GeometryKind {
        GeometryKind::MultiPolygon
    }

    fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    fn visit_points<'a>(&'a self, visitor: &mut dyn FnMut(&'a Point)) {
        for polygon in &self.polygons {
            polygon.visit_points(visitor);
        }
    }

    fn wkt_body(&self) -> String {
        self.to_string()
    }
}

impl TryFrom<Vec<Polygon>> for MultiPolygon {
    type Error = SpatialError;

    fn try_from(polygons: Vec<Polygon>) -> Result<Self, Self::Error> {
        MultiPolygon::new(polygons)
    }
}

impl Serialize for MultiPolygon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.polygons.serialize(serializer)
    }
}

impl Display for MultiPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, polygon) in self.polygons.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "({})", polygon)?;
        }
        Ok(())
    }
}
