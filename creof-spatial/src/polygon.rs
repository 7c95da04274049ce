//! Polygon geometry.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

use crate::common::{normalize_index, CoordinateArray};
use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{GeometryKind, SpatialObject};
use crate::input::LineStringInput;
use crate::line_string::LineString;
use crate::point::Point;

/// A polygon made of rings.
///
/// The first ring is the exterior boundary, any further rings are interior
/// holes. Every non-empty ring must be closed: its first and last points are
/// equal. Rings are never closed on the caller's behalf.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<LineString>")]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon from ring specifications.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`] if a ring is not a valid
    /// LineString or is not closed.
    pub fn new<I, R>(rings: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<LineStringInput>,
    {
        let rings = rings
            .into_iter()
            .map(resolve_ring)
            .collect::<SpatialResult<Vec<LineString>>>()?;
        Ok(Self { rings })
    }

    /// Creates a polygon without rings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a polygon from an array of rings, each an array of coordinates.
    pub fn from_array(rings: impl Into<Vec<Vec<Vec<f64>>>>) -> SpatialResult<Self> {
        let rings: Vec<Vec<Vec<f64>>> = rings.into();
        Self::new(rings)
    }

    pub fn to_array(&self) -> CoordinateArray<Vec<Vec<Vec<f64>>>> {
        CoordinateArray::new(self.components())
    }

    pub(crate) fn components(&self) -> Vec<Vec<Vec<f64>>> {
        self.rings.iter().map(LineString::components).collect()
    }

    /// Validates and appends a ring. Existing rings are left unchanged.
    pub fn add_ring(&mut self, ring: impl Into<LineStringInput>) -> SpatialResult<&mut Self> {
        let ring = resolve_ring(ring)?;
        self.rings.push(ring);
        Ok(self)
    }

    /// Gets the ring at `index`; negative indices count from the end.
    pub fn ring(&self, index: isize) -> SpatialResult<&LineString> {
        let position = normalize_index(index, self.rings.len())?;
        Ok(&self.rings[position])
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The exterior boundary, `None` for an empty polygon.
    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// The holes, i.e. every ring after the exterior one.
    pub fn interior_rings(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// WKT text without the `POLYGON` keyword, e.g. `(0 0,1 0,1 1,0 0)`.
    pub fn wkt_body(&self) -> String {
        self.to_string()
    }
}

fn resolve_ring(ring: impl Into<LineStringInput>) -> SpatialResult<LineString> {
    let ring = ring.into().resolve()?;
    if !ring.is_empty() && !ring.is_closed() {
        return Err(SpatialError::invalid(format!(
            "polygon ring must be closed, got ({})",
            ring
        )));
    }
    Ok(ring)
}

impl SpatialObject for Polygon {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Polygon
    }

    fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    fn visit_points<'a>(&'a self, visitor: &mut dyn FnMut(&'a Point)) {
        for ring in &self.rings {
            ring.visit_points(visitor);
        }
    }

    fn wkt_body(&self) -> String {
        self.to_string()
    }
}

impl TryFrom<Vec<LineString>> for Polygon {
    type Error = SpatialError;

    fn try_from(rings: Vec<LineString>) -> Result<Self, Self::Error> {
        Polygon::new(rings)
    }
}

impl Serialize for Polygon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rings.serialize(serializer)
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ring) in self.rings.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "({})", ring)?;
        }
        Ok(())
    }
}
