//! The geometry sum type and the behaviour shared by every geometry kind.
//!
//! Each concrete type ([`Point`], [`LineString`], [`Polygon`], [`MultiPoint`],
//! [`MultiLineString`], [`MultiPolygon`]) implements [`SpatialObject`], which
//! provides the full WKT literal, the GeoJSON text and the minimum bounding
//! rectangle on top of a handful of required methods. [`Geometry`] wraps any
//! of them when the kind is only known at run time, e.g. after parsing.

use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Display};

use crate::bounding_box::BoundingBox;
use crate::errors::{SpatialError, SpatialResult};
use crate::geojson;
use crate::line_string::LineString;
use crate::multi_line_string::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;

/// The six geometry kinds understood by the codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 6] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
    ];

    /// Upper case WKT keyword, e.g. `MULTIPOLYGON`.
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
        }
    }

    /// GeoJSON type name, e.g. `MultiPolygon`.
    pub fn geojson_name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }

    /// Depth of the GeoJSON coordinate nesting: 1 for a point up to 4 for a
    /// MultiPolygon.
    pub fn coordinate_depth(&self) -> usize {
        match self {
            GeometryKind::Point => 1,
            GeometryKind::LineString | GeometryKind::MultiPoint => 2,
            GeometryKind::Polygon | GeometryKind::MultiLineString => 3,
            GeometryKind::MultiPolygon => 4,
        }
    }

    /// Looks up a kind by WKT keyword, ignoring case.
    ///
    /// # Errors
    /// Returns [`SpatialError::UnsupportedKind`] for any other keyword.
    pub fn from_wkt_keyword(keyword: &str) -> SpatialResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.wkt_keyword().eq_ignore_ascii_case(keyword))
            .ok_or_else(|| SpatialError::UnsupportedKind(keyword.to_string()))
    }

    /// Looks up a kind by its exact GeoJSON type name.
    pub fn from_geojson_name(name: &str) -> SpatialResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.geojson_name() == name)
            .ok_or_else(|| SpatialError::UnsupportedKind(name.to_string()))
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.geojson_name())
    }
}

/// Behaviour common to every geometry.
///
/// Implementors serialize (through serde) to their bare coordinate array, the
/// `coordinates` member of a GeoJSON object.
pub trait SpatialObject: Serialize {
    /// The geometry kind.
    fn kind(&self) -> GeometryKind;

    /// Whether the geometry has no children.
    fn is_empty(&self) -> bool;

    /// Calls `visitor` with every point reachable from this geometry, in order.
    fn visit_points<'a>(&'a self, visitor: &mut dyn FnMut(&'a Point));

    /// WKT text without the leading keyword.
    fn wkt_body(&self) -> String;

    /// The complete WKT literal, `KEYWORD(body)` or `KEYWORD EMPTY`.
    fn to_wkt(&self) -> String {
        let keyword = self.kind().wkt_keyword();
        if self.is_empty() {
            format!("{} EMPTY", keyword)
        } else {
            format!("{}({})", keyword, self.wkt_body())
        }
    }

    /// The minimum bounding rectangle of every reachable point.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`] when there is no point to
    /// enclose. A single repeated point yields a degenerate rectangle instead.
    fn bounding_box(&self) -> SpatialResult<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        self.visit_points(&mut |point| match bbox.as_mut() {
            Some(bbox) => bbox.expand_to_include(point),
            None => bbox = Some(BoundingBox::from_point(point)),
        });
        bbox.ok_or_else(|| {
            SpatialError::invalid(format!(
                "cannot compute the bounding rectangle of an empty {}",
                self.kind()
            ))
        })
    }

    /// GeoJSON text, `{"type":"<Kind>","coordinates":[...]}`.
    fn to_json(&self) -> SpatialResult<String>
    where
        Self: Sized,
    {
        geojson::to_json(self)
    }
}

impl SpatialObject for Point {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Point
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn visit_points<'a>(&'a self, visitor: &mut dyn FnMut(&'a Point)) {
        visitor(self);
    }

    fn wkt_body(&self) -> String {
        self.to_string()
    }
}

/// Any geometry, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// An empty geometry of the given kind.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`] for [`GeometryKind::Point`],
    /// which cannot be empty.
    pub fn empty(kind: GeometryKind) -> SpatialResult<Self> {
        match kind {
            GeometryKind::Point => Err(SpatialError::invalid("a point cannot be empty")),
            GeometryKind::LineString => Ok(Geometry::LineString(LineString::empty())),
            GeometryKind::Polygon => Ok(Geometry::Polygon(Polygon::empty())),
            GeometryKind::MultiPoint => Ok(Geometry::MultiPoint(MultiPoint::empty())),
            GeometryKind::MultiLineString => {
                Ok(Geometry::MultiLineString(MultiLineString::empty()))
            }
            GeometryKind::MultiPolygon => Ok(Geometry::MultiPolygon(MultiPolygon::empty())),
        }
    }

    /// Builds a geometry of `kind` from an untyped nested coordinate array,
    /// applying the same validation as the typed constructors.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`] when the nesting does not match
    /// the kind or the coordinates are invalid.
    pub fn from_coordinates(kind: GeometryKind, coordinates: Value) -> SpatialResult<Self> {
        let geometry = match kind {
            GeometryKind::Point => Geometry::Point(serde_json::from_value(coordinates)?),
            GeometryKind::LineString => Geometry::LineString(serde_json::from_value(coordinates)?),
            GeometryKind::Polygon => Geometry::Polygon(serde_json::from_value(coordinates)?),
            GeometryKind::MultiPoint => Geometry::MultiPoint(serde_json::from_value(coordinates)?),
            GeometryKind::MultiLineString => {
                Geometry::MultiLineString(serde_json::from_value(coordinates)?)
            }
            GeometryKind::MultiPolygon => {
                Geometry::MultiPolygon(serde_json::from_value(coordinates)?)
            }
        };
        Ok(geometry)
    }

    /// The untyped nested coordinate array, the inverse of
    /// [`Geometry::from_coordinates`].
    pub fn to_coordinates(&self) -> SpatialResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(line_string) => Some(line_string),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint> {
        match self {
            Geometry::MultiPoint(multi_point) => Some(multi_point),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&MultiLineString> {
        match self {
            Geometry::MultiLineString(multi_line_string) => Some(multi_line_string),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Geometry::MultiPolygon(multi_polygon) => Some(multi_polygon),
            _ => None,
        }
    }
}

impl SpatialObject for Geometry {
    fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(point) => point.kind(),
            Geometry::LineString(line_string) => line_string.kind(),
            Geometry::Polygon(polygon) => polygon.kind(),
            Geometry::MultiPoint(multi_point) => multi_point.kind(),
            Geometry::MultiLineString(multi_line_string) => multi_line_string.kind(),
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.kind(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(line_string) => line_string.is_empty(),
            Geometry::Polygon(polygon) => polygon.is_empty(),
            Geometry::MultiPoint(multi_point) => multi_point.is_empty(),
            Geometry::MultiLineString(multi_line_string) => multi_line_string.is_empty(),
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.is_empty(),
        }
    }

    fn visit_points<'a>(&'a self, visitor: &mut dyn FnMut(&'a Point)) {
        match self {
            Geometry::Point(point) => point.visit_points(visitor),
            Geometry::LineString(line_string) => line_string.visit_points(visitor),
            Geometry::Polygon(polygon) => polygon.visit_points(visitor),
            Geometry::MultiPoint(multi_point) => multi_point.visit_points(visitor),
            Geometry::MultiLineString(multi_line_string) => {
                multi_line_string.visit_points(visitor)
            }
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.visit_points(visitor),
        }
    }

    fn wkt_body(&self) -> String {
        match self {
            Geometry::Point(point) => point.wkt_body(),
            Geometry::LineString(line_string) => line_string.wkt_body(),
            Geometry::Polygon(polygon) => polygon.wkt_body(),
            Geometry::MultiPoint(multi_point) => multi_point.wkt_body(),
            Geometry::MultiLineString(multi_line_string) => multi_line_string.wkt_body(),
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.wkt_body(),
        }
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wkt_body())
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line_string: LineString) -> Self {
        Geometry::LineString(line_string)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(multi_point: MultiPoint) -> Self {
        Geometry::MultiPoint(multi_point)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(multi_line_string: MultiLineString) -> Self {
        Geometry::MultiLineString(multi_line_string)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(multi_polygon: MultiPolygon) -> Self {
        Geometry::MultiPolygon(multi_polygon)
    }
}
