//! Constructor inputs.
//!
//! Geometry constructors accept each child either as an already built value
//! or as a raw numeric specification. The two forms are captured here and
//! resolved exactly once, at construction time, into a validated geometry.
//!
//! ```rust
//! use creof_spatial::{LineString, Point, PointInput};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let line = LineString::new(vec![
//!     PointInput::from(Point::new(0.0, 0.0)?),
//!     PointInput::from([10.0, 10.0]),
//! ])?;
//! assert_eq!(line.len(), 2);
//! # Ok(())
//! # }
//! ```

use crate::errors::SpatialResult;
use crate::line_string::LineString;
use crate::point::Point;
use crate::polygon::Polygon;

/// A point given as a [`Point`] or as 2 to 4 raw components.
#[derive(Debug, Clone, PartialEq)]
pub enum PointInput {
    Built(Point),
    Raw(Vec<f64>),
}

impl PointInput {
    /// Validates the input into a point.
    pub fn resolve(self) -> SpatialResult<Point> {
        match self {
            PointInput::Built(point) => Ok(point),
            PointInput::Raw(components) => Point::from_array(&components),
        }
    }
}

impl From<Point> for PointInput {
    fn from(point: Point) -> Self {
        PointInput::Built(point)
    }
}

impl From<Vec<f64>> for PointInput {
    fn from(components: Vec<f64>) -> Self {
        PointInput::Raw(components)
    }
}

impl From<&[f64]> for PointInput {
    fn from(components: &[f64]) -> Self {
        PointInput::Raw(components.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for PointInput {
    fn from(components: [f64; N]) -> Self {
        PointInput::Raw(components.to_vec())
    }
}

impl From<(f64, f64)> for PointInput {
    fn from((x, y): (f64, f64)) -> Self {
        PointInput::Raw(vec![x, y])
    }
}

impl From<(f64, f64, f64)> for PointInput {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        PointInput::Raw(vec![x, y, z])
    }
}

/// A line string or ring given as a [`LineString`] or as a list of points.
#[derive(Debug, Clone, PartialEq)]
pub enum LineStringInput {
    Built(LineString),
    Raw(Vec<PointInput>),
}

impl LineStringInput {
    /// Validates the input into a line string.
    pub fn resolve(self) -> SpatialResult<LineString> {
        match self {
            LineStringInput::Built(line) => Ok(line),
            LineStringInput::Raw(points) => LineString::new(points),
        }
    }
}

impl From<LineString> for LineStringInput {
    fn from(line: LineString) -> Self {
        LineStringInput::Built(line)
    }
}

impl<P: Into<PointInput>> From<Vec<P>> for LineStringInput {
    fn from(points: Vec<P>) -> Self {
        LineStringInput::Raw(points.into_iter().map(Into::into).collect())
    }
}

/// A polygon given as a [`Polygon`] or as a list of rings.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonInput {
    Built(Polygon),
    Raw(Vec<LineStringInput>),
}

impl PolygonInput {
    /// Validates the input into a polygon, checking ring closure.
    pub fn resolve(self) -> SpatialResult<Polygon> {
        match self {
            PolygonInput::Built(polygon) => Ok(polygon),
            PolygonInput::Raw(rings) => Polygon::new(rings),
        }
    }
}

impl From<Polygon> for PolygonInput {
    fn from(polygon: Polygon) -> Self {
        PolygonInput::Built(polygon)
    }
}

impl<R: Into<LineStringInput>> From<Vec<R>> for PolygonInput {
    fn from(rings: Vec<R>) -> Self {
        PolygonInput::Raw(rings.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_input_forms() {
        let expected = Point::new(1.0, 2.0).unwrap();
        assert_eq!(PointInput::from([1.0, 2.0]).resolve().unwrap(), expected);
        assert_eq!(PointInput::from((1.0, 2.0)).resolve().unwrap(), expected);
        assert_eq!(PointInput::from(vec![1.0, 2.0]).resolve().unwrap(), expected);
        assert_eq!(PointInput::from(expected).resolve().unwrap(), expected);
    }

    #[test]
    fn test_point_input_invalid_raw() {
        assert!(PointInput::from([1.0]).resolve().is_err());
        assert!(PointInput::from([1.0, f64::NAN]).resolve().is_err());
    }

    #[test]
    fn test_line_string_input_mixed_forms() {
        let input = LineStringInput::from(vec![
            PointInput::from(Point::new(0.0, 0.0).unwrap()),
            PointInput::from([1.0, 1.0]),
        ]);
        let line = input.resolve().unwrap();
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn test_polygon_input_nested_arrays() {
        let input = PolygonInput::from(vec![vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.0, 0.0],
        ]]);
        let polygon = input.resolve().unwrap();
        assert_eq!(polygon.rings().len(), 1);
    }

    #[test]
    fn test_polygon_input_unclosed_ring() {
        let input = PolygonInput::from(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]);
        assert!(input.resolve().unwrap_err().is_invalid_value());
    }
}
