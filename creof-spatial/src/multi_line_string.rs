//! MultiLineString geometry.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

use crate::common::{normalize_index, CoordinateArray};
use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{GeometryKind, SpatialObject};
use crate::input::LineStringInput;
use crate::line_string::LineString;
use crate::point::Point;

/// An ordered collection of line strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<LineString>")]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    /// Creates a MultiLineString from built line strings and/or arrays of
    /// coordinates.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`](crate::SpatialError::InvalidValue)
    /// if any line string is invalid.
    pub fn new<I, L>(line_strings: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<LineStringInput>,
    {
        let line_strings = line_strings
            .into_iter()
            .map(|line| line.into().resolve())
            .collect::<SpatialResult<Vec<LineString>>>()?;
        Ok(Self { line_strings })
    }

    /// Creates a MultiLineString without members.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a MultiLineString from one coordinate array per line string.
    pub fn from_array(line_strings: impl Into<Vec<Vec<Vec<f64>>>>) -> SpatialResult<Self> {
        let line_strings: Vec<Vec<Vec<f64>>> = line_strings.into();
        Self::new(line_strings)
    }

    /// Returns one coordinate array per line string.
    pub fn to_array(&self) -> CoordinateArray<Vec<Vec<Vec<f64>>>> {
        CoordinateArray::new(self.line_strings.iter().map(LineString::components).collect())
    }

    /// Validates and appends a line string.
    pub fn add_line_string(
        &mut self,
        line_string: impl Into<LineStringInput>,
    ) -> SpatialResult<&mut Self> {
        let line_string = line_string.into().resolve()?;
        self.line_strings.push(line_string);
        Ok(self)
    }

    /// Gets the line string at `index`; negative indices count from the end.
    pub fn line_string(&self, index: isize) -> SpatialResult<&LineString> {
        let position = normalize_index(index, self.line_strings.len())?;
        Ok(&self.line_strings[position])
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// Number of line strings.
    pub fn len(&self) -> usize {
        self.line_strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    /// WKT text without the `MULTILINESTRING` keyword, e.g. `(0 0,1 1),(2 2,3 3)`.
    pub fn wkt_body(&self) -> String {
        self.to_string()
    }
}

impl SpatialObject for MultiLineString {
    fn kind(&self) -> GeometryKind {
        GeometryKind::MultiLineString
    }

    fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    fn visit_points<'a>(&'a self, visitor: &mut dyn FnMut(&'a Point)) {
        for line_string in &self.line_strings {
            line_string.visit_points(visitor);
        }
    }

    fn wkt_body(&self) -> String {
        self.to_string()
    }
}

impl TryFrom<Vec<LineString>> for MultiLineString {
    type Error = SpatialError;

    fn try_from(line_strings: Vec<LineString>) -> Result<Self, Self::Error> {
        MultiLineString::new(line_strings)
    }
}

impl Serialize for MultiLineString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.line_strings.serialize(serializer)
    }
}

impl Display for MultiLineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line_string) in self.line_strings.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "({})", line_string)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MultiLineString {
        MultiLineString::new(vec![
            vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]],
            vec![[5.0, 5.0], [7.0, 5.0]],
        ])
        .unwrap()
    }

    #[test]
    fn test_multilinestring_creation() {
        let multi = sample();
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.to_string(), "(0 0,10 0,10 10),(5 5,7 5)");
        assert_eq!(
            multi.to_wkt(),
            "MULTILINESTRING((0 0,10 0,10 10),(5 5,7 5))"
        );
    }

    #[test]
    fn test_multilinestring_mixed_inputs() {
        let built = LineString::new(vec![[1.0, 1.0], [2.0, 2.0]]).unwrap();
        let multi = MultiLineString::new(vec![
            LineStringInput::from(built.clone()),
            LineStringInput::from(vec![[3.0, 3.0], [4.0, 4.0]]),
        ])
        .unwrap();
        assert_eq!(multi.line_string(0).unwrap(), &built);
    }

    #[test]
    fn test_multilinestring_elements_are_independent() {
        let multi = MultiLineString::new(vec![
            vec![vec![0.0, 0.0], vec![1.0, 1.0]],
            vec![vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]],
        ])
        .unwrap();
        assert_eq!(multi.len(), 2);

        let err = MultiLineString::new(vec![vec![vec![0.0, 0.0], vec![1.0, 1.0, 1.0]]]);
        assert!(err.is_err());
    }

    #[test]
    fn test_multilinestring_add_and_get() {
        let mut multi = sample();
        multi.add_line_string(vec![[8.0, 8.0], [9.0, 9.0]]).unwrap();
        assert_eq!(multi.len(), 3);
        assert_eq!(multi.line_string(-1).unwrap().to_string(), "8 8,9 9");
        assert!(multi.line_string(-4).unwrap_err().is_range_error());
    }

    #[test]
    fn test_multilinestring_empty() {
        let multi = MultiLineString::empty();
        assert!(multi.is_empty());
        assert_eq!(multi.to_wkt(), "MULTILINESTRING EMPTY");
        assert!(multi.bounding_box().is_err());
    }

    #[test]
    fn test_multilinestring_bounding_box() {
        let bbox = sample().bounding_box().unwrap();
        assert_eq!((bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y), (0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_multilinestring_array_round_trip() {
        let multi = sample();
        assert_eq!(MultiLineString::from_array(multi.to_array()).unwrap(), multi);
    }
}
