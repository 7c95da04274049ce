//! Well-Known Text codec.
//!
//! Parsing accepts the six supported geometry kinds with case-insensitive
//! keywords:
//! - `POINT(x y)`, optionally with `z` and `m` components
//! - `LINESTRING(x y, x y, ...)`
//! - `POLYGON((x y, ...), (x y, ...), ...)`
//! - `MULTIPOINT(x y, x y, ...)` or `MULTIPOINT((x y), (x y), ...)`
//! - `MULTILINESTRING((x y, ...), ...)`
//! - `MULTIPOLYGON(((x y, ...), ...), ...)`
//!
//! Any kind but `POINT` may be written as `KEYWORD EMPTY`. A `Z` or `ZM` tag
//! after the keyword is checked against the coordinates. Extended WKT with an
//! `SRID=<n>;` prefix is handled by [`parse_extended`].
//!
//! Emission lives on the geometries themselves:
//! [`SpatialObject::wkt_body`](crate::SpatialObject::wkt_body) writes the text
//! without keyword and [`SpatialObject::to_wkt`](crate::SpatialObject::to_wkt)
//! the complete literal.
//!
//! ## Example
//!
//! ```rust
//! use creof_spatial::{wkt, SpatialObject};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let geometry = wkt::parse("polygon((0 0, 10 0, 10 10, 0 0))")?;
//! assert_eq!(geometry.to_wkt(), "POLYGON((0 0,10 0,10 10,0 0))");
//! # Ok(())
//! # }
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{Geometry, GeometryKind, SpatialObject};
use crate::line_string::LineString;
use crate::multi_line_string::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::{Dimension, Point};
use crate::polygon::Polygon;

/// Parses a WKT literal into a geometry.
///
/// # Errors
/// - [`SpatialError::UnsupportedKind`] when the keyword names another kind
///   of geometry (e.g. `GEOMETRYCOLLECTION`).
/// - [`SpatialError::InvalidValue`] for any other malformed input, including
///   unbalanced parentheses, a wrong number of components and invalid
///   geometries such as an unclosed polygon ring.
pub fn parse(text: &str) -> SpatialResult<Geometry> {
    let result = WktParser::new(text).and_then(|mut parser| parser.parse_geometry_text());
    match &result {
        Ok(geometry) => log::trace!("Parsed WKT {} geometry", geometry.kind()),
        Err(err) => log::debug!("Rejected WKT {:?}: {}", text, err),
    }
    result
}

/// A WKT literal with an optional spatial reference identifier, as written
/// by PostGIS: `SRID=4326;POINT(1 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedWkt {
    pub srid: Option<i32>,
    pub geometry: Geometry,
}

impl ExtendedWkt {
    pub fn new(srid: Option<i32>, geometry: impl Into<Geometry>) -> Self {
        Self {
            srid,
            geometry: geometry.into(),
        }
    }
}

impl Display for ExtendedWkt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(srid) = self.srid {
            write!(f, "SRID={};", srid)?;
        }
        f.write_str(&self.geometry.to_wkt())
    }
}

impl FromStr for ExtendedWkt {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_extended(s)
    }
}

/// Parses WKT with an optional `SRID=<n>;` prefix.
pub fn parse_extended(text: &str) -> SpatialResult<ExtendedWkt> {
    let trimmed = text.trim_start();
    let has_srid = trimmed
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("SRID="));
    if !has_srid {
        return Ok(ExtendedWkt {
            srid: None,
            geometry: parse(text)?,
        });
    }

    let (srid, wkt) = trimmed[5..]
        .split_once(';')
        .ok_or_else(|| SpatialError::invalid("SRID prefix must be terminated by ';'"))?;
    let srid = srid
        .trim()
        .parse::<i32>()
        .map_err(|_| SpatialError::invalid(format!("invalid SRID: {:?}", srid)))?;

    Ok(ExtendedWkt {
        srid: Some(srid),
        geometry: parse(wkt)?,
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "'{}'", word),
            Token::Number(number) => write!(f, "number {}", number),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
            Token::Comma => f.write_str("','"),
        }
    }
}

fn tokenize(text: &str) -> SpatialResult<Vec<Token>> {
    let mut tokens = vec![];
    let mut chars = text.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LeftParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RightParen);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            c if c.is_ascii_alphabetic() => {
                let mut word = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !(c.is_ascii_alphanumeric() || c == '_') {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
            c if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => {
                let mut literal = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
                        break;
                    }
                    literal.push(c);
                    chars.next();
                }
                let number = literal.parse::<f64>().map_err(|_| {
                    SpatialError::invalid(format!(
                        "invalid number {:?} at offset {}",
                        literal, offset
                    ))
                })?;
                tokens.push(Token::Number(number));
            }
            other => {
                return Err(SpatialError::invalid(format!(
                    "unexpected character {:?} at offset {}",
                    other, offset
                )));
            }
        }
    }

    Ok(tokens)
}

struct WktParser {
    tokens: Vec<Token>,
    position: usize,
}

impl WktParser {
    fn new(text: &str) -> SpatialResult<Self> {
        Ok(Self {
            tokens: tokenize(text)?,
            position: 0,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> SpatialResult<()> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(SpatialError::invalid(format!(
                "expected {} but found {}",
                expected, token
            ))),
            None => Err(SpatialError::invalid(format!(
                "expected {} but reached the end of input",
                expected
            ))),
        }
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn eat_word(&mut self, word: &str) -> bool {
        match self.peek() {
            Some(Token::Word(w)) if w.eq_ignore_ascii_case(word) => {
                self.position += 1;
                true
            }
            _ => false,
        }
    }

    fn parse_geometry_text(&mut self) -> SpatialResult<Geometry> {
        let keyword = match self.next() {
            Some(Token::Word(word)) => word,
            Some(token) => {
                return Err(SpatialError::invalid(format!(
                    "expected a geometry keyword but found {}",
                    token
                )))
            }
            None => return Err(SpatialError::invalid("empty WKT input")),
        };
        let kind = GeometryKind::from_wkt_keyword(&keyword)?;
        let dimension = self.parse_dimension_tag()?;

        let geometry = if self.eat_word("EMPTY") {
            Geometry::empty(kind)?
        } else {
            self.parse_body(kind)?
        };

        if let Some(token) = self.next() {
            return Err(SpatialError::invalid(format!(
                "unexpected {} after the end of the {} geometry",
                token,
                kind.wkt_keyword()
            )));
        }

        if let Some(expected) = dimension {
            check_dimension(&geometry, expected)?;
        }
        Ok(geometry)
    }

    fn parse_dimension_tag(&mut self) -> SpatialResult<Option<Dimension>> {
        if self.eat_word("Z") {
            Ok(Some(Dimension::Xyz))
        } else if self.eat_word("ZM") {
            Ok(Some(Dimension::Xyzm))
        } else if self.eat_word("M") {
            Err(SpatialError::invalid(
                "measured coordinates without an elevation are not supported",
            ))
        } else {
            Ok(None)
        }
    }

    fn parse_body(&mut self, kind: GeometryKind) -> SpatialResult<Geometry> {
        let geometry = match kind {
            GeometryKind::Point => {
                self.expect(Token::LeftParen)?;
                let point = self.parse_coordinate()?;
                self.expect(Token::RightParen)?;
                Geometry::Point(point)
            }
            GeometryKind::LineString => {
                Geometry::LineString(LineString::new(self.parse_coordinate_list()?)?)
            }
            GeometryKind::Polygon => Geometry::Polygon(self.parse_polygon_text()?),
            GeometryKind::MultiPoint => {
                let points = self.parse_list(Self::parse_multi_point_element)?;
                Geometry::MultiPoint(MultiPoint::new(points)?)
            }
            GeometryKind::MultiLineString => {
                let lines = self.parse_list(Self::parse_coordinate_list)?;
                Geometry::MultiLineString(MultiLineString::new(lines)?)
            }
            GeometryKind::MultiPolygon => {
                let polygons = self.parse_list(Self::parse_polygon_text)?;
                Geometry::MultiPolygon(MultiPolygon::new(polygons)?)
            }
        };
        Ok(geometry)
    }

    /// `'(' [item (',' item)*] ')'`
    fn parse_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> SpatialResult<T>,
    ) -> SpatialResult<Vec<T>> {
        self.expect(Token::LeftParen)?;
        let mut items = vec![];
        if self.eat(&Token::RightParen) {
            return Ok(items);
        }
        loop {
            items.push(item(self)?);
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(Token::RightParen)?;
            return Ok(items);
        }
    }

    fn parse_coordinate_list(&mut self) -> SpatialResult<Vec<Point>> {
        self.parse_list(Self::parse_coordinate)
    }

    fn parse_polygon_text(&mut self) -> SpatialResult<Polygon> {
        let rings = self.parse_list(Self::parse_coordinate_list)?;
        Polygon::new(rings)
    }

    fn parse_multi_point_element(&mut self) -> SpatialResult<Point> {
        if self.eat(&Token::LeftParen) {
            let point = self.parse_coordinate()?;
            self.expect(Token::RightParen)?;
            Ok(point)
        } else {
            self.parse_coordinate()
        }
    }

    /// Two to four whitespace separated numbers.
    fn parse_coordinate(&mut self) -> SpatialResult<Point> {
        let mut components = Vec::with_capacity(4);
        while let Some(Token::Number(number)) = self.peek() {
            components.push(*number);
            self.position += 1;
        }
        if components.is_empty() {
            return Err(match self.peek() {
                Some(token) => {
                    SpatialError::invalid(format!("expected a coordinate but found {}", token))
                }
                None => SpatialError::invalid("expected a coordinate but reached the end of input"),
            });
        }
        Point::from_array(&components)
    }
}

fn check_dimension(geometry: &Geometry, expected: Dimension) -> SpatialResult<()> {
    let mut mismatch = None;
    geometry.visit_points(&mut |point| {
        if mismatch.is_none() && point.dimension() != expected {
            mismatch = Some(point.dimension());
        }
    });
    match mismatch {
        Some(found) => Err(SpatialError::invalid(format!(
            "dimension tag requires {} components per coordinate, found {}",
            expected.size(),
            found.size()
        ))),
        None => Ok(()),
    }
}
