//! # CrEOF Spatial - Geometry Values for Spatial ORM Extensions
//!
//! This crate provides the geometry value types that a database mapping layer
//! hands to and receives from spatially enabled databases, together with the
//! text codecs used on the wire and the bounding-rectangle predicates used in
//! spatial queries.
//!
//! ## Features
//!
//! - **Geometry Types**: Point, LineString, Polygon and their Multi* collections
//! - **Validation**: Every constructor and mutator checks its input
//! - **WKT Codec**: Parse and emit Well-Known Text, including `SRID=` prefixes
//! - **GeoJSON Codec**: Emit and parse GeoJSON geometry objects
//! - **MBR Predicates**: Minimum bounding rectangles and `MBREquals`
//! - **MBR Index**: An R-tree answering `MBREquals` over many geometries
//!
//! ## Quick Start
//!
//! ```rust
//! use creof_spatial::{mbr_equals, wkt, LineString, Polygon, SpatialObject};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let square = Polygon::new(vec![vec![
//!     [5.0, 5.0], [7.0, 5.0], [7.0, 7.0], [5.0, 7.0], [5.0, 5.0],
//! ]])?;
//! assert_eq!(square.to_wkt(), "POLYGON((5 5,7 5,7 7,5 7,5 5))");
//!
//! let line = wkt::parse("LINESTRING(5 5,7 7,6 5)")?;
//! assert!(mbr_equals(&line, &square)?);
//!
//! let diagonal = LineString::new(vec![[0.0, 0.0], [1.0, 1.0]])?;
//! assert_eq!(
//!     diagonal.to_json()?,
//!     r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Geometry values are plain data: they are `Send` and `Sync`, and mutation
//! requires `&mut`. [`MbrIndex`] locks internally and may be shared through
//! clones.

// Geometry value types
pub mod line_string;
pub mod multi_line_string;
pub mod multi_point;
pub mod multi_polygon;
pub mod point;
pub mod polygon;

// Shared behaviour and inputs
pub mod common;
pub mod geometry;
pub mod input;

// Codecs
pub mod geojson;
pub mod wkt;

// Rectangles and indexing
pub mod bounding_box;
pub mod config;
pub mod mbr_index;

pub mod errors;

// Re-export geometry types
pub use common::CoordinateArray;
pub use geometry::{Geometry, GeometryKind, SpatialObject};
pub use input::{LineStringInput, PointInput, PolygonInput};
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::{Dimension, Point};
pub use polygon::Polygon;

// Re-export rectangle types
pub use bounding_box::{mbr_equals, rectangles_equal, BoundingBox};
pub use config::{RectangleComparison, SpatialConfig};
pub use mbr_index::MbrIndex;

pub use errors::{SpatialError, SpatialResult};
