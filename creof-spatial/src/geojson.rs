//! GeoJSON codec.
//!
//! Geometries are written as `{"type":"<Kind>","coordinates":[...]}` with the
//! members in that order. Whole-valued ordinates are written without a
//! fractional part, so a point at the origin reads `[0,0]`.
//!
//! Parsing accepts a bare GeoJSON geometry object or a `Feature` wrapping one.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{Geometry, GeometryKind, SpatialObject};

#[derive(Serialize)]
struct GeoJsonGeometry<'a, T> {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: &'a T,
}

/// Serializes a geometry to GeoJSON text.
pub fn to_json<T: SpatialObject>(geometry: &T) -> SpatialResult<String> {
    let document = GeoJsonGeometry {
        kind: geometry.kind().geojson_name(),
        coordinates: geometry,
    };
    Ok(serde_json::to_string(&document)?)
}

/// Serializes a geometry to a GeoJSON value.
pub fn to_value<T: SpatialObject>(geometry: &T) -> SpatialResult<Value> {
    let document = GeoJsonGeometry {
        kind: geometry.kind().geojson_name(),
        coordinates: geometry,
    };
    Ok(serde_json::to_value(&document)?)
}

/// Parses GeoJSON text into a geometry.
///
/// # Errors
/// - [`SpatialError::UnsupportedKind`] when `type` names a geometry kind
///   outside the six supported ones, e.g. `GeometryCollection`.
/// - [`SpatialError::InvalidValue`] for malformed JSON, a missing member or
///   coordinates that do not form a valid geometry of the named kind.
pub fn parse(json: &str) -> SpatialResult<Geometry> {
    let value: Value = serde_json::from_str(json)?;
    let result = from_value(value);
    if let Err(err) = &result {
        log::debug!("Rejected GeoJSON document: {}", err);
    }
    result
}

/// Converts a parsed GeoJSON value into a geometry.
pub fn from_value(value: Value) -> SpatialResult<Geometry> {
    let Value::Object(mut object) = value else {
        return Err(SpatialError::invalid("GeoJSON geometry must be an object"));
    };

    let type_name = take_type(&mut object)?;
    if type_name == "Feature" {
        return match object.remove("geometry") {
            Some(Value::Null) | None => Err(SpatialError::invalid(
                "GeoJSON feature does not carry a geometry",
            )),
            Some(geometry) => from_value(geometry),
        };
    }

    let kind = GeometryKind::from_geojson_name(&type_name)?;
    let coordinates = object.remove("coordinates").ok_or_else(|| {
        SpatialError::invalid(format!(
            "GeoJSON {} is missing the 'coordinates' member",
            type_name
        ))
    })?;
    let geometry = Geometry::from_coordinates(kind, coordinates)?;
    log::trace!("Parsed GeoJSON {} geometry", kind);
    Ok(geometry)
}

fn take_type(object: &mut Map<String, Value>) -> SpatialResult<String> {
    match object.remove("type") {
        Some(Value::String(name)) => Ok(name),
        Some(other) => Err(SpatialError::invalid(format!(
            "GeoJSON 'type' must be a string, got {}",
            other
        ))),
        None => Err(SpatialError::invalid("GeoJSON object has no 'type' member")),
    }
}
