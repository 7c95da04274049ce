use creof_spatial::{Geometry, LineString, Polygon, SpatialObject, SpatialResult};

/// A closed axis-aligned square ring from `(min, min)` to `(max, max)`.
pub fn square_ring(min: f64, max: f64) -> SpatialResult<LineString> {
    LineString::new(vec![
        [min, min],
        [max, min],
        [max, max],
        [min, max],
        [min, min],
    ])
}

pub fn square(min: f64, max: f64) -> SpatialResult<Polygon> {
    Polygon::new(vec![square_ring(min, max)?])
}

/// The square covering `0..10`.
pub fn big_polygon() -> SpatialResult<Polygon> {
    square(0.0, 10.0)
}

/// The square covering `5..7`, inside [`big_polygon`].
pub fn small_polygon() -> SpatialResult<Polygon> {
    square(5.0, 7.0)
}

/// The square covering `15..17`, outside [`big_polygon`].
pub fn outer_polygon() -> SpatialResult<Polygon> {
    square(15.0, 17.0)
}

/// Asserts that WKT and GeoJSON emission both parse back to `geometry`.
pub fn assert_round_trips(geometry: &Geometry) -> SpatialResult<()> {
    let wkt = geometry.to_wkt();
    let parsed = creof_spatial::wkt::parse(&wkt)?;
    assert_eq!(&parsed, geometry, "WKT round trip of {}", wkt);

    let json = geometry.to_json()?;
    let parsed = creof_spatial::geojson::parse(&json)?;
    assert_eq!(&parsed, geometry, "GeoJSON round trip of {}", json);

    log::debug!("Round tripped {} through WKT and GeoJSON", wkt);
    Ok(())
}
