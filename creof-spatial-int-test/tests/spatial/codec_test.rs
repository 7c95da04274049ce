//! WKT and GeoJSON codecs across every geometry kind.

#[cfg(test)]
mod codec_tests {
    use creof_spatial::wkt::{self, ExtendedWkt};
    use creof_spatial::{
        geojson, Geometry, GeometryKind, LineString, MultiLineString, MultiPoint, Point,
        SpatialObject,
    };
    use creof_spatial_int_test::test_util::{assert_round_trips, big_polygon};
    use serde_json::json;

    fn sample_geometries() -> Vec<Geometry> {
        vec![
            Point::new(1.5, -2.0).unwrap().into(),
            Point::new_4d(1.0, 2.0, 3.0, 4.0).unwrap().into(),
            LineString::new(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]]).unwrap().into(),
            LineString::empty().into(),
            big_polygon().unwrap().into(),
            MultiPoint::new(vec![[0.0, 0.0], [3.0, 4.0]]).unwrap().into(),
            MultiLineString::new(vec![
                vec![[0.0, 0.0], [1.0, 1.0]],
                vec![[2.0, 2.0], [3.0, 3.0]],
            ])
            .unwrap()
            .into(),
        ]
    }

    #[test]
    fn test_round_trip_every_kind() {
        for geometry in sample_geometries() {
            assert_round_trips(&geometry).unwrap();
        }
    }

    #[test]
    fn test_wkt_literals() {
        let expected = [
            "POINT(1.5 -2)",
            "POINT(1 2 3 4)",
            "LINESTRING(0 0,1 1,2 0.5)",
            "LINESTRING EMPTY",
            "POLYGON((0 0,10 0,10 10,0 10,0 0))",
            "MULTIPOINT(0 0,3 4)",
            "MULTILINESTRING((0 0,1 1),(2 2,3 3))",
        ];
        for (geometry, text) in sample_geometries().iter().zip(expected) {
            assert_eq!(geometry.to_wkt(), text);
        }
    }

    #[test]
    fn test_kind_names() {
        for kind in GeometryKind::ALL {
            assert_eq!(
                GeometryKind::from_wkt_keyword(kind.wkt_keyword()).unwrap(),
                kind
            );
            assert_eq!(
                GeometryKind::from_geojson_name(kind.geojson_name()).unwrap(),
                kind
            );
        }
    }

    #[test]
    fn test_coordinates_value() {
        let geometry =
            Geometry::from_coordinates(GeometryKind::LineString, json!([[0, 0], [1.5, 2]]))
                .unwrap();
        assert_eq!(geometry.to_coordinates().unwrap(), json!([[0, 0], [1.5, 2]]));
        assert!(Geometry::from_coordinates(GeometryKind::Polygon, json!([[0, 0]])).is_err());
    }

    #[test]
    fn test_wkt_to_geojson() {
        let geometry = wkt::parse("multipoint((10 40), (40 30))").unwrap();
        assert_eq!(
            geojson::to_json(&geometry).unwrap(),
            r#"{"type":"MultiPoint","coordinates":[[10,40],[40,30]]}"#
        );
    }

    #[test]
    fn test_extended_wkt() {
        let ewkt: ExtendedWkt = "SRID=4326;LINESTRING(0 0,1 1)".parse().unwrap();
        assert_eq!(ewkt.srid, Some(4326));
        assert_eq!(ewkt.geometry.kind(), GeometryKind::LineString);
        assert_eq!(ewkt.to_string(), "SRID=4326;LINESTRING(0 0,1 1)");
    }

    #[test]
    fn test_unsupported_kinds() {
        assert!(wkt::parse("TRIANGLE((0 0,1 0,0 1,0 0))")
            .unwrap_err()
            .is_unsupported_kind());
        assert!(geojson::parse(r#"{"type":"Circle","coordinates":[0,0]}"#)
            .unwrap_err()
            .is_unsupported_kind());
    }
}
