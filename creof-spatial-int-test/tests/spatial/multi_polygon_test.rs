#[cfg(test)]
mod multi_polygon_tests {
    use creof_spatial::{
        geojson, wkt, Geometry, LineString, MultiPolygon, Polygon, SpatialObject,
    };
    use creof_spatial_int_test::test_util::{assert_round_trips, big_polygon, small_polygon, square_ring};

    const MULTIPOLYGON_JSON: &str = r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[10,0],[10,10],[0,10],[0,0]]],[[[5,5],[7,5],[7,7],[5,7],[5,5]]]]}"#;

    #[test]
    fn test_empty_multipolygon() {
        let multi = MultiPolygon::new(Vec::<Polygon>::new()).unwrap();
        assert!(multi.polygons().is_empty());
        assert_eq!(multi.to_wkt(), "MULTIPOLYGON EMPTY");
        assert_round_trips(&Geometry::from(multi)).unwrap();
    }

    #[test]
    fn test_json() {
        let multi = MultiPolygon::new(vec![big_polygon().unwrap(), small_polygon().unwrap()])
            .unwrap();
        assert_eq!(multi.to_json().unwrap(), MULTIPOLYGON_JSON);

        let parsed = geojson::parse(MULTIPOLYGON_JSON).unwrap();
        assert_eq!(parsed.as_multi_polygon(), Some(&multi));
    }

    #[test]
    fn test_to_array_json_matches_coordinates() {
        let multi = MultiPolygon::new(vec![big_polygon().unwrap(), small_polygon().unwrap()])
            .unwrap();
        let array = serde_json::to_string(&multi.to_array()).unwrap();
        assert!(MULTIPOLYGON_JSON.contains(&array));

        let document: serde_json::Value = serde_json::from_str(&multi.to_json().unwrap()).unwrap();
        assert_eq!(document["coordinates"].to_string(), array);
        assert_eq!(MultiPolygon::from_array(multi.to_array()).unwrap(), multi);
    }

    #[test]
    fn test_polygon_by_index() {
        let multi = MultiPolygon::new(vec![big_polygon().unwrap(), small_polygon().unwrap()])
            .unwrap();
        assert_eq!(multi.polygon(0).unwrap(), &big_polygon().unwrap());
        assert_eq!(multi.polygon(-1).unwrap(), &small_polygon().unwrap());
        assert!(multi.polygon(2).unwrap_err().is_range_error());
        assert!(multi.polygon(-3).unwrap_err().is_range_error());
    }

    #[test]
    fn test_add_polygon_from_rings() {
        let mut multi = MultiPolygon::new(vec![big_polygon().unwrap()]).unwrap();
        multi
            .add_polygon(vec![square_ring(5.0, 7.0).unwrap()])
            .unwrap();
        assert_eq!(
            multi.polygons(),
            &[big_polygon().unwrap(), small_polygon().unwrap()]
        );
    }

    #[test]
    fn test_wkt_body_and_literal() {
        let multi = MultiPolygon::new(vec![big_polygon().unwrap(), small_polygon().unwrap()])
            .unwrap();
        assert_eq!(
            multi.to_string(),
            "((0 0,10 0,10 10,0 10,0 0)),((5 5,7 5,7 7,5 7,5 5))"
        );
        let parsed = wkt::parse(&multi.to_wkt()).unwrap();
        assert_eq!(parsed, Geometry::MultiPolygon(multi));
    }

    #[test]
    fn test_polygon_with_hole_round_trips() {
        let with_hole = Polygon::new(vec![
            square_ring(0.0, 10.0).unwrap(),
            square_ring(5.0, 7.0).unwrap(),
        ])
        .unwrap();
        assert_eq!(with_hole.interior_rings(), &[square_ring(5.0, 7.0).unwrap()]);

        let multi = MultiPolygon::new(vec![with_hole, small_polygon().unwrap()]).unwrap();
        assert_round_trips(&Geometry::from(multi)).unwrap();
    }

    #[test]
    fn test_unclosed_ring_rejected() {
        let open = LineString::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).unwrap();
        let mut multi = MultiPolygon::empty();
        assert!(multi.add_polygon(vec![open]).unwrap_err().is_invalid_value());
        assert!(multi.is_empty());
    }
}
