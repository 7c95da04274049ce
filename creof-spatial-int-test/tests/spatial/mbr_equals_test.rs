//! `MBREquals` over a small table of polygons, both as a per-row predicate
//! and through the R-tree index.

#[cfg(test)]
mod mbr_equals_tests {
    use creof_spatial::{mbr_equals, wkt, MbrIndex, Polygon, SpatialResult};
    use creof_spatial_int_test::test_util::{big_polygon, outer_polygon, small_polygon};

    struct PolygonRow {
        id: u32,
        polygon: Polygon,
    }

    fn polygon_table() -> SpatialResult<Vec<PolygonRow>> {
        Ok(vec![
            PolygonRow {
                id: 1,
                polygon: big_polygon()?,
            },
            PolygonRow {
                id: 2,
                polygon: small_polygon()?,
            },
            PolygonRow {
                id: 3,
                polygon: outer_polygon()?,
            },
        ])
    }

    fn matching_rows(table: &[PolygonRow], parameter: &str) -> SpatialResult<Vec<u32>> {
        let parameter = wkt::parse(parameter)?;
        let mut ids = vec![];
        for row in table {
            if mbr_equals(&row.polygon, &parameter)? {
                ids.push(row.id);
            }
        }
        Ok(ids)
    }

    #[test]
    fn test_mbr_equals_where_parameter() {
        let table = polygon_table().unwrap();

        let result = matching_rows(&table, "LINESTRING(5 5,7 7,6 5)").unwrap();
        assert_eq!(result, vec![2]);
        assert_eq!(table[1].polygon, small_polygon().unwrap());

        let result = matching_rows(&table, "LINESTRING(15 15,17 17)").unwrap();
        assert_eq!(result, vec![3]);
    }

    #[test]
    fn test_select_mbr_equals() {
        let table = polygon_table().unwrap();
        let parameter = wkt::parse("LINESTRING(5 5,7 7,6 5)").unwrap();

        let flags: Vec<(u32, u8)> = table
            .iter()
            .map(|row| {
                let equal = mbr_equals(&row.polygon, &parameter).unwrap();
                (row.id, u8::from(equal))
            })
            .collect();
        assert_eq!(flags, vec![(1, 0), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_mbr_equals_through_index() {
        let table = polygon_table().unwrap();
        let index = MbrIndex::new();
        for row in &table {
            index.insert(row.id, &row.polygon).unwrap();
        }

        let small = wkt::parse("LINESTRING(5 5,7 7,6 5)").unwrap();
        let outer = wkt::parse("LINESTRING(15 15,17 17)").unwrap();
        assert_eq!(index.find_mbr_equals(&small).unwrap(), vec![2]);
        assert_eq!(index.find_mbr_equals(&outer).unwrap(), vec![3]);

        index.remove(&2);
        assert!(index.find_mbr_equals(&small).unwrap().is_empty());
    }

    #[test]
    fn test_mbr_equals_empty_parameter() {
        let table = polygon_table().unwrap();
        let err = matching_rows(&table, "LINESTRING EMPTY").unwrap_err();
        assert!(err.is_invalid_value());
    }
}
