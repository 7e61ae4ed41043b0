// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Integration tests for values returned by queries

use neo4j_driver::integer;
use neo4j_driver::types::spatial::{CARTESIAN_3D_SRID, WGS84_2D_SRID};
use neo4j_driver::{
    int, is_date, is_date_time_with_zone_id, is_date_time_with_zone_offset, is_duration, is_int,
    is_local_date_time, is_local_time, is_point, is_time, params, Date, DateTimeWithZoneId,
    DateTimeWithZoneOffset, Duration, Integer, LocalDateTime, LocalTime, Node, Path, PathSegment,
    Point, Record, Time, UnboundRelationship, Value,
};

fn sample_date() -> Date {
    Date::new(int(2018), int(6), int(15)).expect("Failed to create date")
}

fn sample_time() -> LocalTime {
    LocalTime::new(int(12), int(30), int(5), int(7)).expect("Failed to create time")
}

type Predicate = fn(&Value) -> bool;

/// One instance of every temporal type, paired with its predicate
fn temporal_samples() -> Vec<(Value, Predicate)> {
    let local_date_time = LocalDateTime::new(sample_date(), sample_time());
    vec![
        (
            Value::from(Duration::new(int(1), int(2), int(3), int(4)).expect("Failed to create duration")),
            is_duration as Predicate,
        ),
        (Value::from(sample_time()), is_local_time as Predicate),
        (
            Value::from(Time::new(sample_time(), int(7200)).expect("Failed to create time")),
            is_time as Predicate,
        ),
        (Value::from(sample_date()), is_date as Predicate),
        (Value::from(local_date_time.clone()), is_local_date_time as Predicate),
        (
            Value::from(
                DateTimeWithZoneOffset::new(local_date_time.clone(), int(-3600))
                    .expect("Failed to create date time"),
            ),
            is_date_time_with_zone_offset as Predicate,
        ),
        (
            Value::from(
                DateTimeWithZoneId::new(local_date_time, "Europe/Stockholm")
                    .expect("Failed to create date time"),
            ),
            is_date_time_with_zone_id as Predicate,
        ),
    ]
}

#[test]
fn test_temporal_predicates_match_only_their_type() {
    let samples = temporal_samples();
    for (i, (_, predicate)) in samples.iter().enumerate() {
        for (j, (value, _)) in samples.iter().enumerate() {
            assert_eq!(predicate(value), i == j, "predicate {} on sample {}", i, j);
        }
        assert!(!predicate(&Value::Null));
        assert!(!predicate(&Value::from(Point::new_2d(WGS84_2D_SRID, 1.0, 2.0))));
    }
}

#[test]
fn test_point_and_int_predicates() {
    assert!(is_point(&Value::from(Point::new_2d(WGS84_2D_SRID, 12.5, 56.3))));
    assert!(!is_point(&Value::Null));
    assert!(!is_point(&Value::from(sample_date())));

    assert!(is_int(&Value::from(int(42))));
    assert!(!is_int(&Value::from(42.0)));
    assert!(!is_int(&Value::Null));
}

#[test]
fn test_path_traversal_visits_nodes_in_order() {
    let node = |id: i64, name: &str| Node::new(id, ["Stop"], params! { "name" => name });
    let (a, b, c, d) = (node(1, "A"), node(2, "B"), node(3, "C"), node(4, "D"));
    let hop = |id: i64| UnboundRelationship::new(id, "NEXT", params! {});

    let path = Path::new(
        a.clone(),
        d.clone(),
        vec![
            PathSegment::new(a.clone(), hop(10), b.clone()),
            PathSegment::new(b.clone(), hop(11), c.clone()),
            PathSegment::new(c.clone(), hop(12), d.clone()),
        ],
    );

    let names: Vec<_> = path
        .nodes()
        .filter_map(|n| n.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
    assert_eq!(path.len(), 3);
    assert!(path.is_contiguous());

    for (segment, next) in path.segments.iter().zip(path.segments.iter().skip(1)) {
        assert_eq!(segment.end.identity, next.start.identity);
    }

    let bound: Vec<_> = path.segments.iter().map(PathSegment::bound_relationship).collect();
    assert_eq!(bound[1].start, Integer::from(2));
    assert_eq!(bound[1].end, Integer::from(3));
    assert_eq!(bound[1].to_string(), "(2)-[:NEXT]->(3)");
}

#[test]
fn test_record_preserves_key_order() {
    let record = Record::new(
        vec!["x".to_string(), "y".to_string()],
        vec![Value::from(1), Value::from(2)],
    )
    .expect("Failed to create record");

    let keys: Vec<_> = record.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["x", "y"]);
    assert_eq!(record.get("x"), Some(&Value::from(1)));
    assert_eq!(record.get("y"), Some(&Value::from(2)));
    assert_eq!(record.get("z"), None);
}

#[test]
fn test_point_dimension_is_inferred() {
    let point = Point::new(CARTESIAN_3D_SRID, &[1.0, 2.0, 3.0]).expect("Failed to create point");
    assert_eq!(point.dimension(), 3);
    assert_eq!(point.z, Some(3.0));

    let point = Point::new(WGS84_2D_SRID, &[1.0, 2.0]).expect("Failed to create point");
    assert_eq!(point.dimension(), 2);
    assert_eq!(point.z, None);
}

#[test]
fn test_safe_range_matches_double_precision() {
    let samples = [
        (0, 0),
        (-1, -1),
        (-1, 0x001f_ffff),
        (0, 0x0020_0000),
        (1, -0x0020_0000),
        (0, -0x0020_0000),
        (-1, i32::MAX),
        (0, i32::MIN),
        (0x1234_5678, 0x0000_0abc),
    ];
    for (low, high) in samples {
        let value = Integer::from_bits(low, high);
        let raw = value.as_i64();
        let exact = raw as f64;
        let lossless = exact.abs() < 9_007_199_254_740_992.0 && exact as i64 == raw;
        assert_eq!(integer::in_safe_range(value), lossless, "safe range of {}", raw);

        let text = integer::to_string(value);
        assert_eq!(text, raw.to_string());
        assert_eq!(Integer::from_string(&text, 10), Ok(value));
    }
}

#[test]
fn test_lossy_conversion_policy() {
    let beyond = Integer::MAX_SAFE_VALUE.as_i64() + 2;
    assert!(integer::to_number(beyond).is_err());
    assert_eq!(Integer::from(beyond).to_number_lossy(), beyond as f64);
    assert_eq!(integer::to_number(int(-42)), Ok(-42.0));
}

#[test]
fn test_zone_offset_follows_rules() {
    let at = |month: i64| {
        let local = LocalDateTime::new(
            Date::new(int(2018), int(month), int(1)).expect("Failed to create date"),
            LocalTime::new(int(12), int(0), int(0), int(0)).expect("Failed to create time"),
        );
        DateTimeWithZoneId::new(local, "Europe/Stockholm").expect("Failed to create date time")
    };
    assert_eq!(at(1).offset_seconds(), Ok(3600));
    assert_eq!(at(7).offset_seconds(), Ok(7200));
    assert_eq!(at(7).to_string(), "2018-07-01T12:00:00[Europe/Stockholm]");
}
