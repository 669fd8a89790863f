use approx::assert_relative_eq;
use chrono::{DateTime, TimeDelta};
use serde_json::json;
use stdplus::v1::*;

#[derive(Debug)]
struct Playlist {
    title: &'static str,
    tracks: usize,
}

impl Object for Playlist {
    fn type_name(&self) -> &str {
        "Playlist"
    }

    fn render(&self) -> Option<String> {
        Some(self.title.to_string())
    }

    fn count(&self) -> Option<usize> {
        Some(self.tracks)
    }
}

#[derive(Debug)]
struct Inventory(usize);

impl Object for Inventory {
    fn type_name(&self) -> &str {
        "Inventory"
    }

    fn count(&self) -> Option<usize> {
        Some(self.0)
    }
}

// ── Ranking ──────────────────────────────────────────────────────────

#[test]
fn test_rank_scalar_identity() {
    assert_eq!(rank(&Value::Int(42)).unwrap(), RankValue::Integer(42));
    assert_eq!(rank(&Value::from("word")).unwrap(), RankValue::from("word"));
    let RankValue::Float(f) = rank(&Value::Float(2.5)).unwrap() else {
        panic!("Expected Float");
    };
    assert_relative_eq!(f, 2.5);
}

#[test]
fn test_rank_order_preservation() {
    let ints = [-100i64, -1, 0, 1, 100];
    for pair in ints.windows(2) {
        let (a, b) = (Value::from(pair[0]), Value::from(pair[1]));
        assert!(rank(&a).unwrap() < rank(&b).unwrap());
    }
    let words = ["apple", "apricot", "banana"];
    for pair in words.windows(2) {
        assert!(rank(&pair[0].into()).unwrap() < rank(&pair[1].into()).unwrap());
    }
}

#[test]
fn test_rank_recursion_over_pair() {
    let x = Value::from(EnumCase::backed("Two", 2i64));
    let y = Value::from(DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z").unwrap());
    let RankValue::Composite(c) = rank(&Value::from(vec![x.clone(), y.clone()])).unwrap() else {
        panic!("Expected Composite");
    };
    assert_eq!(c.get(&Key::Index(0)), Some(&rank(&x).unwrap()));
    assert_eq!(c.get(&Key::Index(1)), Some(&rank(&y).unwrap()));
}

#[test]
fn test_rank_json_document() {
    let doc = Value::from(json!({"name": "job", "retries": 3, "enabled": true, "tags": ["a"]}));
    let RankValue::Composite(c) = rank(&doc).unwrap() else {
        panic!("Expected Composite");
    };
    assert_eq!(c.get(&Key::from("enabled")), Some(&RankValue::Integer(1)));
    assert_eq!(c.get(&Key::from("retries")), Some(&RankValue::Integer(3)));
    assert!(c.get(&Key::from("tags")).unwrap().is_composite());

    let json = serde_json::to_value(RankValue::Composite(c)).unwrap();
    assert_eq!(json["enabled"], json!(1));
}

#[test]
fn test_rank_precedence_render_before_count() {
    let playlist = Value::object(Playlist {
        title: "road trip",
        tracks: 40,
    });
    assert_eq!(rank(&playlist).unwrap(), RankValue::from("road trip"));
    assert_eq!(
        rank(&Value::object(Inventory(40))).unwrap(),
        RankValue::Integer(40)
    );
}

#[test]
fn test_rank_spans_with_pinned_reference() {
    let reference = DateTime::parse_from_rfc3339("2024-02-01T00:00:00Z").unwrap();
    let ranker = Ranker::new().with_reference(reference);
    assert_eq!(
        ranker.rank(&TimeSpan::new().months(1).into()).unwrap(),
        RankValue::Float(29.0 * 86_400.0)
    );
    assert_eq!(
        ranker.rank(&TimeDelta::minutes(2).into()).unwrap(),
        RankValue::Float(120.0)
    );
    let week = Value::from(TimeSpan::new().days(7));
    let month = Value::from(TimeSpan::new().months(1));
    assert_eq!(
        ranker.greatest(&[week.clone(), month.clone()]).unwrap(),
        &month
    );
}

#[test]
fn test_rank_period() {
    let start = DateTime::parse_from_rfc3339("2026-03-01T09:00:00Z").unwrap();
    let period = Period::recurrences(start, TimeSpan::new().days(1), 5).excluding_start();
    let RankValue::Float(f) = rank(&period.into()).unwrap() else {
        panic!("Expected Float");
    };
    let expected = DateTime::parse_from_rfc3339("2026-03-02T09:00:00Z").unwrap();
    assert_relative_eq!(f, expected.timestamp() as f64);

    let empty = Period::until(start, TimeSpan::new().days(1), start);
    assert_eq!(rank(&empty.into()), Err(RankError::EmptySequence));
}

#[test]
fn test_rank_unsupported() {
    let err = rank(&Value::opaque("resource (stream)")).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported value kind: resource (stream)");
}

#[test]
fn test_extremum_ties() {
    assert_eq!(greatest![3, 3].unwrap(), Value::Int(3));
    assert_eq!(greatest![5, 5, 5].unwrap(), Value::Int(5));
    assert_eq!(least![5, 5, 5].unwrap(), Value::Int(5));

    let values = [Value::from(1), Value::from(true), Value::from(1.0)];
    assert!(std::ptr::eq(greatest(&values).unwrap(), &values[0]));
    assert!(std::ptr::eq(least(&values).unwrap(), &values[0]));
}

#[test]
fn test_extremum_arity() {
    assert_eq!(greatest(&[Value::Int(1)]), Err(RankError::Arity { got: 1 }));
    assert_eq!(least(&[]), Err(RankError::Arity { got: 0 }));
    assert!(greatest![1].is_err());
}

#[test]
fn test_extremum_mixed_kinds() {
    let values = [
        Value::Null,
        Value::from(-2),
        Value::from(false),
        Value::from(vec![1i64]),
    ];
    assert_eq!(least(&values).unwrap(), &Value::from(-2));
    assert_eq!(greatest(&values).unwrap(), &values[3]);
}

#[test]
fn test_compare_values() {
    use std::cmp::Ordering;
    assert_eq!(
        compare(&Value::from("10"), &Value::from(9)).unwrap(),
        Some(Ordering::Greater)
    );
}

// ── Paths ────────────────────────────────────────────────────────────

#[test]
fn test_path_scenarios() {
    assert_eq!(path::extension("/root/dir/sub/name.suf.ext"), "ext");
    assert_eq!(path::filename("/root/dir/sub/name.suf.ext", ""), "name.suf");
    assert_eq!(path::extension("/root/dir/sub/.ext"), "ext");
    assert_eq!(path::filename("/root/dir/sub/.ext", ""), "");
    assert_eq!(path::dirname("sub/name.ext", 1), "sub");
    assert_eq!(path::dirname("name.ext", 1), ".");
    assert_eq!(path::extension_replace("dir/name.ext", "new", ""), "dir/name.new");
    assert_eq!(path::extension_replace("dir/name.ext", "", ""), "dir/name");
}

#[test]
fn test_path_edge_table() {
    let table = [
        ("a/b/name.suf.ext", "name.suf", "ext"),
        ("a/b/name.ext", "name", "ext"),
        ("a/b/name", "name", ""),
        ("a/b/.ext", "", "ext"),
        ("a/b/", "b", ""),
    ];
    for (p, filename, extension) in table {
        assert_eq!(path::filename(p, ""), filename);
        assert_eq!(path::extension(p), extension);
    }
}

#[test]
fn test_path_round_trip() {
    for p in ["src/main.rs", "archive.tar.gz", "/opt/bin/tool", "notes/todo"] {
        let base = path::basename(p, "");
        let ext = path::extension(p);
        let stem = path::filename(p, "");
        if ext.is_empty() {
            assert_eq!(stem, base);
        } else {
            assert_eq!(format!("{}.{}", stem, ext), base);
        }
    }
}

#[test]
fn test_parsed_path_matches_functions() {
    let p = "assets/css/site.min.css";
    let parsed = ParsedPath::parse(p);
    assert_eq!(parsed.directory, path::dirname(p, 1));
    assert_eq!(parsed.base, path::basename(p, ""));
    assert_eq!(parsed.stem, path::filename(p, ""));
    assert_eq!(parsed.extension, path::extension(p));
}

#[test]
fn test_path_style_explicit() {
    let win = PathStyle::Windows;
    assert_eq!(win.basename("C:\\temp\\report.docx", ".docx"), "report");
    assert_eq!(win.dirname("C:\\temp\\report.docx", 2), "C:\\");
    assert_eq!(PathStyle::Unix.basename("C:\\temp\\report.docx", ""), "C:\\temp\\report.docx");
}
