//! End-to-end comparison behavior: known name pairs, batch ordering and the
//! serialized record shape handed to display/export layers.

use namesake::{
    compare, encode, group_by_code, name_stats, process_batch, search, BatchRow, MatchKind,
    MatchStatus, ResultFilter,
};
use serde_json::json;

#[test]
fn known_pairs_match() {
    for (a, b) in [
        ("Smith", "Smyth"),
        ("Muhammad", "Mohammed"),
        ("Catherine", "Katherine"),
        ("Stephen", "Steven"),
        ("Schmidt", "Smith"),
    ] {
        assert!(compare(a, b).unwrap().is_match, "{a} should match {b}");
    }
}

#[test]
fn known_pairs_do_not_match() {
    for (a, b) in [("John", "Mary"), ("Clark", "Allen"), ("Gray", "Knox")] {
        assert!(!compare(a, b).unwrap().is_match, "{a} should not match {b}");
    }
}

#[test]
fn empty_input_is_absent() {
    assert!(encode("").is_none());
    assert!(encode("   ").is_none());
    assert!(compare("", "Smith").is_none());
}

#[test]
fn case_insensitive() {
    assert_eq!(encode("Smith"), encode("SMITH"));
    assert_eq!(encode("SMITH"), encode("smith"));
}

#[test]
fn batch_skips_blank_variation_in_order() {
    let rows = vec![BatchRow::new("Ahmad", ["Ahmed", "", "Ahmat"])];
    let result = process_batch(&rows);

    assert_eq!(result.len(), 2);
    assert_eq!(result.comparisons[0].variation_name.as_str(), "Ahmed");
    assert_eq!(result.comparisons[1].variation_name.as_str(), "Ahmat");
}

#[test]
fn batch_output_is_reproducible() {
    let rows = vec![
        BatchRow::new("Muhammad", ["Mohammed", "Mohamed", "Mehmet", "Mohammed"]),
        BatchRow::new("", ["ignored"]),
        BatchRow::new("Catherine", ["Katherine", "Kathryn", "  "]),
    ];

    let first = serde_json::to_string(&process_batch(&rows)).unwrap();
    let second = serde_json::to_string(&process_batch(&rows)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn comparison_serializes_with_camel_case_keys() {
    let result = compare("Smith", "Smyth").unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value,
        json!({
            "primaryName": "Smith",
            "variationName": "Smyth",
            "codesA": { "primary": "SM0", "secondary": "XMT" },
            "codesB": { "primary": "SM0", "secondary": "XMT" },
            "isMatch": true
        })
    );
}

#[test]
fn comparison_round_trips_through_json() {
    let result = compare("Wasserman", "Vasserman").unwrap();
    let text = serde_json::to_string(&result).unwrap();
    let back: namesake::ComparisonResult = serde_json::from_str(&text).unwrap();
    assert_eq!(back, result);
}

#[test]
fn contradictory_match_flag_rejected_on_deserialize() {
    let claims_match = json!({
        "primaryName": "John",
        "variationName": "Mary",
        "codesA": { "primary": "JN", "secondary": "AN" },
        "codesB": { "primary": "MR", "secondary": "MR" },
        "isMatch": true
    });
    assert!(serde_json::from_value::<namesake::ComparisonResult>(claims_match).is_err());

    let claims_miss = json!([{
        "primaryName": "Smith",
        "variationName": "Smyth",
        "codesA": { "primary": "SM0", "secondary": "XMT" },
        "codesB": { "primary": "SM0", "secondary": "XMT" },
        "isMatch": false
    }]);
    assert!(serde_json::from_value::<namesake::BatchResult>(claims_miss).is_err());
}

#[test]
fn blank_name_rejected_on_deserialize() {
    let text = r#"{"primaryName":"  ","variationName":"Smyth","codesA":{"primary":"","secondary":""},"codesB":{"primary":"SM0","secondary":"XMT"},"isMatch":false}"#;
    assert!(serde_json::from_str::<namesake::ComparisonResult>(text).is_err());
}

#[test]
fn batch_row_deserializes_from_collaborator_json() {
    let rows: Vec<BatchRow> = serde_json::from_value(json!([
        { "primaryName": "Reid", "variations": ["Reed", "Read"] }
    ]))
    .unwrap();

    let result = process_batch(&rows);
    assert_eq!(result.summary().matched, 2);
}

#[test]
fn filtered_views_follow_batch_order() {
    let rows = vec![
        BatchRow::new("John", ["Jon", "Mary", "Jean"]),
        BatchRow::new("Smith", ["Smyth", "Jones"]),
    ];
    let result = process_batch(&rows);

    let summary = result.summary();
    assert_eq!(summary.total, 5);
    assert_eq!(summary.matched, 3);
    assert_eq!(summary.not_matched, 2);

    let misses: Vec<&str> = result
        .filter(&ResultFilter::status(MatchStatus::NotMatched))
        .iter()
        .map(|r| r.variation_name.as_str())
        .collect();
    assert_eq!(misses, ["Mary", "Jones"]);

    let john_matches = result.filter(&ResultFilter::status(MatchStatus::Matched).with_query("john"));
    assert_eq!(john_matches.len(), 2);
}

#[test]
fn groups_and_search_over_name_list() {
    let names = ["Reid", "Smith", "Reed", "Smyth", "Schmidt", "Mary"];

    let groups = group_by_code(&names);
    let codes: Vec<&str> = groups.iter().map(|g| g.code.as_str()).collect();
    assert_eq!(codes, ["RT", "SM0"]);

    let stats = name_stats(&names);
    assert_eq!(stats.names, 6);
    assert_eq!(stats.unique_codes, 4);
    assert_eq!(stats.overlaps, 2);

    let hits = search("Smith", &names);
    let kinds: Vec<(&str, MatchKind)> = hits.iter().map(|h| (h.name.as_str(), h.kind)).collect();
    assert_eq!(
        kinds,
        [
            ("Smith", MatchKind::Exact),
            ("Smyth", MatchKind::Exact),
            ("Schmidt", MatchKind::Secondary),
        ]
    );
}
