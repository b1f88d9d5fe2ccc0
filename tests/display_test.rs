use hushctl::silence::display::{SilenceLabel, abbr};
use serde_json::{Map, Value, json};

fn params(pairs: &[(&str, &[&str])]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, values) in pairs {
        map.insert((*key).to_string(), json!(values));
    }
    map
}

#[test]
fn test_short_name_unmodified() {
    let label = SilenceLabel::from_param_set(&params(&[
        ("alertname", &["DiskFull"]),
        ("bot", &["build-01"]),
    ]));
    assert_eq!(label.full, "DiskFull build-01");
    assert_eq!(label.display, "DiskFull build-01");
}

#[test]
fn test_values_comma_joined_per_key() {
    let label = SilenceLabel::from_param_set(&params(&[
        ("alertname", &["A", "B"]),
        ("bot", &["c"]),
    ]));
    assert_eq!(label.full, "A, B c");
}

#[test]
fn test_long_name_truncated_with_full_preserved() {
    let name = "AveryLongAlertNameThatJustKeepsGoing"; // 36 chars
    let label = SilenceLabel::from_param_set(&params(&[("alertname", &[name])]));
    assert_eq!(label.full, name);
    assert_eq!(label.display, "AveryLongAlertNameThatJustKeep...");
}

#[test]
fn test_truncation_boundary() {
    let exactly_33 = "a".repeat(33);
    let label = SilenceLabel::from_param_set(&params(&[("alertname", &[exactly_33.as_str()])]));
    assert_eq!(label.display, exactly_33);

    let over = "a".repeat(34);
    let label = SilenceLabel::from_param_set(&params(&[("alertname", &[over.as_str()])]));
    assert_eq!(label.display, format!("{}...", "a".repeat(30)));
    assert_eq!(label.full, over);
}

#[test]
fn test_empty_param_set_placeholder() {
    let label = SilenceLabel::from_param_set(&Map::new());
    assert_eq!(label.full, "");
    assert_eq!(label.display, "(*)");
}

#[test]
fn test_reserved_keys_skipped() {
    let label = SilenceLabel::from_param_set(&params(&[
        ("__silence_id", &["abc123"]),
        ("alertname", &["Foo"]),
    ]));
    assert_eq!(label.full, "Foo");

    // Only reserved keys is the same as no keys.
    let label = SilenceLabel::from_param_set(&params(&[("__silence_id", &["abc123"])]));
    assert_eq!(label.full, "");
    assert_eq!(label.display, "(*)");
}

#[test]
fn test_insertion_order_preserved() {
    // Key order is observable output order, not alphabetical.
    let label = SilenceLabel::from_param_set(&params(&[("zeta", &["z"]), ("alpha", &["a"])]));
    assert_eq!(label.full, "z a");
}

#[test]
fn test_abbr() {
    assert_eq!(abbr(""), "");
    assert_eq!(abbr("gpu"), " - gpu");
}
