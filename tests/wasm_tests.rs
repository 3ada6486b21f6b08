//! Tests for the JSON envelope API exposed to the web front-end.
//!
//! The wasm-bindgen functions are plain Rust functions on native targets,
//! so the envelope contract is tested here without a browser.

use agroguard_roi::wasm::{calculate_roi, decode_share_link, get_regions};
use serde_json::Value;

#[test]
fn test_calculate_roi_envelope_success() {
    let input = r#"{"kabupaten":"Malang","plant":"tomat","land_area":"100","irrigation":"otomatis-iot"}"#;
    let output: Value = serde_json::from_str(&calculate_roi(input)).unwrap();

    assert_eq!(output["success"], Value::Bool(true));
    assert!(output["error"].is_null());
    assert_eq!(output["result"]["baseline_production_kg"], 500.0);
    assert_eq!(
        output["share_query"],
        Value::String("k=Malang&t=tomat&l=100&i=otomatis-iot".to_string())
    );
}

#[test]
fn test_calculate_roi_envelope_reports_errors() {
    let bad_area = r#"{"kabupaten":"Malang","plant":"tomat","land_area":"0","irrigation":"manual"}"#;
    let output: Value = serde_json::from_str(&calculate_roi(bad_area)).unwrap();
    assert_eq!(output["success"], Value::Bool(false));
    assert!(output["error"].as_str().unwrap().contains("luas lahan"));

    let not_json = calculate_roi("{nope");
    let output: Value = serde_json::from_str(&not_json).unwrap();
    assert_eq!(output["success"], Value::Bool(false));
    assert!(output["error"].as_str().unwrap().starts_with("Invalid input"));
}

#[test]
fn test_decode_share_link_envelope() {
    let ok: Value =
        serde_json::from_str(&decode_share_link("k=Malang&t=tomat&l=100&i=otomatis-iot")).unwrap();
    assert_eq!(ok["success"], Value::Bool(true));
    assert_eq!(ok["params"]["kabupaten"], Value::String("Malang".to_string()));

    let missing: Value =
        serde_json::from_str(&decode_share_link("k=Malang&t=tomat&l=100")).unwrap();
    assert_eq!(missing["success"], Value::Bool(false));
    assert!(missing["error"].as_str().unwrap().contains("'i'"));
}

#[test]
fn test_get_regions() {
    let regions: Vec<String> = serde_json::from_str(&get_regions()).unwrap();
    assert_eq!(regions.len(), 6);
    assert!(regions.contains(&"Malang".to_string()));
}
