#![cfg(target_arch = "wasm32")]

use longhand_wasm::{generate, scan_candidates};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize)]
struct Output {
    css: String,
    unknown: Vec<String>,
}

fn output(value: JsValue) -> Output {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn generate_from_string() {
    let result = generate(JsValue::from_str("position-absolute nope"), JsValue::UNDEFINED).unwrap();
    let result = output(result);
    assert_eq!(result.css, ".position-absolute {\n  position: absolute;\n}\n");
    assert_eq!(result.unknown, vec!["nope".to_string()]);
}

#[wasm_bindgen_test]
fn generate_from_array_with_prefix() {
    let classes = serde_wasm_bindgen::to_value(&["tw-display-grid", "tw-gap-4"]).unwrap();
    let config = serde_json::json!({ "prefix": "tw-" })
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap();
    let result = output(generate(classes, config).unwrap());
    assert!(result.css.contains(".tw-display-grid {\n  display: grid;\n}"));
    assert!(result.css.contains("gap: 1rem;"));
    assert!(result.unknown.is_empty());
}

#[wasm_bindgen_test]
fn invalid_classes_are_rejected() {
    assert!(generate(JsValue::from_f64(1.0), JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn scan_returns_candidates() {
    let value = scan_candidates(r#"<p class="display-block">"#).unwrap();
    let candidates: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap();
    assert!(candidates.contains(&"display-block".to_string()));
}
