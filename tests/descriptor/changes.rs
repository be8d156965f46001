//! Change detection for redefinitions

use super::{func, init_tracing};
use propdesc::{Descriptor, JsValue};

fn samples() -> Vec<JsValue> {
    vec![
        JsValue::Undefined,
        JsValue::Null,
        JsValue::Boolean(false),
        JsValue::Boolean(true),
        JsValue::Number(0.0),
        JsValue::Number(1.0),
        JsValue::Number(f64::NAN),
        JsValue::from(""),
        JsValue::from("1"),
        JsValue::Object(func("f")),
    ]
}

#[test]
fn test_absent_candidate_never_changes() {
    init_tracing();
    for current in samples() {
        assert!(!Descriptor::changes(Some(&current), None));
    }
    assert!(!Descriptor::changes(None, None));
}

#[test]
fn test_absent_current_compares_as_undefined() {
    for candidate in samples() {
        assert_eq!(
            Descriptor::changes(None, Some(&candidate)),
            !JsValue::Undefined.abstract_equals(&candidate),
            "candidate {:?}",
            candidate
        );
    }
    assert!(!Descriptor::changes(None, Some(&JsValue::Null)));
    assert!(Descriptor::changes(None, Some(&JsValue::Number(0.0))));
}

#[test]
fn test_loose_equality() {
    let one = JsValue::Number(1.0);
    assert!(!Descriptor::changes(Some(&one), Some(&JsValue::from("1"))));
    assert!(!Descriptor::changes(Some(&one), Some(&JsValue::Boolean(true))));
    assert!(Descriptor::changes(Some(&one), Some(&JsValue::Number(2.0))));

    let nan = JsValue::Number(f64::NAN);
    assert!(Descriptor::changes(Some(&nan), Some(&nan)));
}

#[test]
fn test_objects_compare_by_identity() {
    let f = JsValue::Object(func("f"));
    let g = JsValue::Object(func("f"));
    assert!(!Descriptor::changes(Some(&f), Some(&f.clone())));
    assert!(Descriptor::changes(Some(&f), Some(&g)));
}
