//! FromPropertyDescriptor: materializing descriptors as script objects

use super::{descriptor, func, keys, object_with, own_value};
use propdesc::value::create_object;
use propdesc::{Attributes, Descriptor, JsValue, PropertyKey};
use serde_json::json;

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

#[test]
fn test_to_object_has_exactly_present_fields() {
    let desc = descriptor(json!({"value": 5, "enumerable": true})).unwrap();
    let obj = desc.to_object(None);
    assert_eq!(keys(&obj), ["value", "enumerable"]);
    assert_eq!(own_value(&obj, "value"), Some(JsValue::Number(5.0)));
    assert_eq!(own_value(&obj, "enumerable"), Some(JsValue::Boolean(true)));
    assert!(obj.borrow().extensible);
    assert_eq!(
        JsValue::Object(obj).to_json(),
        Some(json!({"value": 5, "enumerable": true}))
    );
}

#[test]
fn test_round_trip_reproduces_input_fields() {
    for input in [
        json!({}),
        json!({"value": "s"}),
        json!({"writable": false, "configurable": true}),
        json!({"value": [1, 2], "writable": true, "enumerable": false, "configurable": false}),
        json!({"enumerable": true}),
    ] {
        let desc = descriptor(input.clone()).unwrap();
        let obj = desc.to_object(None);
        let expected: Vec<String> = input
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(sorted(keys(&obj)), sorted(expected), "fields of {}", input);
        assert!(obj.borrow().extensible);
    }
}

#[test]
fn test_round_trip_keeps_identical_values() {
    let nested = create_object(None);
    let input = object_with(&[("value", JsValue::Object(nested.clone()))]);
    let desc = Descriptor::from_value(&JsValue::Object(input)).unwrap();
    let obj = desc.to_object(None);
    assert!(matches!(
        own_value(&obj, "value"),
        Some(JsValue::Object(v)) if std::rc::Rc::ptr_eq(&v, &nested)
    ));
}

#[test]
fn test_accessor_to_object() {
    let getter = func("get");
    let input = object_with(&[
        ("get", JsValue::Object(getter.clone())),
        ("set", JsValue::Undefined),
        ("configurable", JsValue::Boolean(true)),
    ]);
    let desc = Descriptor::from_value(&JsValue::Object(input)).unwrap();
    let obj = desc.to_object(None);
    assert_eq!(keys(&obj), ["get", "set", "configurable"]);
    assert_eq!(own_value(&obj, "set"), Some(JsValue::Undefined));
    assert!(own_value(&obj, "get").is_some_and(|g| g.is_callable()));
}

#[test]
fn test_fields_are_plain_data_properties() {
    let desc = Descriptor::data(JsValue::Null, false, false, false, true);
    let obj = desc.to_object(None);
    let obj = obj.borrow();
    for key in ["value", "writable", "enumerable", "configurable"] {
        let prop = obj.get_own_property(&PropertyKey::from(key)).unwrap();
        assert_eq!(prop.attributes, Attributes::EMPTY);
        assert!(!prop.is_accessor());
    }
}

#[test]
fn test_non_extensible_descriptor_seals_result() {
    let mut desc = descriptor(json!({"value": 1})).unwrap();
    desc.set_extensible(false);
    let obj = desc.to_object(None);
    assert!(!obj.borrow().extensible);
    // Fields are still written before sealing
    assert_eq!(own_value(&obj, "value"), Some(JsValue::Number(1.0)));

    let desc = Descriptor::accessor(None, Some(func("s")), true, true, false).unwrap();
    assert!(!desc.to_object(None).borrow().extensible);
}

#[test]
fn test_to_object_uses_given_prototype() {
    let proto = object_with(&[("inherited", JsValue::Boolean(true))]);
    let desc = descriptor(json!({"enumerable": false})).unwrap();
    let obj = desc.to_object(Some(proto.clone()));
    assert!(obj
        .borrow()
        .prototype
        .as_ref()
        .is_some_and(|p| std::rc::Rc::ptr_eq(p, &proto)));
    assert_eq!(keys(&obj), ["enumerable"]);
}

#[test]
fn test_each_call_allocates_fresh_object() {
    let desc = descriptor(json!({"value": 1})).unwrap();
    let a = desc.to_object(None);
    let b = desc.to_object(None);
    assert!(!std::rc::Rc::ptr_eq(&a, &b));
    a.borrow_mut()
        .define_property(PropertyKey::from("extra"), propdesc::value::Property::data(JsValue::Null));
    assert_eq!(keys(&b), ["value"]);
}

#[test]
fn test_explicit_accessor_rejects_non_callable_objects() {
    let plain = create_object(None);
    let err = Descriptor::accessor(Some(plain.clone()), None, true, true, true).unwrap_err();
    assert!(err.is_type_error());

    let err = Descriptor::accessor(Some(func("g")), Some(plain), true, true, true).unwrap_err();
    assert_eq!(err.to_string(), "TypeError: [object Object] is not a function");
}
