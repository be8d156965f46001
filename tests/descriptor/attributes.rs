//! Reconciliation between descriptors and stored attribute bits

use super::{descriptor, func};
use propdesc::{AttributeLayout, Attributes, Descriptor, JsValue};
use serde_json::json;

#[test]
fn test_data_bitmask_round_trip() {
    for bits in 0..8u32 {
        let attributes = Attributes::from_bits_retain(bits);
        let desc = Descriptor::from_data_attributes(Some(JsValue::Number(1.0)), attributes);
        assert!(desc.is_data_descriptor());
        assert_eq!(desc.apply_to_attributes(attributes), attributes);
        // The descriptor is fully specified, so any starting bits are overwritten
        assert_eq!(desc.apply_to_attributes(Attributes::all() ^ attributes), attributes);
    }
}

#[test]
fn test_accessor_bitmask_round_trip_keeps_readonly() {
    for bits in 0..8u32 {
        let attributes = Attributes::from_bits_retain(bits);
        let desc = Descriptor::from_accessor_attributes(Some(func("g")), None, attributes).unwrap();
        assert!(desc.is_accessor_descriptor());
        assert_eq!(desc.writable(), None);
        assert_eq!(desc.apply_to_attributes(attributes), attributes);
    }
}

#[test]
fn test_missing_value_becomes_undefined() {
    let desc = Descriptor::from_data_attributes(None, Attributes::EMPTY);
    assert!(desc.has_value());
    assert_eq!(desc.value(), Some(&JsValue::Undefined));
    assert!(desc.is_writable());
    assert!(desc.is_enumerable());
    assert!(desc.is_configurable());
}

#[test]
fn test_enumerable_only_clears_dontenum() {
    let desc = descriptor(json!({"enumerable": true})).unwrap();
    let updated = desc.apply_to_attributes(Attributes::all());
    assert_eq!(updated, Attributes::READONLY | Attributes::PERMANENT);
}

#[test]
fn test_absent_fields_keep_bits() {
    let desc = descriptor(json!({})).unwrap();
    for bits in 0..8u32 {
        let attributes = Attributes::from_bits_retain(bits);
        assert_eq!(desc.apply_to_attributes(attributes), attributes);
    }

    let desc = descriptor(json!({"writable": true, "configurable": false})).unwrap();
    assert_eq!(
        desc.apply_to_attributes(Attributes::READONLY | Attributes::DONTENUM),
        Attributes::DONTENUM | Attributes::PERMANENT
    );
}

#[test]
fn test_unrelated_bits_preserved() {
    let foreign = Attributes::from_bits_retain(0x100 | 0x20);
    let desc = descriptor(json!({"writable": false, "enumerable": false})).unwrap();
    let updated = desc.apply_to_attributes(foreign);
    assert_eq!(updated.bits(), 0x100 | 0x20 | 0x1 | 0x2);
}

#[test]
fn test_raw_attributes_with_custom_layout() {
    let layout =
        AttributeLayout::from_json(r#"{"readonly": 8, "dontenum": 16, "permanent": 32}"#).unwrap();
    let desc = descriptor(json!({"enumerable": true, "writable": false})).unwrap();

    // bit 0 means nothing to this layout and must survive
    let raw = 1 | 16 | 32;
    assert_eq!(desc.apply_to_raw_attributes(raw, &layout), 1 | 8 | 32);
}

#[test]
fn test_raw_attributes_with_default_layout_match_typed() {
    let layout = AttributeLayout::default();
    let desc = descriptor(json!({"configurable": true})).unwrap();
    for bits in 0..8u32 {
        let typed = desc.apply_to_attributes(Attributes::from_bits_retain(bits));
        assert_eq!(desc.apply_to_raw_attributes(bits, &layout), typed.bits());
    }
}
