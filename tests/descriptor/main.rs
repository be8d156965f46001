//! Integration tests for property descriptors, organized by feature
//!
//! These tests exercise the crate through its public API only. Set
//! `RUST_LOG=trace` to see the reconciliation logs:
//!
//! ```bash
//! RUST_LOG=propdesc=trace cargo test --test descriptor -- --nocapture
//! ```

mod attributes;
mod changes;
mod operator;
mod serialize;

use propdesc::value::{create_native_function, create_object, json_to_js_value};
use propdesc::{Descriptor, JsError, JsObjectRef, JsValue, PropertyKey};
use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a script value from JSON
pub fn js(json: serde_json::Value) -> JsValue {
    json_to_js_value(&json)
}

/// Run ToPropertyDescriptor on a JSON-built object
pub fn descriptor(json: serde_json::Value) -> Result<Descriptor, JsError> {
    init_tracing();
    Descriptor::from_value(&js(json))
}

fn identity(this: JsValue, _args: &[JsValue]) -> Result<JsValue, JsError> {
    Ok(this)
}

/// A callable object usable as a getter or setter
pub fn func(name: &str) -> JsObjectRef {
    create_native_function(name, identity, 0)
}

/// A fresh object with the given own data properties (all attributes permissive)
pub fn object_with(fields: &[(&str, JsValue)]) -> JsObjectRef {
    let obj = create_object(None);
    for (name, value) in fields {
        obj.borrow_mut().define_property(
            PropertyKey::from(*name),
            propdesc::value::Property::data(value.clone()),
        );
    }
    obj
}

/// Own string keys of an object, in insertion order
pub fn keys(obj: &JsObjectRef) -> Vec<String> {
    obj.borrow()
        .own_keys()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Own data value of an object
pub fn own_value(obj: &JsObjectRef, name: &str) -> Option<JsValue> {
    obj.borrow()
        .get_own_property(&PropertyKey::from(name))
        .and_then(|prop| prop.value().cloned())
}
