#![no_main]

use libfuzzer_sys::fuzz_target;
use propdesc::value::{create_object, json_to_js_value};
use propdesc::{define_property_from_descriptor, Descriptor, PropertyKey};

fuzz_target!(|data: &[u8]| {
    // Limit input size to avoid timeout
    if data.len() > 100_000 {
        return;
    }

    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let input = json_to_js_value(&json);

    // Construction should return Ok or Err, never panic
    let Ok(desc) = Descriptor::from_value(&input) else {
        return;
    };
    let _ = desc.to_object(None);

    let target = create_object(None);
    let _ = define_property_from_descriptor(&target, PropertyKey::from("p"), &input);
    let _ = define_property_from_descriptor(&target, PropertyKey::from("p"), &input);
});
