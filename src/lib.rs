//! Property descriptors for dynamic-object runtimes
//!
//! Converts between a property store's compact attribute bits and the
//! script-visible descriptor records of `Object.defineProperty` /
//! `Object.getOwnPropertyDescriptor`, and decides whether a redefinition
//! changes anything.
//!
//! # Example
//!
//! ```
//! use propdesc::{Attributes, Descriptor, JsValue, value::json_to_js_value};
//! use serde_json::json;
//!
//! let input = json_to_js_value(&json!({"value": 5, "enumerable": true}));
//! let desc = Descriptor::from_value(&input).unwrap();
//! assert!(desc.is_data_descriptor());
//! assert_eq!(desc.value(), Some(&JsValue::Number(5.0)));
//!
//! // Only the fields the descriptor carries touch the stored bits
//! let updated = desc.apply_to_attributes(Attributes::all());
//! assert_eq!(updated, Attributes::READONLY | Attributes::PERMANENT);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod attributes;
pub mod descriptor;
pub mod error;
pub mod object;
pub mod operator;
pub mod prelude;
pub mod value;

pub use attributes::{AttributeLayout, Attributes};
pub use descriptor::{Descriptor, DescriptorKind};
pub use error::JsError;
pub use object::{
    define_own_property, define_properties, define_property_from_descriptor,
    get_own_property_descriptor, get_own_property_descriptor_object,
};
pub use operator::{BinaryOp, HookResult, NoOperatorHook, OperatorHook, UnaryOp};
pub use value::{CheapClone, JsObject, JsObjectRef, JsString, JsValue, PropertyKey};
