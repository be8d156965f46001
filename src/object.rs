//! Store-side descriptor operations
//!
//! The operations a runtime's `Object` built-ins sit on:
//! `Object.getOwnPropertyDescriptor`, `Object.defineProperty` and
//! `Object.defineProperties`. They translate between stored properties and
//! [`Descriptor`]s; they do not enforce configurability rules.

use crate::attributes::Attributes;
use crate::descriptor::{Descriptor, DescriptorKind};
use crate::error::JsError;
use crate::prelude::*;
use crate::value::{self, CheapClone, JsObjectRef, JsValue, Property, PropertyKey, PropertySlot};

/// Descriptor of an own property, or `None` if there is no such property.
///
/// Accessor properties always report both `get` and `set`, using undefined
/// for a missing half.
/// Fails with a TypeError if the store holds a non-callable accessor.
pub fn get_own_property_descriptor(
    obj: &JsObjectRef,
    key: &PropertyKey,
) -> Result<Option<Descriptor>, JsError> {
    let obj = obj.borrow();
    let Some(property) = obj.get_own_property(key) else {
        return Ok(None);
    };

    let desc = match &property.slot {
        PropertySlot::Data(value) => {
            Descriptor::from_data_attributes(Some(value.clone()), property.attributes)
        }
        PropertySlot::Accessor { getter, setter } => {
            let mut desc = Descriptor::from_accessor_attributes(
                getter.clone(),
                setter.clone(),
                property.attributes,
            )?;
            if !desc.has_getter() {
                desc.set_getter(JsValue::Undefined)?;
            }
            if !desc.has_setter() {
                desc.set_setter(JsValue::Undefined)?;
            }
            desc
        }
    };
    Ok(Some(desc))
}

/// Object.getOwnPropertyDescriptor(obj, key): the descriptor as a fresh
/// object with `prototype`, or undefined
pub fn get_own_property_descriptor_object(
    obj: &JsObjectRef,
    key: &PropertyKey,
    prototype: Option<JsObjectRef>,
) -> Result<JsValue, JsError> {
    Ok(match get_own_property_descriptor(obj, key)? {
        Some(desc) => JsValue::Object(desc.to_object(prototype)),
        None => JsValue::Undefined,
    })
}

/// Object.defineProperty(obj, key, descriptor)
///
/// Returns whether the property changed observably.
pub fn define_property_from_descriptor(
    obj: &JsObjectRef,
    key: PropertyKey,
    descriptor: &JsValue,
) -> Result<bool, JsError> {
    // Read the descriptor before borrowing the target: its getters may touch it.
    let desc = Descriptor::from_value(descriptor)?;
    define_own_property(obj, key, &desc)
}

/// Object.defineProperties(obj, props)
///
/// Every enumerable own property of `props` is converted first, so a bad
/// descriptor leaves `obj` untouched. Returns whether anything changed.
pub fn define_properties(obj: &JsObjectRef, props: &JsValue) -> Result<bool, JsError> {
    let JsValue::Object(props_ref) = props else {
        return Err(JsError::type_error("Property descriptors must be an object"));
    };

    let keys: Vec<PropertyKey> = props_ref
        .borrow()
        .properties
        .iter()
        .filter(|(_, prop)| prop.enumerable())
        .map(|(key, _)| key.clone())
        .collect();

    let mut descriptors = Vec::with_capacity(keys.len());
    for key in keys {
        let descriptor = value::get(props_ref, &key)?.unwrap_or_default();
        descriptors.push((key, Descriptor::from_value(&descriptor)?));
    }

    let mut changed = false;
    for (key, desc) in descriptors {
        changed |= define_own_property(obj, key, &desc)?;
    }
    Ok(changed)
}

/// Apply a descriptor to one own property.
///
/// A new property takes absent fields as undefined/false. An existing property
/// keeps whatever the descriptor leaves out; switching between data and
/// accessor replaces the slot. Returns whether the property changed
/// observably, so callers can skip change notifications for no-op
/// redefinitions.
pub fn define_own_property(
    obj: &JsObjectRef,
    key: PropertyKey,
    desc: &Descriptor,
) -> Result<bool, JsError> {
    // Comparing values may convert objects to primitives, which borrows them,
    // so no borrow of `obj` is held until the final write.
    let (extensible, existing) = {
        let target = obj.borrow();
        (target.extensible, target.get_own_property(&key).cloned())
    };

    let Some(Property {
        slot: current_slot,
        attributes: current_attributes,
    }) = existing
    else {
        if !extensible {
            return Err(JsError::type_error(format!(
                "Cannot define property {}, object is not extensible",
                key
            )));
        }
        let attributes = desc.apply_to_attributes(Attributes::all());
        let property = match desc.kind() {
            DescriptorKind::Accessor { getter, setter } => Property::accessor(
                getter.as_ref().and_then(as_function),
                setter.as_ref().and_then(as_function),
                attributes.with_capability(Attributes::READONLY, true),
            ),
            DescriptorKind::Data { .. } | DescriptorKind::Generic => {
                Property::with_attributes(desc.value().cloned().unwrap_or_default(), attributes)
            }
        };
        tracing::trace!(%key, attributes = property.attributes.bits(), "defined new property");
        obj.borrow_mut().define_property(key, property);
        return Ok(true);
    };

    let mut attributes = desc.apply_to_attributes(current_attributes);
    let mut changed = false;

    let slot = match (desc.kind(), current_slot) {
        (DescriptorKind::Generic, slot) => slot,
        (DescriptorKind::Data { value, .. }, PropertySlot::Data(current)) => {
            changed = Descriptor::changes(Some(&current), value.as_ref());
            PropertySlot::Data(value.clone().unwrap_or(current))
        }
        (DescriptorKind::Data { value, writable }, PropertySlot::Accessor { .. }) => {
            if writable.is_none() {
                attributes = attributes.with_capability(Attributes::READONLY, false);
            }
            changed = true;
            PropertySlot::Data(value.clone().unwrap_or_default())
        }
        (
            DescriptorKind::Accessor { getter, setter },
            PropertySlot::Accessor {
                getter: mut current_getter,
                setter: mut current_setter,
            },
        ) => {
            if let Some(getter) = getter {
                changed |= replace_accessor(&mut current_getter, getter);
            }
            if let Some(setter) = setter {
                changed |= replace_accessor(&mut current_setter, setter);
            }
            PropertySlot::Accessor {
                getter: current_getter,
                setter: current_setter,
            }
        }
        (DescriptorKind::Accessor { getter, setter }, PropertySlot::Data(_)) => {
            // Writability means nothing for an accessor
            attributes = attributes.with_capability(Attributes::READONLY, true);
            changed = true;
            PropertySlot::Accessor {
                getter: getter.as_ref().and_then(as_function),
                setter: setter.as_ref().and_then(as_function),
            }
        }
    };

    changed |= attributes != current_attributes;
    tracing::trace!(%key, changed, attributes = attributes.bits(), "redefined property");
    obj.borrow_mut()
        .define_property(key, Property { slot, attributes });
    Ok(changed)
}

/// Stored form of a validated accessor: undefined is `None`
fn as_function(accessor: &JsValue) -> Option<JsObjectRef> {
    accessor.as_object().map(CheapClone::cheap_clone)
}

fn replace_accessor(current: &mut Option<JsObjectRef>, candidate: &JsValue) -> bool {
    let candidate = as_function(candidate);
    let changed = match (current.as_ref(), candidate.as_ref()) {
        (Some(a), Some(b)) => !Rc::ptr_eq(a, b),
        (None, None) => false,
        _ => true,
    };
    *current = candidate;
    changed
}
