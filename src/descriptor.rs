//! Property descriptors
//!
//! A [`Descriptor`] is the reflective view of one property's metadata: the
//! record scripts pass to `Object.defineProperty` and get back from
//! `Object.getOwnPropertyDescriptor`. It bridges two representations:
//!
//! - the store's compact form, a slot plus [`Attributes`] bits, handled by
//!   [`Descriptor::from_data_attributes`], [`Descriptor::from_accessor_attributes`]
//!   and [`Descriptor::apply_to_attributes`];
//! - the script-visible form, a plain object with `value`/`writable`/`get`/
//!   `set`/`enumerable`/`configurable` fields, handled by
//!   [`Descriptor::from_value`] (ToPropertyDescriptor) and
//!   [`Descriptor::to_object`] (FromPropertyDescriptor).
//!
//! Every field is optional. An absent field is not the same as a field set to
//! `false`/`undefined`: absent fields leave the corresponding attribute of an
//! existing property alone when the descriptor is applied.
//!
//! The data-vs-accessor split is a tagged union ([`DescriptorKind`]), so a
//! descriptor can never describe both at once.

use crate::attributes::{AttributeLayout, Attributes};
use crate::error::JsError;
use crate::value::{self, JsObject, JsObjectRef, JsValue, Property, PropertyKey};

/// What a descriptor describes, decided by which fields are present
#[derive(Debug, Clone)]
pub enum DescriptorKind {
    /// Only `enumerable` / `configurable` (or nothing at all)
    Generic,
    /// At least one of `value` / `writable` is present
    Data {
        value: Option<JsValue>,
        writable: Option<bool>,
    },
    /// At least one of `get` / `set` is present; each is undefined or callable
    Accessor {
        getter: Option<JsValue>,
        setter: Option<JsValue>,
    },
}

impl DescriptorKind {
    /// Collapse field-less data/accessor kinds to `Generic`
    fn normalized(self) -> Self {
        match self {
            DescriptorKind::Data {
                value: None,
                writable: None,
            }
            | DescriptorKind::Accessor {
                getter: None,
                setter: None,
            } => DescriptorKind::Generic,
            kind => kind,
        }
    }
}

/// A property descriptor record
#[derive(Debug, Clone)]
pub struct Descriptor {
    kind: DescriptorKind,
    enumerable: Option<bool>,
    configurable: Option<bool>,
    /// Whether [`to_object`](Self::to_object) leaves its result extensible
    extensible: bool,
}

impl Default for Descriptor {
    /// The empty generic descriptor
    fn default() -> Self {
        Self {
            kind: DescriptorKind::Generic,
            enumerable: None,
            configurable: None,
            extensible: true,
        }
    }
}

impl Descriptor {
    // ═══════════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════════

    /// Fully specified data descriptor
    pub fn data(
        value: JsValue,
        writable: bool,
        enumerable: bool,
        configurable: bool,
        extensible: bool,
    ) -> Self {
        Self {
            kind: DescriptorKind::Data {
                value: Some(value),
                writable: Some(writable),
            },
            enumerable: Some(enumerable),
            configurable: Some(configurable),
            extensible,
        }
    }

    /// Accessor descriptor from a store's getter/setter pair.
    ///
    /// `None` means the field is absent, not that the accessor is undefined.
    /// With both absent the result is generic. Writability is never set.
    /// Fails with a TypeError if either object is not callable.
    pub fn accessor(
        getter: Option<JsObjectRef>,
        setter: Option<JsObjectRef>,
        enumerable: bool,
        configurable: bool,
        extensible: bool,
    ) -> Result<Self, JsError> {
        let kind = DescriptorKind::Accessor {
            getter: getter.map(|g| check_accessor(JsValue::Object(g))).transpose()?,
            setter: setter.map(|s| check_accessor(JsValue::Object(s))).transpose()?,
        };
        Ok(Self {
            kind: kind.normalized(),
            enumerable: Some(enumerable),
            configurable: Some(configurable),
            extensible,
        })
    }

    /// Data descriptor from a stored value and its attribute bits.
    ///
    /// A missing value becomes `undefined`; all three attribute fields are set.
    pub fn from_data_attributes(value: Option<JsValue>, attributes: Attributes) -> Self {
        Self::data(
            value.unwrap_or_default(),
            attributes.allows(Attributes::READONLY),
            attributes.allows(Attributes::DONTENUM),
            attributes.allows(Attributes::PERMANENT),
            true,
        )
    }

    /// Accessor descriptor from a stored getter/setter pair and its attribute bits
    pub fn from_accessor_attributes(
        getter: Option<JsObjectRef>,
        setter: Option<JsObjectRef>,
        attributes: Attributes,
    ) -> Result<Self, JsError> {
        Self::accessor(
            getter,
            setter,
            attributes.allows(Attributes::DONTENUM),
            attributes.allows(Attributes::PERMANENT),
            true,
        )
    }

    /// ToPropertyDescriptor: read a descriptor out of a script object.
    ///
    /// Fields are read in the order `enumerable`, `configurable`, `value`,
    /// `writable`, `get`, `set` through an ordinary property read, so
    /// inherited fields count and getters on `input` run (and may throw).
    ///
    /// Fails with a TypeError when `input` is not an object, when `get`/`set`
    /// is present but neither undefined nor callable, or when accessor and
    /// data fields are both present. Presence decides, so `{get: undefined,
    /// value: 1}` is rejected.
    pub fn from_value(input: &JsValue) -> Result<Self, JsError> {
        let JsValue::Object(obj) = input else {
            tracing::debug!(type_of = input.type_of(), "property descriptor is not an object");
            return Err(JsError::not_an_object(input.type_of()));
        };

        let enumerable = read_field(obj, "enumerable")?.map(|v| v.to_boolean());
        let configurable = read_field(obj, "configurable")?.map(|v| v.to_boolean());
        let value = read_field(obj, "value")?;
        let writable = read_field(obj, "writable")?.map(|v| v.to_boolean());
        let getter = read_field(obj, "get")?.map(check_accessor).transpose()?;
        let setter = read_field(obj, "set")?.map(check_accessor).transpose()?;

        let has_data = value.is_some() || writable.is_some();
        let has_accessor = getter.is_some() || setter.is_some();
        let kind = match (has_data, has_accessor) {
            (true, true) => {
                tracing::debug!("property descriptor mixes data and accessor fields");
                return Err(JsError::mixed_descriptor());
            }
            (_, true) => DescriptorKind::Accessor { getter, setter },
            (true, false) => DescriptorKind::Data { value, writable },
            (false, false) => DescriptorKind::Generic,
        };

        Ok(Self {
            kind,
            enumerable,
            configurable,
            extensible: true,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn kind(&self) -> &DescriptorKind {
        &self.kind
    }

    /// `value` or `writable` is present
    pub fn is_data_descriptor(&self) -> bool {
        matches!(self.kind, DescriptorKind::Data { .. })
    }

    /// `get` or `set` is present
    pub fn is_accessor_descriptor(&self) -> bool {
        matches!(self.kind, DescriptorKind::Accessor { .. })
    }

    pub fn is_generic_descriptor(&self) -> bool {
        matches!(self.kind, DescriptorKind::Generic)
    }

    pub fn has_value(&self) -> bool {
        self.value().is_some()
    }

    pub fn has_getter(&self) -> bool {
        self.getter().is_some()
    }

    pub fn has_setter(&self) -> bool {
        self.setter().is_some()
    }

    pub fn value(&self) -> Option<&JsValue> {
        match &self.kind {
            DescriptorKind::Data { value, .. } => value.as_ref(),
            _ => None,
        }
    }

    pub fn getter(&self) -> Option<&JsValue> {
        match &self.kind {
            DescriptorKind::Accessor { getter, .. } => getter.as_ref(),
            _ => None,
        }
    }

    pub fn setter(&self) -> Option<&JsValue> {
        match &self.kind {
            DescriptorKind::Accessor { setter, .. } => setter.as_ref(),
            _ => None,
        }
    }

    /// Tri-state `writable`
    pub fn writable(&self) -> Option<bool> {
        match &self.kind {
            DescriptorKind::Data { writable, .. } => *writable,
            _ => None,
        }
    }

    /// Tri-state `enumerable`
    pub fn enumerable(&self) -> Option<bool> {
        self.enumerable
    }

    /// Tri-state `configurable`
    pub fn configurable(&self) -> Option<bool> {
        self.configurable
    }

    /// `writable` is present and true
    pub fn is_writable(&self) -> bool {
        self.writable() == Some(true)
    }

    pub fn is_enumerable(&self) -> bool {
        self.enumerable == Some(true)
    }

    pub fn is_configurable(&self) -> bool {
        self.configurable == Some(true)
    }

    pub fn extensible(&self) -> bool {
        self.extensible
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Narrow setters
    //
    // Setting a data field on an accessor descriptor (or the reverse) is the
    // same mistake ToPropertyDescriptor rejects, and fails the same way.
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn set_enumerable(&mut self, enumerable: bool) {
        self.enumerable = Some(enumerable);
    }

    pub fn set_configurable(&mut self, configurable: bool) {
        self.configurable = Some(configurable);
    }

    pub fn set_extensible(&mut self, extensible: bool) {
        self.extensible = extensible;
    }

    /// Set or clear `writable`; clearing the last data field makes the descriptor generic
    pub fn set_writable(&mut self, writable: Option<bool>) -> Result<(), JsError> {
        let kind = core::mem::replace(&mut self.kind, DescriptorKind::Generic);
        self.kind = match kind {
            DescriptorKind::Generic => DescriptorKind::Data {
                value: None,
                writable,
            },
            DescriptorKind::Data { value, .. } => DescriptorKind::Data { value, writable },
            accessor @ DescriptorKind::Accessor { .. } => {
                if writable.is_some() {
                    self.kind = accessor;
                    return Err(JsError::mixed_descriptor());
                }
                accessor
            }
        }
        .normalized();
        Ok(())
    }

    pub fn set_value(&mut self, value: JsValue) -> Result<(), JsError> {
        match &mut self.kind {
            DescriptorKind::Generic => {
                self.kind = DescriptorKind::Data {
                    value: Some(value),
                    writable: None,
                };
            }
            DescriptorKind::Data { value: slot, .. } => *slot = Some(value),
            DescriptorKind::Accessor { .. } => return Err(JsError::mixed_descriptor()),
        }
        Ok(())
    }

    /// Set `get`; the value must be undefined or callable
    pub fn set_getter(&mut self, getter: JsValue) -> Result<(), JsError> {
        let getter = check_accessor(getter)?;
        match &mut self.kind {
            DescriptorKind::Generic => {
                self.kind = DescriptorKind::Accessor {
                    getter: Some(getter),
                    setter: None,
                };
            }
            DescriptorKind::Accessor { getter: slot, .. } => *slot = Some(getter),
            DescriptorKind::Data { .. } => return Err(JsError::mixed_descriptor()),
        }
        Ok(())
    }

    /// Set `set`; the value must be undefined or callable
    pub fn set_setter(&mut self, setter: JsValue) -> Result<(), JsError> {
        let setter = check_accessor(setter)?;
        match &mut self.kind {
            DescriptorKind::Generic => {
                self.kind = DescriptorKind::Accessor {
                    getter: None,
                    setter: Some(setter),
                };
            }
            DescriptorKind::Accessor { setter: slot, .. } => *slot = Some(setter),
            DescriptorKind::Data { .. } => return Err(JsError::mixed_descriptor()),
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Output
    // ═══════════════════════════════════════════════════════════════════════════

    /// Fold the present attribute fields into an existing bitmask.
    ///
    /// Absent fields keep their current bit; unrelated bits are preserved.
    pub fn apply_to_attributes(&self, attributes: Attributes) -> Attributes {
        let fields = [
            (Attributes::DONTENUM, self.enumerable),
            (Attributes::READONLY, self.writable()),
            (Attributes::PERMANENT, self.configurable),
        ];
        let updated = fields
            .into_iter()
            .fold(attributes, |acc, (flag, field)| match field {
                Some(allowed) => acc.with_capability(flag, allowed),
                None => acc,
            });
        tracing::trace!(
            before = attributes.bits(),
            after = updated.bits(),
            "applied descriptor to attributes"
        );
        updated
    }

    /// [`apply_to_attributes`](Self::apply_to_attributes) for a store with its
    /// own bit encoding; bits outside the layout pass through unchanged.
    pub fn apply_to_raw_attributes(&self, raw: u32, layout: &AttributeLayout) -> u32 {
        let updated = self.apply_to_attributes(layout.decode(raw));
        (raw & !layout.mask()) | layout.encode(updated)
    }

    /// FromPropertyDescriptor: materialize as a fresh plain object.
    ///
    /// Only present fields are emitted, as ordinary writable/enumerable/
    /// configurable data properties. The result shares nothing with `self`
    /// beyond the field values themselves. A non-extensible descriptor yields
    /// a non-extensible object.
    pub fn to_object(&self, prototype: Option<JsObjectRef>) -> JsObjectRef {
        let mut obj = JsObject::with_capacity(4);
        obj.prototype = prototype;

        match &self.kind {
            DescriptorKind::Data { value, writable } => {
                if let Some(value) = value {
                    put(&mut obj, "value", value.clone());
                }
                if let Some(writable) = writable {
                    put(&mut obj, "writable", JsValue::Boolean(*writable));
                }
            }
            DescriptorKind::Accessor { getter, setter } => {
                if let Some(getter) = getter {
                    put(&mut obj, "get", getter.clone());
                }
                if let Some(setter) = setter {
                    put(&mut obj, "set", setter.clone());
                }
            }
            DescriptorKind::Generic => {}
        }
        if let Some(enumerable) = self.enumerable {
            put(&mut obj, "enumerable", JsValue::Boolean(enumerable));
        }
        if let Some(configurable) = self.configurable {
            put(&mut obj, "configurable", JsValue::Boolean(configurable));
        }

        // Last: sealing first would block the fields above.
        if !self.extensible {
            obj.prevent_extensions();
        }
        obj.into_ref()
    }

    /// Whether storing `candidate` over `current` is an observable change.
    ///
    /// `None` is the not-found outcome of a property read. An absent candidate
    /// means no update was requested; an absent current value compares as
    /// `undefined`. Comparison uses abstract equality.
    pub fn changes(current: Option<&JsValue>, candidate: Option<&JsValue>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        let undefined = JsValue::Undefined;
        let current = current.unwrap_or(&undefined);
        !current.abstract_equals(candidate)
    }
}

fn read_field(obj: &JsObjectRef, name: &str) -> Result<Option<JsValue>, JsError> {
    value::get(obj, &PropertyKey::from(name))
}

fn check_accessor(accessor: JsValue) -> Result<JsValue, JsError> {
    if accessor.is_undefined() || accessor.is_callable() {
        Ok(accessor)
    } else {
        tracing::debug!(value = ?accessor, "property descriptor accessor is not callable");
        Err(JsError::not_a_function(&accessor))
    }
}

fn put(obj: &mut JsObject, name: &str, value: JsValue) {
    obj.define_property(PropertyKey::from(name), Property::data(value));
}
