//! JavaScript value representation
//!
//! The value and object model the descriptor engine reads from and writes to.
//! Objects are plain `Rc<RefCell<JsObject>>` handles with an insertion-ordered
//! property table whose per-property attributes use the legacy bitmask.

use crate::attributes::Attributes;
use crate::error::JsError;
use crate::prelude::*;

/// Trait for types that have cheap (O(1), reference-counted) clones.
///
/// This trait makes it explicit when a clone is cheap (just incrementing a reference count)
/// vs when it might be expensive (copying data).
pub trait CheapClone: Clone {
    /// Create a cheap (reference-counted) clone of this value.
    fn cheap_clone(&self) -> Self {
        self.clone()
    }
}

// Rc<RefCell<T>> is covered by this
impl<T: ?Sized> CheapClone for Rc<T> {}

/// A JavaScript value
#[derive(Clone, Default)]
pub enum JsValue {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(JsString),
    Symbol(JsSymbol),
    Object(JsObjectRef),
}

impl JsValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check if this value is callable (a function)
    pub fn is_callable(&self) -> bool {
        match self {
            JsValue::Object(obj) => obj.borrow().is_callable(),
            _ => false,
        }
    }

    /// Get the object handle if this value is an object
    pub fn as_object(&self) -> Option<&JsObjectRef> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get the typeof result for this value
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null => "object", // Historical quirk
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Symbol(_) => "symbol",
            JsValue::Object(obj) => {
                if obj.borrow().is_callable() {
                    "function"
                } else {
                    "object"
                }
            }
        }
    }

    /// Convert to boolean (ToBoolean)
    pub fn to_boolean(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Boolean(b) => *b,
            JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
            JsValue::String(s) => !s.is_empty(),
            JsValue::Symbol(_) => true, // Symbols are always truthy
            JsValue::Object(_) => true,
        }
    }

    /// Convert to number (ToNumber)
    ///
    /// Objects go through their default primitive (the `[object ...]` tag),
    /// user-defined `valueOf`/`toString` are not consulted.
    pub fn to_number(&self) -> f64 {
        match self {
            JsValue::Undefined => f64::NAN,
            JsValue::Null => 0.0,
            JsValue::Boolean(true) => 1.0,
            JsValue::Boolean(false) => 0.0,
            JsValue::Number(n) => *n,
            JsValue::String(s) => string_to_number(s.as_str()),
            JsValue::Symbol(_) => f64::NAN, // Cannot convert Symbol to number
            JsValue::Object(_) => string_to_number(self.to_js_string().as_str()),
        }
    }

    /// Convert to string (ToString)
    pub fn to_js_string(&self) -> JsString {
        match self {
            JsValue::Undefined => JsString::from("undefined"),
            JsValue::Null => JsString::from("null"),
            JsValue::Boolean(true) => JsString::from("true"),
            JsValue::Boolean(false) => JsString::from("false"),
            JsValue::Number(n) => JsString::from(number_to_string(*n)),
            JsValue::String(s) => s.cheap_clone(),
            JsValue::Symbol(s) => match &s.description {
                Some(desc) => JsString::from(format!("Symbol({})", desc)),
                None => JsString::from("Symbol()"),
            },
            JsValue::Object(obj) => {
                if obj.borrow().is_callable() {
                    JsString::from("[object Function]")
                } else {
                    JsString::from("[object Object]")
                }
            }
        }
    }

    /// Render a value for error messages: strings are quoted, functions named
    pub fn to_display_string(&self) -> String {
        match self {
            JsValue::String(s) => format!("\"{}\"", s),
            JsValue::Object(obj) => match &obj.borrow().exotic {
                ExoticObject::Function(func) => format!("function {}", func.name),
                ExoticObject::Ordinary => String::from("[object Object]"),
            },
            other => other.to_js_string().to_string(),
        }
    }

    /// Strict equality (===)
    pub fn strict_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            // NaN !== NaN falls out of f64 comparison
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b, // Symbols compare by id
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Abstract (loose) equality (==)
    pub fn abstract_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Null | JsValue::Undefined, JsValue::Null | JsValue::Undefined) => true,
            (JsValue::Null | JsValue::Undefined, _) | (_, JsValue::Null | JsValue::Undefined) => {
                false
            }
            (JsValue::Number(_), JsValue::String(_)) => {
                self.strict_equals(&JsValue::Number(other.to_number()))
            }
            (JsValue::String(_), JsValue::Number(_)) => {
                JsValue::Number(self.to_number()).strict_equals(other)
            }
            (JsValue::Boolean(_), _) => JsValue::Number(self.to_number()).abstract_equals(other),
            (_, JsValue::Boolean(_)) => self.abstract_equals(&JsValue::Number(other.to_number())),
            (JsValue::Object(_), JsValue::String(_) | JsValue::Number(_)) => {
                JsValue::String(self.to_js_string()).abstract_equals(other)
            }
            (JsValue::String(_) | JsValue::Number(_), JsValue::Object(_)) => {
                self.abstract_equals(&JsValue::String(other.to_js_string()))
            }
            _ => self.strict_equals(other),
        }
    }

    /// Render a plain value as JSON.
    ///
    /// Returns `None` for values JSON cannot carry (undefined, symbols,
    /// functions, non-finite numbers). Object properties holding such values,
    /// non-enumerable properties and accessors are skipped. A cyclic object
    /// graph renders as `None` as a whole.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        self.to_json_guarded(&mut Vec::new()).ok().flatten()
    }

    /// `stack` holds the objects currently being rendered
    fn to_json_guarded(
        &self,
        stack: &mut Vec<*const RefCell<JsObject>>,
    ) -> Result<Option<serde_json::Value>, CyclicValue> {
        Ok(match self {
            JsValue::Undefined | JsValue::Symbol(_) => None,
            JsValue::Null => Some(serde_json::Value::Null),
            JsValue::Boolean(b) => Some(serde_json::Value::Bool(*b)),
            JsValue::Number(n) => {
                let int = *n as i64;
                if int as f64 == *n && (-MAX_SAFE..=MAX_SAFE).contains(&int) {
                    Some(serde_json::Value::from(int))
                } else {
                    serde_json::Number::from_f64(*n).map(serde_json::Value::Number)
                }
            }
            JsValue::String(s) => Some(serde_json::Value::String(s.to_string())),
            JsValue::Object(obj) => {
                let ptr = Rc::as_ptr(obj);
                if stack.contains(&ptr) {
                    return Err(CyclicValue);
                }
                let obj = obj.borrow();
                if obj.is_callable() {
                    return Ok(None);
                }
                stack.push(ptr);
                let mut map = serde_json::Map::new();
                for (key, prop) in obj.properties.iter() {
                    if key.is_symbol() || !prop.enumerable() {
                        continue;
                    }
                    if let Some(value) = prop.value()
                        && let Some(json) = value.to_json_guarded(stack)?
                    {
                        map.insert(key.to_string(), json);
                    }
                }
                stack.pop();
                Some(serde_json::Value::Object(map))
            }
        })
    }
}

/// An object graph that reaches itself
struct CyclicValue;

const MAX_SAFE: i64 = 9_007_199_254_740_991;

/// StringToNumber: whitespace-trimmed decimal, `Infinity`, or a 0x/0o/0b literal
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }
    // Rust accepts "inf"/"nan" spellings that JS does not
    if trimmed
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        String::from("NaN")
    } else if n.is_infinite() {
        if n > 0.0 {
            String::from("Infinity")
        } else {
            String::from("-Infinity")
        }
    } else if n == 0.0 {
        String::from("0")
    } else {
        n.to_string()
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "undefined"),
            JsValue::Null => write!(f, "null"),
            JsValue::Boolean(b) => write!(f, "{}", b),
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::String(s) => write!(f, "\"{}\"", s.as_str()),
            JsValue::Symbol(s) => match &s.description {
                Some(desc) => write!(f, "Symbol({})", desc),
                None => write!(f, "Symbol()"),
            },
            JsValue::Object(obj) => match &obj.borrow().exotic {
                ExoticObject::Ordinary => write!(f, "{{...}}"),
                ExoticObject::Function(func) => write!(f, "[Function: {}]", func.name),
            },
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

// Conversions from Rust types

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i32> for JsValue {
    fn from(n: i32) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(JsString::from(s))
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(JsString::from(s))
    }
}

impl From<JsString> for JsValue {
    fn from(s: JsString) -> Self {
        JsValue::String(s)
    }
}

impl From<JsObjectRef> for JsValue {
    fn from(obj: JsObjectRef) -> Self {
        JsValue::Object(obj)
    }
}

/// Reference-counted string for efficient string handling
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JsString(Rc<str>);

// JsString wraps Rc<str>, so clone is cheap (just reference count increment)
impl CheapClone for JsString {}

impl JsString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<str> for JsString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for JsString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        JsString(s.into())
    }
}

impl From<String> for JsString {
    fn from(s: String) -> Self {
        JsString(s.into())
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// JavaScript Symbol primitive
/// Symbols are unique identifiers, optionally with a description
#[derive(Clone, Debug)]
pub struct JsSymbol {
    /// Unique identifier for this symbol
    id: u64,
    /// Optional description (from Symbol('description'))
    pub description: Option<String>,
}

impl JsSymbol {
    /// Create a new unique symbol with an optional description
    pub fn new(id: u64, description: Option<String>) -> Self {
        Self { id, description }
    }
}

impl PartialEq for JsSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for JsSymbol {}

impl core::hash::Hash for JsSymbol {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Reference to a heap-allocated object
pub type JsObjectRef = Rc<RefCell<JsObject>>;

/// A JavaScript object
#[derive(Debug)]
pub struct JsObject {
    /// Prototype link
    pub prototype: Option<JsObjectRef>,
    /// Whether the object can have properties added
    pub extensible: bool,
    /// Own properties in insertion order
    pub properties: IndexMap<PropertyKey, Property>,
    /// Exotic object behavior
    pub exotic: ExoticObject,
}

impl JsObject {
    /// Create a new ordinary object
    pub fn new() -> Self {
        Self {
            prototype: None,
            extensible: true,
            properties: index_map_new(),
            exotic: ExoticObject::Ordinary,
        }
    }

    /// Create a new ordinary object with pre-allocated property capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            prototype: None,
            extensible: true,
            properties: index_map_with_capacity(capacity),
            exotic: ExoticObject::Ordinary,
        }
    }

    /// Wrap into a shared handle
    pub fn into_ref(self) -> JsObjectRef {
        Rc::new(RefCell::new(self))
    }

    /// Check if this object is callable
    pub fn is_callable(&self) -> bool {
        matches!(self.exotic, ExoticObject::Function(_))
    }

    /// Get an own property
    pub fn get_own_property(&self, key: &PropertyKey) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Get a property slot, searching the prototype chain
    pub fn get_property(&self, key: &PropertyKey) -> Option<Property> {
        if let Some(prop) = self.properties.get(key) {
            return Some(prop.clone());
        }

        if let Some(ref proto) = self.prototype {
            return proto.borrow().get_property(key);
        }

        None
    }

    /// Define (insert or overwrite) a property with the given slot and attributes.
    ///
    /// This is the raw store write; it ignores extensibility and attributes
    /// of any previous property.
    pub fn define_property(&mut self, key: PropertyKey, prop: Property) {
        self.properties.insert(key, prop);
    }

    /// Check if object has own property
    pub fn has_own_property(&self, key: &PropertyKey) -> bool {
        self.properties.contains_key(key)
    }

    /// Get own property keys in insertion order
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.properties.keys().cloned().collect()
    }

    /// Seal the object against new properties
    pub fn prevent_extensions(&mut self) {
        self.extensible = false;
    }
}

impl Default for JsObject {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a property as a script would (`obj[key]`).
///
/// Searches the prototype chain and invokes getters with `receiver` as `this`.
/// `Ok(None)` is the not-found outcome; an accessor without a getter reads as
/// `Some(undefined)` since the property exists.
pub fn get(receiver: &JsObjectRef, key: &PropertyKey) -> Result<Option<JsValue>, JsError> {
    // Release the borrow before calling into a getter, which may touch the object.
    let found = receiver.borrow().get_property(key);
    match found {
        None => Ok(None),
        Some(Property {
            slot: PropertySlot::Data(value),
            ..
        }) => Ok(Some(value)),
        Some(Property {
            slot: PropertySlot::Accessor { getter, .. },
            ..
        }) => match getter {
            Some(getter) => call(&getter, JsValue::Object(receiver.cheap_clone()), &[]).map(Some),
            None => Ok(Some(JsValue::Undefined)),
        },
    }
}

/// Call a function object
pub fn call(func: &JsObjectRef, this: JsValue, args: &[JsValue]) -> Result<JsValue, JsError> {
    let native = match &func.borrow().exotic {
        ExoticObject::Function(native) => native.func,
        ExoticObject::Ordinary => {
            return Err(JsError::not_a_function(&JsValue::Object(func.cheap_clone())));
        }
    };
    native(this, args)
}

/// Property key (string, index, or symbol)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(JsString),
    Index(u32),
    Symbol(JsSymbol),
}

impl PropertyKey {
    /// Check if this is a symbol key
    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }
}

/// Canonical array index: digits only, no leading zeros except "0"
fn parse_index(s: &str) -> Option<u32> {
    let first = s.bytes().next()?;
    if !first.is_ascii_digit() {
        return None;
    }
    let idx = s.parse::<u32>().ok()?;
    (idx.to_string() == s).then_some(idx)
}

impl From<&str> for PropertyKey {
    #[inline]
    fn from(s: &str) -> Self {
        match parse_index(s) {
            Some(idx) => PropertyKey::Index(idx),
            None => PropertyKey::String(JsString::from(s)),
        }
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::from(s.as_str())
    }
}

impl From<JsString> for PropertyKey {
    #[inline]
    fn from(s: JsString) -> Self {
        match parse_index(s.as_str()) {
            Some(idx) => PropertyKey::Index(idx),
            None => PropertyKey::String(s),
        }
    }
}

impl From<u32> for PropertyKey {
    fn from(idx: u32) -> Self {
        PropertyKey::Index(idx)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{}", s),
            PropertyKey::Index(i) => write!(f, "{}", i),
            PropertyKey::Symbol(s) => match &s.description {
                Some(desc) => write!(f, "Symbol({})", desc),
                None => write!(f, "Symbol()"),
            },
        }
    }
}

/// What a property holds
#[derive(Debug, Clone)]
pub enum PropertySlot {
    /// Plain value slot
    Data(JsValue),
    /// Getter/setter pair; `None` means the accessor is undefined
    Accessor {
        getter: Option<JsObjectRef>,
        setter: Option<JsObjectRef>,
    },
}

/// A stored property: a slot plus its legacy attribute bits
#[derive(Debug, Clone)]
pub struct Property {
    pub slot: PropertySlot,
    pub attributes: Attributes,
}

impl Property {
    /// Writable, enumerable, configurable data property
    pub fn data(value: JsValue) -> Self {
        Self::with_attributes(value, Attributes::EMPTY)
    }

    /// Create a data property with custom attributes
    pub fn with_attributes(value: JsValue, attributes: Attributes) -> Self {
        Self {
            slot: PropertySlot::Data(value),
            attributes,
        }
    }

    /// Create an accessor property with getter and/or setter
    pub fn accessor(
        getter: Option<JsObjectRef>,
        setter: Option<JsObjectRef>,
        attributes: Attributes,
    ) -> Self {
        Self {
            slot: PropertySlot::Accessor { getter, setter },
            attributes,
        }
    }

    /// Check if this is an accessor property
    pub fn is_accessor(&self) -> bool {
        matches!(self.slot, PropertySlot::Accessor { .. })
    }

    /// The stored value of a data property
    pub fn value(&self) -> Option<&JsValue> {
        match &self.slot {
            PropertySlot::Data(value) => Some(value),
            PropertySlot::Accessor { .. } => None,
        }
    }

    pub fn getter(&self) -> Option<&JsObjectRef> {
        match &self.slot {
            PropertySlot::Accessor { getter, .. } => getter.as_ref(),
            PropertySlot::Data(_) => None,
        }
    }

    pub fn setter(&self) -> Option<&JsObjectRef> {
        match &self.slot {
            PropertySlot::Accessor { setter, .. } => setter.as_ref(),
            PropertySlot::Data(_) => None,
        }
    }

    pub fn writable(&self) -> bool {
        self.attributes.allows(Attributes::READONLY)
    }

    pub fn enumerable(&self) -> bool {
        self.attributes.allows(Attributes::DONTENUM)
    }

    pub fn configurable(&self) -> bool {
        self.attributes.allows(Attributes::PERMANENT)
    }
}

/// Exotic object behavior
#[derive(Debug)]
pub enum ExoticObject {
    /// Ordinary object
    Ordinary,
    /// Function exotic object
    Function(NativeFunction),
}

/// Native function signature: `(this, args) -> result`
pub type NativeFn = fn(JsValue, &[JsValue]) -> Result<JsValue, JsError>;

/// Native function wrapper
#[derive(Clone)]
pub struct NativeFunction {
    pub name: JsString,
    pub func: NativeFn,
    pub arity: usize,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper functions for creating objects
// ═══════════════════════════════════════════════════════════════════════════════

/// Create a new ordinary object handle
pub fn create_object(prototype: Option<JsObjectRef>) -> JsObjectRef {
    let mut obj = JsObject::new();
    obj.prototype = prototype;
    obj.into_ref()
}

/// Create a native function object with a read-only, non-enumerable `length`.
pub fn create_native_function(name: &str, func: NativeFn, arity: usize) -> JsObjectRef {
    let mut f = JsObject::with_capacity(1);
    f.exotic = ExoticObject::Function(NativeFunction {
        name: JsString::from(name),
        func,
        arity,
    });
    f.define_property(
        PropertyKey::from("length"),
        Property::with_attributes(
            JsValue::Number(arity as f64),
            Attributes::READONLY | Attributes::DONTENUM,
        ),
    );
    f.into_ref()
}

/// Convert a serde_json value to a JsValue.
///
/// Objects become ordinary objects with plain data properties in source
/// order; arrays become ordinary objects keyed by index with a `length`.
pub fn json_to_js_value(json: &serde_json::Value) -> JsValue {
    match json {
        serde_json::Value::Null => JsValue::Null,
        serde_json::Value::Bool(b) => JsValue::Boolean(*b),
        serde_json::Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => JsValue::from(s.as_str()),
        serde_json::Value::Array(arr) => {
            let mut obj = JsObject::with_capacity(arr.len() + 1);
            for (i, item) in arr.iter().enumerate() {
                obj.define_property(PropertyKey::Index(i as u32), Property::data(json_to_js_value(item)));
            }
            obj.define_property(
                PropertyKey::from("length"),
                Property::with_attributes(
                    JsValue::Number(arr.len() as f64),
                    Attributes::DONTENUM | Attributes::PERMANENT,
                ),
            );
            JsValue::Object(obj.into_ref())
        }
        serde_json::Value::Object(map) => {
            let mut obj = JsObject::with_capacity(map.len());
            for (key, value) in map {
                obj.define_property(PropertyKey::from(key.as_str()), Property::data(json_to_js_value(value)));
            }
            JsValue::Object(obj.into_ref())
        }
    }
}
