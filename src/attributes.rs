//! Legacy property attribute bits
//!
//! Stored properties carry their attributes as an inverted-sense bitmask: a set
//! bit means the capability is *absent* (`READONLY` = not writable, `DONTENUM` =
//! not enumerable, `PERMANENT` = not configurable). The empty set is the most
//! permissive one.
//!
//! Stores that use a different numeric encoding describe it with an
//! [`AttributeLayout`] and translate at the boundary.

use crate::error::JsError;
use crate::prelude::*;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Attribute bits of a stored property.
    ///
    /// Bits outside the three named flags are carried through untouched by
    /// every operation in this crate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u32 {
        /// Not writable
        const READONLY = 1 << 0;
        /// Not enumerable
        const DONTENUM = 1 << 1;
        /// Not configurable (cannot be deleted or redefined)
        const PERMANENT = 1 << 2;
    }
}

impl Attributes {
    /// Writable, enumerable, configurable
    pub const EMPTY: Self = Self::empty();

    /// Whether the capability guarded by `flag` is present (its bit is clear)
    #[inline]
    pub fn allows(self, flag: Attributes) -> bool {
        !self.intersects(flag)
    }

    /// Grant or revoke the capability guarded by `flag`.
    ///
    /// This is the single place where a positive capability is translated
    /// into the inverted bit.
    #[inline]
    pub fn with_capability(self, flag: Attributes, allowed: bool) -> Self {
        let mut attributes = self;
        attributes.set(flag, !allowed);
        attributes
    }
}

/// Numeric bit positions a property store uses for the three attribute flags.
///
/// The defaults match [`Attributes`] itself, so the identity layout needs no
/// configuration. A store with its own encoding deserializes a layout (e.g.
/// from JSON) and uses [`decode`](Self::decode) / [`encode`](Self::encode) at
/// the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeLayout {
    pub readonly: u32,
    pub dontenum: u32,
    pub permanent: u32,
}

impl Default for AttributeLayout {
    fn default() -> Self {
        Self {
            readonly: Attributes::READONLY.bits(),
            dontenum: Attributes::DONTENUM.bits(),
            permanent: Attributes::PERMANENT.bits(),
        }
    }
}

impl AttributeLayout {
    /// Parse and validate a layout from JSON; missing fields take defaults
    pub fn from_json(source: &str) -> Result<Self, JsError> {
        let layout: AttributeLayout = serde_json::from_str(source)
            .map_err(|e| JsError::config_error(format!("invalid attribute layout: {}", e)))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Each flag must be a single bit, distinct from the other two
    pub fn validate(&self) -> Result<(), JsError> {
        let flags = [
            ("readonly", self.readonly),
            ("dontenum", self.dontenum),
            ("permanent", self.permanent),
        ];
        for (name, bit) in flags {
            if bit.count_ones() != 1 {
                return Err(JsError::config_error(format!(
                    "attribute layout: {} must be a single bit, got {:#x}",
                    name, bit
                )));
            }
        }
        if self.readonly & self.dontenum != 0
            || self.readonly & self.permanent != 0
            || self.dontenum & self.permanent != 0
        {
            return Err(JsError::config_error(
                "attribute layout: flag bits must be distinct",
            ));
        }
        Ok(())
    }

    /// All bits this layout assigns a meaning to
    pub fn mask(&self) -> u32 {
        self.readonly | self.dontenum | self.permanent
    }

    /// Translate a store's raw bitmask; bits outside [`mask`](Self::mask) are dropped
    pub fn decode(&self, raw: u32) -> Attributes {
        let mut attributes = Attributes::EMPTY;
        attributes.set(Attributes::READONLY, raw & self.readonly != 0);
        attributes.set(Attributes::DONTENUM, raw & self.dontenum != 0);
        attributes.set(Attributes::PERMANENT, raw & self.permanent != 0);
        attributes
    }

    /// Translate back into the store's encoding (named flags only)
    pub fn encode(&self, attributes: Attributes) -> u32 {
        let mut raw = 0;
        if attributes.contains(Attributes::READONLY) {
            raw |= self.readonly;
        }
        if attributes.contains(Attributes::DONTENUM) {
            raw |= self.dontenum;
        }
        if attributes.contains(Attributes::PERMANENT) {
            raw |= self.permanent;
        }
        raw
    }
}
