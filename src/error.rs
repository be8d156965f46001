//! Error types for descriptor construction and property definition

use crate::prelude::*;
use crate::value::JsValue;
use thiserror::Error;

/// Main error type
///
/// Every failure the descriptor engine can raise is script-visible, so the
/// variants mirror the error constructors a runtime would throw.
#[derive(Debug, Error)]
pub enum JsError {
    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// A value thrown by script code (e.g. from a getter on a descriptor object)
    #[error("Uncaught {}", .value.to_js_string())]
    ThrownValue { value: JsValue },

    /// Invalid embedder configuration (e.g. an attribute layout)
    #[error("ConfigError: {0}")]
    Config(String),
}

impl JsError {
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::TypeError {
            message: message.into(),
        }
    }

    /// ToPropertyDescriptor on a non-object; carries the `typeof` tag
    pub fn not_an_object(type_of: &str) -> Self {
        JsError::type_error(format!(
            "Expected argument of type object, but instead had type {}",
            type_of
        ))
    }

    /// A `get`/`set` field that is neither undefined nor callable
    pub fn not_a_function(value: &JsValue) -> Self {
        JsError::type_error(format!("{} is not a function", value.to_display_string()))
    }

    /// Data and accessor fields present in the same descriptor
    pub fn mixed_descriptor() -> Self {
        JsError::type_error(
            "Invalid property descriptor. Cannot both specify accessors and a value or writable attribute",
        )
    }

    /// Create an error that wraps a thrown JsValue
    pub fn thrown(value: JsValue) -> Self {
        JsError::ThrownValue { value }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        JsError::Config(message.into())
    }

    /// Check whether this is a TypeError
    pub fn is_type_error(&self) -> bool {
        matches!(self, JsError::TypeError { .. })
    }

    /// Extract the JsValue from this error (what a script `catch` would see)
    pub fn to_value(&self) -> JsValue {
        match self {
            JsError::ThrownValue { value } => value.clone(),
            JsError::TypeError { message } => JsValue::from(format!("TypeError: {}", message)),
            JsError::Config(msg) => JsValue::from(format!("ConfigError: {}", msg)),
        }
    }
}
