//! Operator override hook
//!
//! An embedder can intercept arithmetic, bitwise and comparison operators
//! applied to values the evaluator does not combine natively (host objects
//! wrapping numbers, decimals, vectors, ...). The evaluator asks the hook
//! first and falls back to its built-in semantics on [`HookResult::NotHandled`].

use crate::error::JsError;
use crate::prelude::*;
use crate::value::JsValue;

/// Binary operators a hook may intercept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,

    // Comparison
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    LShift,
    RShift,
    URShift,
}

impl BinaryOp {
    /// Source form of the operator
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Exp => "**",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNotEq => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::LShift => "<<",
            BinaryOp::RShift => ">>",
            BinaryOp::URShift => ">>>",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign operators (`+x`, `-x`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of asking a hook
#[derive(Debug, Clone, PartialEq)]
pub enum HookResult {
    /// The hook produced the operator's result
    Value(JsValue),
    /// Use the built-in semantics
    NotHandled,
}

impl HookResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, HookResult::Value(_))
    }

    pub fn into_value(self) -> Option<JsValue> {
        match self {
            HookResult::Value(value) => Some(value),
            HookResult::NotHandled => None,
        }
    }
}

/// Embedder hook consulted before built-in operator semantics.
///
/// Errors propagate to the script as if the operator itself had thrown.
pub trait OperatorHook {
    fn handle_operator(
        &self,
        op: BinaryOp,
        lhs: &JsValue,
        rhs: &JsValue,
    ) -> Result<HookResult, JsError>;

    fn handle_sign_operator(&self, op: UnaryOp, operand: &JsValue)
    -> Result<HookResult, JsError>;
}

/// Hook that never intercepts anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOperatorHook;

impl OperatorHook for NoOperatorHook {
    fn handle_operator(
        &self,
        _op: BinaryOp,
        _lhs: &JsValue,
        _rhs: &JsValue,
    ) -> Result<HookResult, JsError> {
        Ok(HookResult::NotHandled)
    }

    fn handle_sign_operator(
        &self,
        _op: UnaryOp,
        _operand: &JsValue,
    ) -> Result<HookResult, JsError> {
        Ok(HookResult::NotHandled)
    }
}

/// Ask `hook` (if any) for the result of `lhs op rhs`
pub fn dispatch_binary(
    hook: Option<&dyn OperatorHook>,
    op: BinaryOp,
    lhs: &JsValue,
    rhs: &JsValue,
) -> Result<HookResult, JsError> {
    let Some(hook) = hook else {
        return Ok(HookResult::NotHandled);
    };
    let result = hook.handle_operator(op, lhs, rhs)?;
    tracing::trace!(
        %op,
        lhs = lhs.type_of(),
        rhs = rhs.type_of(),
        handled = result.is_handled(),
        "operator hook"
    );
    Ok(result)
}

/// Ask `hook` (if any) for the result of a sign operator
pub fn dispatch_sign(
    hook: Option<&dyn OperatorHook>,
    op: UnaryOp,
    operand: &JsValue,
) -> Result<HookResult, JsError> {
    let Some(hook) = hook else {
        return Ok(HookResult::NotHandled);
    };
    let result = hook.handle_sign_operator(op, operand)?;
    tracing::trace!(
        %op,
        operand = operand.type_of(),
        handled = result.is_handled(),
        "sign operator hook"
    );
    Ok(result)
}
