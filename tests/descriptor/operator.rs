//! Operator override hook as seen by an evaluator

use propdesc::operator::{dispatch_binary, dispatch_sign};
use propdesc::{BinaryOp, HookResult, JsError, JsValue, NoOperatorHook, OperatorHook, UnaryOp};
use std::cell::Cell;

/// Host hook for a "money" type represented as strings like "3.50$"
#[derive(Default)]
struct Money {
    calls: Cell<usize>,
}

fn parse_money(value: &JsValue) -> Option<f64> {
    match value {
        JsValue::String(s) => s.as_str().strip_suffix('$')?.parse().ok(),
        _ => None,
    }
}

fn money(amount: f64) -> JsValue {
    JsValue::from(format!("{:.2}$", amount))
}

impl OperatorHook for Money {
    fn handle_operator(
        &self,
        op: BinaryOp,
        lhs: &JsValue,
        rhs: &JsValue,
    ) -> Result<HookResult, JsError> {
        self.calls.set(self.calls.get() + 1);
        let (Some(a), Some(b)) = (parse_money(lhs), parse_money(rhs)) else {
            return Ok(HookResult::NotHandled);
        };
        Ok(match op {
            BinaryOp::Add => HookResult::Value(money(a + b)),
            BinaryOp::Sub => HookResult::Value(money(a - b)),
            BinaryOp::Lt => HookResult::Value(JsValue::Boolean(a < b)),
            BinaryOp::Mul | BinaryOp::Div => {
                return Err(JsError::type_error(format!(
                    "cannot apply {} to two amounts",
                    op
                )));
            }
            _ => HookResult::NotHandled,
        })
    }

    fn handle_sign_operator(&self, op: UnaryOp, operand: &JsValue) -> Result<HookResult, JsError> {
        self.calls.set(self.calls.get() + 1);
        Ok(match (op, parse_money(operand)) {
            (UnaryOp::Minus, Some(a)) => HookResult::Value(money(-a)),
            (UnaryOp::Plus, Some(a)) => HookResult::Value(JsValue::Number(a)),
            _ => HookResult::NotHandled,
        })
    }
}

#[test]
fn test_hook_handles_host_values() {
    let hook = Money::default();
    let result = dispatch_binary(
        Some(&hook),
        BinaryOp::Add,
        &JsValue::from("1.25$"),
        &JsValue::from("2.25$"),
    )
    .unwrap();
    assert_eq!(result, HookResult::Value(JsValue::from("3.50$")));

    let result = dispatch_sign(Some(&hook), UnaryOp::Minus, &JsValue::from("2.00$")).unwrap();
    assert_eq!(result.into_value(), Some(JsValue::from("-2.00$")));

    let result = dispatch_sign(Some(&hook), UnaryOp::Plus, &JsValue::from("2.00$")).unwrap();
    assert_eq!(result.into_value(), Some(JsValue::Number(2.0)));
    assert_eq!(hook.calls.get(), 3);
}

#[test]
fn test_hook_falls_back_for_native_values() {
    let hook = Money::default();
    let result = dispatch_binary(
        Some(&hook),
        BinaryOp::Add,
        &JsValue::Number(1.0),
        &JsValue::Number(2.0),
    )
    .unwrap();
    assert_eq!(result, HookResult::NotHandled);

    let result = dispatch_binary(
        Some(&hook),
        BinaryOp::BitAnd,
        &JsValue::from("1.00$"),
        &JsValue::from("1.00$"),
    )
    .unwrap();
    assert!(!result.is_handled());
}

#[test]
fn test_hook_error_surfaces() {
    let hook = Money::default();
    let err = dispatch_binary(
        Some(&hook),
        BinaryOp::Mul,
        &JsValue::from("1.00$"),
        &JsValue::from("1.00$"),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "TypeError: cannot apply * to two amounts");
}

#[test]
fn test_absent_and_default_hooks() {
    for op in [BinaryOp::Add, BinaryOp::StrictEq, BinaryOp::URShift] {
        let lhs = JsValue::from("1.00$");
        assert_eq!(
            dispatch_binary(None, op, &lhs, &lhs).unwrap(),
            HookResult::NotHandled
        );
        assert_eq!(
            dispatch_binary(Some(&NoOperatorHook), op, &lhs, &lhs).unwrap(),
            HookResult::NotHandled
        );
    }
    assert_eq!(
        dispatch_sign(Some(&NoOperatorHook), UnaryOp::Minus, &JsValue::Number(1.0)).unwrap(),
        HookResult::NotHandled
    );
}
