//! Binary operator implementations for the evaluator.
//!
//! Dispatch is a plain match on the operand pair. Both operands must have
//! the same kind; there are no implicit conversions.

use lexa_ir::BinaryOp;

use crate::errors::{EvalError, EvalResult};
use crate::Value;

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op: BinaryOp) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or(EvalError::IntegerOverflow { op })
}

/// Checked division or remainder with a zero guard.
#[inline]
fn checked_div<F>(divisor: i64, op: BinaryOp, f: F) -> EvalResult
where
    F: FnOnce() -> Option<i64>,
{
    if divisor == 0 {
        Err(EvalError::DivisionByZero)
    } else {
        checked_arith(f(), op)
    }
}

fn invalid(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::InvalidOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
}

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Bool(a), Value::Bool(b)) => match op {
            BinaryOp::Eq => Ok(Value::Bool(a == b)),
            BinaryOp::NotEq => Ok(Value::Bool(a != b)),
            _ => Err(invalid(op, left, right)),
        },
        // Functions compare only against nil.
        (Value::Unit, Value::Unit | Value::Function(_))
        | (Value::Function(_), Value::Unit) => match op {
            BinaryOp::Eq => Ok(Value::Bool(left == right)),
            BinaryOp::NotEq => Ok(Value::Bool(left != right)),
            _ => Err(invalid(op, left, right)),
        },
        _ => Err(invalid(op, left, right)),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), op),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), op),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), op),
        BinaryOp::Div => checked_div(b, op, || a.checked_div(b)),
        BinaryOp::Mod => checked_div(b, op, || a.checked_rem(b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
    }
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::string(format!("{a}{b}"))),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        // Byte-wise lexicographic
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            Err(EvalError::InvalidOperands {
                op,
                left: "string",
                right: "string",
            })
        }
    }
}
