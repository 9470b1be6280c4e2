//! Comparison operations: =, <, >, <=, >=
//!
//! All are variadic and chained: `(< 1 2 3)` tests `1 < 2` and `2 < 3`.
//! A call with fewer than 2 arguments is always `#t`.

use crate::error::InterpError;
use crate::value::Value;
use lisp_macros::builtin;

fn as_integer(value: &Value) -> Result<i64, InterpError> {
    match value {
        Value::Integer(n) => Ok(*n),
        other => Err(InterpError::runtime(format!(
            "expected an integer, got {}",
            other.type_name()
        ))),
    }
}

fn chained(args: &[Value], test: fn(i64, i64) -> bool) -> Result<Value, InterpError> {
    let ints = args.iter().map(as_integer).collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Boolean(ints.windows(2).all(|pair| test(pair[0], pair[1]))))
}

/// Tests that all arguments are numerically equal.
///
/// # Examples
///
/// ```lisp
/// (= 5 5 5) => #t
/// (= 5 6) => #f
/// ```
#[builtin(name = "=")]
pub fn eq(args: &[Value]) -> Result<Value, InterpError> {
    chained(args, |a, b| a == b)
}

/// Tests that each argument is strictly less than the next.
#[builtin(name = "<")]
pub fn lt(args: &[Value]) -> Result<Value, InterpError> {
    chained(args, |a, b| a < b)
}

/// Tests that each argument is strictly greater than the next.
#[builtin(name = ">")]
pub fn gt(args: &[Value]) -> Result<Value, InterpError> {
    chained(args, |a, b| a > b)
}

/// Tests that each argument is less than or equal to the next.
#[builtin(name = "<=")]
pub fn le(args: &[Value]) -> Result<Value, InterpError> {
    chained(args, |a, b| a <= b)
}

/// Tests that each argument is greater than or equal to the next.
#[builtin(name = ">=")]
pub fn ge(args: &[Value]) -> Result<Value, InterpError> {
    chained(args, |a, b| a >= b)
}
