//! Arithmetic operations: +, -, *, /, abs, min, max
//!
//! All operands must be integers; overflow and division/remainder by zero
//! are runtime errors.

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

/// Returns the sum of all arguments. `(+)` is 0.
///
/// # Examples
///
/// ```lisp
/// (+ 1 2 3) => 6
/// (+) => 0
/// ```
#[builtin(name = "+")]
pub fn add(args: &[Value]) -> Result<Value, InterpError> {
    let mut sum: i64 = 0;
    for arg in args {
        sum = sum
            .checked_add(as_integer(arg)?)
            .ok_or_else(|| InterpError::runtime("integer overflow in +"))?;
    }
    Ok(Value::Integer(sum))
}

/// Subtracts the remaining arguments from the first. With exactly one
/// argument, returns its negation. `(-)` is a runtime error.
///
/// # Examples
///
/// ```lisp
/// (- 10 3 2) => 5
/// (- 5) => -5
/// ```
#[builtin(name = "-")]
pub fn sub(args: &[Value]) -> Result<Value, InterpError> {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| InterpError::runtime("- expects at least 1 argument"))?;
    let first = as_integer(first)?;

    if rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| InterpError::runtime("integer overflow in -"));
    }

    let mut result = first;
    for arg in rest {
        result = result
            .checked_sub(as_integer(arg)?)
            .ok_or_else(|| InterpError::runtime("integer overflow in -"))?;
    }
    Ok(Value::Integer(result))
}

/// Returns the product of all arguments. `(*)` is 1.
///
/// # Examples
///
/// ```lisp
/// (* 2 3 4) => 24
/// (*) => 1
/// ```
#[builtin(name = "*")]
pub fn mul(args: &[Value]) -> Result<Value, InterpError> {
    let mut product: i64 = 1;
    for arg in args {
        product = product
            .checked_mul(as_integer(arg)?)
            .ok_or_else(|| InterpError::runtime("integer overflow in *"))?;
    }
    Ok(Value::Integer(product))
}

/// Divides the first argument by each remaining argument in turn, using
/// truncating integer division. Division by zero is a runtime error.
///
/// # Examples
///
/// ```lisp
/// (/ 20 4) => 5
/// (/ 100 2 5) => 10
/// ```
#[builtin(name = "/")]
pub fn div(args: &[Value]) -> Result<Value, InterpError> {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| InterpError::runtime("/ expects at least 1 argument"))?;
    let mut result = as_integer(first)?;

    if rest.is_empty() {
        return divide(1, result);
    }

    for arg in rest {
        result = divide(result, as_integer(arg)?)?;
    }
    Ok(Value::Integer(result))
}

fn divide(numerator: i64, denominator: i64) -> Result<i64, InterpError> {
    if denominator == 0 {
        return Err(InterpError::runtime("division by zero"));
    }
    Ok(numerator / denominator)
}

/// Returns the absolute value of its single argument.
///
/// # Examples
///
/// ```lisp
/// (abs -5) => 5
/// (abs 5) => 5
/// ```
#[builtin(name = "abs")]
pub fn abs(args: &[Value]) -> Result<Value, InterpError> {
    match args {
        [only] => as_integer(only)?
            .checked_abs()
            .map(Value::Integer)
            .ok_or_else(|| InterpError::runtime("integer overflow in abs")),
        _ => Err(InterpError::runtime(format!(
            "abs expects exactly 1 argument, got {}",
            args.len()
        ))),
    }
}

/// Returns the smallest of one or more arguments.
///
/// # Examples
///
/// ```lisp
/// (min 3 1 2) => 1
/// ```
#[builtin(name = "min")]
pub fn min(args: &[Value]) -> Result<Value, InterpError> {
    fold_extreme(args, "min", i64::min)
}

/// Returns the largest of one or more arguments.
///
/// # Examples
///
/// ```lisp
/// (max 3 1 2) => 3
/// ```
#[builtin(name = "max")]
pub fn max(args: &[Value]) -> Result<Value, InterpError> {
    fold_extreme(args, "max", i64::max)
}

fn fold_extreme(args: &[Value], name: &str, pick: fn(i64, i64) -> i64) -> Result<Value, InterpError> {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| InterpError::runtime(format!("{} expects at least 1 argument", name)))?;
    let mut result = as_integer(first)?;
    for arg in rest {
        result = pick(result, as_integer(arg)?);
    }
    Ok(Value::Integer(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sums_arguments() {
        assert!(matches!(add(&[Value::Integer(1), Value::Integer(2), Value::Integer(3)]), Ok(Value::Integer(6))));
        assert!(matches!(add(&[]), Ok(Value::Integer(0))));
    }

    #[test]
    fn sub_negates_single_argument() {
        assert!(matches!(sub(&[Value::Integer(5)]), Ok(Value::Integer(-5))));
    }

    #[test]
    fn sub_requires_at_least_one_argument() {
        assert!(sub(&[]).is_err());
    }

    #[test]
    fn div_by_zero_is_runtime_error() {
        assert!(matches!(
            div(&[Value::Integer(1), Value::Integer(0)]),
            Err(InterpError::Runtime(_))
        ));
    }

    #[test]
    fn abs_min_max() {
        assert!(matches!(abs(&[Value::Integer(-5)]), Ok(Value::Integer(5))));
        assert!(matches!(min(&[Value::Integer(3), Value::Integer(1), Value::Integer(2)]), Ok(Value::Integer(1))));
        assert!(matches!(max(&[Value::Integer(3), Value::Integer(1), Value::Integer(2)]), Ok(Value::Integer(3))));
    }
}
