//! Type predicates: number?, boolean?, symbol?, pair?, null?, list?

use crate::error::InterpError;
use crate::value::Value;
use lisp_macros::builtin;

fn one_arg<'a>(args: &'a [Value], name: &str) -> Result<&'a Value, InterpError> {
    match args {
        [only] => Ok(only),
        _ => Err(InterpError::runtime(format!(
            "{} expects exactly 1 argument, got {}",
            name,
            args.len()
        ))),
    }
}

/// Tests if the argument is an integer.
#[builtin(name = "number?")]
pub fn number_p(args: &[Value]) -> Result<Value, InterpError> {
    Ok(Value::Boolean(matches!(one_arg(args, "number?")?, Value::Integer(_))))
}

/// Tests if the argument is a boolean.
#[builtin(name = "boolean?")]
pub fn boolean_p(args: &[Value]) -> Result<Value, InterpError> {
    Ok(Value::Boolean(matches!(one_arg(args, "boolean?")?, Value::Boolean(_))))
}

/// Tests if the argument is a symbol.
#[builtin(name = "symbol?")]
pub fn symbol_p(args: &[Value]) -> Result<Value, InterpError> {
    Ok(Value::Boolean(matches!(one_arg(args, "symbol?")?, Value::Symbol(_))))
}

/// Tests if the argument is a pair (any cons cell, proper or improper).
#[builtin(name = "pair?")]
pub fn pair_p(args: &[Value]) -> Result<Value, InterpError> {
    Ok(Value::Boolean(one_arg(args, "pair?")?.is_pair()))
}

/// Tests if the argument is the empty list.
#[builtin(name = "null?")]
pub fn null_p(args: &[Value]) -> Result<Value, InterpError> {
    Ok(Value::Boolean(one_arg(args, "null?")?.is_empty_list()))
}

/// Tests if the argument is a proper list: the empty list, or a chain of
/// pairs ending in the empty list.
#[builtin(name = "list?")]
pub fn list_p(args: &[Value]) -> Result<Value, InterpError> {
    Ok(Value::Boolean(one_arg(args, "list?")?.is_proper_list()))
}
