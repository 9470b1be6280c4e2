//! List operations: cons, car, cdr, list, list-ref, list-tail

use crate::error::InterpError;
use crate::value::Value;
use lisp_macros::builtin;

/// Constructs a pair from two values. Does not require the second
/// argument to be a list.
///
/// # Examples
///
/// ```lisp
/// (cons 1 (list 2 3)) => (1 2 3)
/// (cons 1 2) => (1 . 2)
/// ```
#[builtin(name = "cons")]
pub fn cons(args: &[Value]) -> Result<Value, InterpError> {
    match args {
        [car, cdr] => Ok(Value::cons(car.clone(), cdr.clone())),
        _ => Err(InterpError::runtime(format!(
            "cons expects exactly 2 arguments, got {}",
            args.len()
        ))),
    }
}

/// Returns the car of a pair. A runtime error on any other type.
///
/// # Examples
///
/// ```lisp
/// (car (list 1 2 3)) => 1
/// (car (list)) => runtime error
/// ```
#[builtin(name = "car")]
pub fn car(args: &[Value]) -> Result<Value, InterpError> {
    match args {
        [Value::Pair(cell)] => Ok(cell.borrow().car.clone()),
        [other] => Err(InterpError::runtime(format!(
            "car expects a pair, got {}",
            other.type_name()
        ))),
        _ => Err(InterpError::runtime(format!(
            "car expects exactly 1 argument, got {}",
            args.len()
        ))),
    }
}

/// Returns the cdr of a pair. A runtime error on any other type.
#[builtin(name = "cdr")]
pub fn cdr(args: &[Value]) -> Result<Value, InterpError> {
    match args {
        [Value::Pair(cell)] => Ok(cell.borrow().cdr.clone()),
        [other] => Err(InterpError::runtime(format!(
            "cdr expects a pair, got {}",
            other.type_name()
        ))),
        _ => Err(InterpError::runtime(format!(
            "cdr expects exactly 1 argument, got {}",
            args.len()
        ))),
    }
}

/// Builds a fresh proper list out of its arguments.
///
/// # Examples
///
/// ```lisp
/// (list 1 2 3) => (1 2 3)
/// (list) => ()
/// ```
#[builtin(name = "list")]
pub fn list(args: &[Value]) -> Result<Value, InterpError> {
    Ok(Value::list(args.to_vec()))
}

/// Returns the element at the given zero-based index of a proper list.
/// Out-of-range indices are a runtime error.
///
/// # Examples
///
/// ```lisp
/// (list-ref (list 1 2 3) 0) => 1
/// (list-ref (list 1 2 3) 2) => 3
/// ```
#[builtin(name = "list-ref")]
pub fn list_ref(args: &[Value]) -> Result<Value, InterpError> {
    let (list_val, index) = list_and_index(args, "list-ref")?;
    let items = to_vec_runtime(list_val, "list-ref")?;
    items
        .get(index)
        .cloned()
        .ok_or_else(|| InterpError::runtime("list-ref index out of range"))
}

/// Returns the sublist starting at the given zero-based index.
///
/// # Examples
///
/// ```lisp
/// (list-tail (list 1 2 3 4) 2) => (3 4)
/// (list-tail (list 1 2 3) 3) => ()
/// ```
#[builtin(name = "list-tail")]
pub fn list_tail(args: &[Value]) -> Result<Value, InterpError> {
    let (list_val, index) = list_and_index(args, "list-tail")?;
    let items = to_vec_runtime(list_val, "list-tail")?;
    if index > items.len() {
        return Err(InterpError::runtime("list-tail index out of range"));
    }
    Ok(Value::list(items[index..].to_vec()))
}

/// Like `Value::to_vec`, but a non-pair/improper-list argument is a runtime
/// type error here, not a syntax error — the caller is inspecting a value,
/// not parsing unevaluated operands.
fn to_vec_runtime(list_val: &Value, name: &str) -> Result<Vec<Value>, InterpError> {
    list_val.to_vec().map_err(|_| {
        InterpError::runtime(format!("{} expects a proper list, got {}", name, list_val.type_name()))
    })
}

fn list_and_index<'a>(args: &'a [Value], name: &str) -> Result<(&'a Value, usize), InterpError> {
    match args {
        [list_val, Value::Integer(n)] if *n >= 0 => Ok((list_val, *n as usize)),
        [_, Value::Integer(_)] => Err(InterpError::runtime(format!("{} index must be non-negative", name))),
        [_, other] => Err(InterpError::runtime(format!(
            "{} expects an integer index, got {}",
            name,
            other.type_name()
        ))),
        _ => Err(InterpError::runtime(format!(
            "{} expects exactly 2 arguments, got {}",
            name,
            args.len()
        ))),
    }
}
