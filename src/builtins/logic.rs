//! Logic operations: not
//!
//! `and` and `or` are special forms (they must short-circuit without
//! evaluating their remaining operands), so only `not` lives here.

use crate::error::InterpError;
use crate::value::Value;
use lisp_macros::builtin;

/// Returns `#t` if the argument is `#f`, `#f` for everything else.
///
/// # Examples
///
/// ```lisp
/// (not #f) => #t
/// (not #t) => #f
/// (not 0) => #f
/// ```
#[builtin(name = "not")]
pub fn not(args: &[Value]) -> Result<Value, InterpError> {
    match args {
        [only] => Ok(Value::Boolean(!only.is_truthy())),
        _ => Err(InterpError::runtime(format!(
            "not expects exactly 1 argument, got {}",
            args.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_negates_truthiness() {
        assert!(matches!(not(&[Value::Boolean(false)]), Ok(Value::Boolean(true))));
        assert!(matches!(not(&[Value::Boolean(true)]), Ok(Value::Boolean(false))));
        assert!(matches!(not(&[Value::Integer(0)]), Ok(Value::Boolean(false))));
    }
}
