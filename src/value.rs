// ABOUTME: Value types representing Lisp data structures and expressions

use crate::env::Environment;
use crate::error::InterpError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A mutable cons cell. Shared via `Rc<RefCell<_>>` so that `set-car!` and
/// `set-cdr!` mutations are visible through every alias of the pair.
#[derive(Debug)]
pub struct PairCell {
    pub car: Value,
    pub cdr: Value,
}

/// A built-in procedure: a plain function pointer plus the name it is
/// printed under. Builtins never capture state, so a bare `fn` is enough.
#[derive(Clone, Copy)]
pub struct BuiltinFn {
    pub func: fn(&[Value]) -> Result<Value, InterpError>,
    pub name: &'static str,
}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFn({})", self.name)
    }
}

/// Special-form tags. The evaluator recognizes these by identity before
/// ever considering ordinary application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialForm {
    Quote,
    If,
    Define,
    Set,
    SetCar,
    SetCdr,
    And,
    Or,
    Lambda,
}

impl SpecialForm {
    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Quote => "quote",
            SpecialForm::If => "if",
            SpecialForm::Define => "define",
            SpecialForm::Set => "set!",
            SpecialForm::SetCar => "set-car!",
            SpecialForm::SetCdr => "set-cdr!",
            SpecialForm::And => "and",
            SpecialForm::Or => "or",
            SpecialForm::Lambda => "lambda",
        }
    }
}

/// A user-defined procedure: captured environment, parameter names, and a
/// non-empty ordered body. The environment is extended per call, never
/// mutated in place across calls.
#[derive(Debug)]
pub struct ProcedureData {
    pub params: Vec<Rc<str>>,
    pub body: Vec<Value>,
    pub env: Rc<Environment>,
}

#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Symbol(Rc<str>),
    EmptyList,
    Pair(Rc<RefCell<PairCell>>),
    Builtin(BuiltinFn),
    SpecialForm(SpecialForm),
    Procedure(Rc<ProcedureData>),
}

impl Value {
    pub fn symbol(name: impl Into<Rc<str>>) -> Value {
        Value::Symbol(name.into())
    }

    pub fn cons(car: Value, cdr: Value) -> Value {
        Value::Pair(Rc::new(RefCell::new(PairCell { car, cdr })))
    }

    /// Builds a proper list from a vector of values, EmptyList-terminated.
    pub fn list(items: Vec<Value>) -> Value {
        items
            .into_iter()
            .rev()
            .fold(Value::EmptyList, |tail, item| Value::cons(item, tail))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Value::Pair(_))
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Value::EmptyList)
    }

    /// The single false value is `#f`; everything else (including `0` and
    /// the empty list) is true.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false))
    }

    /// `#t` iff this value is EmptyList, or a Pair whose cdr is a proper
    /// list.
    pub fn is_proper_list(&self) -> bool {
        match self {
            Value::EmptyList => true,
            Value::Pair(cell) => cell.borrow().cdr.is_proper_list(),
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Boolean(_) => "boolean",
            Value::Symbol(_) => "symbol",
            Value::EmptyList => "empty list",
            Value::Pair(_) => "pair",
            Value::Builtin(_) => "builtin",
            Value::SpecialForm(_) => "special form",
            Value::Procedure(_) => "procedure",
        }
    }

    /// Walks a proper list of operands (e.g. a special form's unevaluated
    /// argument tail) into a `Vec`. Any non-EmptyList terminator is a
    /// syntax failure.
    pub fn to_vec(&self) -> Result<Vec<Value>, InterpError> {
        let mut out = Vec::new();
        let mut cur = self.clone();
        loop {
            match cur {
                Value::EmptyList => return Ok(out),
                Value::Pair(cell) => {
                    let cell = cell.borrow();
                    out.push(cell.car.clone());
                    cur = cell.cdr.clone();
                }
                _ => {
                    return Err(InterpError::syntax(
                        "improper list where a proper list was expected",
                    ))
                }
            }
        }
    }
}

/// Serializes a value to its canonical textual form (spec.md §4.6).
/// Attempting to serialize a `Procedure` is a syntax failure.
pub fn serialize(value: &Value) -> Result<String, InterpError> {
    match value {
        Value::Integer(n) => Ok(n.to_string()),
        Value::Boolean(true) => Ok("#t".to_string()),
        Value::Boolean(false) => Ok("#f".to_string()),
        Value::Symbol(s) => Ok(s.to_string()),
        Value::EmptyList => Ok("()".to_string()),
        Value::Pair(cell) => {
            let mut out = String::from("(");
            let mut first = true;
            let mut cur = Value::Pair(cell.clone());
            loop {
                match cur {
                    Value::EmptyList => break,
                    Value::Pair(cell) => {
                        let cell = cell.borrow();
                        if !first {
                            out.push(' ');
                        }
                        first = false;
                        out.push_str(&serialize(&cell.car)?);
                        cur = cell.cdr.clone();
                    }
                    other => {
                        out.push_str(" . ");
                        out.push_str(&serialize(&other)?);
                        break;
                    }
                }
            }
            out.push(')');
            Ok(out)
        }
        Value::Builtin(b) => Ok(b.name.to_string()),
        Value::SpecialForm(form) => Ok(form.name().to_string()),
        Value::Procedure(_) => Err(InterpError::syntax("cannot serialize a procedure value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_integers_and_booleans() {
        assert_eq!(serialize(&Value::Integer(42)).unwrap(), "42");
        assert_eq!(serialize(&Value::Integer(-7)).unwrap(), "-7");
        assert_eq!(serialize(&Value::Boolean(true)).unwrap(), "#t");
        assert_eq!(serialize(&Value::Boolean(false)).unwrap(), "#f");
    }

    #[test]
    fn serialize_empty_list() {
        assert_eq!(serialize(&Value::EmptyList).unwrap(), "()");
    }

    #[test]
    fn serialize_proper_list() {
        let list = Value::list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        assert_eq!(serialize(&list).unwrap(), "(1 2 3)");
    }

    #[test]
    fn serialize_dotted_pair() {
        let pair = Value::cons(Value::Integer(1), Value::Integer(2));
        assert_eq!(serialize(&pair).unwrap(), "(1 . 2)");
    }

    #[test]
    fn serialize_nested_list() {
        let inner = Value::list(vec![Value::Integer(2), Value::Integer(3)]);
        let outer = Value::list(vec![Value::Integer(1), inner, Value::Integer(4)]);
        assert_eq!(serialize(&outer).unwrap(), "(1 (2 3) 4)");
    }

    #[test]
    fn serialize_procedure_is_syntax_error() {
        let env = Environment::new();
        let proc = Value::Procedure(Rc::new(ProcedureData {
            params: vec![],
            body: vec![Value::Integer(1)],
            env,
        }));
        assert!(matches!(serialize(&proc), Err(InterpError::Syntax(_))));
    }

    #[test]
    fn set_car_mutation_visible_through_alias() {
        let pair = Value::cons(Value::Integer(1), Value::Integer(2));
        let alias = pair.clone();
        if let Value::Pair(cell) = &pair {
            cell.borrow_mut().car = Value::Integer(99);
        }
        if let Value::Pair(cell) = &alias {
            assert!(matches!(cell.borrow().car, Value::Integer(99)));
        } else {
            panic!("expected pair");
        }
    }

    #[test]
    fn proper_list_detection() {
        assert!(Value::EmptyList.is_proper_list());
        assert!(Value::list(vec![Value::Integer(1)]).is_proper_list());
        assert!(!Value::cons(Value::Integer(1), Value::Integer(2)).is_proper_list());
    }
}
