// ABOUTME: Environment module for managing variable bindings and scopes

use crate::error::InterpError;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<Rc<str>, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new global environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a new child environment with a parent.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Defines a binding in THIS scope (doesn't walk the parent chain).
    /// Redefining an existing name in the same scope overwrites it.
    pub fn define(&self, name: impl Into<Rc<str>>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Looks up a symbol in this scope and, failing that, every ancestor
    /// scope in order.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }

        if let Some(ref parent) = self.parent {
            return parent.get(name);
        }

        None
    }

    /// Assigns to the nearest existing binding for `name`, walking the
    /// parent chain. Fails with `InterpError::Name` if no such binding
    /// exists anywhere in the chain; unlike `define`, `set!` never creates
    /// a new binding.
    pub fn set(&self, name: &str, value: Value) -> Result<(), InterpError> {
        if self.bindings.borrow().contains_key(name) {
            self.bindings.borrow_mut().insert(Rc::from(name), value);
            return Ok(());
        }

        if let Some(ref parent) = self.parent {
            return parent.set(name, value);
        }

        Err(InterpError::name(name))
    }
}
