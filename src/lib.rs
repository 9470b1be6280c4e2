// ABOUTME: Library module exposing internal components for testing

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod parser;
pub mod token;
pub mod value;

use env::Environment;
use error::InterpError;
use std::rc::Rc;
use value::serialize;

/// A Lisp interpreter session: a persistent global environment that
/// accumulates `define`d bindings across calls to `run`.
pub struct Interpreter {
    env: Rc<Environment>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        let env = Environment::new();
        builtins::install(&env);
        Interpreter { env }
    }

    /// Parses and evaluates exactly one datum from `source`, returning its
    /// serialized result. Trailing input after the datum is a syntax
    /// error.
    pub fn run(&self, source: &str) -> Result<String, InterpError> {
        let expr = parser::parse(source)?;
        let result = eval::eval(&expr, &self.env)?;
        serialize(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successive_runs_share_global_state() {
        let interp = Interpreter::new();
        assert_eq!(interp.run("(define x 10)").unwrap(), "x");
        assert_eq!(interp.run("(set! x (+ x 1))").unwrap(), "x");
        assert_eq!(interp.run("x").unwrap(), "11");
    }

    #[test]
    fn arithmetic_end_to_end() {
        let interp = Interpreter::new();
        assert_eq!(interp.run("(+ 1 2 3)").unwrap(), "6");
    }

    #[test]
    fn conditional_end_to_end() {
        let interp = Interpreter::new();
        assert_eq!(
            interp.run("(if (> 3 2) (quote yes) (quote no))").unwrap(),
            "yes"
        );
    }

    #[test]
    fn mutation_is_visible_across_runs() {
        let interp = Interpreter::new();
        interp.run("(define p (cons 1 2))").unwrap();
        interp.run("(define q p)").unwrap();
        interp.run("(set-car! q 99)").unwrap();
        assert_eq!(interp.run("p").unwrap(), "(99 . 2)");
    }

    #[test]
    fn list_operations_end_to_end() {
        let interp = Interpreter::new();
        assert_eq!(interp.run("(list 1 2 3)").unwrap(), "(1 2 3)");
        assert_eq!(interp.run("(list-tail (list 1 2 3 4) 2)").unwrap(), "(3 4)");
    }

    #[test]
    fn negative_cases_report_the_right_error_kind() {
        let interp = Interpreter::new();
        assert!(matches!(interp.run("(car (quote ()))"), Err(InterpError::Runtime(_))));
        assert!(matches!(interp.run("(foo)"), Err(InterpError::Name(_))));
        assert!(matches!(interp.run("(define)"), Err(InterpError::Syntax(_))));
        assert!(matches!(interp.run("(1 .)"), Err(InterpError::Syntax(_))));
    }
}
