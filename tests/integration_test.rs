// ABOUTME: End-to-end tests driving the interpreter through its public API

use lispcore::error::InterpError;
use lispcore::Interpreter;

#[test]
fn arithmetic_expression() {
    let interp = Interpreter::new();
    assert_eq!(interp.run("(+ 1 2 3)").unwrap(), "6");
}

#[test]
fn conditional_picks_the_true_branch() {
    let interp = Interpreter::new();
    assert_eq!(
        interp.run("(if (> 3 2) (quote yes) (quote no))").unwrap(),
        "yes"
    );
}

#[test]
fn factorial_defined_across_two_runs() {
    let interp = Interpreter::new();
    interp
        .run("(define fact (lambda (n) (if (< n 2) 1 (* n (fact (- n 1))))))")
        .unwrap();
    assert_eq!(interp.run("(fact 5)").unwrap(), "120");
}

#[test]
fn factorial_defined_with_procedure_header_sugar() {
    let interp = Interpreter::new();
    interp
        .run("(define (fact n) (if (= n 0) 1 (* n (fact (- n 1)))))")
        .unwrap();
    assert_eq!(interp.run("(fact 5)").unwrap(), "120");
}

#[test]
fn set_car_mutation_is_visible_through_every_alias() {
    let interp = Interpreter::new();
    interp.run("(define p (cons 1 2))").unwrap();
    interp.run("(define q p)").unwrap();
    interp.run("(set-car! q 42)").unwrap();
    assert_eq!(interp.run("p").unwrap(), "(42 . 2)");
}

#[test]
fn list_construction_and_serialization() {
    let interp = Interpreter::new();
    assert_eq!(interp.run("(list 1 2 3)").unwrap(), "(1 2 3)");
}

#[test]
fn list_tail_skips_the_given_number_of_elements() {
    let interp = Interpreter::new();
    assert_eq!(
        interp.run("(list-tail (list 1 2 3 4) 2)").unwrap(),
        "(3 4)"
    );
}

#[test]
fn closures_capture_their_defining_environment() {
    let interp = Interpreter::new();
    interp
        .run("(define make-counter (lambda (n) (lambda () (set! n (+ n 1)) n)))")
        .unwrap();
    interp.run("(define counter (make-counter 0))").unwrap();
    assert_eq!(interp.run("(counter)").unwrap(), "1");
    assert_eq!(interp.run("(counter)").unwrap(), "2");
}

#[test]
fn car_of_empty_list_is_a_runtime_error() {
    let interp = Interpreter::new();
    assert!(matches!(
        interp.run("(car (quote ()))"),
        Err(InterpError::Runtime(_))
    ));
}

#[test]
fn calling_an_unbound_symbol_is_a_name_error() {
    let interp = Interpreter::new();
    assert!(matches!(interp.run("(foo)"), Err(InterpError::Name(_))));
}

#[test]
fn malformed_define_is_a_syntax_error() {
    let interp = Interpreter::new();
    assert!(matches!(interp.run("(define)"), Err(InterpError::Syntax(_))));
}

#[test]
fn malformed_dotted_pair_is_a_syntax_error() {
    let interp = Interpreter::new();
    assert!(matches!(interp.run("(1 .)"), Err(InterpError::Syntax(_))));
}

#[test]
fn leading_dot_in_a_list_is_a_syntax_error() {
    let interp = Interpreter::new();
    assert!(matches!(interp.run("( . 3)"), Err(InterpError::Syntax(_))));
}

#[test]
fn successive_runs_share_the_global_environment() {
    let interp = Interpreter::new();
    interp.run("(define total 0)").unwrap();
    interp.run("(set! total (+ total 10))").unwrap();
    interp.run("(set! total (+ total 5))").unwrap();
    assert_eq!(interp.run("total").unwrap(), "15");
}
