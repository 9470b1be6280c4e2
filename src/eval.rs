// ABOUTME: Evaluator module implementing the core eval/apply loop

use crate::env::Environment;
use crate::error::InterpError;
use crate::value::{ProcedureData, SpecialForm, Value};
use std::rc::Rc;

/// Evaluates `expr` in `env`. Plain recursive descent; tail calls are not
/// optimized (spec.md's Non-goals exclude proper tail calls).
pub fn eval(expr: &Value, env: &Rc<Environment>) -> Result<Value, InterpError> {
    match expr {
        Value::Integer(_) | Value::Boolean(_) | Value::EmptyList => Ok(expr.clone()),
        Value::Symbol(name) => env
            .get(name)
            .ok_or_else(|| InterpError::name(name.to_string())),
        Value::Builtin(_) | Value::SpecialForm(_) | Value::Procedure(_) => Ok(expr.clone()),
        Value::Pair(_) => eval_combination(expr, env),
    }
}

fn eval_combination(expr: &Value, env: &Rc<Environment>) -> Result<Value, InterpError> {
    let items = expr.to_vec()?;
    let (operator, operands) = items
        .split_first()
        .ok_or_else(|| InterpError::syntax("cannot evaluate the empty list"))?;

    if let Value::Symbol(name) = operator {
        if let Some(Value::SpecialForm(form)) = env.get(name) {
            return eval_special_form(form, operands, env);
        }
    }

    let procedure = eval(operator, env)?;
    let args = operands
        .iter()
        .map(|arg| eval(arg, env))
        .collect::<Result<Vec<_>, _>>()?;
    apply(&procedure, &args)
}

fn eval_special_form(
    form: SpecialForm,
    operands: &[Value],
    env: &Rc<Environment>,
) -> Result<Value, InterpError> {
    match form {
        SpecialForm::Quote => one_operand(operands, "quote").map(|v| v.clone()),
        SpecialForm::If => eval_if(operands, env),
        SpecialForm::Define => eval_define(operands, env),
        SpecialForm::Set => eval_set(operands, env),
        SpecialForm::SetCar => eval_set_car(operands, env),
        SpecialForm::SetCdr => eval_set_cdr(operands, env),
        SpecialForm::And => eval_and(operands, env),
        SpecialForm::Or => eval_or(operands, env),
        SpecialForm::Lambda => eval_lambda(operands, env),
    }
}

fn one_operand<'a>(operands: &'a [Value], form: &str) -> Result<&'a Value, InterpError> {
    match operands {
        [only] => Ok(only),
        _ => Err(InterpError::syntax(format!(
            "{} expects exactly 1 operand, got {}",
            form,
            operands.len()
        ))),
    }
}

fn eval_if(operands: &[Value], env: &Rc<Environment>) -> Result<Value, InterpError> {
    let (condition, then_branch, else_branch) = match operands {
        [condition, then_branch, else_branch] => (condition, then_branch, Some(else_branch)),
        [condition, then_branch] => (condition, then_branch, None),
        _ => {
            return Err(InterpError::syntax(
                "if expects a condition, a then-branch, and an optional else-branch",
            ))
        }
    };

    if eval(condition, env)?.is_truthy() {
        eval(then_branch, env)
    } else {
        match else_branch {
            Some(else_branch) => eval(else_branch, env),
            None => Ok(Value::EmptyList),
        }
    }
}

fn eval_define(operands: &[Value], env: &Rc<Environment>) -> Result<Value, InterpError> {
    match operands {
        [Value::Symbol(name), value_expr] => {
            let value = eval(value_expr, env)?;
            env.define(name.clone(), value);
            Ok(Value::symbol(name.clone()))
        }
        [Value::Pair(header), body @ ..] if !body.is_empty() => {
            let (name, params) = {
                let header = header.borrow();
                let name = match &header.car {
                    Value::Symbol(name) => name.clone(),
                    other => {
                        return Err(InterpError::syntax(format!(
                            "define expects a procedure name, got {}",
                            other.type_name()
                        )))
                    }
                };
                (name, header.cdr.clone())
            };

            let mut lambda_operands = Vec::with_capacity(1 + body.len());
            lambda_operands.push(params);
            lambda_operands.extend_from_slice(body);
            let procedure = eval_lambda(&lambda_operands, env)?;

            env.define(name.clone(), procedure);
            Ok(Value::Symbol(name))
        }
        _ => Err(InterpError::syntax(
            "define expects a symbol and a value expression, or a procedure header and a body",
        )),
    }
}

fn eval_set(operands: &[Value], env: &Rc<Environment>) -> Result<Value, InterpError> {
    match operands {
        [Value::Symbol(name), value_expr] => {
            let value = eval(value_expr, env)?;
            env.set(name, value)?;
            Ok(Value::symbol(name.clone()))
        }
        _ => Err(InterpError::syntax(
            "set! expects a symbol and a value expression",
        )),
    }
}

fn eval_set_car(operands: &[Value], env: &Rc<Environment>) -> Result<Value, InterpError> {
    let (pair_expr, value_expr) = two_operands(operands, "set-car!")?;
    match eval(pair_expr, env)? {
        Value::Pair(cell) => {
            cell.borrow_mut().car = eval(value_expr, env)?;
            Ok(Value::EmptyList)
        }
        other => Err(InterpError::runtime(format!(
            "set-car! expects a pair, got {}",
            other.type_name()
        ))),
    }
}

fn eval_set_cdr(operands: &[Value], env: &Rc<Environment>) -> Result<Value, InterpError> {
    let (pair_expr, value_expr) = two_operands(operands, "set-cdr!")?;
    match eval(pair_expr, env)? {
        Value::Pair(cell) => {
            cell.borrow_mut().cdr = eval(value_expr, env)?;
            Ok(Value::EmptyList)
        }
        other => Err(InterpError::runtime(format!(
            "set-cdr! expects a pair, got {}",
            other.type_name()
        ))),
    }
}

fn two_operands<'a>(
    operands: &'a [Value],
    form: &str,
) -> Result<(&'a Value, &'a Value), InterpError> {
    match operands {
        [a, b] => Ok((a, b)),
        _ => Err(InterpError::syntax(format!(
            "{} expects exactly 2 operands, got {}",
            form,
            operands.len()
        ))),
    }
}

/// `and` short-circuits on the first false value; an empty `and` is `#t`.
fn eval_and(operands: &[Value], env: &Rc<Environment>) -> Result<Value, InterpError> {
    let mut result = Value::Boolean(true);
    for operand in operands {
        result = eval(operand, env)?;
        if !result.is_truthy() {
            return Ok(result);
        }
    }
    Ok(result)
}

/// `or` short-circuits on the first true value; an empty `or` is `#f`.
fn eval_or(operands: &[Value], env: &Rc<Environment>) -> Result<Value, InterpError> {
    for operand in operands {
        let result = eval(operand, env)?;
        if result.is_truthy() {
            return Ok(result);
        }
    }
    Ok(Value::Boolean(false))
}

fn eval_lambda(operands: &[Value], env: &Rc<Environment>) -> Result<Value, InterpError> {
    let (params_expr, body) = operands
        .split_first()
        .ok_or_else(|| InterpError::syntax("lambda expects a parameter list and a body"))?;

    if body.is_empty() {
        return Err(InterpError::syntax("lambda body must not be empty"));
    }

    let params = params_expr
        .to_vec()?
        .into_iter()
        .map(|param| match param {
            Value::Symbol(name) => Ok(name),
            other => Err(InterpError::syntax(format!(
                "lambda parameter must be a symbol, got {}",
                other.type_name()
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::Procedure(Rc::new(ProcedureData {
        params,
        body: body.to_vec(),
        env: env.clone(),
    })))
}

/// Applies a procedure (builtin or user-defined) to already-evaluated
/// arguments.
pub fn apply(procedure: &Value, args: &[Value]) -> Result<Value, InterpError> {
    match procedure {
        Value::Builtin(builtin) => (builtin.func)(args),
        Value::Procedure(proc_data) => apply_procedure(proc_data, args),
        other => Err(InterpError::runtime(format!(
            "{} is not callable",
            other.type_name()
        ))),
    }
}

fn apply_procedure(proc_data: &Rc<ProcedureData>, args: &[Value]) -> Result<Value, InterpError> {
    if args.len() != proc_data.params.len() {
        return Err(InterpError::runtime(format!(
            "procedure expects {} argument(s), got {}",
            proc_data.params.len(),
            args.len()
        )));
    }

    let call_env = Environment::with_parent(proc_data.env.clone());
    for (param, arg) in proc_data.params.iter().zip(args) {
        call_env.define(param.clone(), arg.clone());
    }

    let mut result = Value::EmptyList;
    for expr in &proc_data.body {
        result = eval(expr, &call_env)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;
    use crate::parser::parse;
    use crate::value::serialize;

    fn run(env: &Rc<Environment>, source: &str) -> Result<Value, InterpError> {
        eval(&parse(source)?, env)
    }

    fn run_str(env: &Rc<Environment>, source: &str) -> String {
        serialize(&run(env, source).unwrap()).unwrap()
    }

    fn fresh_env() -> Rc<Environment> {
        let env = Environment::new();
        builtins::install(&env);
        env
    }

    #[test]
    fn evaluates_self_evaluating_values() {
        let env = fresh_env();
        assert_eq!(run_str(&env, "42"), "42");
        assert_eq!(run_str(&env, "#t"), "#t");
        assert_eq!(run_str(&env, "()"), "()");
    }

    #[test]
    fn quote_returns_datum_unevaluated() {
        let env = fresh_env();
        assert_eq!(run_str(&env, "(quote (a b c))"), "(a b c)");
    }

    #[test]
    fn if_picks_correct_branch() {
        let env = fresh_env();
        assert_eq!(run_str(&env, "(if (> 3 2) (quote yes) (quote no))"), "yes");
        assert_eq!(run_str(&env, "(if (> 2 3) (quote yes) (quote no))"), "no");
        assert_eq!(run_str(&env, "(if #f 1)"), "()");
    }

    #[test]
    fn define_binds_in_current_environment() {
        let env = fresh_env();
        run(&env, "(define x 10)").unwrap();
        assert_eq!(run_str(&env, "x"), "10");
    }

    #[test]
    fn set_requires_existing_binding() {
        let env = fresh_env();
        run(&env, "(define x 1)").unwrap();
        run(&env, "(set! x 2)").unwrap();
        assert_eq!(run_str(&env, "x"), "2");

        assert!(matches!(run(&env, "(set! y 2)"), Err(InterpError::Name(_))));
    }

    #[test]
    fn set_car_and_set_cdr_mutate_through_aliases() {
        let env = fresh_env();
        run(&env, "(define p (cons 1 2))").unwrap();
        run(&env, "(define q p)").unwrap();
        run(&env, "(set-car! q 99)").unwrap();
        assert_eq!(run_str(&env, "p"), "(99 . 2)");
    }

    #[test]
    fn and_or_short_circuit() {
        let env = fresh_env();
        assert_eq!(run_str(&env, "(and 1 2 3)"), "3");
        assert_eq!(run_str(&env, "(and 1 #f 3)"), "#f");
        assert_eq!(run_str(&env, "(or #f #f 5)"), "5");
        assert_eq!(run_str(&env, "(or #f #f)"), "#f");
    }

    #[test]
    fn lambda_creates_closure_over_defining_environment() {
        let env = fresh_env();
        run(&env, "(define make-adder (lambda (n) (lambda (x) (+ x n))))").unwrap();
        run(&env, "(define add5 (make-adder 5))").unwrap();
        assert_eq!(run_str(&env, "(add5 10)"), "15");
    }

    #[test]
    fn factorial_via_recursive_define() {
        let env = fresh_env();
        run(
            &env,
            "(define fact (lambda (n) (if (< n 2) 1 (* n (fact (- n 1))))))",
        )
        .unwrap();
        assert_eq!(run_str(&env, "(fact 5)"), "120");
    }

    #[test]
    fn define_procedure_header_sugar() {
        let env = fresh_env();
        run(
            &env,
            "(define (fact n) (if (= n 0) 1 (* n (fact (- n 1)))))",
        )
        .unwrap();
        assert_eq!(run_str(&env, "(fact 5)"), "120");
    }

    #[test]
    fn define_procedure_header_sugar_rejects_empty_body() {
        let env = fresh_env();
        assert!(matches!(
            run(&env, "(define (f x))"),
            Err(InterpError::Syntax(_))
        ));
    }

    #[test]
    fn calling_a_non_callable_is_a_runtime_error() {
        let env = fresh_env();
        assert!(matches!(run(&env, "(1 2 3)"), Err(InterpError::Runtime(_))));
    }

    #[test]
    fn unbound_symbol_is_a_name_error() {
        let env = fresh_env();
        assert!(matches!(run(&env, "(foo)"), Err(InterpError::Name(_))));
    }

    #[test]
    fn wrong_arity_call_is_a_runtime_error() {
        let env = fresh_env();
        run(&env, "(define f (lambda (a b) (+ a b)))").unwrap();
        assert!(matches!(run(&env, "(f 1)"), Err(InterpError::Runtime(_))));
    }
}
