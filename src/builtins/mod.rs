//! # Built-in procedures and special forms
//!
//! Installs the initial global environment: the 9 special forms
//! (recognized by the evaluator before ordinary application) and the
//! built-in procedures, organized into 4 categories.
//!
//! ## Categories
//!
//! - **[arithmetic]**: +, -, *, /, abs, min, max
//! - **[comparison]**: =, <, >, <=, >=
//! - **[logic]**: not
//! - **[types]**: number?, boolean?, symbol?, pair?, null?, list?
//! - **[lists]**: cons, car, cdr, list, list-ref, list-tail

use crate::env::Environment;
use crate::value::{SpecialForm, Value};
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod lists;
pub mod logic;
pub mod types;

const SPECIAL_FORMS: &[SpecialForm] = &[
    SpecialForm::Quote,
    SpecialForm::If,
    SpecialForm::Define,
    SpecialForm::Set,
    SpecialForm::SetCar,
    SpecialForm::SetCdr,
    SpecialForm::And,
    SpecialForm::Or,
    SpecialForm::Lambda,
];

fn install_special_forms(env: &Rc<Environment>) {
    for form in SPECIAL_FORMS {
        env.define(form.name(), Value::SpecialForm(*form));
    }
}

/// Populates `env` with every special form and built-in procedure.
pub fn install(env: &Rc<Environment>) {
    install_special_forms(env);

    arithmetic::register_add(env);
    arithmetic::register_sub(env);
    arithmetic::register_mul(env);
    arithmetic::register_div(env);
    arithmetic::register_abs(env);
    arithmetic::register_min(env);
    arithmetic::register_max(env);

    comparison::register_eq(env);
    comparison::register_lt(env);
    comparison::register_gt(env);
    comparison::register_le(env);
    comparison::register_ge(env);

    logic::register_not(env);

    types::register_number_p(env);
    types::register_boolean_p(env);
    types::register_symbol_p(env);
    types::register_pair_p(env);
    types::register_null_p(env);
    types::register_list_p(env);

    lists::register_cons(env);
    lists::register_car(env);
    lists::register_cdr(env);
    lists::register_list(env);
    lists::register_list_ref(env);
    lists::register_list_tail(env);
}
