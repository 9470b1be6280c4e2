//! Procedural macro for registering Lisp builtin procedures.
//!
//! Provides the `#[builtin(name = "...")]` attribute macro that wires a
//! Rust function into the interpreter's initial environment under its
//! Lisp-visible name, without hand-writing a `register_*` function per
//! builtin.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Extract `name = "..."` from the attribute token stream.
fn parse_name(attr: TokenStream) -> String {
    let attr_str = attr.to_string();
    if let Some(start) = attr_str.find("name = \"") {
        let rest = &attr_str[start + 8..];
        if let Some(end) = rest.find('"') {
            return rest[..end].to_string();
        }
    }
    String::new()
}

/// Attribute macro for defining a Lisp builtin function.
///
/// Generates the annotated function as-is, plus a `register_<fn_name>`
/// function that binds it into an `Environment` under its Lisp name.
///
/// ```ignore
/// #[builtin(name = "+")]
/// pub fn add(args: &[Value]) -> Result<Value, InterpError> { ... }
/// ```
#[proc_macro_attribute]
pub fn builtin(attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);

    let fn_name = func.sig.ident.clone();
    let lisp_name = parse_name(attr);
    let lisp_name = if lisp_name.is_empty() {
        fn_name.to_string()
    } else {
        lisp_name
    };

    let register_fn_name = quote::format_ident!("register_{}", fn_name);

    let expanded = quote! {
        #func

        #[allow(dead_code)]
        pub fn #register_fn_name(env: &std::rc::Rc<crate::env::Environment>) {
            env.define(
                std::rc::Rc::from(#lisp_name),
                crate::value::Value::Builtin(crate::value::BuiltinFn {
                    func: #fn_name,
                    name: #lisp_name,
                }),
            );
        }
    };

    TokenStream::from(expanded)
}
