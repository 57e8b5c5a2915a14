use crate::interpreter::{
    executor::{
        core::{ExecResult, FunctionTable, native_fn},
        utils::check_arity,
    },
    value::core::Value,
};

/// Signature of a built-in function. The table checks the argument count
/// before calling it.
type BuiltinFn = fn(&[Value]) -> ExecResult<Value>;

/// Defines the built-in functions by generating a lookup table and a name
/// list.
///
/// Each entry provides a string name, the exact number of arguments and the
/// function implementing it. The macro produces `BUILTIN_TABLE` and the public
/// `BUILTIN_FUNCTIONS` name list.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every built-in function.
        ///
        /// # Example
        /// ```
        /// use ratus::{BUILTIN_FUNCTIONS, Executor};
        ///
        /// let executor = Executor::new();
        /// assert!(BUILTIN_FUNCTIONS.iter().all(|name| executor.has_function(name)));
        /// ```
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "if" => { arity: 3, func: call_if },
}

fn call_if(args: &[Value]) -> ExecResult<Value> {
    Ok(if_fn(&args[0], &args[1], &args[2]))
}

/// Eager ternary selection: `if(condition, then, otherwise)`.
///
/// Returns `then` when `condition` is truthy, else `otherwise`. The
/// arguments arrive already evaluated, so both branches have been computed
/// whichever one is returned.
///
/// # Example
/// ```
/// use ratus::interpreter::{executor::function::if_fn, value::core::Value};
///
/// let picked = if_fn(&Value::Bool(false), &Value::Integer(10), &Value::Integer(5));
/// assert_eq!(picked, Value::Integer(5));
/// ```
#[must_use]
pub fn if_fn(condition: &Value, then: &Value, otherwise: &Value) -> Value {
    if condition.is_truthy() { then.clone() } else { otherwise.clone() }
}

/// Builds the default function table from the built-ins.
///
/// Every entry checks its argument count before running, so a built-in only
/// ever sees exactly as many arguments as it declares.
#[must_use]
pub fn default_functions() -> FunctionTable {
    BUILTIN_TABLE.iter()
                 .map(|def| {
                     let (name, arity, func) = (def.name, def.arity, def.func);
                     (name.to_string(),
                      native_fn(move |args| {
                          check_arity(name, args, arity)?;
                          func(args)
                      }))
                 })
                 .collect()
}
