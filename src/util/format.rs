use crate::interpreter::env::Environment;

/// Renders the final variable snapshot as `(name1=value1,name2=value2,...)`.
///
/// Pairs appear in first-assignment order with no separator before the first
/// or after the last pair. An empty environment renders as `()`.
///
/// # Example
/// ```
/// use calcscript::{
///     interpreter::env::Environment, util::format::format_bindings, value::Number,
/// };
///
/// let mut env = Environment::new();
/// env.set("i", Number::Integer(82));
/// env.set("r", Number::Real(0.5));
///
/// assert_eq!(format_bindings(&env), "(i=82,r=0.5)");
/// ```
#[must_use]
pub fn format_bindings(env: &Environment) -> String {
    let pairs: Vec<String> = env
        .bindings()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    format!("({})", pairs.join(","))
}
