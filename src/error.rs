/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing a source
/// line: unexpected characters, malformed or overflowing literals, and
/// grammar violations. Every variant carries a stable symbolic code and the
/// offending character offset where one is available.
pub mod parse_error;

/// Evaluation errors.
///
/// Contains the error types raised while executing a parsed statement:
/// undefined variables, division by zero, non-assignable `++`/`--` operands,
/// and assignment operators the evaluator rejects.
pub mod eval_error;

/// Batch-level error wrappers.
///
/// `CalcError` unifies the parse and evaluation error kinds for the per-line
/// contract; `ScriptError` decorates one with the failing line's number and
/// original text for whole-script reporting.
pub mod script_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use script_error::{CalcError, ScriptError};
