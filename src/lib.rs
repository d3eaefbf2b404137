//! # calcscript
//!
//! calcscript is a line-oriented calculator language interpreter written in
//! Rust. Every input line is one assignment statement — plain (`=`) or
//! compound (`+=`, `-=`, `*=`, `/=`, `%=`) — over integer and floating-point
//! arithmetic with C-style pre/post increment and decrement operators. After
//! all lines execute against a shared variable environment, the bound
//! variables are reported as an ordered `(name=value,...)` snapshot.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{CalcError, ScriptError},
    interpreter::{env::Environment, evaluator::Evaluator, lexer::tokenize, parser::Parser},
    util::format::format_bindings,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` types that represent one
/// parsed assignment line as a tree, along with the operator enums the
/// parser and evaluator share.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Every failure mode carries a stable symbolic code (`LEXER_…`, `PARSE_…`,
/// `EVAL_…`, `ENV_…`) and a human-readable message; lexer and parser errors
/// additionally carry the offending character offset.
pub mod error;
/// The interpreter pipeline: lexer, parser, evaluator, and environment.
///
/// Data flows strictly downstream: line text → tokens → AST → side effects
/// on the environment. Lexing and parsing are pure; only the evaluator
/// mutates state.
pub mod interpreter;
/// Output formatting for the final variable snapshot.
pub mod util;
/// The two-variant numeric type and its promotion rules.
pub mod value;

/// Runs a whole script and returns the formatted variable snapshot.
///
/// Lines are processed in order against one fresh [`Environment`].
/// Blank and whitespace-only lines are skipped (they still count for line
/// numbering). The first failing line aborts the batch; the error is
/// decorated with the 1-based line number and the original line text.
///
/// # Errors
/// Returns a [`ScriptError`] wrapping the underlying parse or evaluation
/// error of the first failing line.
///
/// # Examples
/// ```
/// use calcscript::evaluate_script;
///
/// let script = "i = 0\nj = ++i\nx = i++ + 5\ny = (5 + 3) * 10\ni += y";
/// assert_eq!(evaluate_script(script).unwrap(), "(i=82,j=1,x=6,y=80)");
///
/// // Compound assignment needs an existing binding.
/// let err = evaluate_script("x += 1").unwrap_err();
/// assert_eq!(err.error.code(), "ENV_001");
/// assert_eq!(err.line_number, 1);
/// ```
pub fn evaluate_script(source: &str) -> Result<String, ScriptError> {
    let mut env = Environment::new();

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        process_line(line, &mut env).map_err(|error| ScriptError {
            error,
            line_number: index + 1,
            line: line.to_string(),
        })?;
    }

    Ok(format_bindings(&env))
}

/// Lexes, parses, and executes a single assignment line against `env`.
///
/// This is the per-line contract the batch driver builds on. A failed line
/// never corrupts existing bindings, but side effects committed by earlier
/// sub-expressions of the failing line (a pre-increment before a division by
/// zero, say) are not rolled back.
///
/// # Errors
/// Returns the line's [`CalcError`] without line context; callers that know
/// the line number attach it.
///
/// # Examples
/// ```
/// use calcscript::{interpreter::env::Environment, process_line, value::Number};
///
/// let mut env = Environment::new();
/// process_line("x = 2 + 3 * 4", &mut env).unwrap();
///
/// assert_eq!(env.get("x"), Ok(Number::Integer(14)));
/// ```
pub fn process_line(line: &str, env: &mut Environment) -> Result<(), CalcError> {
    let tokens = tokenize(line)?;
    let stmt = Parser::new(&tokens).parse_statement()?;
    Evaluator::new(env).execute(&stmt)?;
    Ok(())
}
