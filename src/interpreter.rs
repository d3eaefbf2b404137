/// The lexer module tokenizes one source line.
///
/// The lexer reads raw line text and produces the token sequence the parser
/// consumes: identifiers, validated numeric literals, operators, and
/// parentheses, each with its character offset, terminated by an explicit
/// end-of-input token.
///
/// # Responsibilities
/// - Converts a line into tokens with kind, lexeme, and position.
/// - Validates numeric literals at lex time (form and range).
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;

/// The parser module builds the statement AST from tokens.
///
/// A recursive-descent parser with one token of lookahead turns the token
/// sequence into exactly one assignment statement, enforcing the grammar and
/// the operator precedence levels.
///
/// # Responsibilities
/// - Produces the `Stmt`/`Expr` tree for one line.
/// - Enforces precedence, associativity, and full input consumption.
/// - Reports coded grammar errors with the offending token position.
pub mod parser;

/// The evaluator module executes statements against the environment.
///
/// The evaluator walks the AST, applies the arithmetic and promotion rules,
/// and performs the variable mutations assignments and increment/decrement
/// operators demand.
pub mod evaluator;

/// The environment module holds the run-scoped variable bindings.
///
/// An insertion-ordered name-to-value table shared across all lines of one
/// run; the iteration order drives the final snapshot output.
pub mod env;
