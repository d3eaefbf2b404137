use crate::error::{EvalError, ParseError};

/// Either of the two error kinds a single line can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A lexing or grammar violation.
    Parse(ParseError),
    /// A runtime failure while evaluating the parsed statement.
    Eval(EvalError),
}

impl CalcError {
    /// Stable symbolic code of the underlying error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Parse(error) => error.code(),
            Self::Eval(error) => error.code(),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for CalcError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for CalcError {}

/// A line failure decorated with its 1-based line number and source text.
///
/// Produced by the batch driver; the first failing line aborts the whole
/// run, so at most one of these is ever reported per script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    /// The underlying parse or evaluation error.
    pub error: CalcError,
    /// 1-based number of the failing line. Blank lines count.
    pub line_number: usize,
    /// The original text of the failing line.
    pub line: String,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {}: {})", self.error, self.line_number, self.line)
    }
}

impl std::error::Error for ScriptError {}
