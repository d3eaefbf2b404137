use crate::ast::AssignOp;

/// Represents all errors that can be raised while evaluating a statement.
///
/// Evaluation errors carry no character position; by the time evaluation
/// runs, the offending token context is gone. The driver attaches the line
/// context instead.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The operand of `++`/`--` was not a bare variable reference.
    OperandNotAssignable,
    /// Division or modulo with a numerically-zero right operand.
    DivisionByZero,
    /// An assignment operator the evaluator does not execute (`^=`).
    UnexpectedAssignOp {
        /// The rejected operator.
        op: AssignOp,
    },
}

impl EvalError {
    /// Stable symbolic code for programmatic matching.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "ENV_001",
            Self::OperandNotAssignable => "EVAL_003",
            Self::DivisionByZero => "EVAL_004",
            Self::UnexpectedAssignOp { .. } => "EVAL_005",
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "ENV_001: Undefined variable: {name}. Assign it before use.")
            }

            Self::OperandNotAssignable => {
                write!(f, "EVAL_003: Operand is not assignable for ++/--")
            }

            Self::DivisionByZero => write!(f, "EVAL_004: Division by zero"),

            Self::UnexpectedAssignOp { op } => {
                write!(f, "EVAL_005: Unexpected assignment operator: {op}")
            }
        }
    }
}

impl std::error::Error for EvalError {}
