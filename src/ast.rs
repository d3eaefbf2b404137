use crate::value::Number;

/// An abstract syntax tree node representing an expression.
///
/// Expressions are built by the parser and walked by the evaluator; once
/// built they are never mutated. Evaluation only mutates the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, integer or real.
    Literal(Number),
    /// Reference to a variable by name; resolved against the environment at
    /// evaluation time.
    Variable(String),
    /// A prefix operation: `+x`, `-x`, `++x`, `--x`.
    Unary {
        /// The prefix operator to apply.
        op: UnaryOperator,
        /// The operand expression.
        expr: Box<Expr>,
    },
    /// A postfix operation: `x++` or `x--`. The operand must evaluate to a
    /// bare variable reference.
    Postfix {
        /// The postfix operator to apply.
        op: PostfixOperator,
        /// The operand expression.
        expr: Box<Expr>,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand, evaluated first.
        left: Box<Expr>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand, evaluated after the left one.
        right: Box<Expr>,
    },
}

/// A top-level statement. Every input line parses to exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An assignment binding or updating one variable from an expression.
    Assignment {
        /// The target variable name.
        name: String,
        /// Plain or compound assignment operator.
        op: AssignOp,
        /// The right-hand side expression.
        expr: Expr,
    },
}

/// The assignment operator of a statement.
///
/// `PowAssign` (`^=`) is recognized by the grammar but rejected by the
/// evaluator with an unexpected-assignment-operator error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `^=`
    PowAssign,
}

impl std::fmt::Display for AssignOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::PowAssign => "^=",
        };
        write!(f, "{operator}")
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`), right-associative
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+x`), the identity.
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
    /// Pre-increment (`++x`); yields the updated value.
    PreIncrement,
    /// Pre-decrement (`--x`); yields the updated value.
    PreDecrement,
}

/// A postfix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixOperator {
    /// Post-increment (`x++`); yields the value before the update.
    PostIncrement,
    /// Post-decrement (`x--`); yields the value before the update.
    PostDecrement,
}
