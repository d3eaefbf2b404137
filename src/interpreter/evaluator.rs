use crate::{
    ast::{AssignOp, BinaryOperator, Expr, PostfixOperator, Stmt, UnaryOperator},
    error::EvalError,
    interpreter::env::Environment,
    value::Number,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Tree-walking evaluator that executes statements against an environment.
///
/// The evaluator borrows its [`Environment`] exclusively, so all mutation
/// happens on one thread with no shared state. Expressions are evaluated
/// strictly left to right: the left operand of a binary operation is fully
/// evaluated, side effects included, before the right operand starts. A
/// failing statement is not atomic — side effects already committed by
/// earlier sub-expressions of the same line stay committed.
pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator over the given environment.
    pub fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    /// Executes one assignment statement, mutating the environment.
    ///
    /// A plain assignment binds the evaluated right-hand side to the target
    /// name, which need not pre-exist. A compound assignment requires the
    /// target to be bound already: its current value is read first, then the
    /// right-hand side is evaluated, then the two are combined and rebound.
    ///
    /// # Errors
    /// Returns an [`EvalError`] for undefined variables, division or modulo
    /// by zero, a non-variable `++`/`--` operand, or the `^=` operator.
    pub fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        let Stmt::Assignment { name, op, expr } = stmt;

        if *op == AssignOp::Assign {
            let value = self.eval(expr)?;
            self.env.set(name, value);
            return Ok(());
        }

        let current = self.env.get(name)?;
        let rhs = self.eval(expr)?;
        let result = match op {
            AssignOp::AddAssign => apply_binary(BinaryOperator::Add, current, rhs)?,
            AssignOp::SubAssign => apply_binary(BinaryOperator::Sub, current, rhs)?,
            AssignOp::MulAssign => apply_binary(BinaryOperator::Mul, current, rhs)?,
            AssignOp::DivAssign => apply_binary(BinaryOperator::Div, current, rhs)?,
            AssignOp::ModAssign => apply_binary(BinaryOperator::Mod, current, rhs)?,
            AssignOp::Assign | AssignOp::PowAssign => {
                return Err(EvalError::UnexpectedAssignOp { op: *op });
            }
        };
        self.env.set(name, result);
        Ok(())
    }

    /// Evaluates an expression to a numeric value.
    ///
    /// Evaluation is side-effect free except for pre/post increment and
    /// decrement, which write back to the environment as part of producing
    /// their value.
    fn eval(&mut self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Literal(value) => Ok(*value),
            Expr::Variable(name) => self.env.get(name),
            Expr::Unary { op, expr } => self.eval_unary(*op, expr),
            Expr::Postfix { op, expr } => self.eval_postfix(*op, expr),
            Expr::Binary { left, op, right } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                apply_binary(*op, lhs, rhs)
            }
        }
    }

    fn eval_unary(&mut self, op: UnaryOperator, operand: &Expr) -> EvalResult<Number> {
        match op {
            UnaryOperator::Plus => self.eval(operand),
            UnaryOperator::Minus => Ok(self.eval(operand)?.negate()),
            UnaryOperator::PreIncrement => {
                let (_, updated) = self.step_variable(operand, BinaryOperator::Add)?;
                Ok(updated)
            }
            UnaryOperator::PreDecrement => {
                let (_, updated) = self.step_variable(operand, BinaryOperator::Sub)?;
                Ok(updated)
            }
        }
    }

    fn eval_postfix(&mut self, op: PostfixOperator, operand: &Expr) -> EvalResult<Number> {
        match op {
            PostfixOperator::PostIncrement => {
                let (old, _) = self.step_variable(operand, BinaryOperator::Add)?;
                Ok(old)
            }
            PostfixOperator::PostDecrement => {
                let (old, _) = self.step_variable(operand, BinaryOperator::Sub)?;
                Ok(old)
            }
        }
    }

    /// Shared body of the four increment/decrement forms: the operand must be
    /// a bare variable; its value is read, stepped by one preserving the
    /// numeric kind, and written back. Returns `(old, updated)` so callers
    /// pick which one the operator yields.
    fn step_variable(
        &mut self,
        operand: &Expr,
        op: BinaryOperator,
    ) -> EvalResult<(Number, Number)> {
        let Expr::Variable(name) = operand else {
            return Err(EvalError::OperandNotAssignable);
        };

        let old = self.env.get(name)?;
        let updated = apply_binary(op, old, Number::Integer(1))?;
        self.env.set(name, updated);
        Ok((old, updated))
    }
}

/// Applies one arithmetic operator under the numeric promotion rules: if
/// either operand is real the result is real, otherwise it stays integer.
/// Integer arithmetic wraps (two's complement) and division truncates toward
/// zero. Division and modulo check the right operand for numeric zero before
/// the operation, for both kinds.
fn apply_binary(op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
    if matches!(op, BinaryOperator::Div | BinaryOperator::Mod) && right.is_zero() {
        return Err(EvalError::DivisionByZero);
    }

    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => Ok(eval_integer(op, a, b)),
        _ => Ok(eval_real(op, left.as_real(), right.as_real())),
    }
}

fn eval_integer(op: BinaryOperator, a: i64, b: i64) -> Number {
    let result = match op {
        BinaryOperator::Add => a.wrapping_add(b),
        BinaryOperator::Sub => a.wrapping_sub(b),
        BinaryOperator::Mul => a.wrapping_mul(b),
        BinaryOperator::Div => a.wrapping_div(b),
        BinaryOperator::Mod => a.wrapping_rem(b),
        BinaryOperator::Pow => return integer_pow(a, b),
    };
    Number::Integer(result)
}

fn eval_real(op: BinaryOperator, a: f64, b: f64) -> Number {
    Number::Real(match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
        BinaryOperator::Mod => a % b,
        BinaryOperator::Pow => a.powf(b),
    })
}

/// Integer exponentiation. An exponent that fits `u32` keeps the result in
/// the integer domain (wrapping); a negative or oversized exponent leaves it
/// and promotes to real.
#[allow(clippy::cast_precision_loss)]
fn integer_pow(base: i64, exponent: i64) -> Number {
    match u32::try_from(exponent) {
        Ok(exponent) => Number::Integer(base.wrapping_pow(exponent)),
        Err(_) => Number::Real((base as f64).powf(exponent as f64)),
    }
}
