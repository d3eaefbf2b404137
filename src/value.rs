/// A numeric value, either a 64-bit signed integer or a 64-bit float.
///
/// Which variant a literal holds is fixed at lex time by whether its source
/// text contained a decimal point. Arithmetic between an integer and a real
/// operand promotes the result to `Real`; integer-only arithmetic stays
/// `Integer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Real(f64),
}

impl Number {
    /// Returns `true` if the value is [`Real`].
    ///
    /// [`Real`]: Number::Real
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// Returns `true` when the value is numerically zero, for either kind.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Widens to `f64`; this is the promotion applied when the other operand
    /// of an arithmetic operation is real.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Arithmetic negation, preserving the numeric kind.
    ///
    /// Integer negation wraps on `i64::MIN`, matching the two's-complement
    /// behavior of the rest of the integer arithmetic.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Integer(n) => Self::Integer(n.wrapping_neg()),
            Self::Real(r) => Self::Real(-r),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl std::fmt::Display for Number {
    /// Integers render without a decimal point; reals use the shortest
    /// round-trip rendering, which always keeps a decimal point or exponent
    /// (`2.0`, `0.5`, `1e300`), so the kind stays visible in output.
    ///
    /// # Example
    /// ```
    /// use calcscript::value::Number;
    ///
    /// assert_eq!(Number::Integer(2).to_string(), "2");
    /// assert_eq!(Number::Real(2.0).to_string(), "2.0");
    /// assert_eq!(Number::Real(1.5).to_string(), "1.5");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
