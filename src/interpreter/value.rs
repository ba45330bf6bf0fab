use crate::{ast::BinaryOperator, error::SemanticError};

/// Represents a numeric value produced by evaluation.
///
/// Arithmetic between two integers is exact and stays integral, with one
/// exception: division always produces a real. Mixed operands promote the
/// integer side to a real first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A real value (double precision floating-point).
    Real(f64),
    /// An integer value (64 bit integer).
    Integer(i64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl Value {
    /// Converts the value to an `f64` using the native conversion.
    ///
    /// Integer magnitudes beyond 2^53 lose precision, exactly as the host
    /// arithmetic does.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => n as f64,
        }
    }

    /// Applies a binary arithmetic operator to two evaluated operands.
    ///
    /// `Add`, `Sub` and `Mul` keep integer pairs integral (checked, so a
    /// 64-bit overflow is reported rather than wrapped) and promote mixed
    /// pairs to reals. `Div` always produces a real. `Mod` and `Pow` are
    /// routed to their own handlers.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed `Value`, or the `SemanticError` describing why the
    /// operation has no result.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::value::Value};
    ///
    /// let product = Value::apply(BinaryOperator::Mul, Value::Integer(7), Value::Integer(9));
    /// assert_eq!(product.unwrap(), Value::Integer(63));
    ///
    /// let quotient = Value::apply(BinaryOperator::Div, Value::Integer(10), Value::Integer(2));
    /// assert_eq!(quotient.unwrap(), Value::Real(5.0));
    /// ```
    pub fn apply(op: BinaryOperator, left: Self, right: Self) -> Result<Self, SemanticError> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul => Self::scalar_op(op, left, right),

            Div => {
                let divisor = right.as_real();
                if divisor == 0.0 {
                    return Err(SemanticError::DivisionByZero);
                }
                Ok(Self::Real(left.as_real() / divisor))
            },

            Mod => Self::modulo(left, right),

            Pow => Self::power(left, right),
        }
    }

    /// Computes `+`, `-` or `*` on a pair of operands.
    fn scalar_op(op: BinaryOperator, left: Self, right: Self) -> Result<Self, SemanticError> {
        use BinaryOperator::{Add, Mul, Sub};

        match (left, right) {
            (Self::Integer(a), Self::Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    _ => unreachable!(),
                };

                result.map(Self::Integer).ok_or(SemanticError::Overflow)
            },
            _ => {
                let (a, b) = (left.as_real(), right.as_real());

                Ok(Self::Real(match op {
                                  Add => a + b,
                                  Sub => a - b,
                                  Mul => a * b,
                                  _ => unreachable!(),
                              }))
            },
        }
    }

    /// Computes the remainder of `left` divided by `right`.
    ///
    /// Integer pairs stay integral; mixed pairs promote to reals. The result
    /// keeps the sign of the dividend. A zero divisor of either type is a
    /// `SemanticError`.
    fn modulo(left: Self, right: Self) -> Result<Self, SemanticError> {
        match (left, right) {
            (_, Self::Integer(0)) => Err(SemanticError::DivisionByZero),
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_rem(b).map(Self::Integer).ok_or(SemanticError::Overflow)
            },
            _ => {
                let divisor = right.as_real();
                if divisor == 0.0 {
                    return Err(SemanticError::DivisionByZero);
                }
                Ok(Self::Real(left.as_real() % divisor))
            },
        }
    }

    /// Raises `left` to the power `right`.
    ///
    /// An integer base with a non-negative integer exponent is computed with
    /// exact checked integer exponentiation. Every other combination,
    /// including negative integer exponents, goes through `powf`.
    fn power(left: Self, right: Self) -> Result<Self, SemanticError> {
        match (left, right) {
            (Self::Integer(base), Self::Integer(exp)) if exp >= 0 => {
                let exp = u32::try_from(exp).map_err(|_| SemanticError::Overflow)?;

                base.checked_pow(exp).map(Self::Integer).ok_or(SemanticError::Overflow)
            },
            _ => Ok(Self::Real(left.as_real().powf(right.as_real()))),
        }
    }

    /// Negates the value.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(5).negate().unwrap(), Value::Integer(-5));
    /// assert_eq!(Value::Real(1.5).negate().unwrap(), Value::Real(-1.5));
    /// ```
    pub fn negate(self) -> Result<Self, SemanticError> {
        match self {
            Self::Integer(n) => n.checked_neg().map(Self::Integer).ok_or(SemanticError::Overflow),
            Self::Real(r) => Ok(Self::Real(-r)),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}
