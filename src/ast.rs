use crate::{error::SemanticError, interpreter::value::Value};

/// A node representing one parsed construct of an input line.
///
/// The grammar evaluates while it parses: by the time a binary construct is
/// built, the numeric values of both operands have already been derived, so
/// a `BinaryOp` node stores those values together with the operator rather
/// than sub-trees. Negation wraps its operand node unevaluated; the result
/// is derived when the node is read. Reading a node recomputes its result,
/// which keeps a stored node reusable across lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Integer(i64),
    /// A real literal.
    Real(f64),
    /// Negation of an operand construct.
    Negation(Box<Self>),
    /// A binary operation over two evaluated operands.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// The evaluated left operand.
        left:  Value,
        /// The evaluated right operand.
        right: Value,
    },
}

impl Expr {
    /// Derives the numeric value of the node.
    ///
    /// Literals return their value, negation derives and negates its
    /// operand, and a binary node applies its operator to the stored operand
    /// values. Applying an operator can fault (division by zero, integer
    /// overflow), which is what makes the accessor fallible.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::value::Value,
    /// };
    ///
    /// let node = Expr::BinaryOp { op:    BinaryOperator::Add,
    ///                             left:  Value::Integer(2),
    ///                             right: Value::Integer(3), };
    ///
    /// assert_eq!(node.value().unwrap(), Value::Integer(5));
    /// ```
    pub fn value(&self) -> Result<Value, SemanticError> {
        match self {
            Self::Integer(n) => Ok(Value::Integer(*n)),
            Self::Real(r) => Ok(Value::Real(*r)),
            Self::Negation(operand) => operand.value()?.negate(),
            Self::BinaryOp { op, left, right } => Value::apply(*op, *left, *right),
        }
    }
}

/// Represents a binary arithmetic operator.
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
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
}
