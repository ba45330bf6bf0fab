#[derive(Debug)]
/// Represents all errors that can occur while a parsed construct is
/// evaluated.
pub enum SemanticError {
    /// Division or modulus with a zero divisor.
    DivisionByZero,
    /// Integer arithmetic left the 64-bit range.
    Overflow,
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::Overflow => write!(f, "Integer arithmetic overflowed 64 bits."),
        }
    }
}

impl std::error::Error for SemanticError {}
