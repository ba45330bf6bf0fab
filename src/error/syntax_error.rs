#[derive(Debug)]
/// Represents all errors that can occur while parsing a token stream.
pub enum SyntaxError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The token encountered.
        found: String,
    },
    /// An operand was expected but something else was found.
    ExpectedOperand {
        /// The token encountered.
        found: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// Tried to read an identifier that has no stored value.
    UnknownIdentifier {
        /// The identifier name.
        name: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found } => {
                write!(f, "Unexpected token: {found}.")
            },

            Self::ExpectedOperand { found } => write!(f,
                                                      "Expected a constant, identifier or parenthesized expression, found {found}."),

            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::UnknownIdentifier { name } => {
                write!(f, "Identifier '{name}' has no stored value.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
        }
    }
}

impl std::error::Error for SyntaxError {}
