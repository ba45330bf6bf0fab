#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while tokenizing an input line.
pub enum LexError {
    /// Found a character outside the operator set and the atom alphabet.
    IllegalCharacter {
        /// The offending text.
        found: String,
    },
    /// An atom could not be classified as a number or an identifier.
    MalformedAtom {
        /// The atom text.
        atom: String,
    },
    /// An integer literal was too large to be represented.
    IntegerOutOfRange {
        /// The literal text.
        atom: String,
    },
}

/// The lexer derive reports input that matches no token class with the
/// default error; `tokenize` fills in the offending slice afterwards.
impl Default for LexError {
    fn default() -> Self {
        Self::IllegalCharacter { found: String::new() }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { found } => {
                write!(f, "Unrecognized character '{found}' in input.")
            },

            Self::MalformedAtom { atom } => {
                write!(f, "Cannot read '{atom}' as a number or an identifier.")
            },

            Self::IntegerOutOfRange { atom } => {
                write!(f, "Integer literal '{atom}' does not fit in 64 bits.")
            },
        }
    }
}

impl std::error::Error for LexError {}
