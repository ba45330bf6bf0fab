/// Lexical errors.
///
/// Defines the error type raised while turning an input line into tokens.
/// Lexical errors cover characters outside the token alphabet, atoms that
/// classify as neither number nor identifier, and integer literals that do
/// not fit the value range.
pub mod lex_error;
/// Syntax errors.
///
/// Defines the error type raised while parsing a token stream. Syntax errors
/// include unexpected tokens, missing closing parentheses, identifiers with
/// no stored value, and input that ends too early.
pub mod syntax_error;
/// Semantic errors.
///
/// Contains the error type raised while a parsed construct is evaluated,
/// such as division by zero or integer overflow.
pub mod semantic_error;

pub use lex_error::LexError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

#[derive(Debug)]
/// Represents any error an input line can produce, tagged with the pipeline
/// stage that raised it.
pub enum EvalError {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The token stream did not form a valid construct.
    Syntax(SyntaxError),
    /// A parsed construct could not be evaluated.
    Semantic(SemanticError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "Lexical Error: {error}"),
            Self::Syntax(error) => write!(f, "Syntax Error: {error}"),
            Self::Semantic(error) => write!(f, "Semantic Error: {error}"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<LexError> for EvalError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<SyntaxError> for EvalError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<SemanticError> for EvalError {
    fn from(error: SemanticError) -> Self {
        Self::Semantic(error)
    }
}
