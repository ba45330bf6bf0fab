use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in an input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A real literal, such as `3.14`.
    Real(f64),
    /// An integer literal, such as `42`.
    Integer(i64),
    /// An identifier; a variable name such as `x` or `rate`.
    Identifier(String),
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Equals,
    /// End of input. Appended by `tokenize` exactly once per line.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Raw lexical shapes matched by the scanner derive.
///
/// `tokenize` lifts these into `Token`s: operator shapes map one to one,
/// atoms carry their classified token out of the callback, and the end
/// marker is appended after the scan.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
enum RawToken {
    /// A maximal run of digits, letters and dots.
    #[regex(r"[0-9A-Za-z.]+", classify_atom)]
    Atom(Token),
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
}

/// Classifies the atom at the current token slice.
///
/// Classification is attempted in order: a real (digits, one dot, digits,
/// both sides non-empty), an integer (digits only), an identifier (ASCII
/// letters only). An atom matching none of the three, such as `1.2.3` or
/// `12abc`, is a `LexError`, as is an integer literal outside the 64-bit
/// range.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(Token)`: The classified literal or identifier.
/// - `Err(LexError)`: If the atom belongs to no class.
fn classify_atom(lex: &mut logos::Lexer<RawToken>) -> Result<Token, LexError> {
    let atom = lex.slice();

    if let Some(dot) = atom.find('.') {
        let (mantissa, fraction) = (&atom[..dot], &atom[dot + 1..]);

        if all_digits(mantissa) && all_digits(fraction) {
            return atom.parse()
                       .map(Token::Real)
                       .map_err(|_| LexError::MalformedAtom { atom: atom.to_string() });
        }

        return Err(LexError::MalformedAtom { atom: atom.to_string() });
    }

    if all_digits(atom) {
        return atom.parse()
                   .map(Token::Integer)
                   .map_err(|_| LexError::IntegerOutOfRange { atom: atom.to_string() });
    }

    if atom.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Ok(Token::Identifier(atom.to_string()));
    }

    Err(LexError::MalformedAtom { atom: atom.to_string() })
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Turns one input line into tokens.
///
/// Whitespace is stripped from the whole line first, so spacing is never
/// significant: `1 2` lexes as the integer `12` and `1 . 5` as the real
/// `1.5`. The stripped text is then scanned into single-symbol operator
/// tokens and maximal atoms, and each atom is classified by
/// [`classify_atom`]. Exactly one `Eof` is appended, for empty input too.
///
/// # Parameters
/// - `line`: The raw input line.
///
/// # Returns
/// The token vector, or the `LexError` describing the first offending piece
/// of text.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 4 1").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Integer(41),
///                 Token::Eof]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let mut lexer = RawToken::lexer(&stripped);
    let mut tokens = Vec::new();

    while let Some(scanned) = lexer.next() {
        match scanned {
            Ok(RawToken::Atom(token)) => tokens.push(token),
            Ok(RawToken::Star) => tokens.push(Token::Star),
            Ok(RawToken::Slash) => tokens.push(Token::Slash),
            Ok(RawToken::Plus) => tokens.push(Token::Plus),
            Ok(RawToken::Minus) => tokens.push(Token::Minus),
            Ok(RawToken::Percent) => tokens.push(Token::Percent),
            Ok(RawToken::Caret) => tokens.push(Token::Caret),
            Ok(RawToken::LParen) => tokens.push(Token::LParen),
            Ok(RawToken::RParen) => tokens.push(Token::RParen),
            Ok(RawToken::Equals) => tokens.push(Token::Equals),
            // The derive's default error carries no text; the slice pins
            // down the offending character.
            Err(LexError::IllegalCharacter { .. }) => {
                return Err(LexError::IllegalCharacter { found: lexer.slice().to_string() });
            },
            Err(error) => return Err(error),
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}
