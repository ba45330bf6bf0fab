use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_expression, core::ParseResult},
        symbol_table::SymbolTable,
    },
};

/// Parses a factor, the atomic level of the grammar.
///
/// A factor is one of:
/// - a negation (`-` is right-associative, so `--5` parses)
/// - an integer or real literal
/// - an identifier, which must name a stored value
/// - a parenthesized expression
///
/// Negation wraps its operand node without reducing it to a number, so a
/// fault inside the operand surfaces where the negation itself is consumed.
/// An identifier factor resolves immediately to a clone of the stored node.
///
/// Grammar:
/// ```text
///     factor := "-" factor
///             | INTEGER
///             | REAL
///             | IDENTIFIER
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the factor.
/// - `table`: Symbol table consulted for identifier factors.
///
/// # Returns
/// The evaluated node for the factor.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the identifier has no stored value,
/// - a `(` is not matched by a `)`,
/// - the leading token cannot start a factor,
/// - the input ends where a factor was required.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>,
                                  table: &SymbolTable)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token::Minus) => {
            tokens.next();
            let operand = parse_factor(tokens, table)?;
            Ok(Expr::Negation(Box::new(operand)))
        },
        Some(Token::Integer(n)) => {
            tokens.next();
            Ok(Expr::Integer(*n))
        },
        Some(Token::Real(r)) => {
            tokens.next();
            Ok(Expr::Real(*r))
        },
        Some(Token::Identifier(name)) => {
            tokens.next();
            match table.lookup(name) {
                Some(node) => Ok(node.clone()),
                None => Err(SyntaxError::UnknownIdentifier { name: name.clone() }.into()),
            }
        },
        Some(Token::LParen) => {
            tokens.next();
            let inner = parse_expression(tokens, table)?;
            match tokens.peek() {
                Some(Token::RParen) => {
                    tokens.next();
                    Ok(inner)
                },
                _ => Err(SyntaxError::ExpectedClosingParen.into()),
            }
        },
        Some(token) => Err(SyntaxError::ExpectedOperand { found: token.to_string() }.into()),
        None => Err(SyntaxError::UnexpectedEndOfInput.into()),
    }
}
