use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{EvalError, SyntaxError},
    interpreter::{
        lexer::Token,
        parser::binary::parse_expression,
        symbol_table::SymbolTable,
    },
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Parses and evaluates one line of input.
///
/// This is the entry point for line parsing. The leading token, with one
/// token of lookahead after an identifier, selects the construct:
/// - `identifier = expression` is an assignment,
/// - a bare `identifier` is a lookup of the stored node,
/// - a literal, `(`, `)` or `-` opens an expression.
///
/// An identifier or literal continues into an expression only when the
/// token after it is one of `+ - * / % ( )`. `^` is not in that set, so
/// a line such as `x ^ 2` is rejected while `(x) ^ 2` parses.
///
/// Tokens left over after a complete construct are ignored, and the cursor
/// never advances past the end-of-input marker.
///
/// # Parameters
/// - `tokens`: Token iterator over the whole line.
/// - `table`: Symbol table; written only by an assignment.
///
/// # Returns
/// The evaluated node for the line.
///
/// # Errors
/// Returns the `SyntaxError` or `SemanticError` that stopped the line.
pub fn parse_line<'a, I>(tokens: &mut Peekable<I>,
                         table: &mut SymbolTable)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token::Identifier(_)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();

            match lookahead.peek() {
                Some(Token::Equals) => parse_assignment(tokens, table),
                Some(token) if continues_expression(token) => parse_expression(tokens, table),
                Some(Token::Eof) => parse_lookup(tokens, table),
                Some(token) => Err(SyntaxError::UnexpectedToken { found: token.to_string() }.into()),
                None => Err(SyntaxError::UnexpectedEndOfInput.into()),
            }
        },
        Some(Token::Integer(_) | Token::Real(_)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();

            match lookahead.peek() {
                Some(token) if continues_expression(token) || matches!(token, Token::Eof) => {
                    parse_expression(tokens, table)
                },
                Some(token) => Err(SyntaxError::UnexpectedToken { found: token.to_string() }.into()),
                None => Err(SyntaxError::UnexpectedEndOfInput.into()),
            }
        },
        Some(Token::LParen | Token::RParen | Token::Minus) => parse_expression(tokens, table),
        Some(Token::Eof) | None => Err(SyntaxError::UnexpectedEndOfInput.into()),
        Some(token) => Err(SyntaxError::UnexpectedToken { found: token.to_string() }.into()),
    }
}

/// Parses `identifier = expression` and stores the binding.
///
/// The right-hand node is reduced to its value before the store, so a
/// right-hand side that fails to parse or evaluate leaves the table
/// untouched.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the identifier.
/// - `table`: Symbol table receiving the binding.
///
/// # Returns
/// The stored node.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           table: &mut SymbolTable)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = if let Some(Token::Identifier(name)) = tokens.next() {
        name.clone()
    } else {
        unreachable!()
    };
    tokens.next();

    let node = parse_expression(tokens, table)?;
    node.value()?;

    table.assign(name, node.clone());
    Ok(node)
}

/// Parses a bare identifier line and resolves it against the table.
fn parse_lookup<'a, I>(tokens: &mut Peekable<I>,
                       table: &SymbolTable)
                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = if let Some(Token::Identifier(name)) = tokens.next() {
        name
    } else {
        unreachable!()
    };

    match table.lookup(name) {
        Some(node) => Ok(node.clone()),
        None => Err(SyntaxError::UnknownIdentifier { name: name.clone() }.into()),
    }
}

/// The token classes that extend an identifier or literal into an
/// expression at the line level.
const fn continues_expression(token: &Token) -> bool {
    matches!(token,
             Token::Plus
             | Token::Minus
             | Token::Star
             | Token::Slash
             | Token::Percent
             | Token::LParen
             | Token::RParen)
}
