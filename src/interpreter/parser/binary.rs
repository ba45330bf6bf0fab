use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_factor},
        symbol_table::SymbolTable,
    },
};

/// Parses an addition-level construct.
///
/// Handles the additive operators `+` and `-`. The right-hand side of an
/// additive operator restarts at the expression level, so the operand
/// extends to the end of the construct: `10 - 2 - 3` groups as
/// `10 - (2 - 3)`. Parentheses select any other grouping.
///
/// Both operands are reduced to their numeric values when the node is
/// built, which is where a faulting operand surfaces.
///
/// The rule is: `expression := term (("+" | "-") expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `table`: Symbol table for identifier factors.
///
/// # Returns
/// The evaluated node for the construct.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               table: &SymbolTable)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_term(tokens, table)?;
    let mut node = None;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_expression(tokens, table)?;
            node = Some(Expr::BinaryOp { op,
                                         left:  left.value()?,
                                         right: right.value()?, });
            continue;
        }
        break;
    }

    Ok(node.unwrap_or(left))
}

/// Parses a multiplication-level construct.
///
/// Handles the operators `*`, `/`, `%` and `^`. As at the additive level,
/// the right-hand side restarts at the expression level rather than binding
/// more tightly: `2 * 3 + 1` groups as `2 * (3 + 1)`.
///
/// The rule is: `term := factor (("*" | "/" | "%" | "^") expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `table`: Symbol table for identifier factors.
///
/// # Returns
/// The evaluated node for the construct.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>,
                         table: &SymbolTable)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_factor(tokens, table)?;
    let mut node = None;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::Mod
                       | BinaryOperator::Pow)
        {
            tokens.next();
            let right = parse_expression(tokens, table)?;
            node = Some(Expr::BinaryOp { op,
                                         left:  left.value()?,
                                         right: right.value()?, });
            continue;
        }
        break;
    }

    Ok(node.unwrap_or(left))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the six
/// arithmetic operators, otherwise `None`.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
