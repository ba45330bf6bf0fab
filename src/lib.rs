//! # reckon
//!
//! reckon is a small interactive interpreter for arithmetic expressions.
//! Each input line is tokenized, parsed and evaluated in a single pass, and
//! the results of assignments persist as session variables for later lines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{
        lexer::tokenize, parser::core::parse_line, symbol_table::SymbolTable, value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent an
/// input line as a tree of evaluated nodes. The nodes are built by the
/// parser and stored in the symbol table by assignments.
///
/// # Responsibilities
/// - Defines the expression node and binary operator types.
/// - Carries the evaluated operand values inside binary nodes.
/// - Reduces a node to its numeric value on demand.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while a line is
/// interpreted. It standardizes error reporting and carries detailed
/// information about failures, including the offending text where the input
/// itself is at fault.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Unions them into a single error type for the driver.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together lexing, parsing, value representations and the
/// session's variable state to provide a complete runtime for arithmetic
/// input. It exposes the building blocks behind [`evaluate_line`].
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, values and state.
/// - Provides the per-line parsing entry point.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one line of input against the session state.
///
/// The line is tokenized, parsed and reduced to a single numeric value. An
/// assignment additionally stores its result in `table`, where later lines
/// can read it back by name. Blank input is not special-cased here; the
/// caller decides which lines reach the interpreter.
///
/// # Errors
/// Returns an [`EvalError`] wrapping whichever stage rejected the line: the
/// lexer, the parser or the arithmetic itself.
///
/// # Examples
/// ```
/// use reckon::{
///     evaluate_line,
///     interpreter::{symbol_table::SymbolTable, value::Value},
/// };
///
/// let mut table = SymbolTable::new();
///
/// assert_eq!(evaluate_line("x = 2 + 3", &mut table).unwrap(),
///            Value::Integer(5));
/// assert_eq!(evaluate_line("x * x", &mut table).unwrap(),
///            Value::Integer(25));
///
/// // 'y' has no stored value.
/// assert!(evaluate_line("y + 1", &mut table).is_err());
/// ```
pub fn evaluate_line(line: &str, table: &mut SymbolTable) -> Result<Value, EvalError> {
    let tokens = tokenize(line)?;
    let mut iter = tokens.iter().peekable();

    let node = parse_line(&mut iter, table)?;
    Ok(node.value()?)
}
