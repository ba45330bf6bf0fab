/// The lexer module tokenizes one line of input.
///
/// The lexer strips every whitespace character from the raw line and then
/// scans the remainder into a stream of tokens: numeric literals,
/// identifiers, operators and delimiters, with an explicit end-of-input
/// marker at the end. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Classifies atoms as integer literals, real literals or identifiers.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module recognizes and evaluates the token stream.
///
/// The parser processes the tokens produced by the lexer by recursive
/// descent. There is no separate execution phase: each grammar level
/// reduces its operands to numeric values while it recognizes them, so the
/// node it returns already carries the result of the construct.
///
/// # Responsibilities
/// - Dispatches each line to an assignment, a lookup or an expression.
/// - Builds evaluated nodes, reporting syntax errors for malformed input.
/// - Surfaces arithmetic faults at the construct that consumes the operand.
pub mod parser;
/// The symbol table module stores session variables.
///
/// Assignments deposit their evaluated node under the variable's name, and
/// later lines read them back through identifier factors. Bindings persist
/// until they are overwritten or the whole table is cleared.
///
/// # Responsibilities
/// - Stores one evaluated node per variable name.
/// - Resolves identifier lookups during parsing.
/// - Supports clearing and snapshotting the session state.
pub mod symbol_table;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the two numeric types an expression can produce,
/// integers and reals, together with the arithmetic on them: promotion,
/// the checked integer operations and the division-by-zero guards.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two variants.
/// - Implements the binary operators and negation over values.
/// - Promotes mixed operands to reals before applying an operator.
pub mod value;
