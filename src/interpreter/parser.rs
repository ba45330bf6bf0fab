/// Line-level parsing.
///
/// Contains the dispatch between assignments, bare lookups and plain
/// expressions, plus the shared parser result alias.
pub mod core;

/// Factor parsing.
///
/// Handles the atomic level of the grammar: negation, numeric literals,
/// identifier lookups and parenthesized expressions.
pub mod unary;

/// Binary operator levels.
///
/// Implements the additive and multiplicative levels of the grammar and the
/// token to operator mapping.
pub mod binary;
