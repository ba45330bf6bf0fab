use std::collections::HashMap;

use crate::{ast::Expr, interpreter::value::Value};

/// Stores the variables of one interpreter session.
///
/// Each assignment binds a name to the evaluated node of its right-hand
/// side; a later lookup hands that node back so the stored result can feed
/// further expressions. The table lives for the whole session; it is written
/// by assignment only and emptied on request.
pub struct SymbolTable {
    entries: HashMap<String, Expr>,
}

#[allow(clippy::new_without_default)]
impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Looks up the node stored under `name`.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::Expr, interpreter::symbol_table::SymbolTable};
    ///
    /// let mut table = SymbolTable::new();
    /// table.assign("x".to_string(), Expr::Integer(5));
    ///
    /// assert_eq!(table.lookup("x"), Some(&Expr::Integer(5)));
    /// assert_eq!(table.lookup("y"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Expr> {
        self.entries.get(name)
    }

    /// Binds `name` to an evaluated node, replacing any previous binding.
    pub fn assign(&mut self, name: String, node: Expr) {
        self.entries.insert(name, node);
    }

    /// Removes every binding. Clearing an empty table is fine.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the current bindings with their derived values, in no
    /// particular order.
    ///
    /// Stored nodes were evaluated before they were assigned, so deriving
    /// their values again cannot fault.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::Expr, interpreter::symbol_table::SymbolTable};
    ///
    /// let mut table = SymbolTable::new();
    /// table.assign("x".to_string(), Expr::Integer(5));
    ///
    /// let bindings = table.snapshot();
    /// assert_eq!(bindings.len(), 1);
    ///
    /// table.clear();
    /// assert!(table.snapshot().is_empty());
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, Value)> {
        self.entries
            .iter()
            .filter_map(|(name, node)| node.value().ok().map(|value| (name.clone(), value)))
            .collect()
    }
}
