/*
    This module is for storing and reading grammars
*/

use std::collections::HashMap;

// The base unit in a grammar rule
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

impl Symbol {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

// The symbols in a single alternative
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule, in the order they were defined
pub type Rewrite = Vec<Alternative>;

/// Read-only view of a context-free grammar, as needed by the generator.
///
/// Implementations must return productions in a stable order, since that
/// order decides the order sentences are enumerated in.
pub trait Productions {
    fn start_symbol(&self) -> &str;

    /// All right-hand sides for `nonterminal`; empty when it has no rules.
    fn productions_for(&self, nonterminal: &str) -> &[Alternative];
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Grammar {
    pub start_symbol: String,
    pub rules: HashMap<String, Rewrite>,
}

impl Grammar {
    pub fn new(start_symbol: impl Into<String>) -> Self {
        Grammar {
            start_symbol: start_symbol.into(),
            rules: HashMap::new(),
        }
    }

    // Appends, so a nonterminal defined on several lines keeps every alternative
    pub fn add_production(&mut self, nonterminal: impl Into<String>, alternative: Alternative) {
        self.rules.entry(nonterminal.into()).or_default().push(alternative);
    }

    pub fn production_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}

impl Productions for Grammar {
    fn start_symbol(&self) -> &str {
        &self.start_symbol
    }

    fn productions_for(&self, nonterminal: &str) -> &[Alternative] {
        self.rules.get(nonterminal).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_nonterminal_appends_in_order() {
        let mut grammar = Grammar::new("det");
        grammar.add_production("det", vec![Symbol::Terminal("the".to_string())]);
        grammar.add_production("det", vec![Symbol::Terminal("a".to_string())]);

        assert_eq!(grammar.productions_for("det"), &[
            vec![Symbol::Terminal("the".to_string())],
            vec![Symbol::Terminal("a".to_string())]
        ]);
        assert_eq!(grammar.production_count(), 2);
    }

    #[test]
    fn unknown_nonterminal_has_no_productions() {
        let grammar = Grammar::new("s");
        assert!(grammar.productions_for("s").is_empty());
        assert!(grammar.productions_for("nothing").is_empty());
    }

    #[test]
    fn terminal_check() {
        assert!(Symbol::Terminal("x".to_string()).is_terminal());
        assert!(!Symbol::Nonterminal("x".to_string()).is_terminal());
    }
}
