use std::collections::HashSet;

use crate::grammar::Symbol::Nonterminal;
use super::{Alternative, Location, Rewrite, Rule};

type DefinedSymbols<'a> = HashSet<&'a str>;

// A nonterminal used on a right-hand side with no rule of its own, and the
// line that used it. These expand to nothing, so they are worth a warning
// but never an error.
#[derive(Debug, PartialEq)]
pub(super) struct UndefinedReference<'a> {
    pub nonterminal: &'a str,
    pub location: &'a Location
}

fn get_alternative_undefined_symbols<'a>(alternative: &'a Alternative, location: &'a Location, defined: &DefinedSymbols) -> Vec<UndefinedReference<'a>> {
    // Filter out everything but nonterminals and unwrap the text from the
    // nonterminals. Then filter out all the defined nonterminals.
    alternative.iter()
        .filter_map(|symbol| match symbol {
            Nonterminal(symbol) => Some(symbol.as_str()),
            _ => None
        })
        .filter(|symbol| !defined.contains(symbol))
        .map(|nonterminal| UndefinedReference { nonterminal, location })
        .collect()
}

fn get_rewrite_undefined_symbols<'a>(rewrite: &'a Rewrite, location: &'a Location, defined: &DefinedSymbols) -> Vec<UndefinedReference<'a>> {
    rewrite.iter()
        .flat_map(|alternative| get_alternative_undefined_symbols(alternative, location, defined))
        .collect()
}

// Rules stay in file order, so references come out in line order
pub(super) fn undefined_references(rules: &[Rule]) -> Vec<UndefinedReference<'_>> {
    let defined: DefinedSymbols = rules.iter().map(|rule| rule.symbol.as_str()).collect();

    rules.iter()
        .flat_map(|rule| get_rewrite_undefined_symbols(&rule.rewrite, &rule.location, &defined))
        .collect()
}
