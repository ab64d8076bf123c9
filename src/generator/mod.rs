/*
    This module enumerates the sentences of a grammar

    Every sentence reachable from the start symbol within the depth budget is
    produced, in a fixed order, one at a time. Nothing is generated until the
    caller asks for it, so unbounded grammars can be sampled with a limit.
*/

#[cfg(test)]
mod property_tests;

use std::iter;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::grammar::*;

// A fully terminal sequence of tokens
pub type Sentence = Vec<String>;

// A lazy, single-pass stream of sentences borrowing the grammar
pub type Expansions<'g> = Box<dyn Iterator<Item = Sentence> + 'g>;

// Depth used when the caller doesn't give one
pub const UNBOUNDED_DEPTH: usize = usize::MAX;

/// Expands one symbol into every token sequence it can derive.
///
/// A terminal always yields itself, even at depth 0. A nonterminal needs at
/// least one unit of depth to be rewritten; each of its productions is then
/// expanded, in grammar order, with one unit less. A nonterminal without
/// productions yields nothing.
pub fn expand_symbol<'g, G>(grammar: &'g G, symbol: &Symbol, depth: usize) -> Expansions<'g>
where
    G: Productions + ?Sized,
{
    match symbol {
        Symbol::Terminal(token) => Box::new(iter::once(vec![token.clone()])),
        Symbol::Nonterminal(_) if depth == 0 => Box::new(iter::empty()),
        Symbol::Nonterminal(name) => Box::new(
            grammar
                .productions_for(name)
                .iter()
                .flat_map(move |alternative| expand_sequence(grammar, alternative, depth - 1)),
        ),
    }
}

/// Expands a sequence of symbols into the cross product of their expansions.
///
/// The first symbol varies slowest. Every symbol gets the same `depth`; it is
/// only spent when a nonterminal is rewritten. An empty sequence yields one
/// empty sentence.
pub fn expand_sequence<'g, G>(grammar: &'g G, symbols: &'g [Symbol], depth: usize) -> Expansions<'g>
where
    G: Productions + ?Sized,
{
    let Some((first, rest)) = symbols.split_first() else {
        return Box::new(iter::once(Vec::new()));
    };

    // The tail is re-expanded for every head, so only one path is live at a time
    Box::new(expand_symbol(grammar, first, depth).flat_map(move |head| {
        expand_sequence(grammar, rest, depth).map(move |tail| {
            let mut sentence = Vec::with_capacity(head.len() + tail.len());
            sentence.extend_from_slice(&head);
            sentence.extend(tail);
            sentence
        })
    }))
}

/// The sentences of a grammar, in enumeration order.
///
/// Returned by [`generate_iter`]. It can only be walked once; call
/// `generate_iter` again to start over.
pub struct Sentences<'g> {
    expansions: Expansions<'g>,
}

impl Iterator for Sentences<'_> {
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        self.expansions.next()
    }
}

/// Lazily enumerates sentences derivable from `start` (or the grammar's own
/// start symbol) within `depth` rewrites (unbounded when `None`).
pub fn generate_iter<'g, G>(grammar: &'g G, start: Option<&str>, depth: Option<usize>) -> Sentences<'g>
where
    G: Productions + ?Sized,
{
    let start = start.unwrap_or_else(|| grammar.start_symbol());
    let depth = depth.unwrap_or(UNBOUNDED_DEPTH);

    if grammar.productions_for(start).is_empty() {
        warn!(start, "start symbol has no productions, nothing will be generated");
    }
    debug!(start, depth, "enumerating sentences");

    // A one-symbol sequence expands to exactly that symbol's expansions
    let start = Symbol::Nonterminal(start.to_string());
    Sentences {
        expansions: expand_symbol(grammar, &start, depth),
    }
}

/// Collects at most `limit` sentences (all of them when `None`).
///
/// Without a limit this only returns if the enumeration is finite, either
/// because `depth` is bounded or because the grammar is not recursive.
pub fn generate<G>(grammar: &G, start: Option<&str>, depth: Option<usize>, limit: Option<usize>) -> Vec<Sentence>
where
    G: Productions + ?Sized,
{
    let sentences = generate_iter(grammar, start, depth);
    let generated = match limit {
        Some(limit) => sentences.take(limit).collect_vec(),
        None => sentences.collect_vec(),
    };

    debug!(count = generated.len(), "generation finished");
    return generated;
}
