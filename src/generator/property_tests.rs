//! Property-based tests for sentence enumeration.
//!
//! Grammars are drawn over three nonterminals (`S`, `A`, `B`) and three
//! terminals, with short alternatives, so that every enumeration at depth 2
//! or less stays small enough to exhaust.

use itertools::Itertools;
use proptest::collection::vec;
use proptest::prelude::*;

use super::*;

const TERMINALS: &[&str] = &["a", "b", "c"];
const NONTERMINALS: &[&str] = &["S", "A", "B"];

fn symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        prop::sample::select(TERMINALS).prop_map(|t| Symbol::Terminal(t.to_string())),
        prop::sample::select(NONTERMINALS).prop_map(|n| Symbol::Nonterminal(n.to_string())),
    ]
}

fn terminal() -> impl Strategy<Value = Symbol> {
    "[a-z]{1,4}".prop_map(Symbol::Terminal)
}

fn small_grammar() -> impl Strategy<Value = Grammar> {
    vec(vec(vec(symbol(), 0..=2), 1..=3), NONTERMINALS.len()).prop_map(|rewrites| {
        let mut grammar = Grammar::new("S");
        for (name, rewrite) in NONTERMINALS.iter().zip(rewrites) {
            for alternative in rewrite {
                grammar.add_production(*name, alternative);
            }
        }
        grammar
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn terminal_sequences_ignore_depth(
        symbols in vec(terminal(), 0..6),
        depth in prop_oneof![0usize..8, Just(UNBOUNDED_DEPTH)],
    ) {
        let grammar = Grammar::default();
        let expected = symbols.iter()
            .map(|symbol| match symbol {
                Symbol::Terminal(token) => token.clone(),
                Symbol::Nonterminal(_) => unreachable!(),
            })
            .collect_vec();

        prop_assert_eq!(expand_sequence(&grammar, &symbols, depth).collect_vec(), vec![expected]);
    }

    #[test]
    fn bounded_depth_terminates(grammar in small_grammar(), depth in 0usize..=2) {
        // Every nonterminal has at most 3 * 3 * 3 expansions at depth 2
        let count = generate_iter(&grammar, None, Some(depth)).count();
        prop_assert!(count <= 27);
    }

    #[test]
    fn zero_depth_start_yields_nothing(grammar in small_grammar()) {
        prop_assert!(generate(&grammar, None, Some(0), None).is_empty());
    }

    #[test]
    fn sequence_size_is_product(
        grammar in small_grammar(),
        symbols in vec(symbol(), 1..=3),
        depth in 0usize..=2,
    ) {
        let (first, rest) = symbols.split_first().unwrap();
        let head = expand_symbol(&grammar, first, depth).count();
        let tail = expand_sequence(&grammar, rest, depth).count();

        prop_assert_eq!(expand_sequence(&grammar, &symbols, depth).count(), head * tail);
    }

    #[test]
    fn enumeration_is_deterministic(grammar in small_grammar(), depth in 0usize..=2) {
        let first = generate(&grammar, None, Some(depth), None);
        let second = generate(&grammar, None, Some(depth), None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn limit_takes_prefix(grammar in small_grammar(), depth in 0usize..=2, limit in 0usize..40) {
        let all = generate(&grammar, None, Some(depth), None);
        let limited = generate(&grammar, None, Some(depth), Some(limit));

        prop_assert_eq!(limited.len(), limit.min(all.len()));
        prop_assert_eq!(&limited[..], &all[..limited.len()]);
    }

    #[test]
    fn more_depth_never_loses_sentences(grammar in small_grammar(), depth in 0usize..=1) {
        let shallow = generate(&grammar, None, Some(depth), None);
        let deeper = generate(&grammar, None, Some(depth + 1), None);

        prop_assert!(shallow.len() <= deeper.len());
        for sentence in &shallow {
            prop_assert!(deeper.contains(sentence));
        }
    }
}
