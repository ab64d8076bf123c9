/*
    The toy grammar shown when no grammar file is given
*/

pub const DEMO_GRAMMAR: &str = "\
S -> NP VP
NP -> Det N
VP -> V NP
Det -> 'the'
Det -> 'a'
N -> 'man' | 'park' | 'dog' | 'telescope'
V -> 'saw' | 'walked'
P -> 'in' | 'with'
";

// How many demo sentences are printed unless the user asks for a different amount
pub const DEMO_AMOUNT: usize = 42;
