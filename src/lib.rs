//! Exhaustive, depth-bounded sentence enumeration for context-free grammars.
//!
//! Grammars are read from BNF text by [`parser`], stored as a [`grammar::Grammar`],
//! and enumerated lazily by [`generator::generate_iter`] or eagerly, with an
//! optional limit, by [`generator::generate`].

pub mod demo;
pub mod error_handling;
pub mod generator;
pub mod grammar;
pub mod parser;
