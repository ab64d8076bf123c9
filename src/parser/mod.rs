/*
    This module parses BNF files

    Both `name = "terminal" other.name | ...` and the arrow form
    `NAME -> 'terminal' OTHER | ...` are accepted. A nonterminal defined on
    several lines gets all of those alternatives, in file order.
*/

mod lexer;
mod verifier;

use std::fs::File;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::grammar::*;
use crate::error_handling::*;
use itertools::Itertools;
use lexer::*;
use thiserror::Error;
use tracing::{debug, warn};
use verifier::undefined_references;

#[derive(Debug, Error)]
pub enum CompileErrorType {
    // A line which should contain a rule does not
    #[error("Expected `=` or `->` after nonterminal")]
    MissingEquals,
    // A rule has multiple equals signs
    #[error("Unexpected `=` encountered")]
    UnexpectedEquals,
    // The user starts a rule line with something other than a nonterminal
    #[error("Tried to define something other than a nonterminal")]
    MissingNonterminal,
    // There is an unclosed quote
    #[error("Unmatched quotes")]
    UnmatchedQuote,
    // Somehow a full rewrite was parsed as a base alternative
    // This is a problem with sentential, not the grammar
    #[error("Rewrite was not fully split (this is a problem with sentential, not the grammar)")]
    UnsplitRewrite,
    // A blank line got too deep into the parser
    // This is a problem with sentential, not the grammar
    #[error("Blank line encountered in rule parser (this is a problem with sentential, not the grammar)")]
    UnexpectedBlankLine,
    // There was an issue with reading a file
    #[error("File error: {0}")]
    FileError(#[source] std::io::Error),
}

impl ErrorType for CompileErrorType {}

impl PartialEq for CompileErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CompileErrorType::FileError(a), CompileErrorType::FileError(b)) => a.kind() == b.kind(),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

fn io_error(error: std::io::Error, file: &Path) -> CompileError {
    CompileError {
        location: Location::new(file, 0),
        error: CompileErrorType::FileError(error)
    }
}

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type LineResult<T> = std::result::Result<T, CompileError>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

#[derive(PartialEq, Debug)]
struct Rule {
    symbol: String,
    rewrite: Rewrite,
    location: Location
}

fn parse_alternative(tokens: &[Token]) -> Result<Alternative> {
    tokens.iter().map(|t| match t {
        Token::Equals => Err(CompileErrorType::UnexpectedEquals),
        Token::Or => Err(CompileErrorType::UnsplitRewrite),
        Token::Nonterminal(s) => Ok(Symbol::Nonterminal(s.clone())),
        Token::Terminal(s) => Ok(Symbol::Terminal(s.clone()))
    }).collect()
}

fn parse_rewrite(tokens: &[Token]) -> Result<Rewrite> {
    tokens.split(|t| *t == Token::Or).map(parse_alternative).collect()
}

fn parse_line(tokens: &[Token], location: Location) -> Result<Rule> {
    // Try to get the token the rule is for. The match returns a result which
    // is then unwrapped with the ? operator
    let symbol = match tokens.first() {
        Some(Token::Nonterminal(s)) => Ok(s.clone()),
        Some(_) => Err(CompileErrorType::MissingNonterminal),
        None => Err(CompileErrorType::UnexpectedBlankLine)
    }?;

    if tokens.get(1) != Some(&Token::Equals) {
        return Err(CompileErrorType::MissingEquals)
    }

    let rewrite = parse_rewrite(&tokens[2..])?;

    return Ok(Rule {
        symbol,
        rewrite,
        location
    });
}

fn parse_lex_line(line: &str, location: Location) -> LineResult<Rule> {
    lexer::lex_line(line)
        .and_then(|lexed_line| parse_line(&lexed_line, location.clone()))
        .map_err(|error| CompileError { location, error })
}

fn is_rule_line(line: &String) -> bool {
    let trimmed = line.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with(';') && !trimmed.starts_with('#')
}

// Returns an iterator over the rule lines of a reader, with the io errors
// wrapped in CompileError and numbered from 1
fn numbered_rule_lines<'a>(reader: impl BufRead + 'a, path: &'a Path) -> impl Iterator<Item = (usize, LineResult<String>)> + 'a {
    reader
        .lines()
        .map(move |line| line.map_err(|e| io_error(e, path)))
        .enumerate()
        .filter(|(_, line)| line.as_ref().is_ok_and(is_rule_line) || line.is_err())
        .map(|(num, line)| (num + 1, line))
}

// The first rule in the file names the start symbol. Nonterminals without
// rules are allowed, they just never derive anything.
fn grammar_from_rules(rules: Vec<Rule>) -> FileResult<Grammar> {
    for reference in undefined_references(&rules) {
        warn!(
            nonterminal = reference.nonterminal,
            location = %reference.location,
            "nonterminal has no rules and will expand to nothing"
        );
    }

    let start_symbol = rules.first()
        .map(|rule| rule.symbol.clone())
        .unwrap_or_default();

    let mut grammar = Grammar::new(start_symbol);
    for rule in rules {
        for alternative in rule.rewrite {
            grammar.add_production(rule.symbol.as_str(), alternative);
        }
    }

    debug!(
        start = %grammar.start_symbol,
        nonterminals = grammar.rules.len(),
        productions = grammar.production_count(),
        "parsed grammar"
    );

    return Ok(grammar);
}

fn parse_reader<'a>(reader: impl BufRead + 'a, path: &'a Path) -> FileResult<Grammar> {
    let parsed_lines = numbered_rule_lines(reader, path).map(|(num, line_res)| {
        line_res.and_then(|line| parse_lex_line(&line, Location::new(path, num)))
    });

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition_result();
    if !errors.is_empty() {
        return Err(errors);
    }

    return grammar_from_rules(rules);
}

pub fn parse_file(path: &PathBuf) -> FileResult<Grammar> {
    let file = File::open(path).map_err(|e| vec![io_error(e, path)])?;
    parse_reader(std::io::BufReader::new(file), path)
}

// `origin` only labels error locations
pub fn parse_str(text: &str, origin: impl AsRef<Path>) -> FileResult<Grammar> {
    parse_reader(text.as_bytes(), origin.as_ref())
}
