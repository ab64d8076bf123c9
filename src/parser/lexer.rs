use std::iter::Peekable;

use itertools::{Itertools, PeekingNext};

use super::{CompileErrorType, Result};

#[derive(PartialEq, Debug)]
pub enum Token {
    Equals,
    Or,
    Nonterminal(String),
    Terminal(String)
}

// Both `"` and `'` open a terminal; it runs until the same quote closes it
pub fn lex_terminal(line: &mut impl PeekingNext<Item = char>) -> Result<Token> {
    let quote = line.next().ok_or(CompileErrorType::UnmatchedQuote)?;
    let token_text = line.peeking_take_while(|&c| c != quote).collect();

    // Check if there is a close quote and consume it if there is
    if line.next() != Some(quote) {
        return Err(CompileErrorType::UnmatchedQuote);
    }

    Ok(Token::Terminal(token_text))
}

fn is_arrow<I: Iterator<Item = char> + Clone>(line: &Peekable<I>) -> bool {
    let mut lookahead = line.clone();
    lookahead.next() == Some('-') && lookahead.next() == Some('>')
}

// Names end at whitespace or at the next `|`, `=` or `->`
pub fn lex_nonterminal<I: Iterator<Item = char> + Clone>(line: &mut Peekable<I>) -> Result<Token> {
    let mut name = String::new();
    while let Some(&c) = line.peek() {
        if c.is_whitespace() || c == '|' || c == '=' || is_arrow(line) {
            break;
        }
        name.push(c);
        line.next();
    }

    Ok(Token::Nonterminal(name))
}

pub fn lex_line(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    let mut line_chars = line.chars().peekable();

    while let Some(&c) = line_chars.peek() {
        if c == '=' {
            line_chars.next();
            tokens.push(Token::Equals);
        } else if is_arrow(&line_chars) {
            line_chars.next();
            line_chars.next();
            tokens.push(Token::Equals);
        } else if c == '|' {
            line_chars.next();
            tokens.push(Token::Or);
        } else if c == '\"' || c == '\'' {
            tokens.push(lex_terminal(&mut line_chars)?);
        } else if !c.is_whitespace() {
            tokens.push(lex_nonterminal(&mut line_chars)?);
        } else {
            line_chars.next();
        }
    }

    return Ok(tokens);
}
