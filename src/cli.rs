use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about = "Enumerate the sentences of a context-free grammar")]
pub struct Cli {
    /// File containing the grammar (default: a built-in demo grammar)
    pub file: Option<PathBuf>,

    /// Start symbol (default: first in the file)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Maximum derivation depth (default: unbounded)
    #[arg(short, long, value_name = "DEPTH")]
    pub depth: Option<usize>,

    /// Maximum number of sentences (default: all, or 42 for the demo)
    #[arg(short = 'n', long, value_name = "AMOUNT")]
    pub amount: Option<usize>,

    /// Text placed between the tokens of a sentence
    #[arg(long, value_name = "SEP", default_value = " ")]
    pub separator: String,

    /// Only print how many sentences were generated
    #[arg(long)]
    pub count: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
