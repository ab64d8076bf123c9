mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use sentential::demo::{DEMO_AMOUNT, DEMO_GRAMMAR};
use sentential::error_handling::render_errors;
use sentential::generator::{generate_iter, Sentence};
use sentential::grammar::Grammar;
use sentential::parser::{parse_file, parse_str, CompileErrors};

#[derive(Debug, Error)]
enum RunError {
    // Every problem found in the grammar, one per line
    #[error("{}", render_errors(.0))]
    Grammar(CompileErrors),
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "sentential=warn",
        1 => "sentential=debug",
        _ => "sentential=trace",
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn format_sentence(number: usize, sentence: &Sentence, separator: &str) -> String {
    format!("{:3}. {}", number, sentence.iter().join(separator))
}

// Falls back to the demo grammar, which is echoed before its sentences
fn load_grammar(cli: &Cli, out: &mut impl Write) -> Result<(Grammar, Option<usize>), RunError> {
    match &cli.file {
        Some(path) => {
            info!(file = %path.display(), "reading grammar");
            let grammar = parse_file(path).map_err(RunError::Grammar)?;
            Ok((grammar, cli.amount))
        }
        None => {
            let amount = cli.amount.unwrap_or(DEMO_AMOUNT);
            if !cli.count {
                writeln!(out, "Generating the first {} sentences for demo grammar:", amount)?;
                writeln!(out, "{}", DEMO_GRAMMAR)?;
            }
            let grammar = parse_str(DEMO_GRAMMAR, "<demo>").map_err(RunError::Grammar)?;
            Ok((grammar, Some(amount)))
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), RunError> {
    let (grammar, amount) = load_grammar(cli, out)?;

    let sentences = generate_iter(&grammar, cli.start.as_deref(), cli.depth);
    let sentences: Box<dyn Iterator<Item = Sentence> + '_> = match amount {
        Some(amount) => Box::new(sentences.take(amount)),
        None => Box::new(sentences),
    };

    if cli.count {
        writeln!(out, "{}", sentences.count())?;
    } else {
        for (number, sentence) in sentences.enumerate() {
            writeln!(out, "{}", format_sentence(number + 1, &sentence, &cli.separator))?;
        }
    }

    return Ok(());
}

fn exit_status(result: &Result<(), RunError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    let result = run(&cli, &mut std::io::stdout().lock());
    if let Err(error) = &result {
        eprintln!("{}", error);
    }

    return ExitCode::from(exit_status(&result));
}
