//! `literals` runs a one-statement program written in the Literals language.
//!
//! ```bash
//! literals program.lit
//! literals --eval "If 6800 is 6800 then set successor to 68000."
//! literals --tokens --ast -vv program.lit
//! ```
//!
//! Logging goes to stderr. `RUST_LOG` is honoured unless `-v` is given.

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{bail, Context, Result};
use clap::Parser as ClapParser;
use literals::{
    errors::errors::Error,
    interpreter::interpreter::{Interpreter, Outcome},
    lexer::{lexer::tokenize, source::TokenStream},
    parser::parser::{parse_with_config, ParserConfig, DEFAULT_MAX_NESTING_DEPTH},
    render_error,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, ClapParser)]
#[command(name = "literals", version, about = "Run a Literals program")]
struct Args {
    /// Program file to run
    file: Option<PathBuf>,

    /// Program text to run instead of a file
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Print the scanned tokens
    #[arg(long)]
    tokens: bool,

    /// Print the parsed syntax tree
    #[arg(long)]
    ast: bool,

    /// How deeply conditionals may nest
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (source, file_name) = match (&args.file, &args.eval) {
        (Some(path), _) => {
            let source = read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            (source, file_name)
        }
        (None, Some(text)) => (text.clone(), String::from("<eval>")),
        (None, None) => bail!("no program given, pass a FILE or --eval TEXT"),
    };

    match run(&args, source.clone(), file_name) {
        Ok(outcome) => {
            println!("{}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", render_error(&error, &source));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(args: &Args, source: String, file_name: String) -> Result<Outcome, Error> {
    let start = Instant::now();

    let tokens = tokenize(source, Some(file_name))?;
    info!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
    }

    let parse_start = Instant::now();
    let config = ParserConfig {
        max_nesting_depth: args.max_depth,
    };
    let program = parse_with_config(TokenStream::new(tokens), config)?;
    info!("Parsed in {:?}", parse_start.elapsed());

    if args.ast {
        println!("{:#?}", program);
    }

    let run_start = Instant::now();
    let outcome = Interpreter::new().run(&program)?;
    info!("Ran in {:?}", run_start.elapsed());
    info!("Total time: {:?}", start.elapsed());

    Ok(outcome)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
