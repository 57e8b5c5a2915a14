use std::{fs, process::ExitCode};

use clap::{Parser as _, Subcommand};
use ratus::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TREE_DEPTH, Error, Evaluator, Executor, Parser, tokenise};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// ratus is a small, safe expression language. Parse, check or run an
/// expression from the command line.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Logs each evaluation stage to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum nesting depth of groupings and function calls.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum depth of the expression tree, counting one level per operator.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TREE_DEPTH)]
    max_tree_depth: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the expression tree of an expression.
    Parse(Input),
    /// Tokenises and parses an expression without running it.
    Check(Input),
    /// Evaluates an expression and prints its value.
    Run(Input),
}

#[derive(clap::Args, Debug)]
struct Input {
    /// Tells ratus to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// The expression, or a path when `--file` is given.
    contents: String,
}

impl Input {
    fn source(&self) -> Result<String, String> {
        if !self.file {
            return Ok(self.contents.clone());
        }
        fs::read_to_string(&self.contents).map_err(|_| {
                                              format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                      self.contents)
                                          })
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let parser = Parser::new().max_depth(args.max_depth)
                              .max_tree_depth(args.max_tree_depth);
    let input = match &args.command {
        Command::Parse(input) | Command::Check(input) | Command::Run(input) => input,
    };

    let source = match input.source() {
        Ok(source) => source,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        },
    };

    match run(&args.command, parser, &source) {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs one subcommand and returns what it should print, if anything.
fn run(command: &Command, parser: Parser, source: &str) -> Result<Option<String>, Error> {
    match command {
        Command::Parse(_) => {
            let expression = parser.parse(&tokenise(source)?)?;
            Ok(Some(expression.to_string()))
        },
        Command::Check(_) => {
            parser.parse(&tokenise(source)?)?;
            debug!("expression is valid");
            Ok(None)
        },
        Command::Run(_) => {
            let value = Evaluator::from_parts(parser, Executor::new()).evaluate(source)?;
            Ok(Some(value.to_string()))
        },
    }
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `RATUS_LOG`, defaulting to `warn`, or `debug` when
/// `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RATUS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}
