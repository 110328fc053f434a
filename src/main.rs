use std::{fs, process::ExitCode};

use clap::Parser;
use rpncalc::{Notation, Options, evaluate, parse};
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates one integer arithmetic expression, written in infix or
/// postfix notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read the expression from the file named by CONTENTS.
    #[arg(short, long)]
    file: bool,

    /// The notation the expression is written in.
    #[arg(short, long, value_enum, default_value_t = Notation::Infix)]
    notation: Notation,

    /// Prints the compiled postfix program before the result.
    #[arg(short, long)]
    show_postfix: bool,

    /// Narrates every grammar rule and stack operation on stderr.
    #[arg(short, long)]
    debug: bool,

    /// The expression, or a file path with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let options = Options::new(args.notation).with_trace(args.debug);

    let program = match parse(&source, &options) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.show_postfix {
        println!("{program}");
    }

    match evaluate(&program, &options) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Sends diagnostics to stderr. `--debug` forces the debug level; otherwise
/// `RUST_LOG` decides, defaulting to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}
