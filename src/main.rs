use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use pint::{compiler::compiler::Compiler, lexer::lexer::tokenize, render_error};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Parses a unit source file.
#[derive(Parser, Debug)]
#[command(name = "pint", version, about)]
struct Args {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree after parsing
    #[arg(long)]
    ast: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let file_name = args.file.to_string_lossy().to_string();

    let file_contents = match read_to_string(&args.file) {
        Ok(contents) => contents,
        Err(err) => {
            error!(file = %file_name, %err, "failed to read file");
            eprintln!("Error: could not read {}: {}", file_name, err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    if args.tokens {
        match tokenize(&file_contents) {
            Ok(tokens) => {
                for token in &tokens {
                    println!("{}", token.debug());
                }
            }
            Err(err) => {
                eprint!("{}", render_error(&err, &file_contents, &file_name));
                return ExitCode::FAILURE;
            }
        }
        info!("Tokenized in {:?}", start.elapsed());
    }

    let parse_start = Instant::now();
    let mut compiler = Compiler::new();

    let ast = match compiler.compile(&file_contents) {
        Ok(ast) => ast,
        Err(err) => {
            eprint!("{}", render_error(&err, &file_contents, &file_name));
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    if args.ast {
        println!("{:#?}", ast);
    }

    info!("Total time: {:?}", start.elapsed());
    ExitCode::SUCCESS
}
