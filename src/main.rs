//! BL parser CLI
//!
//! Parses a BL source file and prints the canonical form of the program (or,
//! with `--block`, of a bare statement sequence), its token listing, or a
//! diagnostic.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use bl_parser::{parse, parse_statements, BlError, Diagnostic, Lexer, VERSION};
use clap::Parser;
use tracing::Level;

/// blparse checks and pretty-prints BL programs
#[derive(Debug, Parser)]
#[command(name = "blparse", author)]
struct BlparseArgs {
    /// BL source file to parse
    #[arg()]
    file: PathBuf,

    /// Show tokenization output (lexer only)
    #[arg(short = 't', long)]
    tokens: bool,

    /// Only check the program, do not print it
    #[arg(short = 'c', long, conflicts_with = "tokens")]
    check: bool,

    /// Parse the file as a bare statement block instead of a program
    #[arg(short = 'b', long, conflicts_with = "tokens")]
    block: bool,

    /// Enable verbose logging
    #[arg(short = 'V', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = BlparseArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = VERSION, file = %args.file.display(), "starting blparse");

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read file '{}'", args.file.display()))?;
    let filename = args.file.display().to_string();

    let result = if args.tokens {
        show_tokens(&source, &filename)
    } else if args.block {
        parse_statements(&source, Some(&filename)).map(|block| {
            if args.check {
                println!("{}: ok", filename);
            } else {
                print!("{}", block);
            }
        })
    } else {
        parse(&source, Some(&filename)).map(|program| {
            if args.check {
                println!("{}: ok", filename);
            } else {
                print!("{}", program);
            }
        })
    };

    if let Err(error) = result {
        report(error, &source);
    }

    Ok(())
}

/// Show tokens from lexing a file
fn show_tokens(source: &str, filename: &str) -> Result<(), BlError> {
    let tokens = Lexer::new(source, Some(filename)).tokenize()?;

    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        let location = token
            .location
            .as_ref()
            .map(|l| format!("{}:{}", l.line, l.column))
            .unwrap_or_default();
        let token_type = token.token_type.to_string();
        println!("{:4}: {:8} {:24} | {}", i, location, token_type, token.lexeme);
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());

    Ok(())
}

fn report(error: BlError, source: &str) -> ! {
    eprint!("{}", Diagnostic::new(error).with_source(source));
    process::exit(1);
}
