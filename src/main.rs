//! Command-line driver: scans a GYH file and prints its tokens

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use gyh::{Scanner, Token};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the .gyh source file
    file: PathBuf,

    /// Output format for tokens
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only print the summary, not the tokens
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `<kind, "lexeme", line: N, fingerprint: H>`
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: gyh::TokenKind,
    lexeme: &'a str,
    line: usize,
    fingerprint: i32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        TokenRecord {
            kind: token.kind,
            lexeme: &token.lexeme,
            line: token.line,
            fingerprint: token.fingerprint(),
        }
    }
}

fn print_token(token: &Token, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => println!("{}", token),
        Format::Json => println!("{}", serde_json::to_string(&TokenRecord::from(token))?),
    }
    Ok(())
}

/// Returns whether any lexical error was found
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut scanner = Scanner::open(&cli.file)
        .with_context(|| format!("failed to read '{}'", cli.file.display()))?;

    if !cli.quiet && matches!(cli.format, Format::Text) {
        println!("Starting lexical analysis of: {}", cli.file.display());
        println!("{}", "-".repeat(50));
    }

    let mut count = 0usize;
    loop {
        let token = scanner
            .next_token()
            .with_context(|| format!("failed to read '{}'", cli.file.display()))?;
        count += 1;
        if !cli.quiet {
            print_token(&token, cli.format)?;
        }
        if token.is_eof() {
            break;
        }
    }

    // stdout carries only tokens in JSON mode
    let mut summary: Box<dyn Write> = match cli.format {
        Format::Text => Box::new(io::stdout()),
        Format::Json => Box::new(io::stderr()),
    };
    if !cli.quiet && matches!(cli.format, Format::Text) {
        writeln!(summary, "{}", "-".repeat(50))?;
    }
    writeln!(summary, "Lexical analysis finished: {} tokens", count)?;
    if scanner.had_error() {
        writeln!(
            summary,
            "{} lexical error(s) found",
            scanner.diagnostics().len()
        )?;
    }

    Ok(scanner.had_error())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
