//! lexdump CLI
//!
//! Reads text from a file or standard input and prints its tokens.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lexdump::error::Diagnostic;
use lexdump::{dump_table, format_token, scan_strict, LexdumpError, LexdumpResult, Lexer, Token};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file; standard input when omitted or "-"
    file: Option<PathBuf>,

    /// Show an indexed table instead of one line per token
    #[arg(short, long)]
    table: bool,

    /// Stop at the first error token and exit with status 1
    #[arg(short, long)]
    fail_fast: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose);

    let source = match read_source(cli.file.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprint!("{}", Diagnostic::new(&e));
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &source) {
        eprint!("{}", Diagnostic::with_source(&e, &source));
        process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries the token dump
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(file: Option<&Path>) -> LexdumpResult<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading input file");
            fs::read_to_string(path).map_err(|source| LexdumpError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            debug!("reading standard input");
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(LexdumpError::ReadStdin)?;
            Ok(source)
        }
    }
}

fn run(cli: &Cli, source: &str) -> LexdumpResult<()> {
    let tokens: Vec<Token> = if cli.fail_fast {
        scan_strict(source)?
    } else {
        Lexer::new(source).collect()
    };

    let errors = tokens.iter().filter(|t| t.is_error()).count();
    info!(tokens = tokens.len(), errors, "scanned input");

    if cli.table {
        print!("{}", dump_table(&tokens));
    } else {
        for token in &tokens {
            println!("{}", format_token(token));
        }
    }

    Ok(())
}
