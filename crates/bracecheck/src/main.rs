//! bracecheck - naive brace and return lint for a single source file
//!
//! Usage: bracecheck [OPTIONS] <input>

use anyhow::Context;
use brace_check::report::{self, PrettyReporter};
use brace_check::scanner::{Scanner, read_source};
use clap::Parser as ClapParser;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "bracecheck")]
#[command(version = "0.1.0")]
#[command(
    about = "Naive lint for unmatched closing braces and stray return statements",
    long_about = None
)]
struct Args {
    /// Input source file to scan (UTF-8 text)
    #[arg(required = true)]
    input: PathBuf,

    /// Render diagnostics as annotated source excerpts on stderr
    #[arg(long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.verbose {
        eprintln!("Scanning {}", args.input.display());
    }

    let source = read_source(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let diagnostics = Scanner::new().scan(&source);

    if args.pretty {
        let mut reporter = PrettyReporter::new();
        let file_id = reporter.add_file(args.input.display().to_string(), source);
        for diagnostic in &diagnostics {
            reporter.report(file_id, diagnostic);
        }
    } else {
        report::print_plain(&mut io::stdout().lock(), &diagnostics)?;
    }

    if args.verbose {
        eprintln!("{} diagnostic(s)", diagnostics.len());
    }

    Ok(())
}
