//! Command-line interface for Punycode conversion.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use punycode::{DomainConverter, ErrorPolicy};
use tracing_subscriber::EnvFilter;

/// punycode - Convert Unicode domain names to ASCII and back
#[derive(Parser, Debug)]
#[command(name = "punycode")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  punycode to-ascii '☕.example.org'
  punycode to-unicode xn--53h.example.org
  punycode encode bücher
  echo 'bcher-kva' | punycode decode")]
struct Args {
    /// Keep labels that fail to convert instead of aborting
    #[arg(long, global = true)]
    best_effort: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode strings with raw Bootstring (no label handling)
    Encode { inputs: Vec<String> },
    /// Decode raw Bootstring strings
    Decode { inputs: Vec<String> },
    /// Convert domain names or email addresses to ASCII
    ToAscii { inputs: Vec<String> },
    /// Convert domain names or email addresses to Unicode
    ToUnicode { inputs: Vec<String> },
}

impl Command {
    fn inputs(&self) -> &[String] {
        match self {
            Command::Encode { inputs }
            | Command::Decode { inputs }
            | Command::ToAscii { inputs }
            | Command::ToUnicode { inputs } => inputs,
        }
    }

    fn apply(&self, converter: &DomainConverter, input: &str) -> punycode::Result<String> {
        match self {
            Command::Encode { .. } => punycode::encode_str(input),
            Command::Decode { .. } => punycode::decode_to_string(input),
            Command::ToAscii { .. } => converter.to_ascii(input),
            Command::ToUnicode { .. } => converter.to_unicode(input),
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let policy = if args.best_effort {
        ErrorPolicy::BestEffort
    } else {
        ErrorPolicy::FailFast
    };
    let converter = DomainConverter::new().with_policy(policy);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let convert = |input: &str, out: &mut dyn Write| -> Result<(), Box<dyn std::error::Error>> {
        let converted = args
            .command
            .apply(&converter, input)
            .map_err(|e| format!("converting '{}': {}", input, e))?;
        writeln!(out, "{}", converted)?;
        Ok(())
    };

    if args.command.inputs().is_empty() {
        // Read from stdin, one input per line
        for line in io::stdin().lock().lines() {
            convert(&line?, &mut stdout)?;
        }
    } else {
        for input in args.command.inputs() {
            convert(input, &mut stdout)?;
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
