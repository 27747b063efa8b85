//! isbn CLI - validate, hyphenate and convert ISBNs from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::format::FormatStyle;
use commands::{batch, check, format, parse, ranges};

#[derive(Parser, Debug)]
#[command(name = "isbn", author, version, about = "ISBN validation and hyphenation CLI")]
struct Cli {
    /// Raise log verbosity (-v, -vv, -vvv). Without it, RUST_LOG applies.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Range message JSON to use instead of the bundled table
    #[arg(long, global = true, value_name = "FILE")]
    ranges: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one or more ISBNs
    Check {
        /// ISBNs to check
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Exit with error code if any input is invalid
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse one ISBN and show its components
    Parse {
        /// ISBN to parse
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one ISBN in the chosen style
    Format {
        /// ISBN to format
        input: String,
        /// Output style
        #[arg(long, value_enum, default_value_t = FormatStyle::Hyphenated)]
        style: FormatStyle,
    },
    /// Validate one ISBN per line from a file
    Batch {
        /// Input file (or stdin if not provided)
        input: Option<PathBuf>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
        /// Exit with error code if any line is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Show range table metadata
    Ranges {
        /// List registration groups
        #[arg(long)]
        groups: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = commands::load_table(cli.ranges.as_deref()).and_then(|table| match cli.command {
        Commands::Check {
            inputs,
            strict,
            json,
        } => check::run(&table, &inputs, strict, json),
        Commands::Parse { input, json } => parse::run(&table, input.as_deref(), json),
        Commands::Format { input, style } => format::run(&table, &input, style),
        Commands::Batch {
            input,
            json,
            strict,
        } => batch::run(&table, input.as_deref(), json, strict),
        Commands::Ranges { groups, json } => ranges::run(&table, groups, json),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
